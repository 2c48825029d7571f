use dioxus::prelude::*;

use crate::hooks::dashboard::use_dashboard_services;
use crate::ui::{Badge, EmptyPanel, SectionHeading};
use crate::view::entities::{opportunity_dialog, BadgeTone, OpportunityCard, NO_OPPORTUNITIES};

#[component]
pub fn TopOpportunities(cards: Vec<OpportunityCard>) -> Element {
    rsx! {
        section {
            SectionHeading {
                title: "Jarvis's Top Opportunities",
                subtitle: "AI-identified high-value outreach opportunities based on deep document analysis.",
            }
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                if cards.is_empty() {
                    EmptyPanel { state: NO_OPPORTUNITIES }
                } else {
                    for card in cards.iter() {
                        OpportunityCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn OpportunityCardView(card: OpportunityCard) -> Element {
    let notifier = use_dashboard_services().notifier;
    let dialog = opportunity_dialog(&card.opportunity);
    let email = card.opportunity.client_email.clone().unwrap_or_default();

    rsx! {
        div {
            class: "cursor-pointer space-y-3 rounded-lg border border-amber-200 bg-white p-4 shadow-sm transition hover:shadow-md",
            onclick: move |_| notifier.show_detail_dialog(dialog.clone()),
            div { class: "flex items-start justify-between gap-2",
                div {
                    h3 { class: "font-semibold text-slate-900", "{card.name}" }
                    p { class: "text-xs text-slate-500", "{email}" }
                }
                div { class: "flex flex-wrap gap-1",
                    Badge { tone: BadgeTone::Danger, label: format!("Priority {}", card.score) }
                    Badge { tone: BadgeTone::Info, label: card.tone.clone() }
                }
            }
            div {
                p { class: "text-xs font-medium text-slate-500", "Target Opportunity:" }
                p { class: "text-sm text-slate-800", "{card.opportunity_type}" }
            }
            div {
                p { class: "text-xs font-medium text-slate-500", "Suggested Outreach:" }
                p { class: "text-sm italic text-slate-700", "\"{card.preview}\"" }
            }
            p { class: "text-xs text-slate-500", "AI Analysis Complete" }
        }
    }
}
