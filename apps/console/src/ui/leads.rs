use dioxus::prelude::*;

use crate::hooks::dashboard::use_dashboard_services;
use crate::ui::{Badge, EmptyPanel, SectionHeading};
use crate::view::entities::{LeadCard, NO_LEADS};

#[component]
pub fn WarmLeads(cards: Vec<LeadCard>) -> Element {
    let services = use_dashboard_services();
    let workflow = services.workflow.clone();

    rsx! {
        section {
            SectionHeading {
                title: "Warm Leads Ready",
                subtitle: "Jarvis reached out autonomously. These clients responded and are ready for your call.",
            }
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                if cards.is_empty() {
                    EmptyPanel { state: NO_LEADS,
                        button {
                            class: "mt-2 rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500",
                            onclick: move |_| workflow.run(),
                            "Run Analysis Now"
                        }
                    }
                } else {
                    for card in cards.iter() {
                        LeadCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LeadCardView(card: LeadCard) -> Element {
    let actions = use_dashboard_services().actions;
    let lead = card.lead.clone();

    rsx! {
        div {
            class: "cursor-pointer space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm transition hover:shadow-md",
            onclick: move |_| actions.select_lead(lead.clone()),
            div { class: "flex items-start justify-between gap-2",
                div {
                    h3 { class: "font-semibold text-slate-900", "{card.name}" }
                    if let Some(company) = card.company.as_ref() {
                        p { class: "text-xs text-slate-500", "{company}" }
                    }
                }
                div { class: "flex flex-wrap gap-1",
                    Badge { tone: card.priority_tone, label: card.priority.clone() }
                    Badge { tone: card.sentiment_tone, label: card.sentiment.to_string() }
                }
            }
            ul { class: "space-y-1 text-xs text-slate-600",
                li { "Jarvis sent email · {card.sent}" }
                li { "Client responded · {card.responded}" }
            }
            if let Some(preview) = card.response_preview.as_ref() {
                div {
                    p { class: "text-xs font-medium text-slate-500", "Client's Response:" }
                    p { class: "text-sm italic text-slate-700", "\"{preview}\"" }
                }
            }
            if let Some(action) = card.next_action.as_ref() {
                button { class: "w-full rounded-md bg-indigo-50 px-3 py-2 text-sm font-medium text-indigo-700",
                    "{action}"
                }
            }
            p { class: "text-xs text-slate-500", "Engagement: {card.engagement}" }
        }
    }
}
