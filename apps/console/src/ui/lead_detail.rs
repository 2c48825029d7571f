use dioxus::prelude::*;
use tracing::warn;

use crate::hooks::dashboard::use_dashboard_services;
use crate::lead_detail::{ClickTarget, DetailTab};
use crate::services::notifier::announce_meeting_redirect;
use crate::state::use_app_state;
use crate::ui::Badge;
use crate::view::entities::{LeadDetailView, NO_EMAIL_CONTENT};

/// Modal for the selected warm lead. Renders nothing while closed.
#[component]
pub fn LeadDetailModal() -> Element {
    let state = use_app_state();
    let services = use_dashboard_services();

    let (lead, tab) = {
        let snapshot = state.read();
        match (
            snapshot.lead_detail.selected().cloned(),
            snapshot.lead_detail.active_tab(),
        ) {
            (Some(lead), Some(tab)) => (lead, tab),
            _ => return rsx! { Fragment {} },
        }
    };
    let view = LeadDetailView::build(&lead, services.clock.now());

    let backdrop = services.actions.clone();
    let panel = services.actions.clone();
    let closer = services.actions.clone();
    let notifier = services.notifier.clone();
    let meeting_notice = services.timings.meeting_notice;

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-slate-900/60 p-4",
            onclick: move |_| backdrop.click_lead_detail(ClickTarget::Backdrop),
            div {
                class: "max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-xl bg-white shadow-xl",
                onclick: move |evt| {
                    evt.stop_propagation();
                    panel.click_lead_detail(ClickTarget::Panel);
                },
                div { class: "flex items-center justify-between border-b border-slate-200 px-6 py-4",
                    div { class: "flex items-center gap-3",
                        h2 { class: "text-lg font-semibold text-slate-900", "Warm Lead: {view.name}" }
                        Badge { tone: view.badge_tone, label: view.badge.clone() }
                    }
                    button {
                        class: "text-2xl leading-none text-slate-400 hover:text-slate-600",
                        onclick: move |_| closer.close_lead_detail(),
                        "×"
                    }
                }
                div { class: "flex gap-2 border-b border-slate-200 px-6",
                    TabButton { tab: DetailTab::Context, active: tab, label: "Client Context" }
                    TabButton { tab: DetailTab::Email, active: tab, label: "Sent Email" }
                }
                div { class: "space-y-6 px-6 py-4",
                    match tab {
                        DetailTab::Context => rsx! { ContextTab { view: view.clone() } },
                        DetailTab::Email => rsx! { EmailTab { view: view.clone() } },
                    }
                    div { class: "flex gap-3",
                        button {
                            class: "flex-1 rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500",
                            onclick: move |_| announce_meeting_redirect(notifier.as_ref(), meeting_notice),
                            "Schedule Meeting"
                        }
                        if let Some(action) = view.next_action.as_ref() {
                            button { class: "flex-1 rounded-md border border-indigo-300 px-4 py-2 text-sm font-medium text-indigo-700",
                                "{action}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: DetailTab, active: DetailTab, label: String) -> Element {
    let actions = use_dashboard_services().actions;
    let accent = if tab == active {
        "border-indigo-600 text-indigo-700"
    } else {
        "border-transparent text-slate-500 hover:text-slate-700"
    };

    rsx! {
        button {
            class: format!("border-b-2 px-3 py-2 text-sm font-medium {accent}"),
            onclick: move |_| {
                if let Err(err) = actions.switch_tab(tab) {
                    warn!(%err, ?tab, "tab switch ignored");
                }
            },
            "{label}"
        }
    }
}

#[component]
fn ContextTab(view: LeadDetailView) -> Element {
    rsx! {
        div { class: "space-y-2",
            h3 { class: "text-sm font-semibold text-slate-800", "Client Information" }
            dl { class: "grid grid-cols-2 gap-2 text-sm",
                for (label, value) in view.context_fields.iter() {
                    div { key: "{label}",
                        dt { class: "text-xs text-slate-500", "{label}:" }
                        dd { class: "text-slate-800", "{value}" }
                    }
                }
            }
        }
        if let Some(response) = view.response.as_ref() {
            div { class: "space-y-2",
                h3 { class: "text-sm font-semibold text-slate-800", "Client's Response" }
                blockquote { class: "rounded-md bg-slate-50 p-3 text-sm italic text-slate-700", "\"{response}\"" }
                p { class: "text-xs text-slate-500", "Received {view.received}" }
            }
        }
        div { class: "space-y-2",
            h3 { class: "text-sm font-semibold text-slate-800", "Context from Client Documents" }
            h4 { class: "text-xs font-medium text-slate-600", "Key Insights:" }
            ul { class: "list-disc pl-5 text-sm text-slate-700",
                for insight in view.key_insights.iter() {
                    li { "{insight}" }
                }
            }
            h4 { class: "text-xs font-medium text-slate-600", "Pain Points:" }
            ul { class: "list-disc pl-5 text-sm text-slate-700",
                for pain in view.pain_points.iter() {
                    li { "{pain}" }
                }
            }
        }
    }
}

#[component]
fn EmailTab(view: LeadDetailView) -> Element {
    rsx! {
        div { class: "space-y-3",
            h3 { class: "text-sm font-semibold text-slate-800", "Email Sent by Jarvis" }
            div { class: "space-y-1 text-sm",
                for (label, value) in view.email_fields.iter() {
                    p { key: "{label}",
                        span { class: "font-medium", "{label}: " }
                        span { "{value}" }
                    }
                }
            }
            div { class: "rounded-md border border-slate-200 p-4 text-sm text-slate-800",
                match view.email_lines.as_ref() {
                    Some(lines) => rsx! {
                        for line in lines.iter() {
                            if line.is_empty() {
                                br {}
                            } else {
                                p { "{line}" }
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "text-slate-400", "{NO_EMAIL_CONTENT}" }
                    },
                }
            }
        }
    }
}
