use dioxus::prelude::*;

use crate::hooks::dashboard::use_dashboard_services;

#[component]
pub fn DashboardHeader(last_analyzed: Option<String>, refreshing: bool) -> Element {
    let services = use_dashboard_services();
    let controller = services.controller.clone();
    let workflow = services.workflow.clone();

    rsx! {
        header { class: "border-b border-slate-200 bg-white",
            div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4 px-6 py-4",
                div { class: "space-y-1",
                    h1 { class: "text-2xl font-bold text-slate-900", "Jarvis Auto-Pilot" }
                    p { class: "text-sm text-slate-500", "AI that acts FOR you, not just advises" }
                }
                div { class: "flex items-center gap-3",
                    if let Some(label) = last_analyzed {
                        span { class: "text-xs text-slate-500", "Last analyzed: {label}" }
                    }
                    button {
                        class: "rounded-md border border-slate-300 px-3 py-2 text-sm text-slate-700 transition hover:bg-slate-100 disabled:opacity-50",
                        disabled: refreshing,
                        onclick: move |_| controller.refresh(),
                        "Refresh"
                    }
                    button {
                        class: "rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white transition hover:bg-indigo-500 disabled:opacity-50",
                        disabled: refreshing,
                        onclick: move |_| workflow.run(),
                        if refreshing { "Analyzing..." } else { "Run Analysis" }
                    }
                }
            }
        }
    }
}
