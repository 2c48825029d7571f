use dioxus::prelude::*;

use crate::view::entities::{BadgeTone, EmptyState};

pub mod activity;
pub mod header;
pub mod lead_detail;
pub mod leads;
pub mod metrics;
pub mod notifications;
pub mod opportunities;

#[component]
pub fn Badge(tone: BadgeTone, label: String) -> Element {
    rsx! {
        span { class: format!("rounded-full px-2 py-0.5 text-xs font-medium capitalize {}", tone.class()),
            "{label}"
        }
    }
}

#[component]
pub fn EmptyPanel(state: EmptyState, children: Element) -> Element {
    rsx! {
        div { class: "col-span-full flex flex-col items-center gap-2 rounded-lg border border-dashed border-slate-300 p-8 text-center",
            h3 { class: "text-base font-semibold text-slate-800", "{state.title}" }
            p { class: "text-sm text-slate-500", "{state.hint}" }
            {children}
        }
    }
}

#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "mb-4 space-y-1",
            h2 { class: "text-lg font-semibold text-slate-900", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-sm text-slate-500", "{subtitle}" }
            }
        }
    }
}
