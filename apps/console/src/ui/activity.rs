use dioxus::prelude::*;

use crate::hooks::dashboard::use_dashboard_services;
use crate::ui::{Badge, SectionHeading};
use crate::view::entities::{activity_dialog, ActivityRow};

#[component]
pub fn RecentActivity(rows: Vec<ActivityRow>) -> Element {
    rsx! {
        section {
            SectionHeading { title: "Recent Activity" }
            div { class: "divide-y divide-slate-100 rounded-lg border border-slate-200 bg-white",
                for row in rows.iter() {
                    ActivityRowView { key: "{row.key}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn ActivityRowView(row: ActivityRow) -> Element {
    let notifier = use_dashboard_services().notifier;
    let activity = row.activity.clone();
    let cursor = if row.clickable { "cursor-pointer hover:bg-slate-50" } else { "" };

    rsx! {
        div {
            class: format!("flex items-center gap-3 px-4 py-3 {cursor}"),
            onclick: move |_| {
                if let Some(dialog) = activity_dialog(&activity) {
                    notifier.show_detail_dialog(dialog);
                }
            },
            span { class: format!("flex h-8 w-8 items-center justify-center rounded-full {}", row.icon.class()),
                "{row.icon.glyph()}"
            }
            div { class: "min-w-0 flex-1",
                p { class: "truncate text-sm text-slate-800", "{row.description}" }
                if let Some(subject) = row.subject.as_ref() {
                    p { class: "truncate text-xs text-slate-500", "{subject}" }
                }
            }
            div { class: "flex items-center gap-2",
                if let Some((label, tone)) = row.sentiment {
                    Badge { tone, label: label.to_string() }
                }
                span { class: "text-xs text-slate-400", "{row.time}" }
            }
        }
    }
}
