use dioxus::prelude::*;

use crate::view::entities::MetricCard;

#[component]
pub fn MetricsGrid(cards: [MetricCard; 4]) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
            for card in cards.iter() {
                div { key: "{card.label}", class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "{card.label}" }
                    h3 { class: "mt-1 text-2xl font-bold text-slate-900", "{card.value}" }
                    p { class: "mt-1 text-xs text-emerald-600", "{card.trend}" }
                }
            }
        }
    }
}
