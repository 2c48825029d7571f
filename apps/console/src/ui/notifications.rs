use dioxus::prelude::*;

use crate::services::notifier::{DetailDialog, Notice, Overlay, OverlayKind};
use crate::state::{use_app_actions, use_app_state};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Progress,
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Progress => ("border-indigo-500 bg-indigo-50", "text-indigo-700"),
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub notice: Notice,
    #[props(optional)]
    pub on_close: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (container_class, accent_text) = props.kind.accent_classes();

    rsx! {
        div { class: format!("pointer-events-auto w-96 rounded-lg border-l-4 p-5 shadow-xl {}", container_class),
            div { class: "space-y-2",
                if props.kind == ToastKind::Progress {
                    div { class: "h-6 w-6 animate-spin rounded-full border-2 border-indigo-300 border-t-indigo-700" }
                }
                h3 { class: format!("text-base font-semibold {}", accent_text), "{props.notice.title}" }
                p { class: "text-sm text-slate-700", "{props.notice.message}" }
                if let Some(handler) = props.on_close.as_ref() {
                    div { class: "flex justify-end",
                        button {
                            class: "rounded bg-slate-200 px-3 py-1 text-sm text-slate-700 transition hover:bg-slate-300",
                            onclick: *handler,
                            "OK"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailDialogView(dialog: DetailDialog, on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "pointer-events-auto max-h-[80vh] w-full max-w-xl overflow-y-auto rounded-xl bg-white p-6 shadow-xl",
            h3 { class: "text-lg font-semibold text-slate-900", "{dialog.title}" }
            if !dialog.fields.is_empty() {
                ul { class: "mt-3 space-y-1 rounded-md bg-indigo-50 p-3 text-sm text-slate-700",
                    for (label, value) in dialog.fields.iter() {
                        li { key: "{label}",
                            span { class: "font-medium", "{label}: " }
                            span { "{value}" }
                        }
                    }
                }
            }
            if let Some(label) = dialog.body_label.as_ref() {
                p { class: "mt-3 text-sm font-medium text-slate-600", "{label}:" }
            }
            if let Some(body) = dialog.body.as_ref() {
                div { class: "mt-2 whitespace-pre-wrap rounded-md bg-slate-800 p-4 text-sm text-slate-100",
                    "{body}"
                }
            }
            div { class: "mt-4 flex justify-end gap-2",
                if let Some(cancel) = dialog.cancel_label.as_ref() {
                    button {
                        class: "rounded-md border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100",
                        onclick: on_close,
                        "{cancel}"
                    }
                }
                button {
                    class: "rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500",
                    onclick: on_close,
                    "{dialog.confirm_label}"
                }
            }
        }
    }
}

/// Every overlay is modal: the backdrop swallows clicks so nothing behind it
/// can be triggered. Only the overlay's own buttons dismiss it.
fn backdrop_class(kind: &OverlayKind) -> &'static str {
    match kind {
        OverlayKind::Blocking(_) => {
            "fixed inset-0 z-50 flex cursor-wait items-center justify-center bg-slate-900/40 p-4"
        }
        _ => "fixed inset-0 z-50 flex items-center justify-center bg-slate-900/40 p-4",
    }
}

/// Renders the single active overlay. A new overlay replaces the previous one.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let overlay = use_app_state().read().overlay.clone();

    let Some(Overlay { id, kind }) = overlay else {
        return rsx! { Fragment {} };
    };
    let dismiss = EventHandler::new(move |_: MouseEvent| actions.dismiss_overlay_if(id));
    let backdrop = backdrop_class(&kind);

    let content = match kind {
        OverlayKind::Blocking(notice) => rsx! {
            Toast { kind: ToastKind::Progress, notice }
        },
        OverlayKind::Timed(notice) => rsx! {
            Toast { kind: ToastKind::Success, notice }
        },
        OverlayKind::Error(notice) => rsx! {
            Toast { kind: ToastKind::Error, notice, on_close: dismiss }
        },
        OverlayKind::Detail(dialog) => rsx! {
            DetailDialogView { dialog, on_close: dismiss }
        },
    };

    rsx! {
        div { class: backdrop,
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice() -> Notice {
        Notice::new("Jarvis is Thinking...", "please wait")
    }

    #[test]
    fn backdrop_captures_clicks_for_every_overlay() {
        let kinds = [
            OverlayKind::Blocking(notice()),
            OverlayKind::Timed(notice()),
            OverlayKind::Error(notice()),
            OverlayKind::Detail(DetailDialog {
                title: "Opportunity: Initech".into(),
                fields: Vec::new(),
                body_label: None,
                body: None,
                confirm_label: "Close".into(),
                cancel_label: None,
            }),
        ];
        for kind in &kinds {
            let class = backdrop_class(kind);
            assert!(!class.contains("pointer-events-none"), "{kind:?}");
            assert!(class.contains("fixed inset-0"), "{kind:?}");
        }
    }

    #[test]
    fn blocking_backdrop_shows_busy_cursor() {
        assert!(backdrop_class(&OverlayKind::Blocking(notice())).contains("cursor-wait"));
        assert!(!backdrop_class(&OverlayKind::Error(notice())).contains("cursor-wait"));
    }
}
