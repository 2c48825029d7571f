//! User-facing notices and dialogs.
//!
//! Controllers only see the [`Notifier`] capability. [`StoreNotifier`] keeps
//! the current overlay in [`AppState`](crate::state::AppState), which the
//! notification center renders.

use std::rc::Rc;
use std::time::Duration;

use futures::future::FutureExt;

use crate::runtime::Scheduler;
use crate::state::AppActions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Read-only detail dialog. `body` is shown verbatim with line breaks kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailDialog {
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub body_label: Option<String>,
    pub body: Option<String>,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    /// In-progress indicator. The user cannot dismiss it.
    Blocking(Notice),
    Timed(Notice),
    Error(Notice),
    Detail(DetailDialog),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub id: u64,
    pub kind: OverlayKind,
}

pub trait Notifier {
    fn show_blocking(&self, notice: Notice);
    fn show_timed(&self, notice: Notice, duration: Duration);
    fn show_error(&self, notice: Notice);
    fn show_detail_dialog(&self, dialog: DetailDialog);
}

#[derive(Clone)]
pub struct StoreNotifier {
    actions: AppActions,
    scheduler: Rc<dyn Scheduler>,
}

impl StoreNotifier {
    pub fn new(actions: AppActions, scheduler: Rc<dyn Scheduler>) -> Self {
        Self { actions, scheduler }
    }
}

impl Notifier for StoreNotifier {
    fn show_blocking(&self, notice: Notice) {
        self.actions.show_overlay(OverlayKind::Blocking(notice));
    }

    fn show_timed(&self, notice: Notice, duration: Duration) {
        let id = self.actions.show_overlay(OverlayKind::Timed(notice));
        let actions = self.actions.clone();
        let elapsed = self.scheduler.sleep(duration);
        self.scheduler.spawn(
            async move {
                elapsed.await;
                actions.dismiss_overlay_if(id);
            }
            .boxed_local(),
        );
    }

    fn show_error(&self, notice: Notice) {
        self.actions.show_overlay(OverlayKind::Error(notice));
    }

    fn show_detail_dialog(&self, dialog: DetailDialog) {
        self.actions.show_overlay(OverlayKind::Detail(dialog));
    }
}

pub const MEETING_TITLE: &str = "Redirecting to Slack...";
pub const MEETING_MESSAGE: &str = "Opening scheduling interface with client context...";

/// Scheduling happens outside the dashboard; the user only sees a hand-off notice.
pub fn announce_meeting_redirect(notifier: &dyn Notifier, duration: Duration) {
    notifier.show_timed(Notice::new(MEETING_TITLE, MEETING_MESSAGE), duration);
}
