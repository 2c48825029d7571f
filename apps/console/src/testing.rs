//! Test doubles for the runtime, API and notifier seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use serde_json::Value;

use crate::api::{ApiEnvelope, ClientError, ClientResult, DashboardApi};
use crate::config::Timings;
use crate::models::DashboardSnapshot;
use crate::runtime::Scheduler;
use crate::services::analysis::AnalysisWorkflow;
use crate::services::dashboard::DashboardController;
use crate::services::notifier::{DetailDialog, Notice, Notifier};
use crate::state::{AppActions, AppState, AppStore};

/// Single-threaded executor with virtual time. Nothing runs until the test
/// calls [`run_until_stalled`](Self::run_until_stalled) or [`advance`](Self::advance).
pub struct ManualScheduler {
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    now: Cell<Duration>,
    timers: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            pool: RefCell::new(pool),
            spawner,
            now: Cell::new(Duration::ZERO),
            timers: RefCell::new(Vec::new()),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.now.get()
    }

    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Moves virtual time forward, firing due timers in deadline order and
    /// letting woken tasks run between deadlines.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            self.run_until_stalled();
            let next = self
                .timers
                .borrow()
                .iter()
                .map(|(deadline, _)| *deadline)
                .filter(|deadline| *deadline <= target)
                .min();
            let Some(deadline) = next else {
                break;
            };

            self.now.set(deadline);
            let due: Vec<oneshot::Sender<()>> = {
                let mut timers = self.timers.borrow_mut();
                let (due, pending): (Vec<_>, Vec<_>) =
                    timers.drain(..).partition(|(at, _)| *at <= deadline);
                *timers = pending;
                due.into_iter().map(|(_, tx)| tx).collect()
            };
            for tx in due {
                let _ = tx.send(());
            }
        }
        self.now.set(target);
        self.run_until_stalled();
    }
}

impl Scheduler for ManualScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool accepts tasks");
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        let deadline = self.now.get() + duration;
        self.timers.borrow_mut().push((deadline, tx));
        async move {
            let _ = rx.await;
        }
        .boxed_local()
    }
}

type Pending<T> = RefCell<Vec<Option<oneshot::Sender<ClientResult<T>>>>>;

/// Scripted backend. Every call stays in flight until the test resolves it
/// by index, which allows out-of-order completion.
#[derive(Default)]
pub struct FakeDashboardApi {
    fetches: Pending<ApiEnvelope<DashboardSnapshot>>,
    triggers: Pending<Value>,
}

impl FakeDashboardApi {
    pub fn fetch_count(&self) -> usize {
        self.fetches.borrow().len()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.borrow().len()
    }

    pub fn resolve_fetch(&self, index: usize, result: ClientResult<ApiEnvelope<DashboardSnapshot>>) {
        let sender = self.fetches.borrow_mut()[index]
            .take()
            .expect("fetch resolved twice");
        let _ = sender.send(result);
    }

    pub fn resolve_trigger(&self, index: usize, result: ClientResult<Value>) {
        let sender = self.triggers.borrow_mut()[index]
            .take()
            .expect("trigger resolved twice");
        let _ = sender.send(result);
    }
}

impl DashboardApi for FakeDashboardApi {
    fn fetch_dashboard(&self) -> LocalBoxFuture<'_, ClientResult<ApiEnvelope<DashboardSnapshot>>> {
        let (tx, rx) = oneshot::channel();
        self.fetches.borrow_mut().push(Some(tx));
        async move { rx.await.unwrap_or(Err(ClientError::Unavailable)) }.boxed_local()
    }

    fn trigger_analysis(&self) -> LocalBoxFuture<'_, ClientResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.triggers.borrow_mut().push(Some(tx));
        async move { rx.await.unwrap_or(Err(ClientError::Unavailable)) }.boxed_local()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeEvent {
    Blocking(Notice),
    Timed(Notice, Duration),
    Error(Notice),
    Detail(DetailDialog),
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<NoticeEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<NoticeEvent> {
        self.events.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_blocking(&self, notice: Notice) {
        self.events.borrow_mut().push(NoticeEvent::Blocking(notice));
    }

    fn show_timed(&self, notice: Notice, duration: Duration) {
        self.events
            .borrow_mut()
            .push(NoticeEvent::Timed(notice, duration));
    }

    fn show_error(&self, notice: Notice) {
        self.events.borrow_mut().push(NoticeEvent::Error(notice));
    }

    fn show_detail_dialog(&self, dialog: DetailDialog) {
        self.events.borrow_mut().push(NoticeEvent::Detail(dialog));
    }
}

pub fn envelope(snapshot: DashboardSnapshot) -> ApiEnvelope<DashboardSnapshot> {
    ApiEnvelope {
        success: true,
        data: Some(snapshot),
        error: None,
    }
}

pub fn decode_error() -> ClientError {
    let err = serde_json::from_str::<Value>("<html>502</html>")
        .expect_err("html is not json");
    ClientError::Decode(err)
}

/// Controller, workflow and fakes wired together the way the app wires them.
pub struct Harness {
    pub scheduler: Rc<ManualScheduler>,
    pub api: Rc<FakeDashboardApi>,
    pub notifier: Rc<RecordingNotifier>,
    pub actions: AppActions,
    pub controller: DashboardController,
    pub workflow: AnalysisWorkflow,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_timings(Timings::default())
    }

    pub fn with_timings(timings: Timings) -> Self {
        let scheduler = Rc::new(ManualScheduler::new());
        let api = Rc::new(FakeDashboardApi::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let actions = AppActions::new(AppStore::default());
        let controller =
            DashboardController::new(api.clone(), actions.clone(), scheduler.clone(), timings);
        let workflow = AnalysisWorkflow::new(
            api.clone(),
            notifier.clone(),
            scheduler.clone(),
            controller.clone(),
            timings,
        );
        Self {
            scheduler,
            api,
            notifier,
            actions,
            controller,
            workflow,
        }
    }

    pub fn state(&self) -> AppState {
        self.actions.store().get()
    }
}
