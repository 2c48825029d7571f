use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::api::{DashboardApi, DisconnectedApi};
use crate::config::{AppConfig, Timings};
use crate::runtime::{BrowserRuntime, Clock, Scheduler};
use crate::services::analysis::AnalysisWorkflow;
use crate::services::dashboard::DashboardController;
use crate::services::notifier::{Notifier, StoreNotifier};
use crate::state::{AppActions, AppSignal, AppStore};
use crate::{API_CLIENT, APP_CONFIG};

/// Controllers and effects shared by every dashboard component.
#[derive(Clone)]
pub struct DashboardServices {
    pub actions: AppActions,
    pub controller: DashboardController,
    pub workflow: AnalysisWorkflow,
    pub notifier: Rc<dyn Notifier>,
    pub clock: Rc<dyn Clock>,
    pub timings: Timings,
}

impl DashboardServices {
    /// Wires the browser runtime and the process-wide API client. Without a
    /// client every request fails with `ClientError::Unavailable`.
    pub fn from_globals(actions: AppActions) -> Self {
        let timings = APP_CONFIG
            .get()
            .map(|config| config.timings)
            .unwrap_or_else(|| AppConfig::default().timings);

        let api: Rc<dyn DashboardApi> = match API_CLIENT.get() {
            Some(client) => Rc::new(client.clone()),
            None => {
                warn!("api client missing, dashboard requests will fail");
                Rc::new(DisconnectedApi)
            }
        };

        let runtime = Rc::new(BrowserRuntime);
        let scheduler: Rc<dyn Scheduler> = runtime.clone();
        let notifier: Rc<dyn Notifier> =
            Rc::new(StoreNotifier::new(actions.clone(), scheduler.clone()));
        let controller =
            DashboardController::new(api.clone(), actions.clone(), scheduler.clone(), timings);
        let workflow = AnalysisWorkflow::new(
            api,
            notifier.clone(),
            scheduler,
            controller.clone(),
            timings,
        );

        Self {
            actions,
            controller,
            workflow,
            notifier,
            clock: runtime,
            timings,
        }
    }
}

/// Mirrors `store` into a signal for rendering. The subscription is dropped
/// with the calling component.
pub fn use_store_signal(store: &AppStore) -> AppSignal {
    let signal = use_signal(|| store.get());

    let subscription = use_hook(|| {
        store.subscribe(move |state| {
            let mut signal = signal;
            signal.set(state.clone());
        })
    });

    let store = store.clone();
    use_drop(move || {
        store.unsubscribe(subscription);
    });

    signal
}

pub fn use_dashboard_services() -> DashboardServices {
    use_context::<DashboardServices>()
}
