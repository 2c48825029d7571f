use std::rc::Rc;

use futures::future::FutureExt;
use tracing::{error, info};

use crate::api::DashboardApi;
use crate::config::Timings;
use crate::runtime::Scheduler;
use crate::services::dashboard::DashboardController;
use crate::services::notifier::{Notice, Notifier};

const THINKING_TITLE: &str = "Jarvis is Thinking...";
const THINKING_MESSAGE: &str = "I am analyzing your client documents and market data. \
Please wait while I generate insights.";
const STARTED_TITLE: &str = "Analysis Started!";
const STARTED_MESSAGE: &str =
    "The agents are now working in the background. Emails will appear shortly.";
const FAILED_TITLE: &str = "Error";
const FAILED_MESSAGE: &str = "Failed to start analysis";

/// Fire-and-forget trigger for the backend analysis job.
///
/// The job exposes no completion signal. After a successful trigger the
/// dashboard is refreshed once, `analysis_refresh_delay` later, on the
/// assumption that the job has produced something by then.
#[derive(Clone)]
pub struct AnalysisWorkflow {
    api: Rc<dyn DashboardApi>,
    notifier: Rc<dyn Notifier>,
    scheduler: Rc<dyn Scheduler>,
    dashboard: DashboardController,
    timings: Timings,
}

impl AnalysisWorkflow {
    pub fn new(
        api: Rc<dyn DashboardApi>,
        notifier: Rc<dyn Notifier>,
        scheduler: Rc<dyn Scheduler>,
        dashboard: DashboardController,
        timings: Timings,
    ) -> Self {
        Self {
            api,
            notifier,
            scheduler,
            dashboard,
            timings,
        }
    }

    pub fn run(&self) {
        self.notifier
            .show_blocking(Notice::new(THINKING_TITLE, THINKING_MESSAGE));

        let workflow = self.clone();
        self.scheduler
            .spawn(async move { workflow.trigger().await }.boxed_local());
    }

    async fn trigger(self) {
        match self.api.trigger_analysis().await {
            Ok(body) => {
                info!(
                    ?body,
                    refresh_in_ms = self.timings.analysis_refresh_delay.as_millis() as u64,
                    "analysis triggered"
                );
                self.notifier.show_timed(
                    Notice::new(STARTED_TITLE, STARTED_MESSAGE),
                    self.timings.analysis_started_notice,
                );
                self.schedule_refresh();
            }
            Err(err) => {
                error!(%err, status = ?err.status(), "analysis trigger failed");
                self.notifier
                    .show_error(Notice::new(FAILED_TITLE, FAILED_MESSAGE));
            }
        }
    }

    fn schedule_refresh(&self) {
        let dashboard = self.dashboard.clone();
        let delay = self.scheduler.sleep(self.timings.analysis_refresh_delay);
        self.scheduler.spawn(
            async move {
                delay.await;
                dashboard.refresh();
            }
            .boxed_local(),
        );
    }
}
