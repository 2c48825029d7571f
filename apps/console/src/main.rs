#![allow(non_snake_case)]

mod api;
mod config;
#[cfg(test)]
mod fixtures;
mod hooks;
mod lead_detail;
mod models;
mod runtime;
mod services;
mod state;
#[cfg(test)]
mod testing;
mod ui;
mod view;

use api::{ClientError, DashboardClient};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use hooks::dashboard::{use_dashboard_services, use_store_signal, DashboardServices};
use once_cell::sync::OnceCell;
use state::{use_app_state, AppActions, AppStore};
use tracing::{error, info};
use ui::activity::RecentActivity;
use ui::header::DashboardHeader;
use ui::lead_detail::LeadDetailModal;
use ui::leads::WarmLeads;
use ui::metrics::MetricsGrid;
use ui::notifications::NotificationCenter;
use ui::opportunities::TopOpportunities;
use view::entities::DashboardView;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<DashboardClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_infrastructure();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_infrastructure() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config.clone());

    match DashboardClient::new(config) {
        Ok(client) => {
            let config = client.config();
            info!(
                base_url = %config.api_base_url,
                refresh_delay_ms = config.timings.analysis_refresh_delay.as_millis() as u64,
                "dashboard client initialized"
            );
            let _ = API_CLIENT.set(client);
        }
        Err(err) => {
            report_client_error("failed to build dashboard client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let store = use_hook(AppStore::default);
    let app_state = use_store_signal(&store);

    use_context_provider(|| app_state);
    let actions = use_context_provider(|| AppActions::new(store.clone()));
    let services = use_context_provider(|| DashboardServices::from_globals(actions.clone()));

    use_effect(move || services.controller.initialize());

    rsx! {
        div { class: "relative min-h-screen bg-slate-50",
            Router::<Route> {}
            LeadDetailModal {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    let state = use_app_state();
    let services = use_dashboard_services();

    let snapshot = state.read();
    if snapshot.loading {
        return rsx! {
            div { class: "flex min-h-screen flex-col items-center justify-center gap-3",
                div { class: "h-10 w-10 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600" }
                p { class: "text-sm text-slate-600", "Loading Jarvis Dashboard..." }
            }
        };
    }

    let view = DashboardView::build(snapshot.snapshot.as_ref(), services.clock.now());
    let refreshing = snapshot.refreshing;
    drop(snapshot);

    rsx! {
        DashboardHeader { last_analyzed: view.last_analyzed.clone(), refreshing }
        main { class: "mx-auto max-w-6xl space-y-8 px-6 py-8",
            MetricsGrid { cards: view.metrics.clone() }
            WarmLeads { cards: view.leads.clone() }
            TopOpportunities { cards: view.opportunities.clone() }
            RecentActivity { rows: view.activity.clone() }
        }
    }
}
