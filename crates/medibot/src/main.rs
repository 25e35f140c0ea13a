use std::process::ExitCode;
use std::sync::Arc;

use medibot::app::{AppStore, DashboardSummary, FleetSummary, Scenario};
use medibot::config::{StoreConfig, medibot_home};
use medibot::domain::user::Role;
use medibot::infra::clock::SystemClock;
use medibot::infra::storage::FileStorage;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let scenario = match std::env::args().nth(1).map(|arg| arg.parse::<Scenario>()) {
        None => Scenario::Normal,
        Some(Ok(scenario)) => scenario,
        Some(Err(err)) => {
            error!("{err}");

            return ExitCode::FAILURE;
        }
    };

    let storage = Arc::new(FileStorage::new(medibot_home()));
    let store = AppStore::new(StoreConfig::default(), storage, Arc::new(SystemClock));

    if !store.is_authenticated() && !store.login_as_demo(Role::Operator).await {
        error!("Demo operator login failed");

        return ExitCode::FAILURE;
    }

    store.run_scenario(scenario).await;
    store.stop_simulation();

    let state = store.snapshot();
    let dashboard = DashboardSummary::from_state(&state);
    let fleet = FleetSummary::from_state(&state);
    info!(
        scenario = scenario.id(),
        active_robots = dashboard.active_robots,
        total_robots = dashboard.total_robots,
        in_progress_tasks = dashboard.in_progress_tasks,
        completed_tasks = dashboard.completed_tasks,
        unacknowledged_alerts = dashboard.unacknowledged_alerts,
        offline_robots = fleet.offline,
        "Dashboard summary"
    );

    ExitCode::SUCCESS
}
