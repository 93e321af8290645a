use athkar_tracker::{
    AppState, Catalog, Config, FileBackend, Storage,
    reminders::{LogNotifier, ReminderSchedule, ReminderScheduler},
    reset::DailyReset,
    router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let storage = Storage::new(FileBackend::open(&config.data_path));
    let catalog = Catalog::builtin();
    DailyReset::new(&storage, &catalog).run_today();

    let state = AppState::new(storage, catalog);
    let reminders = ReminderScheduler::new(
        state.clone(),
        ReminderSchedule::from(&config),
        Arc::new(LogNotifier),
    )
    .spawn();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reminders.abort();
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
