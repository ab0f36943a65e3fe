mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, scheduler, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    // Start monthly closing scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::start_scheduler(scheduler_db).await {
            tracing::error!("Monthly closing scheduler error: {}", e);
        }
    });

    let app = router::router().with_state(AppState::new(db));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
