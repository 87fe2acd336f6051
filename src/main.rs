use checkin_service::app_state::AppState;
use checkin_service::services::{bootstrap_with_retry, Database};
use checkin_service::utils::{Config, BIND_ADDRESS, BOOTSTRAP_ATTEMPTS, BOOTSTRAP_RETRY_DELAY};
use checkin_service::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    if config.is_sqlite() {
        log::info!("using SQLite database {}", config.database_url());
    } else {
        log::info!("using PostgreSQL database");
    }

    let database = Arc::new(Database::new(config.database_url()));
    let app_state =
        AppState::with_sql_stores(config.clone(), database).expect("Failed to load templates");

    // A store that stays down is not fatal; requests fail individually.
    bootstrap_with_retry(&app_state, BOOTSTRAP_ATTEMPTS, BOOTSTRAP_RETRY_DELAY).await;

    let port = BIND_ADDRESS.rsplit(':').next().unwrap_or("5000");
    log::info!("volunteer check-in: http://localhost:{}/", port);
    log::info!("leader area: http://localhost:{}/login_lider", port);

    let app = Application::build(app_state, BIND_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
