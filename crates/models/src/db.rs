use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::{env, time::Duration};
use tracing::debug;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    if let Ok(cfg) = configs::load_default() {
        if !cfg.database.url.trim().is_empty() {
            return cfg.database.url;
        }
    }
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://companies.db?mode=rwc".to_string())
});

/// Connect using the resolved URL, applying pool tuning from config.toml
/// when one is present.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(DATABASE_URL.as_str());
    if let Ok(cfg) = configs::load_default() {
        let d = cfg.database;
        opt.max_connections(d.max_connections)
            .min_connections(d.min_connections)
            .connect_timeout(Duration::from_secs(d.connect_timeout_secs))
            .sqlx_logging(d.sqlx_logging);
    }
    debug!(url = %DATABASE_URL.as_str(), "connecting database");
    let db = Database::connect(opt).await?;
    Ok(db)
}
