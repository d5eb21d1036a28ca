use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::domain_events::LoggingDomainEventSink;
use savings_core::goals::GoalService;
use savings_storage_sqlite::{db, SqliteKeyValueSlot};

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_service(config: &Config) -> anyhow::Result<Arc<GoalService>> {
    let pool = db::open(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db::get_db_path(&config.data_dir));
    let slot = Arc::new(SqliteKeyValueSlot::new(pool));
    let service = GoalService::new(slot, Arc::new(LoggingDomainEventSink));
    Ok(Arc::new(service))
}
