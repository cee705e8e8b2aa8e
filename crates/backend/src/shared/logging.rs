use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::LoggingConfig;

/// Подключает вывод логов в консоль и в файл `{dir}/backend.log`.
/// Переменная RUST_LOG имеет приоритет над фильтром из конфигурации.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    // Создаем директорию для логов
    let log_dir = Path::new(&config.dir);
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;

    Ok(())
}
