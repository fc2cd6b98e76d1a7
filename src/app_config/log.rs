use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber, Layer, Registry};

use crate::app_config::env::{env_is_true, env_or_default};

// Keeps the non-blocking writer guards alive for the process lifetime,
// otherwise buffered log lines are dropped on flush.
static LOG_GUARDS: OnceCell<Vec<WorkerGuard>> = OnceCell::new();

// The global subscriber can only be installed once per process.
static LOG_INIT: OnceCell<()> = OnceCell::new();

/// Set up logging. `APP_ENV=LOCAL` logs to stdout; any other environment
/// writes daily-rolling `info.log` / `error.log` files under `log_files/`.
/// Safe to call repeatedly (tests share one binary); only the first call
/// installs the subscriber.
pub async fn setup_logging() -> anyhow::Result<()> {
    LOG_INIT.get_or_try_init(init_subscriber)?;
    Ok(())
}

fn init_subscriber() -> anyhow::Result<()> {
    let app_env = env_or_default("APP_ENV", "LOCAL");

    if app_env == "LOCAL" {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(true)
            .with_target(false)
            .with_line_number(true)
            .with_level(true)
            .with_writer(std::io::stdout)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let info_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "info.log");
        let error_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "error.log");

        let (info_non_blocking, info_guard) = tracing_appender::non_blocking(info_file);
        let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error_file);
        let _ = LOG_GUARDS.set(vec![info_guard, error_guard]);

        let subscriber = Registry::default()
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_line_number(true)
                    .with_level(true)
                    .with_writer(info_non_blocking)
                    .with_filter(EnvFilter::new("info")),
            )
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_line_number(true)
                    .with_level(true)
                    .with_writer(error_non_blocking)
                    .with_filter(EnvFilter::new("error")),
            );

        tracing::subscriber::set_global_default(subscriber)?;
    }

    // enable log crate output so rbatis SQL statements show up
    if env_is_true("DB_DEBUG", false) {
        fast_log::init(
            fast_log::Config::new()
                .console()
                .level(log::LevelFilter::Debug),
        )
        .expect("fast_log init error");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn setup_logging_is_reentrant() -> anyhow::Result<()> {
        setup_logging().await?;
        // second call in the same process must be a no-op, not an error
        setup_logging().await?;
        Ok(())
    }
}
