use rollcall_config::LogConfig;
use std::fs;
use std::io;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// `RUST_LOG` wins over `LOG_LEVEL`. When a log directory is configured, a
/// daily-rolling text log of errors and a JSON log of everything at `info`
/// and above are written there as well.
pub fn init_tracing(config: &LogConfig) -> io::Result<()> {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level},rollcall_cache={level},reqwest=warn,hyper=warn",
            env!("CARGO_CRATE_NAME"),
            level = config.level
        ))
    });

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    let Some(log_dir) = &config.file_dir else {
        tracing_subscriber::registry().with(console_layer).init();
        return Ok(());
    };

    fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "rollcall.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "rollcall.json");
    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .init();

    info!(dir = %log_dir.display(), "File logging enabled");
    Ok(())
}
