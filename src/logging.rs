//! Logging setup.
//!
//! Desktop: `tracing-subscriber` with an `EnvFilter` (`RUST_LOG` wins over the
//! configured level). Android: `android_logger`, fed through `tracing`'s `log`
//! bridge.

#[cfg(not(target_os = "android"))]
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_os = "android")]
pub fn init_logging(default_level: &str) {
    use log::LevelFilter;

    let level = default_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag("subject-guide"),
    );
}
