use georeg_domain::config::LoggingConfig;
use georeg_logger::Logger;

#[test]
fn config_without_directory_logs_to_the_console_only() {
    let config = LoggingConfig { level: "info".to_owned(), ..LoggingConfig::default() };
    let logger =
        Logger::from_config("georeg-console", &config).expect("logger should initialize");

    assert!(!logger.writes_files());
    tracing::info!(class_id = "crs--compound", "console only");
}
