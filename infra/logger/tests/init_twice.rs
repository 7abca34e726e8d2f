use georeg_domain::config::LoggingConfig;
use georeg_logger::{Logger, LoggerError};

#[test]
fn only_the_first_valid_config_installs_a_subscriber() {
    let unknown_level = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_config("georeg", &unknown_level).expect_err("level is checked first");
    assert!(matches!(err, LoggerError::Level { .. }));

    let _logger = Logger::from_config("georeg", &LoggingConfig::default())
        .expect("a rejected config leaves the process free to install one");

    let err = Logger::from_config("georeg-again", &LoggingConfig::default())
        .expect_err("second install should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
