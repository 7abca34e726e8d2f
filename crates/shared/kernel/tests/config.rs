use georeg_kernel::config::load_config;
use georeg_kernel::domain::config::RegistryConfig;
use std::io::Write;

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    writeln!(
        file,
        "[presentation]\nplaceholder = \"n/a\"\n\n[validation]\nenforce_reference_targets = false"
    )
    .expect("write config");

    let cfg: RegistryConfig = load_config(Some(file.path())).expect("config loads");
    assert_eq!(cfg.presentation.placeholder, "n/a");
    assert_eq!(cfg.presentation.max_preview_depth, 2);
    assert!(!cfg.validation.enforce_reference_targets);
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn a_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_config::<RegistryConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}
