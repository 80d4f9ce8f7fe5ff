use contas::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn load_returns_defaults_when_no_file_exists() {
    let base = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf());

    let config = manager.load().expect("load");
    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, "http://localhost:8080");
    assert_eq!(config.locale, "pt-BR");
    assert_eq!(config.currency, "BRL");
}

#[test]
fn save_then_load_round_trips() {
    let base = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf());

    let config = Config {
        api_url: "http://bills.example.com".into(),
        locale: "en-US".into(),
        currency: "USD".into(),
    };
    manager.save(&config).expect("save");

    let reloaded = manager.load().expect("reload");
    assert_eq!(reloaded, config);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let base = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf());

    manager.save(&Config::default()).expect("save");

    let dir = manager.path().parent().expect("config dir");
    let names: Vec<_> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("config.json")]);
}

#[test]
fn config_path_is_under_the_app_directory() {
    let base = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf());
    assert!(manager.path().ends_with("contas/config.json"));
}
