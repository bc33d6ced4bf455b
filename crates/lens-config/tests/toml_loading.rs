//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lens_config::{LOCAL_CONFIG_PATH, LensConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
label_prediction_problem_id = "000777-other-exercise"
preview_chars = 40
snapshot_not_found = "(missing)"
"#,
        )?;

        let config: LensConfig = Figment::from(Serialized::defaults(LensConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.report.label_prediction_problem_id, "000777-other-exercise");
        assert_eq!(config.report.preview_chars, 40);
        assert_eq!(config.report.snapshot_not_found, "(missing)");

        let options = config.report.to_options().expect("valid options");
        assert_eq!(options.label_prediction_problem_id.as_deref(), Some("000777-other-exercise"));
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\npretty = false\n")?;

        let config: LensConfig = Figment::from(Serialized::defaults(LensConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.general.pretty);
        assert_eq!(config.general.default_dataset, "session.json");
        assert_eq!(config.report.preview_chars, 100);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lens")?;
        jail.create_file(
            LOCAL_CONFIG_PATH,
            "[general]\ndefault_dataset = \"fixtures/demo.json\"\n",
        )?;

        let config = LensConfig::load().expect("config loads");
        assert_eq!(config.general.default_dataset, "fixtures/demo.json");
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_local_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lens")?;
        jail.create_file(LOCAL_CONFIG_PATH, "[report]\npreview_chars = 10\n")?;
        jail.create_file("custom.toml", "[report]\npreview_chars = 25\n")?;

        let config = LensConfig::load_from(&jail.directory().join("custom.toml"))
            .expect("config loads");
        assert_eq!(config.report.preview_chars, 25);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lens")?;
        jail.create_file(LOCAL_CONFIG_PATH, "[report]\npreview_chars = \"many\"\n")?;

        let err = LensConfig::load().unwrap_err();
        assert!(matches!(err, lens_config::ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn config_file_written_with_tempfile_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lens.toml");
    std::fs::write(&path, "[report]\nsnapshot_not_found = \"gone\"\n").expect("write config");

    let config: LensConfig = Figment::from(Serialized::defaults(LensConfig::default()))
        .merge(Toml::file(&path))
        .extract()
        .expect("config loads");
    assert_eq!(config.report.snapshot_not_found, "gone");
}
