use super::*;

#[test]
fn test_parse_camel_case_keys() {
    let config = FileConfig::parse(
        Path::new("pkgstub.json"),
        r##"{"outputDir": "out/rbi", "workers": 3, "recordBase": "Core::Record", "header": "# typed: strict"}"##,
    )
    .unwrap();
    assert_eq!(
        config,
        FileConfig {
            output_dir: Some(PathBuf::from("out/rbi")),
            workers: Some(3),
            record_base: Some("Core::Record".to_string()),
            header: Some("# typed: strict".to_string()),
        }
    );
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = FileConfig::parse(Path::new("pkgstub.json"), r#"{"output_dir": "x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_empty_config_resolves_to_defaults() {
    let run = FileConfig::default().resolve(FileConfig::default()).unwrap();
    assert_eq!(run.output_dir, PathBuf::from("."));
    assert_eq!(run.workers, None);
    assert_eq!(run.export, ExportOptions::default());
}

#[test]
fn test_overrides_win() {
    let file = FileConfig {
        output_dir: Some(PathBuf::from("from-file")),
        workers: Some(2),
        record_base: Some("File::Record".to_string()),
        header: Some("# typed: strict".to_string()),
    };
    let overrides = FileConfig {
        output_dir: Some(PathBuf::from("from-args")),
        workers: Some(8),
        ..FileConfig::default()
    };
    let run = file.resolve(overrides).unwrap();
    assert_eq!(run.output_dir, PathBuf::from("from-args"));
    assert_eq!(run.workers, Some(8));
    assert_eq!(run.export.record_base, vec!["File", "Record"]);
    assert_eq!(run.export.header, "# typed: strict");
}

#[test]
fn test_invalid_settings() {
    let zero = FileConfig {
        workers: Some(0),
        ..FileConfig::default()
    };
    assert!(matches!(
        zero.resolve(FileConfig::default()),
        Err(ConfigError::ZeroWorkers)
    ));

    for bad in ["", "lower::Case", "A::::B", "A::B-C"] {
        let config = FileConfig {
            record_base: Some(bad.to_string()),
            ..FileConfig::default()
        };
        assert!(
            matches!(
                config.resolve(FileConfig::default()),
                Err(ConfigError::InvalidRecordBase(_))
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn test_discover_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        FileConfig::discover(None, dir.path()).unwrap(),
        FileConfig::default()
    );

    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), r#"{"workers": 4}"#).unwrap();
    assert_eq!(
        FileConfig::discover(None, dir.path()).unwrap().workers,
        Some(4)
    );

    let missing = dir.path().join("other.json");
    assert!(matches!(
        FileConfig::discover(Some(&missing), dir.path()),
        Err(ConfigError::Io { .. })
    ));
}
