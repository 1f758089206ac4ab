//! Configuration loading tests.

use std::fs;

use position_graph::config::Config;

#[test]
fn defaults_match_the_documented_values() {
    let config = Config::default();
    assert_eq!(config.store_root, std::path::Path::new(".store"));
    assert_eq!(config.max_queue_shard_bytes, 256 * 1024);
    assert_eq!(config.batch_size, 500);
    assert!(config.seed_board.is_none());
}

#[test]
fn load_reads_a_partial_json_document_over_defaults() {
    let mut path = std::env::temp_dir();
    path.push(format!("position_graph_config_test_{}.json", std::process::id()));
    fs::write(&path, r#"{"batch_size": 10}"#).expect("write config");

    let config = Config::load(&path).expect("load config");
    assert_eq!(config.batch_size, 10);
    assert_eq!(config.store_root, std::path::Path::new(".store"));

    let _ = fs::remove_file(&path);
}

#[test]
fn load_reports_a_missing_file() {
    let err = Config::load("/does/not/exist/anywhere.json").unwrap_err();
    assert!(format!("{err}").contains("failed to read config"));
}
