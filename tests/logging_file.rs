//! Global subscriber with a file layer. Kept in its own test binary because
//! the global subscriber can only be installed once per process.

use std::fs;

use tempfile::tempdir;
use wide_fs::{Config, LogLevel, WideFs, logging};

#[test]
fn file_layer_receives_operation_failures() {
    let td = tempdir().unwrap();
    // tempdir may sit under a symlink (macOS /var) which file logging refuses.
    let base = dunce::canonicalize(td.path()).unwrap();
    let log_path = base.join("logs").join("wide_fs.log");
    let cfg = Config {
        log_level: LogLevel::Debug,
        log_file: Some(log_path.clone()),
        ..Config::default()
    };

    let guard = logging::init_tracing(&cfg).expect("install subscriber").expect("file guard");
    let _ = WideFs::new(cfg.clone()).is_directory(base.join("missing").to_str().unwrap());
    drop(guard);

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("platform call failed"), "{contents}");

    // A second install is refused instead of panicking.
    let quiet = Config::default();
    assert!(logging::init_tracing(&quiet).is_err());
}
