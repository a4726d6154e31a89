use wide_fs::LogLevel;

#[test]
fn loglevel_parse_various_strings() {
    assert_eq!(LogLevel::parse("quiet"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("error"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("none"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("normal"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("UNKNOWN"), None);
}

#[test]
fn from_str_reports_the_bad_value() {
    let err = "chatty".parse::<LogLevel>().unwrap_err();
    assert!(err.contains("chatty"));
}
