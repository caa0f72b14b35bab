use deploy_summary::logging::{default_filter_directive, LogLevel};
use tracing::Level;

#[test]
fn default_log_level_is_warn() {
    assert_eq!(LogLevel::default(), LogLevel::Warn);
}

#[test]
fn log_levels_map_to_tracing_levels() {
    assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
    assert_eq!(Level::from(LogLevel::Info), Level::INFO);
    assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
    assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
}

#[test]
fn filter_directive_raises_only_the_component() {
    assert_eq!(
        default_filter_directive("deploy_summary", LogLevel::Debug),
        "warn,deploy_summary=debug"
    );
    assert_eq!(default_filter_directive("x", LogLevel::Trace), "warn,x=trace");
    assert_eq!(default_filter_directive("x", LogLevel::Warn), "warn,x=warn");
}

#[test]
fn filter_directive_quiets_everything_at_error() {
    assert_eq!(default_filter_directive("x", LogLevel::Error), "error,x=error");
}

#[test]
fn log_levels_order_from_quietest_to_loudest() {
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Debug < LogLevel::Trace);
}
