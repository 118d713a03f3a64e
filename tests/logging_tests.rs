use battleship_duel::{init_logging, level_from};
use log::LevelFilter;

#[test]
fn test_level_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some(" trace ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn test_unknown_or_missing_level_is_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
    assert_eq!(level_from(Some("")), LevelFilter::Info);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
