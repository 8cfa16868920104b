use super::download::DownloadSlot;
use super::sink::{TickAction, clamp_position, tick_action};
use std::time::Duration;

#[test]
fn clamp_position_caps_at_known_duration() {
    let total = Some(Duration::from_secs(10));
    assert_eq!(clamp_position(Duration::from_secs(4), total), Duration::from_secs(4));
    assert_eq!(clamp_position(Duration::from_secs(40), total), Duration::from_secs(10));
}

#[test]
fn clamp_position_passes_through_without_duration() {
    assert_eq!(
        clamp_position(Duration::from_secs(40), None),
        Duration::from_secs(40)
    );
}

#[test]
fn finished_track_restarts_with_repeat_and_ends_without() {
    assert_eq!(tick_action(true, false, true, true), TickAction::Restart);
    assert_eq!(tick_action(true, false, true, false), TickAction::Ended);
}

#[test]
fn tick_reports_only_while_playing() {
    assert_eq!(tick_action(true, false, false, false), TickAction::Report);
    assert_eq!(tick_action(true, false, false, true), TickAction::Report);
    // Paused, or already stopped after `Ended`.
    assert_eq!(tick_action(true, true, false, true), TickAction::Idle);
    assert_eq!(tick_action(true, true, true, false), TickAction::Idle);
    // Nothing loaded yet, e.g. while downloading.
    assert_eq!(tick_action(false, false, true, true), TickAction::Idle);
}

#[test]
fn only_the_newest_download_is_claimed() {
    let mut slot = DownloadSlot::default();
    let first = slot.begin("a".into(), None);
    let second = slot.begin("b".into(), Some(Duration::from_secs(3)));

    assert_eq!(slot.finish(first), None);
    assert_eq!(
        slot.finish(second),
        Some(("b".to_string(), Some(Duration::from_secs(3))))
    );
    // Claimed once.
    assert_eq!(slot.finish(second), None);
}

#[test]
fn finish_without_a_pending_download_is_ignored() {
    let mut slot = DownloadSlot::default();
    assert_eq!(slot.finish(1), None);
}
