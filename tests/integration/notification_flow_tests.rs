//! Rotation and notification lifetimes under virtual time.

use purrfect::app::commands::EngineCommand;
use purrfect::app::events::EngineEvent;
use purrfect::app::service::InteractionController;
use purrfect::config::EngineConfig;

use super::recording_sink::{make_engine, make_engine_with};

#[test]
fn notification_lives_exactly_its_duration() {
    let (mut engine, _rec) = make_engine();
    engine.like_cat().unwrap();

    engine.advance(2_999);
    assert_eq!(engine.snapshot().notifications.len(), 1);

    engine.advance(1);
    assert!(engine.snapshot().notifications.is_empty());
}

#[test]
fn staggered_notifications_expire_independently() {
    let (mut engine, rec) = make_engine();
    let first = engine.like_cat().unwrap();
    engine.advance(1_000);
    let second = engine.like_cat().unwrap();
    engine.advance(1_000);
    let third = engine.like_cat().unwrap();

    engine.advance(1_000); // t = 3000: first expires
    let live: Vec<_> = engine.snapshot().notifications.iter().map(|n| n.id).collect();
    assert_eq!(live, vec![second, third]);

    engine.advance(1_000); // t = 4000: second expires
    let live: Vec<_> = engine.snapshot().notifications.iter().map(|n| n.id).collect();
    assert_eq!(live, vec![third]);

    engine.advance(1_000);
    assert!(engine.snapshot().notifications.is_empty());

    let expired: Vec<_> = rec
        .events()
        .into_iter()
        .filter_map(|e| match e {
            EngineEvent::NotificationExpired(id) => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(expired, vec![first, second, third]);
}

#[test]
fn dismiss_removes_immediately_and_only_once() {
    let (mut engine, rec) = make_engine();
    let id = engine.pet_cat().unwrap();

    assert!(engine.dismiss(id));
    assert!(engine.snapshot().notifications.is_empty());
    assert!(!engine.dismiss(id));
    engine.handle_command(EngineCommand::Dismiss(id)).unwrap();

    engine.advance(10_000);
    let closes = rec
        .events()
        .into_iter()
        .filter(|e| {
            matches!(
                e,
                EngineEvent::NotificationDismissed(_) | EngineEvent::NotificationExpired(_)
            )
        })
        .count();
    assert_eq!(closes, 1, "dismissal and expiry resolve to one removal");
}

#[test]
fn rotation_tracks_elapsed_periods() {
    let (mut engine, _rec) = make_engine_with(EngineConfig {
        rotation_period_ms: 1_000,
        ..EngineConfig::default()
    });
    assert_eq!(engine.snapshot().current_fact_index, 0);

    engine.advance(999);
    assert_eq!(engine.snapshot().current_fact_index, 0);
    engine.advance(1);
    assert_eq!(engine.snapshot().current_fact_index, 1);

    // 10 facts: 23 ticks total lands on index 3.
    engine.advance(22_000);
    let snap = engine.snapshot();
    assert_eq!(snap.current_fact_index, 3);
    assert_eq!(snap.current_fact, engine.content().facts[3]);
}

#[test]
fn paused_rotation_resumes_from_current_fact() {
    let (mut engine, _rec) = make_engine_with(EngineConfig {
        rotation_period_ms: 100,
        ..EngineConfig::default()
    });
    engine.advance(200);
    assert_eq!(engine.snapshot().current_fact_index, 2);

    assert!(engine.pause_rotation());
    assert!(!engine.pause_rotation());
    engine.advance(5_000);
    assert_eq!(engine.snapshot().current_fact_index, 2);

    engine.resume_rotation().unwrap();
    engine.advance(100);
    assert_eq!(engine.snapshot().current_fact_index, 3);
}

#[test]
fn shutdown_drops_notifications_and_releases_sinks() {
    let (mut engine, rec) = make_engine();
    engine.like_cat().unwrap();
    engine.rate(5).unwrap();
    assert!(engine.pending_tasks() > 0);
    assert_eq!(rec.handles(), 2);

    let last = engine.shutdown();
    assert!(last.notifications.is_empty());
    assert_eq!(last.like_count, 1);
    assert_eq!(rec.events().last(), Some(&EngineEvent::Stopped));
    assert_eq!(rec.last_snapshot(), Some(last));
    assert_eq!(rec.handles(), 1, "engine dropped its sink");
}

#[test]
fn advancing_to_end_of_time_terminates() {
    let mut engine = InteractionController::new(EngineConfig::default()).unwrap();
    engine.advance(u64::MAX - 100);
    engine.start().unwrap();
    engine.like_cat().unwrap();

    engine.advance(u64::MAX);
    let snap = engine.snapshot();
    assert_eq!(snap.now_ms, u64::MAX);
    assert_eq!(snap.current_fact_index, 1);
    assert!(snap.notifications.is_empty());
    assert_eq!(engine.pending_tasks(), 0);
}
