//! Subscriber lifecycle.

use std::cell::Cell;
use std::rc::Rc;

use purrfect::app::events::{EngineEvent, Snapshot};

use super::recording_sink::{Recorder, make_engine};

#[test]
fn subscribers_see_post_change_snapshot() {
    let (mut engine, rec) = make_engine();
    engine.like_cat().unwrap();

    let snap = rec.last_snapshot().unwrap();
    assert_eq!(snap.like_count, 1);
    assert_eq!(snap.happiness, 60);
    assert_eq!(snap.notifications.len(), 1);
}

#[test]
fn scheduled_ticks_notify_subscribers() {
    let (mut engine, rec) = make_engine();
    rec.clear();
    engine.advance(5_000);
    assert_eq!(
        rec.events(),
        vec![EngineEvent::RotationAdvanced { index: 1 }]
    );
}

#[test]
fn unsubscribe_stops_callbacks() {
    let (mut engine, _rec) = make_engine();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = engine.subscribe(move |_: &EngineEvent, _: &Snapshot| {
        counter.set(counter.get() + 1);
    });

    engine.pet_cat().unwrap();
    assert_eq!(calls.get(), 1);

    assert!(engine.unsubscribe(id));
    assert!(!engine.unsubscribe(id));
    engine.pet_cat().unwrap();
    engine.advance(20_000);
    assert_eq!(calls.get(), 1);
}

#[test]
fn independent_subscribers_all_receive_events() {
    let (mut engine, first) = make_engine();
    let second = Recorder::new();
    engine.subscribe(second.clone());
    first.clear();

    engine.set_volume(30);
    assert_eq!(first.events(), vec![EngineEvent::VolumeChanged(30)]);
    assert_eq!(second.events(), vec![EngineEvent::VolumeChanged(30)]);
}
