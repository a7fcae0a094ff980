//! Action API end to end: gauges, panel selection, form validation.

use purrfect::app::commands::{AdoptionForm, EngineCommand};
use purrfect::app::events::EngineEvent;
use purrfect::config::EngineConfig;
use purrfect::error::Error;
use purrfect::selection::Panel;

use super::recording_sink::{make_engine, make_engine_with};

// ── Gauges ───────────────────────────────────────────────────

#[test]
fn three_likes_raise_count_and_happiness() {
    let (mut engine, _rec) = make_engine();
    let before = engine.snapshot();
    assert_eq!(before.happiness, 50);
    assert_eq!(before.like_count, 0);

    for _ in 0..3 {
        engine.like_cat().unwrap();
    }

    let snap = engine.snapshot();
    assert_eq!(snap.like_count, 3);
    assert_eq!(snap.happiness, 80);
    assert_eq!(snap.notifications.len(), 3);
    let ids: Vec<_> = snap.notifications.iter().map(|n| n.id).collect();
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(ids, unique, "each notification gets its own id");
}

#[test]
fn five_star_rating_clamps_at_max() {
    let (mut engine, _rec) = make_engine_with(EngineConfig {
        initial_happiness: 90,
        ..EngineConfig::default()
    });
    engine.rate(5).unwrap();
    assert_eq!(engine.snapshot().happiness, 100);
}

#[test]
fn happiness_saturates_under_repeated_likes() {
    let (mut engine, _rec) = make_engine();
    for _ in 0..50 {
        engine.like_cat().unwrap();
        engine.pet_cat().unwrap();
    }
    let snap = engine.snapshot();
    assert_eq!(snap.happiness, 100);
    assert_eq!(snap.like_count, 50);
}

#[test]
fn invalid_ratings_change_nothing() {
    let (mut engine, rec) = make_engine();
    rec.clear();
    let before = engine.snapshot();

    assert_eq!(engine.rate(0), Err(Error::InvalidInput(0)));
    assert_eq!(engine.rate(6), Err(Error::InvalidInput(6)));

    assert_eq!(engine.snapshot(), before);
    assert_eq!(rec.len(), 0, "rejected actions emit nothing");
}

#[test]
fn wide_ratings_from_text_reach_the_controller() {
    let (mut engine, rec) = make_engine();
    rec.clear();
    let before = engine.snapshot();

    for (text, stars) in [("rate:300", 300), ("rate:-1", -1), ("rate:0", 0)] {
        let cmd: EngineCommand = text.parse().unwrap();
        assert_eq!(engine.handle_command(cmd), Err(Error::InvalidInput(stars)));
    }

    assert_eq!(engine.snapshot(), before);
    assert_eq!(rec.len(), 0);
}

// ── Panels ───────────────────────────────────────────────────

#[test]
fn reselecting_active_panel_is_idempotent() {
    let (mut engine, rec) = make_engine();
    assert!(engine.select_panel(Panel::Breeds));
    assert!(!engine.select_panel(Panel::Breeds));
    assert!(!engine.select_panel(Panel::Breeds));

    let snap = engine.snapshot();
    assert_eq!(snap.active_panel, Panel::Breeds);
    assert!(snap.notifications.is_empty());

    let changes: Vec<bool> = rec
        .events()
        .into_iter()
        .filter_map(|e| match e {
            EngineEvent::PanelSelected { changed, .. } => Some(changed),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![true, false, false]);
}

#[test]
fn unknown_panel_id_is_rejected() {
    let (mut engine, _rec) = make_engine();
    assert_eq!(
        engine.handle_command(EngineCommand::SelectPanel("toys".into())),
        Err(Error::InvalidPanel)
    );
    assert_eq!(engine.snapshot().active_panel, Panel::Facts);

    engine
        .handle_command(EngineCommand::SelectPanel("care".into()))
        .unwrap();
    assert_eq!(engine.snapshot().active_panel, Panel::Care);
}

// ── Adoption form ────────────────────────────────────────────

#[test]
fn blank_name_fails_without_notification() {
    let (mut engine, _rec) = make_engine();
    let form = AdoptionForm::new("", "a@b.com", "hi");
    assert_eq!(
        engine.submit_adoption_form(&form),
        Err(Error::ValidationFailed("name"))
    );
    assert!(engine.snapshot().notifications.is_empty());
}

#[test]
fn complete_form_is_confirmed() {
    let (mut engine, rec) = make_engine();
    let form = AdoptionForm::new("Ada", "ada@example.com", "I have a sunny window");
    let id = engine.submit_adoption_form(&form).unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.notifications.len(), 1);
    assert_eq!(snap.notifications[0].id, id);
    assert!(snap.notifications[0].body.contains("Ada"));
    assert!(rec.events().contains(&EngineEvent::AdoptionSubmitted(id)));
}

// ── Commands ─────────────────────────────────────────────────

#[test]
fn parsed_commands_drive_the_engine() {
    let (mut engine, _rec) = make_engine();
    for text in ["like", "pet", "rate:4", "volume:250", "panel:breeds"] {
        let cmd: EngineCommand = text.parse().unwrap();
        engine.handle_command(cmd).unwrap();
    }
    let snap = engine.snapshot();
    assert_eq!(snap.like_count, 1);
    assert_eq!(snap.happiness, 80);
    assert_eq!(snap.volume, 100);
    assert_eq!(snap.active_panel, Panel::Breeds);
    assert_eq!(snap.notifications.len(), 3);
}

#[test]
fn volume_never_notifies() {
    let (mut engine, _rec) = make_engine();
    engine.handle_command(EngineCommand::SetVolume(-40)).unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.volume, 0);
    assert!(snap.notifications.is_empty());
}
