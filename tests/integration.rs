// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use telegraph::banner::{self, BannerEngine};
use telegraph::config::{self, BannerConfig, Config};
use telegraph::dialog::DialogEngine;
use telegraph::domain::overlay::{Button, ButtonId, EntryId, Placement, Status};
use telegraph::engine::{EngineSettings, QueueEngine, ShowOptions};
use telegraph::overlays::Overlays;
use telegraph::presentation::AdapterEvent;
use telegraph::response::Outcome;
use tempfile::tempdir;

fn id(name: &str) -> EntryId {
    EntryId::new(name)
}

fn queue(cap: usize) -> QueueEngine {
    QueueEngine::new(EngineSettings::with_capacity(cap))
}

#[test]
fn visible_count_never_exceeds_cap() {
    for cap in 1..=4 {
        let engine = queue(cap);
        let mut handles = Vec::new();
        for n in 0..12 {
            handles.push(engine.show(format!("entry {n}"), ShowOptions::new()));
            assert!(engine.visible_count() <= cap);
        }
        for handle in handles.iter().step_by(3) {
            handle.hide();
            assert!(engine.visible_count() <= cap);
        }
        for view in engine.entries() {
            if view.status == Status::Hidden {
                engine.cleanup_after_animation(&view.id);
                assert!(engine.visible_count() <= cap);
            }
        }
    }
}

fn alternating(n: usize) -> Placement {
    if n % 2 == 0 {
        Placement::Top
    } else {
        Placement::Bottom
    }
}

#[test]
fn dialog_cap_holds_across_placements() {
    let dialogs: DialogEngine = DialogEngine::default();
    for n in 0..6 {
        dialogs.show(
            format!("dialog {n}"),
            ShowOptions::new().id(format!("d{n}")).placement(alternating(n)),
        );
        assert!(dialogs.engine().visible_count() <= 1);
    }
    for n in 0..6 {
        dialogs.hide_current();
        assert!(dialogs.engine().visible_count() <= 1);
        dialogs.engine().cleanup_after_animation(&id(&format!("d{n}")));
        assert!(dialogs.engine().visible_count() <= 1);
    }
    assert_eq!(dialogs.count(), 0);
}

#[test]
fn banner_cap_holds_across_placements() {
    let config = BannerConfig {
        max_simultaneous_items: 2,
        ..BannerConfig::default()
    };
    let banners: BannerEngine = banner::engine(&config);
    for n in 0..6 {
        let options = if n % 3 == 0 {
            banner::options()
        } else {
            ShowOptions::new().placement(alternating(n))
        };
        banners.show(format!("banner {n}"), options.id(format!("b{n}")));
        assert!(banners.visible_count() <= 2);
    }
    assert_eq!(banners.queued_count(), 4);

    for n in 0..6 {
        banners.hide(&id(&format!("b{n}")));
        assert!(banners.visible_count() <= 2);
    }
    assert!(banners.entries().iter().all(|view| view.placement == Placement::Top));
}

#[test]
fn queued_entries_are_promoted_in_arrival_order() {
    let engine = queue(1);
    engine.show("A", ShowOptions::new().id("A"));
    engine.show("B", ShowOptions::new().id("B"));
    engine.show("C", ShowOptions::new().id("C"));

    engine.hide(&id("A"));
    engine.cleanup_after_animation(&id("A"));
    assert_eq!(engine.status(&id("B")), Some(Status::Visible));
    assert_eq!(engine.status(&id("C")), Some(Status::Queued));

    engine.hide(&id("B"));
    engine.cleanup_after_animation(&id("B"));
    assert_eq!(engine.status(&id("C")), Some(Status::Visible));
}

#[tokio::test(start_paused = true)]
async fn racing_settlements_resolve_once_with_the_first() {
    let engine = queue(1);
    let handle = engine.show(
        "X",
        ShowOptions::new()
            .id("X")
            .timeout(Duration::from_millis(100))
            .button(Button::new("Retry", "retry")),
    );

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!engine.report_button_press(&id("X"), &ButtonId::new("retry")));
    assert!(!engine.hide(&id("X")));

    assert_eq!(handle.await.outcome, Outcome::Timeout);
}

#[tokio::test(start_paused = true)]
async fn queued_entry_timer_starts_on_promotion() {
    let engine = queue(1);
    engine.show("front", ShowOptions::new().id("front"));
    let mut queued = engine.show(
        "waiting",
        ShowOptions::new()
            .id("waiting")
            .timeout(Duration::from_millis(1000)),
    );

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(queued.response_mut().try_take().is_none());
    assert_eq!(engine.status(&id("waiting")), Some(Status::Queued));

    engine.hide(&id("front"));
    engine.cleanup_after_animation(&id("front"));
    let promoted_at = tokio::time::Instant::now();

    let response = queued.await;
    assert_eq!(response.outcome, Outcome::Timeout);
    let waited = promoted_at.elapsed();
    assert!(waited >= Duration::from_millis(1000));
    assert!(waited < Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn reshow_leaves_first_response_pending() {
    let engine = queue(1);
    let mut first = engine.show("first", ShowOptions::new().id("dup"));
    let second = engine.show(
        "second",
        ShowOptions::new().id("dup").timeout(Duration::from_millis(50)),
    );

    assert_eq!(engine.count(), 1);
    assert_eq!(second.await.outcome, Outcome::Timeout);
    engine.cleanup_after_animation(&id("dup"));
    assert_eq!(engine.count(), 0);

    assert!(first.response_mut().try_take().is_none());
}

#[tokio::test(start_paused = true)]
async fn reshow_cancels_old_timer() {
    let engine = queue(1);
    let _first = engine.show(
        "first",
        ShowOptions::new().id("dup").timeout(Duration::from_millis(50)),
    );
    let mut second = engine.show("second", ShowOptions::new().id("dup").persistent());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(second.response_mut().try_take().is_none());
    assert_eq!(engine.status(&id("dup")), Some(Status::Visible));
}

#[tokio::test]
async fn hidden_entry_blocks_next_until_cleanup() {
    let engine = queue(1);
    let a = engine.show("A", ShowOptions::new().id("A"));
    engine.show("B", ShowOptions::new().id("B"));
    assert_eq!(engine.status(&id("A")), Some(Status::Visible));
    assert_eq!(engine.status(&id("B")), Some(Status::Queued));

    assert!(engine.hide(&id("A")));
    assert_eq!(a.await.outcome, Outcome::HiddenByExternalCall);
    assert_eq!(engine.status(&id("B")), Some(Status::Queued));

    assert!(engine.report(AdapterEvent::AnimationComplete(id("A"))));
    assert_eq!(engine.status(&id("B")), Some(Status::Visible));
}

#[tokio::test(start_paused = true)]
async fn timeout_resolves_and_hides() {
    let engine = queue(1);
    let handle = engine.show("X", ShowOptions::new().id("X").timeout(Duration::from_millis(100)));

    tokio::time::advance(Duration::from_millis(100)).await;
    let response = handle.await;
    assert_eq!(response.outcome, Outcome::Timeout);
    assert_eq!(engine.status(&id("X")), Some(Status::Hidden));
}

#[tokio::test]
async fn dialog_dismissal_resolves_without_button() {
    let dialogs: DialogEngine = DialogEngine::default();
    let handle = dialogs.show("D1", ShowOptions::new().id("D1").dismissable(true));

    assert!(dialogs.report_dismiss(&id("D1")));
    let response = handle.await;
    assert_eq!(response.outcome, Outcome::Dismissed);
    assert!(response.button().is_none());
}

#[tokio::test]
async fn prompt_round_trip_through_overlays() {
    let overlays: Overlays = Overlays::default();
    let handle = overlays
        .dialogs
        .prompt("Name the album", "", ShowOptions::new().id("album"));

    overlays.dialogs.report_text_change(&id("album"), "Summer");
    overlays
        .dialogs
        .engine()
        .report_button_press(&id("album"), &ButtonId::new(ButtonId::SUBMIT));

    let response = handle.await;
    assert_eq!(response.value(), Some("Summer"));
    assert!(overlays.diagnostics().len() >= 2);
}

#[test]
fn config_file_drives_engine_caps() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    let mut initial = Config::default();
    initial.snackbar.max_simultaneous_items = 2;
    config::save_to_path(&initial, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let overlays: Overlays = Overlays::new(&loaded);
    overlays.snackbars.show("a", ShowOptions::new().persistent());
    overlays.snackbars.show("b", ShowOptions::new().persistent());
    overlays.snackbars.show("c", ShowOptions::new().persistent());

    assert_eq!(overlays.snackbars.visible_count(), 2);
    assert_eq!(overlays.snackbars.queued_count(), 1);
}
