//! Integration tests for the library surface: controller, session, panel

use std::cell::RefCell;
use std::rc::Rc;

use speedctl::display::{SpeedDisplay, SpeedPanel};
use speedctl::media::{Video, VideoElement};
use speedctl::session::{Action, Session, StepOutcome};
use speedctl::speed::{self, SkipReason, SpeedOutcome, MAX_RATE, MIN_RATE};

fn panel() -> SpeedPanel {
    SpeedPanel::new()
        .with_label()
        .with_button("0.25")
        .with_button("1")
        .with_button("2.5")
        .with_button("4")
}

#[test]
fn set_playback_speed_always_lands_in_range() {
    let requests = [-10.0, 0.0, 0.1, 0.25, 0.3, 1.0, 2.5, 3.99, 4.0, 4.01, 100.0];
    for requested in requests {
        let mut video = Video::new();
        let mut display = panel();
        let outcome = speed::set_playback_speed(Some(&mut video), &mut display, requested);
        let applied = outcome.applied_rate().unwrap();
        assert_eq!(applied, MIN_RATE.max(MAX_RATE.min(requested)));
        assert!((MIN_RATE..=MAX_RATE).contains(&applied));
    }
}

#[test]
fn update_speed_display_marks_only_equal_buttons() {
    let mut display = panel();
    speed::update_speed_display(&mut display, 2.5);

    assert_eq!(display.label(), Some("2.50x"));
    assert_eq!(display.active_buttons(), vec!["2.5"]);

    speed::update_speed_display(&mut display, 3.0);
    assert_eq!(display.label(), Some("3.00x"));
    assert!(display.active_buttons().is_empty());
}

#[test]
fn custom_display_receives_updates() {
    #[derive(Default)]
    struct Recorder {
        labels: Vec<String>,
        toggles: Vec<(String, bool)>,
    }

    impl SpeedDisplay for Recorder {
        fn set_label_text(&mut self, text: &str) -> bool {
            self.labels.push(text.to_string());
            true
        }

        fn speed_buttons(&self) -> Vec<speedctl::display::ButtonSpeed> {
            vec![speedctl::display::ButtonSpeed {
                id: "fast".to_string(),
                speed: Some(2.0),
            }]
        }

        fn set_button_active(&mut self, id: &str, active: bool) {
            self.toggles.push((id.to_string(), active));
        }
    }

    let mut video = Video::new();
    let mut recorder = Recorder::default();

    speed::double_speed(Some(&mut video), &mut recorder);
    speed::reset_speed(Some(&mut video), &mut recorder);

    assert_eq!(recorder.labels, vec!["2.00x", "1.00x"]);
    assert_eq!(
        recorder.toggles,
        vec![("fast".to_string(), true), ("fast".to_string(), false)]
    );
}

#[test]
fn attach_follows_changes_from_any_actor() {
    let mut video = Video::new();
    let display = Rc::new(RefCell::new(panel()));

    let subscription = speed::attach(Some(&mut video), &display).expect("video supports rate");

    video.set_playback_rate(2.5).unwrap();
    assert_eq!(display.borrow().label(), Some("1.00x")); // not yet dispatched
    video.dispatch_events();
    assert_eq!(display.borrow().label(), Some("2.50x"));
    assert_eq!(display.borrow().active_buttons(), vec!["2.5"]);

    assert!(subscription.unsubscribe(&mut video));
    assert_eq!(video.listener_count(), 0);
}

#[test]
fn session_drives_a_full_sequence() {
    let mut session = Session::new(Some(Video::new()), panel());
    assert!(session.attach());

    let script = ["double", "double", "double", "press 0.25", "external 2.5", "reset"];
    let expected_labels = ["2.00x", "4.00x", "4.00x", "0.25x", "2.50x", "1.00x"];

    for (command, expected) in script.iter().zip(expected_labels) {
        let action: Action = command.parse().unwrap();
        session.apply(&action);
        assert_eq!(session.panel().label(), Some(expected), "after {}", command);
    }
}

#[test]
fn session_without_video_never_mutates_panel() {
    let mut session = Session::new(None, panel());
    assert!(!session.attach());
    let before = session.panel().clone();

    for command in ["double", "set 2", "reset", "press 1", "external 3"] {
        let action: Action = command.parse().unwrap();
        let outcome = session.apply(&action);
        if let StepOutcome::Speed { outcome } = outcome {
            assert_eq!(outcome, SpeedOutcome::skipped(SkipReason::NoVideoElement));
        }
    }

    assert_eq!(*session.panel(), before);
    assert_eq!(session.current_speed(), 1.0);
}
