//! Integration tests for the top-level control loop

mod common;
use common::*;

use rainbow_clock::{Button, ClockError, Controller, ModeKind, Settings, Transition};

type Clock<'t> = Controller<'t, TestInstant, MockTimeSource>;

fn tap(clock: &mut Clock<'_>, rig: &mut Rig, time_source: &MockTimeSource, button: Button) {
    clock.press(button);
    clock.release(button);
    clock.step(&mut rig.devices());
    time_source.advance(10);
}

#[test]
fn invalid_settings_are_rejected() {
    let time_source = MockTimeSource::new();

    let result = Controller::new(Settings::default().with_sun_hours(20, 8), &time_source);
    assert!(matches!(result, Err(ClockError::InvalidSunHours)));

    let result = Controller::new(Settings::default().with_countdown_secs(0), &time_source);
    assert!(matches!(result, Err(ClockError::ZeroCountdown)));
}

#[test]
fn boots_through_the_animation_into_the_clock() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();

    assert_eq!(clock.machine().active_kind(), None);
    let transition = clock.start(&mut rig.devices());
    assert_eq!(
        transition,
        Transition {
            from: None,
            to: ModeKind::Start
        }
    );

    for _ in 0..120 {
        clock.step(&mut rig.devices());
        time_source.advance(10);
    }

    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Clock));
    assert_eq!(rig.display.text, "1200");
}

#[test]
fn every_step_flushes_display_and_pixels() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();
    clock.start(&mut rig.devices());

    for _ in 0..5 {
        clock.step(&mut rig.devices());
        time_source.advance(10);
    }

    assert_eq!(rig.display.flushes, 5);
    assert_eq!(rig.strip.flushes, 5);
}

#[test]
fn held_buttons_light_up() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();
    clock.start(&mut rig.devices());

    clock.press(Button::C);
    clock.step(&mut rig.devices());
    assert_eq!(rig.lights.lit, (false, false, true));

    clock.release(Button::C);
    clock.step(&mut rig.devices());
    assert_eq!(rig.lights.lit, (false, false, false));
}

#[test]
fn triggers_are_consumed_by_one_step() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();
    clock.start(&mut rig.devices());
    time_source.advance(1200);
    clock.step(&mut rig.devices());
    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Clock));

    clock.press(Button::A);
    clock.release(Button::A);
    clock.step(&mut rig.devices());
    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Nap));
    assert!(!clock.buttons().any_triggered());

    // a second step without new edges stays in nap
    time_source.advance(10);
    clock.step(&mut rig.devices());
    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Nap));
}

#[test]
fn wall_time_comes_from_the_time_source() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();
    clock.start(&mut rig.devices());
    time_source.advance(1200);
    clock.step(&mut rig.devices());

    time_source.set_wall(wall(18, 45, 0));
    time_source.advance(10);
    clock.step(&mut rig.devices());

    assert_eq!(rig.display.text, " 645");
}

#[test]
fn menu_round_trip_through_the_controller() {
    let time_source = MockTimeSource::new();
    let mut rig = Rig::new();
    let mut clock = Controller::new(Settings::default(), &time_source).unwrap();
    clock.start(&mut rig.devices());
    time_source.advance(1200);
    clock.step(&mut rig.devices());

    tap(&mut clock, &mut rig, &time_source, Button::B);
    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Menu));
    assert_eq!(rig.display.text, "TEMP");

    tap(&mut clock, &mut rig, &time_source, Button::A);
    assert_eq!(rig.display.text, "CRDT");

    tap(&mut clock, &mut rig, &time_source, Button::B);
    assert_eq!(clock.machine().active_kind(), Some(ModeKind::Credits));
    assert_eq!(rig.display.text, "    ");
}
