//! Integration tests for Zone and ZoneSet

mod common;
use common::*;

use strip_animations::{
    AnimationCommand, AnimationError, AnimationKind, AnimationState, Animations, Clock, Color,
    Zone, ZoneError, ZoneId, ZoneSet,
};

#[test]
fn idle_zone_draws_nothing() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.service(&animations, 0).unwrap();

    assert_eq!(zone.state(), &AnimationState::Uninitialized);
    assert_eq!(zone.strip().show_count(), 0);
}

#[test]
fn queued_command_starts_on_idle_zone() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.enqueue(AnimationCommand::Solid { color: BLUE });
    zone.service(&animations, 100).unwrap();

    assert_eq!(zone.state().kind(), Some(AnimationKind::SolidColor));
    assert_eq!(zone.strip().uniform_color(), Some(BLUE));
    assert!(zone.pending().is_empty());
}

#[test]
fn transient_flash_hands_over_to_queued_command() {
    let animations = Animations::default();
    let clock = MockClock::new(0);
    let mut zone = Zone::new(MockStrip::new(8));

    zone.play(&animations, clock.now(), AnimationCommand::RedFlash { is_rgbw: false });
    zone.enqueue(AnimationCommand::Pulse {
        color: GREEN,
        initial_phase: 0.5,
    });

    clock.advance(500);
    zone.service(&animations, clock.now()).unwrap();
    assert_eq!(zone.strip().uniform_color(), Some(RED));
    assert_eq!(zone.pending().len(), 1);

    clock.advance(500);
    zone.service(&animations, clock.now()).unwrap();
    assert_eq!(zone.state().kind(), Some(AnimationKind::Pulse));
    // started half way into the breath: full brightness
    assert_eq!(zone.strip().uniform_color(), Some(GREEN));
}

#[test]
fn finished_flash_turns_zone_off_when_nothing_is_queued() {
    let animations = Animations::default();
    let clock = MockClock::new(0);
    let mut zone = Zone::new(MockStrip::new(8));

    zone.play(&animations, clock.now(), AnimationCommand::RedFlash { is_rgbw: true });

    clock.advance(500);
    zone.service(&animations, clock.now()).unwrap();
    assert_eq!(zone.strip().uniform_color(), Some(RED));

    clock.advance(1000);
    zone.service(&animations, clock.now()).unwrap();
    assert_eq!(zone.state().kind(), Some(AnimationKind::SolidColor));
    assert_eq!(zone.strip().uniform_color(), Some(Color::OFF));

    // stays dark instead of replaying the flash
    clock.advance(500);
    zone.service(&animations, clock.now()).unwrap();
    assert_eq!(zone.strip().uniform_color(), Some(Color::OFF));
}

#[test]
fn finished_steady_animation_keeps_running_when_nothing_is_queued() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.play(&animations, 0, AnimationCommand::Solid { color: BLUE });
    zone.service(&animations, 2500).unwrap();

    assert_eq!(zone.state().kind(), Some(AnimationKind::SolidColor));
    assert_eq!(zone.strip().uniform_color(), Some(BLUE));
}

#[test]
fn play_drops_queued_commands() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.enqueue(AnimationCommand::Solid { color: RED });
    zone.enqueue(AnimationCommand::Solid { color: GREEN });
    let kind = zone.play(&animations, 0, AnimationCommand::MovingPulse { color: BLUE });

    assert_eq!(kind, AnimationKind::MovingPulse);
    assert!(zone.pending().is_empty());
}

#[test]
fn replace_pending_keeps_only_latest_command() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.enqueue(AnimationCommand::Solid { color: RED });
    zone.enqueue(AnimationCommand::Solid { color: GREEN });
    zone.replace_pending(AnimationCommand::Off);
    assert_eq!(zone.pending().len(), 1);

    zone.service(&animations, 0).unwrap();
    assert_eq!(zone.strip().uniform_color(), Some(Color::OFF));
    assert_eq!(zone.strip().show_count(), 1);
}

#[test]
fn queue_overflow_drops_oldest_command() {
    let mut zone = Zone::new(MockStrip::new(8));
    for value in 1..=5u8 {
        zone.enqueue(AnimationCommand::Solid {
            color: Color::rgb(value, 0, 0),
        });
    }

    assert_eq!(zone.pending().len(), 4);
    assert_eq!(
        zone.pending().peek(),
        Ok(&AnimationCommand::Solid {
            color: Color::rgb(2, 0, 0)
        })
    );
}

#[test]
fn reset_stops_zone() {
    let animations = Animations::default();
    let mut zone = Zone::new(MockStrip::new(8));

    zone.play(&animations, 0, AnimationCommand::Solid { color: RED });
    zone.enqueue(AnimationCommand::Off);
    zone.reset();

    assert!(!zone.state().is_initialized());
    assert!(zone.pending().is_empty());
}

#[test]
fn zone_set_rejects_bad_ids() {
    let animations = Animations::default();
    let mut zones: ZoneSet<MockStrip, 2> = ZoneSet::new(&animations);

    zones.add_zone(ZoneId(0), MockStrip::new(4)).unwrap();

    assert_eq!(
        zones.add_zone(ZoneId(0), MockStrip::new(4)),
        Err(ZoneError::DuplicateZoneId(ZoneId(0)))
    );
    assert_eq!(
        zones.add_zone(ZoneId(2), MockStrip::new(4)),
        Err(ZoneError::ZoneIdOutOfBounds {
            id: ZoneId(2),
            capacity: 2
        })
    );
    assert!(matches!(
        zones.zone(ZoneId(1)),
        Err(ZoneError::InvalidZoneId(ZoneId(1)))
    ));
    assert_eq!(
        zones.enqueue(ZoneId(5), AnimationCommand::Off),
        Err(ZoneError::InvalidZoneId(ZoneId(5)))
    );
}

#[test]
fn zones_run_same_animation_independently() {
    let animations = Animations::default();
    let clock = MockClock::new(1000);
    let mut zones: ZoneSet<MockStrip, 4> = ZoneSet::new(&animations);

    zones.add_zone(ZoneId(0), MockStrip::new(6)).unwrap();
    zones.add_zone(ZoneId(3), MockStrip::new(6)).unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones.ids().as_slice(), &[ZoneId(0), ZoneId(3)]);

    let flash = AnimationCommand::RedFlash { is_rgbw: true };
    zones.play(ZoneId(0), clock.now(), flash).unwrap();
    clock.advance(500);
    zones.play(ZoneId(3), clock.now(), flash).unwrap();

    zones.service_all(clock.now()).unwrap();

    assert_eq!(zones.zone(ZoneId(0)).unwrap().strip().uniform_color(), Some(RED));
    assert_eq!(zones.zone(ZoneId(3)).unwrap().strip().uniform_color(), Some(WHITE));
}

#[test]
fn service_all_skips_idle_zones() {
    let animations = Animations::default();
    let mut zones: ZoneSet<MockStrip, 3> = ZoneSet::new(&animations);
    zones.add_zone(ZoneId(1), MockStrip::new(4)).unwrap();
    zones.add_zone(ZoneId(2), MockStrip::new(4)).unwrap();
    zones.play(ZoneId(2), 0, AnimationCommand::Solid { color: BLUE }).unwrap();

    zones.service_all(10).unwrap();

    assert_eq!(zones.zone(ZoneId(1)).unwrap().strip().show_count(), 0);
    assert_eq!(zones.zone(ZoneId(2)).unwrap().strip().show_count(), 1);
}

#[test]
fn zone_set_queries() {
    let animations = Animations::default();
    let mut zones: ZoneSet<MockStrip, 2> = ZoneSet::new(&animations);
    assert!(zones.is_empty());
    assert!(!zones.contains(ZoneId(1)));

    zones.add_zone(ZoneId(1), MockStrip::new(4)).unwrap();
    assert!(zones.contains(ZoneId(1)));
    assert!(!zones.contains(ZoneId(7)));

    zones.zone_mut(ZoneId(1)).unwrap().enqueue(AnimationCommand::Off);
    assert_eq!(zones.zone(ZoneId(1)).unwrap().pending().len(), 1);
}

#[test]
fn zone_error_wraps_animation_error() {
    let err: ZoneError = AnimationError::UninitializedState.into();
    assert_eq!(err, ZoneError::Animation(AnimationError::UninitializedState));
    assert!(format!("{}", err).contains("before init"));
}
