// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::core::config::Config;
use crate::core::error::{Error, InputError};
use crate::core::events::Event;
use crate::core::manager::Manager;
use crate::core::playback::{Intent, PlaybackSnapshot};
use crate::core::rate::PlaybackRate;
use crate::core::state::State;
use crate::sim::{Simulation, Transition};

/// 10ms frames land exactly on the 3000ms boundaries used below.
fn cfg() -> Config {
    Config {
        frame_interval_ms: 10,
        ..Config::default()
    }
}

fn sim() -> Simulation {
    Simulation::mounted(cfg(), 0)
}

fn visibility_log(sim: &Simulation) -> Vec<(u64, bool)> {
    sim.transitions()
        .iter()
        .filter_map(|t| match t {
            Transition::Visibility { at_ms, visible } => Some((*at_ms, *visible)),
            _ => None,
        })
        .collect()
}

#[test]
fn hides_at_exactly_hide_delay_and_restarts_on_activity() {
    let mut sim = sim();
    sim.dispatch(Event::PointerMove { now_ms: 0 }).unwrap();

    sim.advance_to(2999);
    assert!(sim.view().visible);

    sim.advance_to(3000);
    assert!(!sim.view().visible);

    sim.advance_to(3499);
    assert!(!sim.view().visible);

    sim.dispatch(Event::PointerMove { now_ms: 3500 }).unwrap();
    assert!(sim.view().visible);

    sim.advance_to(6499);
    assert!(sim.view().visible);

    sim.advance_to(6500);
    assert!(!sim.view().visible);

    assert_eq!(
        visibility_log(&sim),
        vec![(3000, false), (3500, true), (6500, false)]
    );
}

#[test]
fn activity_while_hidden_restarts_window_from_zero() {
    let mut sim = sim();
    sim.advance_to(20_000);
    assert!(!sim.view().visible);

    sim.dispatch(Event::PointerMove { now_ms: 20_003 }).unwrap();
    assert!(sim.view().visible);
    assert_eq!(sim.state().activity_mark(), Some(20_003));

    // frames now run at 20_013, 20_023, ... ; first one >= 23_003 is 23_003
    sim.advance_to(23_002);
    assert!(sim.view().visible);
    sim.advance_to(23_003);
    assert!(!sim.view().visible);
}

#[test]
fn activity_while_shown_pushes_expiry_out() {
    let mut sim = sim();
    sim.dispatch(Event::PointerMove { now_ms: 0 }).unwrap();
    sim.dispatch(Event::PointerMove { now_ms: 2500 }).unwrap();

    sim.advance_to(5499);
    assert!(sim.view().visible);
    sim.advance_to(5500);
    assert!(!sim.view().visible);
}

#[test]
fn drag_suppresses_expiry_until_released() {
    let mut sim = sim();
    sim.dispatch(Event::PointerMove { now_ms: 0 }).unwrap();
    sim.dispatch(Event::DragStart { now_ms: 1000 }).unwrap();

    sim.advance_to(9000);
    assert!(sim.view().visible);
    assert!(!sim.frame_pending());

    sim.dispatch(Event::DragEnd { now_ms: 9000 }).unwrap();
    assert!(sim.view().visible);

    sim.advance_to(11_999);
    assert!(sim.view().visible);
    sim.advance_to(12_000);
    assert!(!sim.view().visible);

    assert_eq!(visibility_log(&sim), vec![(12_000, false)]);
}

#[test]
fn hover_shows_hidden_overlay_and_holds_it() {
    let mut sim = sim();
    sim.advance_to(5000);
    assert!(!sim.view().visible);

    sim.dispatch(Event::HoverEnter { now_ms: 5000 }).unwrap();
    assert!(sim.view().visible);

    sim.advance_to(30_000);
    assert!(sim.view().visible);

    sim.dispatch(Event::HoverLeave { now_ms: 30_000 }).unwrap();
    sim.advance_to(32_999);
    assert!(sim.view().visible);
    sim.advance_to(33_000);
    assert!(!sim.view().visible);
}

#[test]
fn hover_and_drag_must_both_release() {
    let mut sim = sim();
    sim.dispatch(Event::HoverEnter { now_ms: 100 }).unwrap();
    sim.dispatch(Event::DragStart { now_ms: 200 }).unwrap();
    sim.dispatch(Event::HoverLeave { now_ms: 300 }).unwrap();

    sim.advance_to(10_000);
    assert!(sim.view().visible);

    sim.dispatch(Event::DragEnd { now_ms: 10_000 }).unwrap();
    sim.advance_to(13_000);
    assert!(!sim.view().visible);
}

#[test]
fn repeated_intent_events_are_idempotent() {
    fn idle(s: &mut Simulation) {
        s.dispatch(Event::PointerMove { now_ms: 500 }).unwrap();
    }
    fn hovering(s: &mut Simulation) {
        idle(s);
        s.dispatch(Event::HoverEnter { now_ms: 700 }).unwrap();
    }
    fn dragging(s: &mut Simulation) {
        idle(s);
        s.dispatch(Event::DragStart { now_ms: 700 }).unwrap();
    }

    // each event starts from a state where its first application takes effect
    let cases: [(fn(&mut Simulation), fn(u64) -> Event); 4] = [
        (idle, |t| Event::HoverEnter { now_ms: t }),
        (hovering, |t| Event::HoverLeave { now_ms: t }),
        (idle, |t| Event::DragStart { now_ms: t }),
        (dragging, |t| Event::DragEnd { now_ms: t }),
    ];

    for (setup, make) in cases {
        let mut before = sim();
        let mut once = sim();
        let mut twice = sim();
        for s in [&mut before, &mut once, &mut twice] {
            setup(s);
        }

        once.dispatch(make(1000)).unwrap();
        twice.dispatch(make(1000)).unwrap();
        twice.dispatch(make(1000)).unwrap();

        let changed = once.state().hovering() != before.state().hovering()
            || once.state().dragging() != before.state().dragging();
        assert!(changed, "{:?} had no effect", make(1000));

        once.advance_to(8000);
        twice.advance_to(8000);

        assert_eq!(once.view(), twice.view());
        assert_eq!(once.transitions(), twice.transitions());
        assert_eq!(once.state().hovering(), twice.state().hovering());
        assert_eq!(once.state().dragging(), twice.state().dragging());
        assert_eq!(once.state().activity_mark(), twice.state().activity_mark());
        assert_eq!(once.state().loop_running(), twice.state().loop_running());
    }
}

#[test]
fn unmatched_drag_end_changes_nothing() {
    let mut sim = sim();
    sim.dispatch(Event::PointerMove { now_ms: 0 }).unwrap();
    sim.dispatch(Event::DragEnd { now_ms: 1000 }).unwrap();

    assert_eq!(sim.state().activity_mark(), Some(0));
    sim.advance_to(3000);
    assert!(!sim.view().visible);
}

#[test]
fn at_most_one_frame_pending() {
    let mut mgr = Manager::new(cfg());
    let mut state = State::default();

    let mut requests = 0;
    for ev in [
        Event::Mounted { now_ms: 0 },
        Event::PointerMove { now_ms: 1 },
        Event::PointerMove { now_ms: 2 },
        Event::PointerMove { now_ms: 3 },
    ] {
        let actions = mgr.handle_event(&mut state, ev).unwrap();
        requests += actions
            .iter()
            .filter(|a| matches!(a, Action::RequestFrame))
            .count();
    }
    assert_eq!(requests, 1);
}

#[test]
fn hidden_only_after_a_clean_window() {
    // Linear congruential generator: deterministic without extra crates.
    let mut seed: u64 = 0x5eed;
    let mut next = move |m: u64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % m
    };

    let mut sim = sim();
    let mut last_interaction = 0u64;
    let mut t = 0u64;

    while t < 120_000 {
        let step = 10 + next(2500);
        let target = t + step;

        // walk the clock in frame-sized steps and check the invariant
        while t < target {
            t += 10;
            sim.advance_to(t);
            let s = sim.state();
            if !sim.view().visible {
                assert!(!s.hovering() && !s.dragging());
                assert!(
                    t - last_interaction >= 3000,
                    "hidden at {t}ms, last interaction {last_interaction}ms"
                );
            }
        }

        let ev = match next(6) {
            0 | 1 => Event::PointerMove { now_ms: t },
            2 => Event::HoverEnter { now_ms: t },
            3 => Event::HoverLeave { now_ms: t },
            4 => Event::DragStart { now_ms: t },
            _ => Event::DragEnd { now_ms: t },
        };
        // releases without a held override are no-ops and do not count
        let counts = match ev {
            Event::HoverLeave { .. } => sim.state().hovering(),
            Event::DragEnd { .. } => sim.state().dragging(),
            _ => true,
        };
        sim.dispatch(ev).unwrap();
        if counts {
            last_interaction = t;
        }

        // occasionally go quiet long enough to hide
        if next(4) == 0 {
            t += 3500;
            sim.advance_to(t);
        }
    }
}

#[test]
fn menu_round_trip_applies_rate_once() {
    let mut sim = sim();

    sim.dispatch(Event::TriggerClick { now_ms: 100 }).unwrap();
    assert!(sim.view().menu_open);
    assert!(sim.listener_attached());

    sim.dispatch(Event::ItemSelect {
        rate: 1.25,
        now_ms: 400,
    })
    .unwrap();

    assert!(!sim.view().menu_open);
    assert!(!sim.listener_attached());
    assert_eq!(sim.view().selected_rate, PlaybackRate::OneAndQuarter);
    assert_eq!(
        sim.forwarded(),
        vec![Intent::SetPlaybackRate {
            rate: PlaybackRate::OneAndQuarter
        }]
    );
}

#[test]
fn outside_click_dismisses_without_rate_change() {
    let mut sim = sim();
    sim.dispatch(Event::TriggerClick { now_ms: 100 }).unwrap();
    sim.dispatch(Event::OutsideClick { now_ms: 200 }).unwrap();

    assert!(!sim.view().menu_open);
    assert!(!sim.listener_attached());
    assert!(sim.forwarded().is_empty());
}

#[test]
fn same_trigger_toggles_closed() {
    let mut sim = sim();
    sim.dispatch(Event::TriggerClick { now_ms: 100 }).unwrap();
    sim.dispatch(Event::TriggerClick { now_ms: 150 }).unwrap();

    assert!(!sim.view().menu_open);
    assert!(!sim.listener_attached());
    assert!(sim.forwarded().is_empty());
}

#[test]
fn unsupported_rate_is_rejected_and_menu_stays_open() {
    let mut sim = sim();
    sim.dispatch(Event::TriggerClick { now_ms: 100 }).unwrap();

    let err = sim
        .dispatch(Event::ItemSelect {
            rate: 0.75,
            now_ms: 200,
        })
        .unwrap_err();

    assert_eq!(err, Error::InvalidInput(InputError::UnsupportedRate(0.75)));
    assert!(sim.view().menu_open);
    assert!(sim.listener_attached());
    assert!(sim.forwarded().is_empty());
}

#[test]
fn clicks_count_as_activity() {
    let mut sim = sim();
    sim.advance_to(4000);
    assert!(!sim.view().visible);

    sim.dispatch(Event::OutsideClick { now_ms: 4000 }).unwrap();
    assert!(sim.view().visible);
}

#[test]
fn clicks_can_be_excluded_from_activity() {
    let cfg = Config {
        clicks_count_as_activity: false,
        ..cfg()
    };
    let mut sim = Simulation::mounted(cfg, 0);
    sim.advance_to(4000);

    sim.dispatch(Event::TriggerClick { now_ms: 4000 }).unwrap();
    assert!(sim.view().menu_open);
    assert!(!sim.view().visible);
}

#[test]
fn unmount_releases_everything_in_any_state() {
    let mut mgr = Manager::new(cfg());
    let mut state = State::default();

    mgr.handle_event(&mut state, Event::Mounted { now_ms: 0 }).unwrap();
    mgr.handle_event(&mut state, Event::TriggerClick { now_ms: 10 }).unwrap();

    let actions = mgr
        .handle_event(&mut state, Event::Unmounted { now_ms: 20 })
        .unwrap();
    assert_eq!(
        actions,
        vec![Action::CancelFrame, Action::DetachOutsideListener]
    );

    // nothing fires after teardown
    for ev in [
        Event::FrameTick { now_ms: 30 },
        Event::PointerMove { now_ms: 40 },
        Event::TriggerClick { now_ms: 50 },
        Event::ItemSelect {
            rate: 2.0,
            now_ms: 60,
        },
    ] {
        assert!(mgr.handle_event(&mut state, ev).unwrap().is_empty());
    }
}

#[test]
fn unmount_with_menu_closed_only_stops_loop() {
    let mut sim = sim();
    sim.dispatch(Event::Unmounted { now_ms: 50 }).unwrap();

    assert!(!sim.frame_pending());
    assert!(!sim.listener_attached());

    sim.advance_to(10_000);
    // frames at 10..=50 ran before the unmount was delivered
    assert_eq!(sim.frames_run(), 5);
}

#[test]
fn going_live_closes_menu_and_blocks_trigger() {
    let mut sim = sim();
    sim.dispatch(Event::TriggerClick { now_ms: 100 }).unwrap();

    let live = PlaybackSnapshot {
        duration: -1.0,
        paused: false,
        ..PlaybackSnapshot::default()
    };
    sim.dispatch(Event::PlaybackChanged {
        snapshot: live,
        now_ms: 200,
    })
    .unwrap();

    assert!(!sim.view().menu_open);
    assert!(!sim.listener_attached());

    sim.dispatch(Event::TriggerClick { now_ms: 300 }).unwrap();
    assert!(!sim.view().menu_open);
}

#[test]
fn selected_rate_follows_host_state() {
    let mut sim = sim();
    let snap = PlaybackSnapshot {
        playback_rate: 1.5,
        ..PlaybackSnapshot::default()
    };
    sim.dispatch(Event::PlaybackChanged {
        snapshot: snap,
        now_ms: 10,
    })
    .unwrap();
    assert_eq!(sim.view().selected_rate, PlaybackRate::OneAndHalf);

    // a host rate outside the menu leaves the selection alone
    let snap = PlaybackSnapshot {
        playback_rate: 1.75,
        ..PlaybackSnapshot::default()
    };
    sim.dispatch(Event::PlaybackChanged {
        snapshot: snap,
        now_ms: 20,
    })
    .unwrap();
    assert_eq!(sim.view().selected_rate, PlaybackRate::OneAndHalf);
}

#[test]
fn intents_are_forwarded_after_admission() {
    let mut sim = sim();
    let snap = PlaybackSnapshot {
        duration: 90.0,
        ..PlaybackSnapshot::default()
    };
    sim.dispatch(Event::PlaybackChanged {
        snapshot: snap,
        now_ms: 0,
    })
    .unwrap();

    sim.dispatch(Event::Intent {
        intent: Intent::Play,
        now_ms: 10,
    })
    .unwrap();
    sim.dispatch(Event::Intent {
        intent: Intent::SeekTo { seconds: 300.0 },
        now_ms: 20,
    })
    .unwrap();
    sim.dispatch(Event::Intent {
        intent: Intent::EnterPictureInPicture,
        now_ms: 30,
    })
    .unwrap();

    assert_eq!(
        sim.forwarded(),
        vec![Intent::Play, Intent::SeekTo { seconds: 90.0 }]
    );
}
