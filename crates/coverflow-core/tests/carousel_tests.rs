// Host-side tests for the interaction controller.

use coverflow_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn make_carousel(items: usize) -> Carousel {
    let params = CoverflowParams {
        autoplay_on_start: false,
        ..CoverflowParams::default()
    };
    Carousel::new(items, params).expect("non-empty carousel")
}

#[test]
fn empty_carousel_is_rejected() {
    let err = Carousel::new(0, CoverflowParams::default()).unwrap_err();
    assert!(matches!(err, CoverflowError::Empty));
}

#[test]
fn starts_idle_at_zero() {
    let c = make_carousel(7);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.is_autoplaying());
}

#[test]
fn start_paints_without_entering_transition() {
    let mut c = make_carousel(7);
    c.start(ms(0));
    assert_eq!(c.phase(), Phase::Idle);
    let effects = c.drain_effects();
    assert!(matches!(effects[0], Effect::Layout(ref l) if l.len() == 7));
    assert_eq!(effects[1], Effect::Caption(0));
    assert_eq!(effects[2], Effect::Autoplay(false));

    c.advance(ms(1000));
    assert_eq!(c.drain_effects(), vec![Effect::CaptionFadeIn]);
}

#[test]
fn navigate_forward_then_settles() {
    let mut c = make_carousel(7);
    let out = c.navigate(Direction::Next, ms(0));
    assert_eq!(out, Outcome::Moved { from: 0, to: 1 });
    assert!(c.is_transitioning());

    c.advance(ms(599));
    assert!(c.is_transitioning());
    c.advance(ms(600));
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn navigate_wraps_both_ways() {
    let mut c = make_carousel(7);
    assert_eq!(
        c.navigate(Direction::Prev, ms(0)),
        Outcome::Moved { from: 0, to: 6 }
    );
    assert_eq!(
        c.navigate(Direction::Next, ms(600)),
        Outcome::Moved { from: 6, to: 0 }
    );
}

#[test]
fn full_cycle_returns_to_start() {
    for count in 1..=9 {
        for start in 0..count {
            let mut c = make_carousel(count);
            let mut t = 0;
            if start != 0 {
                c.go_to_index(start, ms(t));
                t += 600;
            }
            for _ in 0..count {
                assert!(c.navigate(Direction::Next, ms(t)).moved());
                t += 600;
            }
            assert_eq!(c.current_index(), start, "count={count}");
        }
    }
}

#[test]
fn prev_undoes_next() {
    let mut c = make_carousel(5);
    c.go_to_index(3, ms(0));
    c.navigate(Direction::Next, ms(600));
    assert_eq!(c.current_index(), 4);
    c.navigate(Direction::Prev, ms(1200));
    assert_eq!(c.current_index(), 3);
}

#[test]
fn second_intent_during_settle_is_dropped() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::KeyRight, ms(0));
    assert_eq!(c.current_index(), 1);

    assert_eq!(c.handle_intent(Intent::KeyRight, ms(300)), Outcome::Busy);
    assert_eq!(c.handle_intent(Intent::Click(4), ms(599)), Outcome::Busy);
    assert_eq!(c.current_index(), 1);

    // not queued: nothing happens when the window closes
    c.advance(ms(2000));
    assert_eq!(c.current_index(), 1);

    assert!(c.handle_intent(Intent::KeyRight, ms(2000)).moved());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn intent_after_settle_is_accepted_without_a_frame_in_between() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::NextButton, ms(0));
    // no advance() call; the intent itself must flush the settle timer
    assert!(c.handle_intent(Intent::NextButton, ms(650)).moved());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn selecting_current_index_is_a_no_op() {
    let mut c = make_carousel(7);
    assert_eq!(c.go_to_index(0, ms(0)), Outcome::AlreadySelected);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.drain_effects().is_empty());

    // reported as already-selected even while settling
    c.go_to_index(2, ms(10));
    assert_eq!(c.go_to_index(2, ms(20)), Outcome::AlreadySelected);
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut c = make_carousel(3);
    assert_eq!(c.handle_intent(Intent::DotSelect(3), ms(0)), Outcome::OutOfRange);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn accepted_intent_emits_layout_and_caption_synchronously() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::Click(3), ms(0));
    let effects = c.drain_effects();
    match &effects[0] {
        Effect::Layout(layout) => {
            assert!(layout[3].active);
            assert_eq!(layout.iter().filter(|p| p.active).count(), 1);
        }
        other => panic!("expected layout, got {other:?}"),
    }
    assert_eq!(effects[1], Effect::Caption(3));
}

#[test]
fn caption_fade_outlives_settle() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::KeyLeft, ms(0));
    c.drain_effects();

    c.advance(ms(600));
    assert_eq!(c.drain_effects(), vec![Effect::Settled]);
    c.advance(ms(999));
    assert!(c.drain_effects().is_empty());
    c.advance(ms(1000));
    assert_eq!(c.drain_effects(), vec![Effect::CaptionFadeIn]);
}

#[test]
fn newer_transition_replaces_pending_caption_fade() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::KeyRight, ms(0));
    c.handle_intent(Intent::KeyRight, ms(700));
    c.drain_effects();

    c.advance(ms(1000));
    let early: Vec<_> = c
        .drain_effects()
        .into_iter()
        .filter(|e| *e == Effect::CaptionFadeIn)
        .collect();
    assert!(early.is_empty());

    c.advance(ms(1700));
    assert!(c.drain_effects().contains(&Effect::CaptionFadeIn));
}

#[test]
fn autoplay_advances_on_interval() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    assert!(c.is_autoplaying());

    c.advance(ms(3999));
    assert_eq!(c.current_index(), 0);
    c.advance(ms(4000));
    assert_eq!(c.current_index(), 1);
    c.advance(ms(8000));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn long_gap_between_frames_moves_at_most_once() {
    let mut c = make_carousel(7);
    c.start(ms(0));
    c.start_autoplay(ms(0));
    c.drain_effects();

    // frames stop for ten minutes, as in a background tab
    c.advance(ms(600_000));
    let effects = c.drain_effects();
    let layouts = effects
        .iter()
        .filter(|e| matches!(e, Effect::Layout(_)))
        .count();
    assert_eq!(layouts, 1);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.phase(), Phase::Idle);

    // cadence resumes from the frame that noticed the gap
    c.advance(ms(603_999));
    assert_eq!(c.current_index(), 1);
    c.advance(ms(604_000));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn autoplay_wraps_past_last_item() {
    let mut c = make_carousel(3);
    c.start_autoplay(ms(0));
    for t in [4000, 8000, 12_000] {
        c.advance(ms(t));
    }
    assert_eq!(c.current_index(), 0);
}

#[test]
fn manual_click_cancels_autoplay() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    c.advance(ms(4000));
    c.advance(ms(4600));
    assert_eq!(c.current_index(), 1);

    assert!(c.handle_intent(Intent::Click(3), ms(5000)).moved());
    assert!(!c.is_autoplaying());
    assert_eq!(c.current_index(), 3);

    c.advance(ms(60_000));
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.pending_tasks(), 0);
}

#[test]
fn manual_intent_stops_autoplay_even_when_dropped() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    c.advance(ms(4000));
    assert!(c.is_transitioning());

    assert_eq!(c.handle_intent(Intent::KeyRight, ms(4100)), Outcome::Busy);
    assert!(!c.is_autoplaying());
    assert!(c.drain_effects().contains(&Effect::Autoplay(false)));
}

#[test]
fn tick_does_not_stop_autoplay() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    assert!(c.handle_intent(Intent::Tick, ms(10)).moved());
    assert!(c.is_autoplaying());
}

#[test]
fn stop_is_idempotent_and_toggle_flips() {
    let mut c = make_carousel(7);
    c.stop_autoplay();
    c.stop_autoplay();
    assert!(c.drain_effects().is_empty());

    c.toggle_autoplay(ms(0));
    assert!(c.is_autoplaying());
    c.toggle_autoplay(ms(10));
    assert!(!c.is_autoplaying());
    assert_eq!(
        c.drain_effects(),
        vec![Effect::Autoplay(true), Effect::Autoplay(false)]
    );
}

#[test]
fn start_autoplay_twice_keeps_one_timer() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    c.start_autoplay(ms(0));
    assert_eq!(c.pending_tasks(), 1);
    c.advance(ms(4000));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn start_with_autoplay_configured() {
    let mut c = Carousel::new(7, CoverflowParams::default()).unwrap();
    c.start(ms(0));
    assert!(c.is_autoplaying());
    assert!(c.drain_effects().contains(&Effect::Autoplay(true)));
}

#[test]
fn teardown_cancels_everything() {
    let mut c = make_carousel(7);
    c.start_autoplay(ms(0));
    c.handle_intent(Intent::Tick, ms(0));
    assert!(c.pending_tasks() > 0);

    c.teardown();
    assert_eq!(c.pending_tasks(), 0);
    assert!(!c.is_autoplaying());
    assert_eq!(c.phase(), Phase::Idle);

    c.drain_effects();
    c.advance(ms(100_000));
    assert!(c.drain_effects().is_empty());
    assert_eq!(c.current_index(), 1);
}

#[test]
fn swipe_intent_moves_in_its_direction() {
    let mut c = make_carousel(7);
    c.handle_intent(Intent::Swipe(Direction::Prev), ms(0));
    assert_eq!(c.current_index(), 6);
    c.handle_intent(Intent::Swipe(Direction::Next), ms(600));
    assert_eq!(c.current_index(), 0);
}
