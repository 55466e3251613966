use super::Showcase;

use std::time::Duration;

use crate::error::ShowcaseError;
use crate::item::{default_facilities, DisplayItem};
use crate::state::ShowcaseState;

const WINDOW: Duration = Duration::from_millis(600);

fn showcase() -> Showcase {
    Showcase::new(default_facilities()).expect("reference items")
}

fn settle(showcase: &mut Showcase) {
    showcase.update(WINDOW);
    assert_eq!(showcase.state(), ShowcaseState::Idle);
}

#[test]
fn starts_idle_on_first_item() {
    let showcase = showcase();
    assert_eq!(showcase.current_index(), 0);
    assert_eq!(showcase.state(), ShowcaseState::Idle);
    assert_eq!(showcase.len(), 4);
    assert_eq!(showcase.transition(), WINDOW);
    assert_eq!(showcase.current_item().title(), "Modern Library");
}

#[test]
fn rejects_empty_item_list() {
    assert!(matches!(Showcase::new(Vec::new()), Err(ShowcaseError::NoItems)));
}

#[test]
fn advance_walks_forward_and_wraps() {
    let mut showcase = showcase();
    for k in 1..=10 {
        assert!(showcase.advance());
        assert_eq!(showcase.current_index(), k % 4);
        settle(&mut showcase);
    }
}

#[test]
fn retreat_walks_backward_and_wraps() {
    let mut showcase = showcase();
    for k in 1..=10 {
        assert!(showcase.retreat());
        assert_eq!(showcase.current_index(), (4 - k % 4) % 4);
        settle(&mut showcase);
    }
}

#[test]
fn navigation_is_dropped_while_locked() {
    let mut showcase = showcase();
    assert!(showcase.advance());
    assert!(showcase.is_transitioning());

    assert!(!showcase.advance());
    assert!(!showcase.retreat());
    assert!(!showcase.jump_to(3));
    assert_eq!(showcase.current_index(), 1);
    assert!(showcase.is_transitioning());
}

#[test]
fn lock_holds_for_the_whole_window() {
    let mut showcase = showcase();
    showcase.advance();
    showcase.update(Duration::from_millis(599));
    assert!(showcase.is_transitioning());
    assert!(!showcase.advance());
    showcase.update(Duration::from_millis(1));
    assert!(!showcase.is_transitioning());
    assert!(showcase.advance());
    assert_eq!(showcase.current_index(), 2);
}

#[test]
fn frame_sized_steps_release_the_lock() {
    let mut showcase = showcase();
    showcase.advance();
    let frame = Duration::from_micros(16_667);
    let mut frames = 0;
    while showcase.is_transitioning() {
        showcase.update(frame);
        frames += 1;
        assert!(frames <= 37, "lock never released");
    }
    assert_eq!(frames, 36);
}

#[test]
fn rejected_requests_do_not_extend_the_lock() {
    let mut showcase = showcase();
    showcase.advance();
    showcase.update(Duration::from_millis(400));
    assert!(!showcase.retreat());
    showcase.update(Duration::from_millis(200));
    assert!(!showcase.is_transitioning());
}

#[test]
fn advance_then_retreat_round_trips() {
    let mut showcase = showcase();
    showcase.jump_to(2);
    settle(&mut showcase);
    showcase.advance();
    settle(&mut showcase);
    showcase.retreat();
    settle(&mut showcase);
    assert_eq!(showcase.current_index(), 2);
}

#[test]
fn jump_to_out_of_range_is_ignored() {
    let mut showcase = showcase();
    assert!(!showcase.jump_to(4));
    assert!(!showcase.jump_to(usize::MAX));
    assert_eq!(showcase.current_index(), 0);
    assert_eq!(showcase.state(), ShowcaseState::Idle);
}

#[test]
fn jump_to_current_index_still_locks() {
    let mut showcase = showcase();
    assert!(showcase.jump_to(0));
    assert_eq!(showcase.current_index(), 0);
    assert!(showcase.is_transitioning());
    assert!(!showcase.advance());
}

#[test]
fn documented_scenario() {
    let mut showcase = showcase();

    showcase.advance();
    assert_eq!(showcase.current_index(), 1);
    assert!(showcase.is_transitioning());

    showcase.retreat();
    assert_eq!(showcase.current_index(), 1);
    assert!(showcase.is_transitioning());

    showcase.update(WINDOW);
    assert_eq!(showcase.current_index(), 1);
    assert!(!showcase.is_transitioning());

    showcase.jump_to(3);
    assert_eq!(showcase.current_index(), 3);
    assert!(showcase.is_transitioning());
    showcase.update(WINDOW);
    assert!(!showcase.is_transitioning());

    showcase.advance();
    assert_eq!(showcase.current_index(), 0);
}

#[test]
fn single_item_showcase_wraps_onto_itself() {
    let mut showcase = Showcase::new(vec![DisplayItem::new("a.png", "A", "")]).unwrap();
    assert!(showcase.advance());
    assert_eq!(showcase.current_index(), 0);
    settle(&mut showcase);
    assert!(showcase.retreat());
    assert_eq!(showcase.current_index(), 0);
}

#[test]
fn custom_transition_window() {
    let mut showcase = Showcase::new(default_facilities())
        .unwrap()
        .with_transition(Duration::from_millis(100));
    showcase.advance();
    showcase.update(Duration::from_millis(100));
    assert!(!showcase.is_transitioning());
}

#[test]
fn progress_runs_from_zero_to_one() {
    let mut showcase = showcase();
    assert_eq!(showcase.transition_progress(), 1.0);
    showcase.advance();
    assert_eq!(showcase.transition_progress(), 0.0);
    showcase.update(Duration::from_millis(300));
    assert!((showcase.transition_progress() - 0.5).abs() < 1e-3);
    showcase.update(Duration::from_millis(300));
    assert_eq!(showcase.transition_progress(), 1.0);
}

#[test]
fn teardown_cancels_pending_timer() {
    let mut showcase = showcase();
    showcase.advance();
    let token = showcase.cancel.clone().expect("pending timer");
    assert!(!token.is_cancelled());
    showcase.unmount();
    assert!(token.is_cancelled());
}

#[test]
fn idle_teardown_has_nothing_to_cancel() {
    let mut showcase = showcase();
    showcase.advance();
    let token = showcase.cancel.clone().expect("pending timer");
    settle(&mut showcase);
    assert!(showcase.cancel.is_none());
    drop(showcase);
    assert!(!token.is_cancelled());
}
