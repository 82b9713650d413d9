use std::time::Duration;

use book_core::sequencer::{PageWalk, Tick};

fn drain(walk: &mut PageWalk) -> Vec<(usize, Duration)> {
    let mut steps = Vec::new();
    loop {
        match walk.tick() {
            Tick::Done => return steps,
            Tick::Stepped { delayed, next_in } => steps.push((delayed, next_in)),
        }
    }
}

#[test]
fn walk_advances_one_page_at_a_time_with_eased_pacing() {
    let mut walk = PageWalk::new(8);
    assert!(walk.request(5));
    let steps = drain(&mut walk);
    let pages: Vec<usize> = steps.iter().map(|(d, _)| *d).collect();
    assert_eq!(pages, vec![1, 2, 3, 4, 5]);
    // delay decided from the pre-step distance: fast while |target-delayed| > 2
    let delays: Vec<u64> = steps.iter().map(|(_, d)| d.as_millis() as u64).collect();
    assert_eq!(delays, vec![50, 50, 50, 150, 150]);
}

#[test]
fn walk_never_overshoots_and_halts_on_target() {
    let mut walk = PageWalk::new(8);
    walk.request(6);
    let mut prev_dist = walk.target().abs_diff(walk.delayed());
    loop {
        match walk.tick() {
            Tick::Done => break,
            Tick::Stepped { delayed, .. } => {
                let dist = walk.target().abs_diff(delayed);
                assert!(dist < prev_dist, "walk must strictly approach the target");
                prev_dist = dist;
            }
        }
    }
    assert_eq!(walk.delayed(), 6);
    assert_eq!(walk.tick(), Tick::Done);
}

#[test]
fn walk_runs_backward_too() {
    let mut walk = PageWalk::new(8);
    walk.request(5);
    drain(&mut walk);
    assert!(walk.request(2));
    let pages: Vec<usize> = drain(&mut walk).iter().map(|(d, _)| *d).collect();
    assert_eq!(pages, vec![4, 3, 2]);
}

#[test]
fn requesting_the_current_target_is_a_no_op() {
    let mut walk = PageWalk::new(8);
    assert!(walk.request(5));
    let generation = walk.generation();
    assert!(!walk.request(5));
    assert_eq!(walk.generation(), generation);
}

#[test]
fn out_of_range_targets_clamp_to_page_count() {
    let mut walk = PageWalk::new(8);
    assert!(walk.request(99));
    assert_eq!(walk.target(), 8);
    drain(&mut walk);
    assert_eq!(walk.delayed(), 8);
}

#[test]
fn new_request_supersedes_a_walk_in_flight() {
    let mut walk = PageWalk::new(8);
    walk.request(7);
    let old_generation = walk.generation();
    walk.tick();
    walk.tick();
    assert_eq!(walk.delayed(), 2);
    assert!(walk.request(0));
    assert!(walk.generation() > old_generation, "stale timers must be droppable");
    let pages: Vec<usize> = drain(&mut walk).iter().map(|(d, _)| *d).collect();
    assert_eq!(pages, vec![1, 0]);
}

#[test]
fn cancel_freezes_the_walk_in_place() {
    let mut walk = PageWalk::new(8);
    walk.request(6);
    walk.tick();
    let generation = walk.generation();
    walk.cancel();
    assert!(walk.generation() > generation);
    assert_eq!(walk.target(), walk.delayed());
    assert_eq!(walk.tick(), Tick::Done);
}

#[test]
fn book_closed_only_at_either_cover() {
    let mut walk = PageWalk::new(4);
    assert!(walk.book_closed());
    walk.request(2);
    walk.tick();
    assert!(!walk.book_closed());
    walk.tick();
    assert!(!walk.book_closed());
    walk.request(4);
    drain(&mut walk);
    assert!(walk.book_closed());
}

#[test]
fn opened_tracks_the_delayed_page() {
    let mut walk = PageWalk::new(4);
    assert!(!walk.opened(0));
    walk.request(2);
    drain(&mut walk);
    assert!(walk.opened(0));
    assert!(walk.opened(1));
    assert!(!walk.opened(2));
    assert!(!walk.opened(3));
}
