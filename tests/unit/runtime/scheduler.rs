use super::*;

#[test]
fn tokens_are_unique_and_replace_pending() {
    let mut s = ManualScheduler::with_interval(0.5);
    let a = s.schedule_next();
    let b = s.schedule_next();
    assert_ne!(a, b);
    assert_eq!(s.pending(), Some(b));
    assert_eq!(s.schedule_calls(), 2);
}

#[test]
fn next_frame_fires_once_per_schedule() {
    let mut s = ManualScheduler::new(Fps::new(4, 1).unwrap());
    assert_eq!(s.next_frame(), None);
    assert_eq!(s.now(), 0.25);

    let token = s.schedule_next();
    assert_eq!(s.next_frame(), Some((token, 0.5)));
    assert_eq!(s.next_frame(), None);
    assert_eq!(s.now(), 0.75);
}

#[test]
fn cancel_drops_only_matching_token() {
    let mut s = ManualScheduler::with_interval(1.0);
    let token = s.schedule_next();
    s.cancel(FrameToken(token.0 + 100));
    assert_eq!(s.pending(), Some(token));
    s.cancel(token);
    assert_eq!(s.pending(), None);
    assert_eq!(s.cancel_calls(), 2);
    assert_eq!(s.next_frame(), None);
}
