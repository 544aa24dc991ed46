use std::time::Duration;

use debounce::Debouncer;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(500);

#[tokio::test(start_paused = true)]
async fn test_nothing_fires_before_delay() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.set("a");

    sleep(DELAY - Duration::from_millis(1)).await;
    assert!(debouncer.try_next().is_none());
    assert!(debouncer.is_pending());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(debouncer.try_next(), Some("a"));
    assert!(debouncer.try_next().is_none());
}

#[rstest::rstest]
#[case::single(&["abc"])]
#[case::burst(&["a", "ab", "abc"])]
#[case::long_burst(&["a", "ab", "abc", "ab", "abc"])]
#[tokio::test(start_paused = true)]
async fn test_burst_collapses_into_last_value(#[case] values: &[&'static str]) {
    let mut debouncer = Debouncer::new(DELAY);

    for value in values {
        debouncer.set(*value);
        sleep(DELAY / 5).await;
        assert!(debouncer.try_next().is_none());
    }

    sleep(DELAY).await;
    assert_eq!(debouncer.try_next(), Some("abc"));
    assert!(debouncer.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_restart_postpones_commit() {
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.set(1);
    sleep(Duration::from_millis(400)).await;
    debouncer.set(2);
    sleep(Duration::from_millis(400)).await;

    // 800ms since the first value, but only 400ms since the last one.
    assert!(debouncer.try_next().is_none());

    sleep(Duration::from_millis(101)).await;
    assert_eq!(debouncer.try_next(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_staged_value() {
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.set(1);
    debouncer.cancel();
    assert!(!debouncer.is_pending());

    sleep(DELAY * 2).await;
    assert!(debouncer.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_fired_value() {
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.set(1);
    sleep(DELAY * 2).await;
    debouncer.cancel();

    assert!(debouncer.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_next_waits_for_timer() {
    let mut debouncer = Debouncer::new(DELAY);
    let start = tokio::time::Instant::now();

    debouncer.set("x");
    debouncer.set("y");

    assert_eq!(debouncer.next().await, "y");
    assert!(start.elapsed() >= DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_independent_debouncers() {
    let mut slow = Debouncer::new(Duration::from_millis(500));
    let mut fast = Debouncer::new(Duration::from_millis(100));

    slow.set("title");
    fast.set(());

    sleep(Duration::from_millis(150)).await;
    assert_eq!(fast.try_next(), Some(()));
    assert!(slow.try_next().is_none());

    sleep(Duration::from_millis(400)).await;
    assert_eq!(slow.try_next(), Some("title"));
}
