use std::{sync::Arc, time::Duration};

use tab_set::{Extents, TabId, TabsController, TabsOptions};
use tokio::time::sleep;

const TITLE_DELAY: Duration = Duration::from_millis(500);

fn titles(tabs: &TabsController) -> Vec<&str> {
    tabs.tabs().iter().map(|tab| tab.title()).collect()
}

#[tokio::test]
async fn test_starts_with_one_tab() {
    let tabs = TabsController::default();

    assert_eq!(tabs.total_items(), 1);
    assert_eq!(tabs.active_tab_id().to_string(), "tab-0");
    assert_eq!(tabs.tab_title(), "New Tab");
    assert!(!tabs.is_max_item_reached());
    assert!(!tabs.is_removable());
}

#[tokio::test]
async fn test_add_selects_new_tab() {
    let mut tabs = TabsController::default();

    assert_eq!(tabs.add_new_tab(), Some(TabId::new(1)));
    assert_eq!(tabs.add_new_tab(), Some(TabId::new(2)));

    assert_eq!(tabs.total_items(), 3);
    assert_eq!(tabs.active_tab_id(), TabId::new(2));
    assert_eq!(titles(&tabs), ["New Tab"; 3]);
}

#[rstest::rstest]
#[case::default_ceiling(5)]
#[case::small_ceiling(2)]
#[case::single(1)]
#[tokio::test]
async fn test_ceiling_refuses_extra_tabs(#[case] max_items: usize) {
    let mut tabs = TabsController::new(TabsOptions::default().with_max_items(max_items));

    for _ in 0..max_items + 3 {
        let _ = tabs.add_new_tab();
    }

    assert_eq!(tabs.total_items(), max_items);
    assert!(tabs.is_max_item_reached());
    assert_eq!(tabs.add_new_tab(), None);
    assert_eq!(tabs.active_index(), max_items - 1);
}

#[tokio::test]
async fn test_five_adds_then_sixth_refused() {
    let mut tabs = TabsController::new(TabsOptions::default().with_max_items(5));

    let added = (0..5).filter_map(|_| tabs.add_new_tab()).count();
    assert_eq!(added, 4);
    assert!(tabs.add_new_tab().is_none());

    assert_eq!(tabs.total_items(), 5);
    assert!(tabs.is_max_item_reached());
}

#[tokio::test]
async fn test_unbounded_never_reaches_ceiling() {
    let mut tabs = TabsController::new(TabsOptions::default().unbounded());

    for _ in 0..50 {
        assert!(tabs.add_new_tab().is_some());
    }

    assert_eq!(tabs.total_items(), 51);
    assert!(!tabs.is_max_item_reached());
}

#[tokio::test]
async fn test_remove_releases_ceiling() {
    let mut tabs = TabsController::new(TabsOptions::default().with_max_items(3));
    let _ = tabs.add_new_tab();
    let _ = tabs.add_new_tab();
    assert!(tabs.is_max_item_reached());

    assert!(tabs.remove_tab(TabId::new(0)));
    assert!(!tabs.is_max_item_reached());
    assert!(tabs.add_new_tab().is_some());
}

#[tokio::test]
async fn test_last_tab_is_never_removed() {
    let mut tabs = TabsController::default();

    assert!(!tabs.remove_tab(TabId::new(0)));
    assert_eq!(tabs.total_items(), 1);

    let _ = tabs.add_new_tab();
    assert!(tabs.remove_tab(TabId::new(1)));
    assert!(!tabs.remove_tab(TabId::new(0)));
    assert_eq!(tabs.total_items(), 1);
}

#[tokio::test]
async fn test_unknown_tab_is_not_removed() {
    let mut tabs = TabsController::default();
    let _ = tabs.add_new_tab();

    assert!(!tabs.remove_tab(TabId::new(7)));
    assert_eq!(tabs.total_items(), 2);
}

#[rstest::rstest]
#[case::first(0)]
#[case::middle(2)]
#[case::last(4)]
#[tokio::test]
async fn test_remove_selects_last_tab(#[case] removed: usize) {
    let mut tabs = TabsController::default();
    for _ in 0..4 {
        let _ = tabs.add_new_tab();
    }
    assert!(tabs.set_active_tab_id(TabId::new(1)));

    assert!(tabs.remove_tab(TabId::new(removed)));

    assert_eq!(tabs.total_items(), 4);
    assert_eq!(tabs.active_tab_id(), TabId::new(3));
}

#[tokio::test]
async fn test_random_walk_keeps_invariants() {
    let mut tabs = TabsController::default();

    // Deterministic sequence of adds and removes at varying positions.
    for step in 0..200usize {
        if step % 3 == 0 || step % 7 == 0 {
            let index = (step * 31) % (tabs.total_items() + 1);
            if tabs.remove_tab(TabId::new(index)) {
                assert_eq!(tabs.active_index(), tabs.total_items() - 1);
            }
        } else {
            let _ = tabs.add_new_tab();
        }

        assert!(tabs.total_items() >= 1);
        assert!(tabs.total_items() <= 5);
        assert!(tabs.active_index() < tabs.total_items());
        assert_eq!(tabs.is_max_item_reached(), tabs.total_items() == 5);
    }
}

#[tokio::test]
async fn test_select_unknown_tab_is_ignored() {
    let mut tabs = TabsController::default();
    let _ = tabs.add_new_tab();

    assert!(tabs.set_active_tab_id(TabId::new(0)));
    assert!(!tabs.set_active_tab_id(TabId::new(2)));
    assert_eq!(tabs.active_tab_id(), TabId::new(0));
}

#[tokio::test]
async fn test_snapshot_is_not_affected_by_later_changes() {
    let mut tabs = TabsController::default();
    let before = tabs.snapshot();

    let _ = tabs.add_new_tab();
    assert!(tabs.remove_tab(TabId::new(0)));

    assert_eq!(before.len(), 1);
    assert_ne!(before[0].key(), tabs.tabs()[0].key());
}

#[tokio::test(start_paused = true)]
async fn test_title_burst_commits_once() {
    let mut tabs = TabsController::default();
    let before = tabs.snapshot();

    tabs.set_tab_title("a");
    tabs.set_tab_title("ab");
    tabs.set_tab_title("abc");

    assert_eq!(tabs.typed_title(), "abc");
    assert_eq!(tabs.tab_title(), "New Tab");

    sleep(TITLE_DELAY / 2).await;
    tabs.update();
    assert_eq!(tabs.tab_title(), "New Tab");

    sleep(TITLE_DELAY).await;
    tabs.update();
    assert_eq!(tabs.tab_title(), "abc");
    assert_eq!(tabs.typed_title(), "abc");
    assert!(!tabs.is_title_pending());

    // The earlier snapshot keeps the old title.
    assert_eq!(before[0].title(), "New Tab");

    // Nothing else fires later.
    let committed = tabs.snapshot();
    sleep(TITLE_DELAY * 2).await;
    tabs.update();
    assert!(Arc::ptr_eq(&committed, &tabs.snapshot()));
}

#[tokio::test(start_paused = true)]
async fn test_typed_title_survives_earlier_commit() {
    let mut tabs = TabsController::default();

    tabs.set_tab_title("a");
    sleep(TITLE_DELAY + TITLE_DELAY / 5).await;
    tabs.set_tab_title("ab");
    tabs.update();

    assert_eq!(tabs.tab_title(), "a");
    assert_eq!(tabs.typed_title(), "ab");
    assert!(tabs.is_title_pending());

    sleep(TITLE_DELAY * 2).await;
    tabs.update();

    assert_eq!(tabs.tab_title(), "ab");
    assert_eq!(tabs.typed_title(), "ab");
    assert!(!tabs.is_title_pending());
}

#[tokio::test(start_paused = true)]
async fn test_title_commit_requests_scroll() {
    let mut tabs = TabsController::default();
    let _ = tabs.add_new_tab();
    sleep(TITLE_DELAY).await;
    tabs.update();
    assert_eq!(tabs.take_scroll_request(), Some(TabId::new(1)));

    tabs.set_tab_title("Renamed");
    sleep(TITLE_DELAY * 2).await;
    tabs.update();
    assert_eq!(tabs.tab_title(), "Renamed");
    assert!(tabs.take_scroll_request().is_none());

    sleep(Duration::from_millis(150)).await;
    tabs.update();
    assert_eq!(tabs.take_scroll_request(), Some(TabId::new(1)));
}

#[tokio::test(start_paused = true)]
async fn test_title_commits_into_tab_active_at_fire_time() {
    let mut tabs = TabsController::default();
    let _ = tabs.add_new_tab();
    let _ = tabs.add_new_tab();
    assert!(tabs.set_active_tab_id(TabId::new(0)));

    tabs.set_tab_title("Renamed");
    sleep(TITLE_DELAY / 5).await;
    assert!(tabs.set_active_tab_id(TabId::new(1)));

    sleep(TITLE_DELAY).await;
    tabs.update();

    assert_eq!(titles(&tabs), ["New Tab", "Renamed", "New Tab"]);
}

#[rstest::rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::tabs_and_newlines("\t\n")]
#[tokio::test(start_paused = true)]
async fn test_blank_title_is_discarded(#[case] title: &str) {
    let mut tabs = TabsController::default();

    tabs.set_tab_title("Kept");
    sleep(TITLE_DELAY * 2).await;
    tabs.update();

    tabs.set_tab_title(title);
    assert_eq!(tabs.typed_title(), title);
    sleep(TITLE_DELAY * 2).await;
    tabs.update();

    assert_eq!(tabs.tab_title(), "Kept");
    assert_eq!(tabs.typed_title(), "Kept");
}

#[tokio::test(start_paused = true)]
async fn test_scroll_request_follows_tab_set_changes() {
    let mut tabs = TabsController::default();
    assert!(tabs.take_scroll_request().is_none());

    let _ = tabs.add_new_tab();
    let _ = tabs.add_new_tab();
    tabs.update();
    assert!(tabs.take_scroll_request().is_none());

    sleep(Duration::from_millis(150)).await;
    tabs.update();
    assert_eq!(tabs.take_scroll_request(), Some(TabId::new(2)));
    assert!(tabs.take_scroll_request().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_controller_cancels_timers() {
    let mut tabs = TabsController::default();
    tabs.set_tab_title("Never committed");
    let _ = tabs.add_new_tab();
    drop(tabs);

    // Timers fire into a dropped controller without panicking.
    sleep(TITLE_DELAY * 2).await;
}

#[rstest::rstest]
#[case::unmeasured(0, 0, 5, false)]
#[case::fits(350, 70, 5, false)]
#[case::one_cell_over(349, 70, 5, true)]
#[case::wide_tabs(350, 100, 4, true)]
#[case::single_tab(350, 100, 1, false)]
#[tokio::test]
async fn test_overflow_flag(
    #[case] container: u32,
    #[case] tab: u32,
    #[case] count: usize,
    #[case] expected: bool,
) {
    let mut tabs = TabsController::new(TabsOptions::default().unbounded());
    for _ in 1..count {
        let _ = tabs.add_new_tab();
    }

    tabs.set_extents(Extents::new(container, tab));

    assert_eq!(tabs.is_tab_intersect_with_root_el(), expected);
    assert_eq!(tabs.view().overflowing, expected);
}
