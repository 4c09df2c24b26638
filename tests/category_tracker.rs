use pizza_storefront::{
    dto::catalog::IntersectionRequest,
    error::AppError,
    routes::catalog::apply_intersection,
    tracker::{
        ACTIVE_THRESHOLD, CategoryStore, CategoryTracker, GroupState, GroupTracker,
        RATIO_TOLERANCE, TrackerError,
    },
};

#[test]
fn below_threshold_does_not_fire() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(1);

    assert!(!group.observe(0.39, &store).unwrap());
    assert_eq!(group.state(), GroupState::Inactive);
    assert_eq!(store.active_id(), None);
}

#[test]
fn above_threshold_fires() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(1);

    assert!(group.observe(0.41, &store).unwrap());
    assert_eq!(group.state(), GroupState::Active);
    assert_eq!(store.active_id(), Some(1));
}

#[test]
fn exact_threshold_counts_as_intersecting() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(3);

    assert!(group.observe(ACTIVE_THRESHOLD, &store).unwrap());
    assert_eq!(store.active_id(), Some(3));
}

#[test]
fn fires_once_while_staying_active() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(2);

    let fired: Vec<bool> = [0.5, 0.7, 1.0, 0.45]
        .into_iter()
        .map(|ratio| group.observe(ratio, &store).unwrap())
        .collect();
    assert_eq!(fired, vec![true, false, false, false]);
}

#[test]
fn re_entering_fires_again() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(2);

    assert!(group.observe(0.6, &store).unwrap());
    assert!(!group.observe(0.1, &store).unwrap());
    assert_eq!(group.state(), GroupState::Inactive);
    // Leaving does not clear the store.
    assert_eq!(store.active_id(), Some(2));
    assert!(group.observe(0.6, &store).unwrap());
}

#[test]
fn browser_crossing_ratio_just_below_threshold_fires() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(1);

    // Browsers report the 0.4 crossing as 0.3999.
    assert!(group.observe(0.3999, &store).unwrap());
    assert_eq!(store.active_id(), Some(1));

    let mut other = GroupTracker::new(2);
    assert!(!other.observe(0.39, &store).unwrap());
    assert!(!other.observe(ACTIVE_THRESHOLD - 2.0 * RATIO_TOLERANCE, &store).unwrap());
    assert_eq!(store.active_id(), Some(1));
}

#[test]
fn zero_ratio_is_never_intersecting() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::with_threshold(4, 0.0).unwrap();

    assert!(!group.observe(0.0, &store).unwrap());
    assert!(group.observe(0.01, &store).unwrap());
}

#[test]
fn rejects_out_of_range_values() {
    let store = CategoryStore::new();
    let mut group = GroupTracker::new(1);

    assert_eq!(group.observe(1.2, &store), Err(TrackerError::InvalidRatio(1.2)));
    assert!(matches!(
        group.observe(f64::NAN, &store),
        Err(TrackerError::InvalidRatio(_))
    ));
    assert!(matches!(
        GroupTracker::with_threshold(1, -0.1),
        Err(TrackerError::InvalidThreshold(_))
    ));
    assert_eq!(group.state(), GroupState::Inactive);
}

#[tokio::test]
async fn last_intersecting_group_wins() {
    let tracker = CategoryTracker::new();
    let session = tracker.open_session(&[1, 2]).await;

    let pizzas = tracker.observe(&session, 1, 0.8).await.unwrap();
    assert!(pizzas.fired);
    assert_eq!(pizzas.active_category_id, Some(1));

    let combo = tracker.observe(&session, 2, 0.5).await.unwrap();
    assert!(combo.fired);
    assert_eq!(combo.active_category_id, Some(2));

    // Pizzas is still active, so this report changes nothing.
    let again = tracker.observe(&session, 1, 0.9).await.unwrap();
    assert!(!again.fired);
    assert_eq!(tracker.active_id(&session).await.unwrap(), Some(2));
}

#[tokio::test]
async fn pages_track_categories_independently() {
    let tracker = CategoryTracker::new();
    let first = tracker.open_session(&[1, 2]).await;
    let second = tracker.open_session(&[1, 2]).await;
    assert_ne!(first, second);

    // Scrolling one page does not move the other page's highlight.
    assert!(tracker.observe(&first, 2, 0.9).await.unwrap().fired);
    assert_eq!(tracker.active_id(&second).await.unwrap(), None);

    let pizzas = tracker.observe(&second, 1, 1.0).await.unwrap();
    assert!(pizzas.fired);
    assert_eq!(pizzas.active_category_id, Some(1));

    // Combo was only active on the first page, so it fires again here.
    let combo = tracker.observe(&second, 2, 0.9).await.unwrap();
    assert!(combo.fired);
    assert_eq!(combo.active_category_id, Some(2));

    assert_eq!(tracker.active_id(&first).await.unwrap(), Some(2));
    assert_eq!(tracker.session_count().await, 2);
}

#[tokio::test]
async fn rejects_categories_not_on_the_page() {
    let tracker = CategoryTracker::new();
    let session = tracker.open_session(&[1, 2]).await;

    for category_id in [3, -1, i32::MAX] {
        assert_eq!(
            tracker.observe(&session, category_id, 0.9).await,
            Err(TrackerError::UnknownCategory(category_id))
        );
    }
    assert_eq!(tracker.active_id(&session).await.unwrap(), None);
}

#[tokio::test]
async fn rejects_unknown_sessions() {
    let tracker = CategoryTracker::new();
    tracker.open_session(&[1, 2]).await;

    assert_eq!(
        tracker.observe("not-a-session", 1, 0.9).await,
        Err(TrackerError::UnknownSession)
    );
    assert_eq!(
        tracker.active_id("not-a-session").await,
        Err(TrackerError::UnknownSession)
    );
    assert!(tracker.subscribe("not-a-session").await.is_err());
    assert_eq!(tracker.session_count().await, 1);
}

#[tokio::test]
async fn oldest_session_is_evicted_when_full() {
    let tracker = CategoryTracker::with_max_sessions(2);
    let pause = || std::thread::sleep(std::time::Duration::from_millis(2));
    let oldest = tracker.open_session(&[1]).await;
    pause();
    let recent = tracker.open_session(&[1]).await;
    pause();

    // Touch the older one so `recent` becomes the least recently used.
    tracker.observe(&oldest, 1, 0.5).await.unwrap();
    pause();
    let newest = tracker.open_session(&[1]).await;

    assert_eq!(tracker.session_count().await, 2);
    assert_eq!(
        tracker.active_id(&recent).await,
        Err(TrackerError::UnknownSession)
    );
    assert_eq!(tracker.active_id(&oldest).await.unwrap(), Some(1));
    assert_eq!(tracker.active_id(&newest).await.unwrap(), None);
}

#[tokio::test]
async fn subscribers_see_updates() {
    let tracker = CategoryTracker::new();
    let session = tracker.open_session(&[5]).await;
    let mut rx = tracker.subscribe(&session).await.unwrap();

    tracker.observe(&session, 5, 0.41).await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), Some(5));

    tracker.observe(&session, 5, 0.39).await.unwrap();
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn intersection_handler_maps_errors_to_bad_request() {
    let tracker = CategoryTracker::new();
    let session_id = tracker.open_session(&[1, 2]).await;
    let request = |category_id: i32, intersection_ratio: f64| IntersectionRequest {
        session_id: session_id.clone(),
        category_id,
        intersection_ratio,
    };

    let ok = apply_intersection(&tracker, request(1, 0.41)).await.unwrap();
    let data = ok.data.expect("intersection data");
    assert!(data.fired);
    assert_eq!(data.active_category_id, Some(1));

    let err = apply_intersection(&tracker, request(1, -0.5)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = apply_intersection(&tracker, request(99, 0.9)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);

    let err = apply_intersection(
        &tracker,
        IntersectionRequest {
            session_id: "stale".to_string(),
            category_id: 1,
            intersection_ratio: 0.9,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}
