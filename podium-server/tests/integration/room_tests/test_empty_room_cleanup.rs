use podium_server::Hub;

use crate::integration::init_tracing;
use crate::utils::{TestPeer, control, offer_msg};

#[test]
fn test_last_member_leaving_removes_room() {
    init_tracing();
    let hub = Hub::new();
    let mut x = TestPeer::join(&hub, "ABC");
    let y = TestPeer::join(&hub, "ABC");
    x.send(offer_msg("x"));
    assert_eq!(hub.room_count(), 1);

    y.disconnect();
    assert_eq!(hub.member_count("ABC"), 1);
    x.disconnect();

    assert_eq!(hub.room_count(), 0);
    assert_eq!(hub.member_count("ABC"), 0);
}

#[test]
fn test_recreated_room_has_no_stale_presenter() {
    init_tracing();
    let hub = Hub::new();
    let mut x = TestPeer::join(&hub, "ABC");
    x.send(offer_msg("x"));
    x.disconnect();

    let mut fresh = TestPeer::join(&hub, "ABC");
    assert!(fresh.take().is_empty(), "no presenter means no need-offer");
    assert_eq!(hub.presenter_id("ABC"), None);

    let mut other = TestPeer::join(&hub, "ABC");
    other.send(offer_msg("other"));
    assert_eq!(hub.presenter_id("ABC"), Some(other.id()));
    assert_eq!(fresh.take(), vec![offer_msg("other")]);
}

#[test]
fn test_disconnect_is_idempotent_across_peers() {
    init_tracing();
    let hub = Hub::new();
    let mut x = TestPeer::join(&hub, "ABC");
    let mut y = TestPeer::join(&hub, "ABC");
    x.send(offer_msg("x"));
    y.take();

    x.disconnect();
    assert_eq!(y.take(), vec![control("presenter-left")]);

    // A never-joined connection going away touches nothing.
    TestPeer::new(&hub).disconnect();
    assert!(y.take().is_empty());
    assert_eq!(hub.member_count("ABC"), 1);
}
