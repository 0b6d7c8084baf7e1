use podium_server::Hub;

use crate::integration::init_tracing;
use crate::utils::{TestPeer, control, error, offer_msg};

#[test]
fn test_presenter_lifecycle_in_one_room() {
    init_tracing();
    let hub = Hub::new();

    // X joins an empty room: acknowledged, nobody to renegotiate with.
    let mut x = TestPeer::join(&hub, "ABC");
    assert!(x.take().is_empty());

    // X offers alone: becomes presenter, nothing relayed.
    x.send(offer_msg("x-1"));
    assert_eq!(hub.presenter_id("ABC"), Some(x.id()));
    assert!(x.take().is_empty());

    // Y joins: the presenter is asked for a fresh offer.
    let mut y = TestPeer::join(&hub, "ABC");
    assert_eq!(x.take(), vec![control("need-offer")]);

    // X re-offers: still accepted, relayed to Y.
    x.send(offer_msg("x-2"));
    assert_eq!(y.take(), vec![offer_msg("x-2")]);
    assert!(x.take().is_empty());

    // Z joins and tries to present while X holds the slot.
    let mut z = TestPeer::join(&hub, "ABC");
    assert_eq!(x.take(), vec![control("need-offer")]);
    z.send(offer_msg("z-1"));
    assert_eq!(z.take(), vec![error("presenter-exists")]);
    assert!(x.take().is_empty());
    assert!(y.take().is_empty());
    assert_eq!(hub.presenter_id("ABC"), Some(x.id()));

    // X drops: everyone left hears about it exactly once.
    x.disconnect();
    assert_eq!(y.take(), vec![control("presenter-left")]);
    assert_eq!(z.take(), vec![control("presenter-left")]);
    assert_eq!(hub.presenter_id("ABC"), None);

    // The slot is free again.
    y.send(offer_msg("y-1"));
    assert!(y.take().is_empty());
    assert_eq!(z.take(), vec![offer_msg("y-1")]);
    assert_eq!(hub.presenter_id("ABC"), Some(y.id()));
}
