use podium_server::Hub;

use crate::integration::init_tracing;
use crate::utils::{TestPeer, answer_msg, control, ice_msg, offer_msg};

#[test]
fn test_late_viewer_triggers_need_offer() {
    init_tracing();
    let hub = Hub::new();
    let mut presenter = TestPeer::join(&hub, "screen");
    presenter.send(offer_msg("p-1"));

    let mut early = TestPeer::join(&hub, "screen");
    assert_eq!(presenter.take(), vec![control("need-offer")]);

    presenter.send(offer_msg("p-2"));
    assert_eq!(early.take(), vec![offer_msg("p-2")]);

    early.send(answer_msg("e-1"));
    early.send(ice_msg("candidate:1 1 udp 2122260223 10.0.0.2 54321 typ host"));
    assert_eq!(
        presenter.take(),
        vec![
            answer_msg("e-1"),
            ice_msg("candidate:1 1 udp 2122260223 10.0.0.2 54321 typ host"),
        ]
    );

    let _late = TestPeer::join(&hub, "screen");
    assert_eq!(presenter.take(), vec![control("need-offer")]);
    assert!(early.take().is_empty());
}

#[test]
fn test_viewer_need_offer_is_routed_to_presenter() {
    init_tracing();
    let hub = Hub::new();
    let mut presenter = TestPeer::join(&hub, "screen");
    let mut a = TestPeer::join(&hub, "screen");
    let mut b = TestPeer::join(&hub, "screen");
    presenter.send(offer_msg("p"));
    a.take();
    b.take();

    a.send(control("need-offer"));

    assert_eq!(presenter.take(), vec![control("need-offer")]);
    assert!(b.take().is_empty());
}

#[test]
fn test_no_need_offer_without_presenter() {
    init_tracing();
    let hub = Hub::new();
    let mut a = TestPeer::join(&hub, "screen");
    let mut b = TestPeer::join(&hub, "screen");

    b.send(control("need-offer"));

    assert!(a.take().is_empty());
    assert!(b.take().is_empty());
}
