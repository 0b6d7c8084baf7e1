use std::sync::Arc;

use podium_server::Hub;
use tokio::sync::Barrier;

use crate::integration::init_tracing;
use crate::utils::{TestPeer, error, offer_msg};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_first_offers_elect_one_presenter() {
    init_tracing();
    let hub = Hub::new();

    let peers: Vec<TestPeer> = (0..16).map(|_| TestPeer::join(&hub, "contested")).collect();
    let barrier = Arc::new(Barrier::new(peers.len()));

    let mut handles = Vec::new();
    for (i, mut peer) in peers.into_iter().enumerate() {
        let barrier = barrier.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            peer.send(offer_msg(&format!("offer-{}", i)));
            peer
        }));
    }

    let mut peers = Vec::new();
    for handle in handles {
        peers.push(handle.await.expect("offer task panicked"));
    }

    let presenter = hub.presenter_id("contested").expect("someone must present");
    let mut rejected = 0;
    for peer in &mut peers {
        let received = peer.take();
        if peer.id() == presenter {
            assert!(!received.contains(&error("presenter-exists")));
        } else if received.contains(&error("presenter-exists")) {
            rejected += 1;
        }
    }
    assert_eq!(rejected, peers.len() - 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_only_winning_offer_is_relayed() {
    init_tracing();
    let hub = Hub::new();

    let mut viewer = TestPeer::join(&hub, "room");
    let contenders: Vec<TestPeer> = (0..8).map(|_| TestPeer::join(&hub, "room")).collect();
    let barrier = Arc::new(Barrier::new(contenders.len()));

    let mut handles = Vec::new();
    for (i, mut peer) in contenders.into_iter().enumerate() {
        let barrier = barrier.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            peer.send(offer_msg(&format!("offer-{}", i)));
            peer
        }));
    }
    let mut contenders = Vec::new();
    for handle in handles {
        contenders.push(handle.await.expect("offer task panicked"));
    }

    let offers: Vec<_> = viewer
        .take()
        .into_iter()
        .filter(|m| m["type"] == "offer")
        .collect();
    assert_eq!(offers.len(), 1);
    drop(contenders);
}
