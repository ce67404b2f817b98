//! Poller integration tests.

use std::time::Duration;

use manifold::{Domain, Poller, Protocol, Socket};

#[test]
fn readiness_follows_interest_and_traffic() {
    let a = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    a.bind("inproc://poll-readiness").unwrap();
    let b = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    b.connect("inproc://poll-readiness").unwrap();

    let mut poller = Poller::new();
    let pia = poller.add(&a, true, true);
    let pib = poller.add(&b, true, true);
    assert_eq!(poller.len(), 2);

    // Both sockets can send before any data is queued.
    let ready = poller.poll(Some(Duration::from_millis(10))).unwrap();
    assert_eq!(ready, 2);
    assert!(poller.can_send(&pia));
    assert!(poller.can_send(&pib));

    // Narrow interest to readable only and queue one message.
    poller.poll_send(&pia, false);
    poller.poll_send(&pib, false);
    a.try_send(b"abc").unwrap();

    let ready = poller.poll(Some(Duration::from_millis(10))).unwrap();
    assert_eq!(ready, 1);
    assert!(!poller.can_recv(&pia));
    assert!(poller.can_recv(&pib));

    // Drain the message; a short poll now times out with zero ready.
    b.try_recv().unwrap();
    let ready = poller.poll(Some(Duration::from_millis(1))).unwrap();
    assert_eq!(ready, 0);
}

#[test]
fn zero_timeout_returns_immediately() {
    let a = Socket::new(Domain::Standard, Protocol::Pull).unwrap();
    a.bind("inproc://poll-zero-timeout").unwrap();

    let mut poller = Poller::new();
    let item = poller.add(&a, true, false);

    let ready = poller.poll(Some(Duration::ZERO)).unwrap();
    assert_eq!(ready, 0);
    assert!(!poller.can_recv(&item));
}
