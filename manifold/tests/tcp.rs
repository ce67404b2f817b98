//! TCP transport round-trips.

use std::time::Duration;

use manifold::{Domain, Protocol, Socket};

#[test]
fn pair_round_trip_over_loopback() {
    let port = portpicker::pick_unused_port().expect("no free TCP port");
    let address = format!("tcp://127.0.0.1:{port}");

    let server = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    server
        .set_recv_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    server.bind(&address).unwrap();

    let client = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    client
        .set_recv_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    client.set_tcp_nodelay(true).unwrap();
    client.connect(&address).unwrap();

    client.send(b"over tcp").unwrap();
    let msg = server.recv().unwrap();
    assert_eq!(&*msg, b"over tcp");

    server.send(b"and back").unwrap();
    let msg = client.recv().unwrap();
    assert_eq!(&*msg, b"and back");
}

#[test]
fn wildcard_bind_accepts_loopback_connects() {
    let port = portpicker::pick_unused_port().expect("no free TCP port");

    let pull = Socket::new(Domain::Standard, Protocol::Pull).unwrap();
    pull.set_recv_timeout(Some(Duration::from_secs(5))).unwrap();
    pull.bind(&format!("tcp://*:{port}")).unwrap();

    let push = Socket::new(Domain::Standard, Protocol::Push).unwrap();
    push.connect(&format!("tcp://127.0.0.1:{port}")).unwrap();

    push.send(b"wildcard").unwrap();
    assert_eq!(&*pull.recv().unwrap(), b"wildcard");
}
