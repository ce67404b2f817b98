//! Set/get round-trips for every typed socket option.

use std::time::Duration;

use manifold::protocol::{ReqSocket, SurveyorSocket};
use manifold::{Domain, Protocol, Socket};

#[test]
fn linger_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Req).unwrap();

    socket
        .set_linger(Some(Duration::from_millis(256)))
        .unwrap();
    assert_eq!(socket.linger().unwrap(), Some(Duration::from_millis(256)));

    socket.set_linger(None).unwrap();
    assert_eq!(socket.linger().unwrap(), None);
}

#[test]
fn timeouts_default_to_infinite() {
    let socket = Socket::new(Domain::Standard, Protocol::Req).unwrap();
    assert_eq!(socket.send_timeout().unwrap(), None);
    assert_eq!(socket.recv_timeout().unwrap(), None);

    socket
        .set_send_timeout(Some(Duration::from_millis(500)))
        .unwrap();
    assert_eq!(
        socket.send_timeout().unwrap(),
        Some(Duration::from_millis(500))
    );

    socket
        .set_recv_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    assert_eq!(socket.recv_timeout().unwrap(), Some(Duration::from_secs(2)));
}

#[test]
fn buffer_sizes_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();

    socket.set_send_buffer_size(131_072).unwrap();
    assert_eq!(socket.send_buffer_size().unwrap(), 131_072);

    socket.set_recv_buffer_size(262_144).unwrap();
    assert_eq!(socket.recv_buffer_size().unwrap(), 262_144);
}

#[test]
fn reconnect_intervals_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();

    socket
        .set_reconnect_interval(Duration::from_millis(250))
        .unwrap();
    assert_eq!(
        socket.reconnect_interval().unwrap(),
        Duration::from_millis(250)
    );

    socket
        .set_reconnect_interval_max(Duration::from_secs(5))
        .unwrap();
    assert_eq!(
        socket.reconnect_interval_max().unwrap(),
        Duration::from_secs(5)
    );
}

#[test]
fn priorities_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();

    socket.set_send_priority(2).unwrap();
    assert_eq!(socket.send_priority().unwrap(), 2);

    socket.set_recv_priority(4).unwrap();
    assert_eq!(socket.recv_priority().unwrap(), 4);
}

#[test]
fn ipv4_only_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    assert!(socket.ipv4_only().unwrap());

    socket.set_ipv4_only(false).unwrap();
    assert!(!socket.ipv4_only().unwrap());
}

#[test]
fn socket_name_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Req).unwrap();
    socket.set_name("req-sock").unwrap();
    assert_eq!(socket.name().unwrap(), "req-sock");
}

#[test]
fn recv_max_size_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();

    socket.set_recv_max_size(Some(65_536)).unwrap();
    assert_eq!(socket.recv_max_size().unwrap(), Some(65_536));

    socket.set_recv_max_size(None).unwrap();
    assert_eq!(socket.recv_max_size().unwrap(), None);
}

#[test]
fn tcp_nodelay_round_trip() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    assert!(!socket.tcp_nodelay().unwrap());

    socket.set_tcp_nodelay(true).unwrap();
    assert!(socket.tcp_nodelay().unwrap());
}

#[test]
fn stored_identity_matches_creation() {
    let socket = Socket::new(Domain::Standard, Protocol::Req).unwrap();
    assert_eq!(socket.domain(), Domain::Standard);
    assert_eq!(socket.protocol(), Protocol::Req);
}

#[test]
fn resend_interval_round_trip() {
    let req = ReqSocket::new().unwrap();
    req.set_resend_interval(Duration::from_millis(500)).unwrap();
    assert_eq!(req.resend_interval().unwrap(), Duration::from_millis(500));
}

#[test]
fn survey_deadline_round_trip() {
    let surveyor = SurveyorSocket::new().unwrap();
    surveyor.set_deadline(Duration::from_secs(2)).unwrap();
    assert_eq!(surveyor.deadline().unwrap(), Duration::from_secs(2));
}

#[test]
fn options_on_closed_socket_are_rejected() {
    let socket = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    socket.close().unwrap();
    assert!(matches!(
        socket.linger(),
        Err(manifold::Error::SocketClosed)
    ));
}
