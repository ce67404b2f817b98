//! Protocol-flavor integration tests.

use std::thread;
use std::time::Duration;

use manifold::protocol::{
    BusSocket, PairSocket, PullSocket, PushSocket, RespondentSocket, SinkSocket, SourceSocket,
    SurveyorSocket,
};
use manifold::Error;

const SETTLE: Duration = Duration::from_millis(10);

#[test]
fn pair_talks_both_directions() {
    let a = PairSocket::new().unwrap();
    a.bind("inproc://flavor-pair").unwrap();
    let b = PairSocket::new().unwrap();
    b.connect("inproc://flavor-pair").unwrap();

    a.send(b"ping").unwrap();
    assert_eq!(&*b.recv().unwrap(), b"ping");
    b.send(b"pong").unwrap();
    assert_eq!(&*a.recv().unwrap(), b"pong");
}

#[test]
fn pipeline_preserves_order() {
    let push = PushSocket::new().unwrap();
    push.bind("inproc://flavor-pipeline").unwrap();
    let pull = PullSocket::new().unwrap();
    pull.connect("inproc://flavor-pipeline").unwrap();

    for part in [b"one".as_slice(), b"two", b"three"] {
        push.send(part).unwrap();
    }
    assert_eq!(&*pull.recv().unwrap(), b"one");
    assert_eq!(&*pull.recv().unwrap(), b"two");
    assert_eq!(&*pull.recv().unwrap(), b"three");
}

#[test]
fn source_feeds_sink() {
    let sink = SinkSocket::new().unwrap();
    sink.bind("inproc://flavor-fan").unwrap();
    let source = SourceSocket::new().unwrap();
    source.connect("inproc://flavor-fan").unwrap();

    source.send(b"sample").unwrap();
    assert_eq!(&*sink.recv().unwrap(), b"sample");
}

#[test]
fn bus_broadcasts_to_all_peers() {
    let hub = BusSocket::new().unwrap();
    hub.bind("inproc://flavor-bus").unwrap();

    let spoke1 = BusSocket::new().unwrap();
    spoke1.connect("inproc://flavor-bus").unwrap();
    let spoke2 = BusSocket::new().unwrap();
    spoke2.connect("inproc://flavor-bus").unwrap();

    thread::sleep(SETTLE);

    hub.send(b"to everyone").unwrap();
    assert_eq!(&*spoke1.recv().unwrap(), b"to everyone");
    assert_eq!(&*spoke2.recv().unwrap(), b"to everyone");
}

#[test]
fn survey_collects_responses() {
    let surveyor = SurveyorSocket::new().unwrap();
    surveyor.set_deadline(Duration::from_secs(2)).unwrap();
    surveyor.bind("inproc://flavor-survey").unwrap();

    let respondent = RespondentSocket::new().unwrap();
    respondent.connect("inproc://flavor-survey").unwrap();

    thread::sleep(SETTLE);

    surveyor.send(b"who is there?").unwrap();
    assert_eq!(&*respondent.recv().unwrap(), b"who is there?");
    respondent.send(b"me").unwrap();
    assert_eq!(&*surveyor.recv().unwrap(), b"me");
}

#[test]
fn expired_survey_deadline_times_out() {
    let surveyor = SurveyorSocket::new().unwrap();
    surveyor.set_deadline(Duration::from_millis(100)).unwrap();
    surveyor.bind("inproc://flavor-survey-deadline").unwrap();

    // No respondents are connected; the survey goes unanswered.
    surveyor.send(b"anyone?").unwrap();
    assert!(matches!(surveyor.recv(), Err(Error::Timeout)));
}
