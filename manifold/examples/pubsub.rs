//! Publish/subscribe demo: one publisher, two subscribers on the empty
//! topic (which matches everything).

use std::thread;
use std::time::Duration;

use manifold::protocol::{PubSocket, SubSocket};

fn main() -> manifold::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let address = "inproc://ticker";

    let publisher = PubSocket::new()?;
    publisher.bind(address)?;

    let sub1 = SubSocket::new()?;
    sub1.subscribe(b"")?;
    sub1.connect(address)?;

    let sub2 = SubSocket::new()?;
    sub2.subscribe(b"")?;
    sub2.connect(address)?;

    // Let the connections settle before publishing.
    thread::sleep(Duration::from_millis(10));

    publisher.send(b"tick 1")?;
    for (name, sub) in [("sub1", &sub1), ("sub2", &sub2)] {
        let msg = sub.recv()?;
        println!("{name} got: {}", String::from_utf8_lossy(&msg));
    }

    Ok(())
}
