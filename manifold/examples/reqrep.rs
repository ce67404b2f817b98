//! Minimal request/reply demo over the inproc transport.
//!
//! Run with `RUST_LOG=debug` to watch the socket lifecycle.

use manifold::protocol::{RepSocket, ReqSocket};

fn main() -> manifold::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let address = "inproc://greeter";

    let server = RepSocket::new()?;
    server.bind(address)?;

    let client = ReqSocket::new()?;
    client.connect(address)?;

    client.send(b"Ferris")?;
    let request = server.recv()?;
    println!("server got: {}", String::from_utf8_lossy(&request));

    let reply = format!("Hello, {}!", String::from_utf8_lossy(&request));
    server.send(reply.as_bytes())?;

    let reply = client.recv()?;
    println!("client got: {}", String::from_utf8_lossy(&reply));

    client.close()?;
    server.close()?;
    Ok(())
}
