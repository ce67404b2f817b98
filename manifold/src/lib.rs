//! # Manifold
//!
//! A safe, zero-copy binding for the nanomsg scalability-protocols
//! messaging engine.
//!
//! ## Architecture
//!
//! Manifold is the socket abstraction layer over the native engine:
//!
//! - **`manifold-sys`**: raw FFI declarations and link configuration
//! - **[`Socket`]**: lifecycle, data path, and endpoint management over one
//!   native descriptor — closed exactly once, explicitly or on drop
//! - **[`Message`]**: received buffers aliasing engine-owned memory,
//!   released exactly once when dropped
//! - **Typed options**: integer / boolean / duration / string projections
//!   over the engine's byte-level option channel
//! - **[`Poller`]**: one blocking readiness wait multiplexed across many
//!   sockets
//! - **[`protocol`]**: one thin flavor type per messaging pattern, exposing
//!   only the operations that pattern defines
//!
//! ## Quick start
//!
//! ```no_run
//! use manifold::protocol::{RepSocket, ReqSocket};
//!
//! # fn main() -> manifold::Result<()> {
//! let address = "inproc://greeter";
//! let server = RepSocket::new()?;
//! server.bind(address)?;
//!
//! let client = ReqSocket::new()?;
//! client.connect(address)?;
//!
//! client.send(b"Ferris")?;
//! let request = server.recv()?;
//! let reply = format!("Hello, {}!", String::from_utf8_lossy(&request));
//! server.send(reply.as_bytes())?;
//!
//! let reply = client.recv()?;
//! println!("{}", String::from_utf8_lossy(&reply));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The binding introduces no threads of its own; it is a synchronous façade
//! over blocking (or, via the `try_` variants, non-blocking) native calls.
//! Run one socket per thread, or multiplex many sockets on one thread with
//! a [`Poller`]. Overlapping operations on the same socket from several
//! threads are synchronized by the engine but their relative ordering is
//! engine-defined.
//!
//! ## Safety
//!
//! All `unsafe` code sits at the FFI boundary: native handles are released
//! exactly once behind an atomic consumed flag, and received buffers are
//! freed exactly once by the [`Message`] destructor. Native failures never
//! panic; every operation returns a typed [`Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod endpoint;
mod error;
mod message;
mod options;
mod poll;
mod socket;
mod symbols;

pub mod protocol;

// Re-export for zero-copy interop with `Message` conversions.
pub use bytes::Bytes;

pub use endpoint::Endpoint;
pub use error::{Errno, Error, Result};
pub use message::Message;
pub use poll::{PollItem, Poller};
pub use socket::{Domain, Protocol, Socket};
pub use symbols::{symbol, version};
