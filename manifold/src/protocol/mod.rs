//! Protocol flavors: thin typed wrappers over [`Socket`](crate::Socket).
//!
//! Each flavor owns a generic socket and exposes only the operations its
//! messaging pattern defines — a publisher cannot receive, a pull socket
//! cannot send. Protocol-specific options (subscription topics, resend
//! interval, survey deadline) live on the flavor that owns them; the
//! generic socket stays reachable through `socket()` for general-purpose
//! options.

mod bus;
mod fan;
mod pair;
mod pipeline;
mod pubsub;
mod reqrep;
mod survey;

pub use bus::BusSocket;
pub use fan::{SinkSocket, SourceSocket};
pub use pair::PairSocket;
pub use pipeline::{PullSocket, PushSocket};
pub use pubsub::{PubSocket, SubSocket};
pub use reqrep::{RepSocket, ReqSocket};
pub use survey::{RespondentSocket, SurveyorSocket};

/// Declares a flavor struct plus the operations every flavor shares:
/// construction in the standard domain, endpoint management, close, and
/// access to the generic socket.
macro_rules! flavor {
    ($(#[$meta:meta])* $name:ident, $protocol:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            socket: $crate::socket::Socket,
        }

        impl $name {
            /// Creates the socket in the standard address family.
            pub fn new() -> $crate::error::Result<Self> {
                Ok(Self {
                    socket: $crate::socket::Socket::new(
                        $crate::socket::Domain::Standard,
                        $crate::socket::Protocol::$protocol,
                    )?,
                })
            }

            /// Adds a local endpoint to the socket.
            pub fn bind(&self, addr: &str) -> $crate::error::Result<$crate::endpoint::Endpoint> {
                self.socket.bind(addr)
            }

            /// Adds a remote endpoint to the socket.
            pub fn connect(&self, addr: &str) -> $crate::error::Result<$crate::endpoint::Endpoint> {
                self.socket.connect(addr)
            }

            /// Removes an endpoint created by this socket.
            pub fn shutdown(
                &self,
                endpoint: $crate::endpoint::Endpoint,
            ) -> $crate::error::Result<()> {
                self.socket.shutdown(endpoint)
            }

            /// Closes the socket. Closing twice is a no-op success.
            pub fn close(&self) -> $crate::error::Result<()> {
                self.socket.close()
            }

            /// The underlying generic socket, for general-purpose options.
            pub fn socket(&self) -> &$crate::socket::Socket {
                &self.socket
            }
        }
    };
}

pub(crate) use flavor;
