//! Endpoint bookkeeping for bind/connect/shutdown.

use std::fmt;

use libc::c_int;

/// One bound or connected address association on a socket.
///
/// Returned by [`Socket::bind`](crate::Socket::bind) and
/// [`Socket::connect`](crate::Socket::connect). Passing the endpoint back to
/// [`Socket::shutdown`](crate::Socket::shutdown) on the *same* socket
/// reverses the association; a different socket rejects it. Endpoints are
/// destroyed implicitly when their owning socket closes.
#[derive(Debug)]
pub struct Endpoint {
    address: String,
    id: c_int,
    owner: c_int,
}

impl Endpoint {
    pub(crate) fn new(address: String, id: c_int, owner: c_int) -> Self {
        Self { address, id, owner }
    }

    /// The address string this endpoint was created with.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn id(&self) -> c_int {
        self.id
    }

    pub(crate) fn owner(&self) -> c_int {
        self.owner
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
