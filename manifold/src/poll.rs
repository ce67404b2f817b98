//! Multiplexed readiness across many sockets.
//!
//! A [`Poller`] lets one thread wait on any number of sockets without a
//! thread per socket. Entries hold a back-reference to the socket's
//! descriptor, not the socket itself, and are never removed: the poller's
//! lifetime bounds the lifetime of its entries.

use std::time::Duration;

use libc::{c_int, c_short};
use manifold_sys as sys;

use crate::error::{last_error, Result};
use crate::socket::Socket;

/// Polls a set of sockets for readability and writability.
///
/// # Example
///
/// ```no_run
/// use manifold::{Domain, Poller, Protocol, Socket};
/// use std::time::Duration;
///
/// # fn main() -> manifold::Result<()> {
/// let a = Socket::new(Domain::Standard, Protocol::Pair)?;
/// a.bind("inproc://poll")?;
/// let b = Socket::new(Domain::Standard, Protocol::Pair)?;
/// b.connect("inproc://poll")?;
///
/// let mut poller = Poller::new();
/// let item = poller.add(&b, true, false);
///
/// a.send(b"wake up")?;
/// if poller.poll(Some(Duration::from_millis(100)))? > 0 && poller.can_recv(&item) {
///     let msg = b.recv()?;
///     assert_eq!(&*msg, b"wake up");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Poller {
    fds: Vec<sys::nn_pollfd>,
}

/// Handle to one registered socket within a [`Poller`].
///
/// Only meaningful for the poller that created it.
#[derive(Debug, Clone, Copy)]
pub struct PollItem {
    index: usize,
}

impl Poller {
    /// Creates an empty poller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fds.len()
    }

    /// Whether no sockets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    /// Registers a socket with the given initial interests.
    ///
    /// The entry records the socket's descriptor, not the socket: keep the
    /// socket alive and open for as long as this poller polls it.
    pub fn add(&mut self, socket: &Socket, recv: bool, send: bool) -> PollItem {
        let mut entry = sys::nn_pollfd {
            fd: socket.raw_fd(),
            events: 0,
            revents: 0,
        };
        if recv {
            entry.events |= sys::NN_POLLIN;
        }
        if send {
            entry.events |= sys::NN_POLLOUT;
        }
        let index = self.fds.len();
        self.fds.push(entry);
        PollItem { index }
    }

    /// Blocks until at least one registered socket matches its interest
    /// mask, or `timeout` elapses.
    ///
    /// `None` waits indefinitely; a zero timeout returns immediately.
    /// Returns the number of ready entries — `Ok(0)` on a pure timeout,
    /// which is not an error. Result masks from the previous call are
    /// overwritten.
    pub fn poll(&mut self, timeout: Option<Duration>) -> Result<usize> {
        if self.fds.is_empty() {
            // Nothing to observe; honor a finite timeout, never block forever.
            if let Some(t) = timeout {
                std::thread::sleep(t);
            }
            return Ok(0);
        }
        let timeout_ms = match timeout {
            Some(t) => c_int::try_from(t.as_millis()).unwrap_or(c_int::MAX),
            None => -1,
        };
        let rc = unsafe {
            sys::nn_poll(self.fds.as_mut_ptr(), self.fds.len() as c_int, timeout_ms)
        };
        if rc < 0 {
            return Err(last_error());
        }
        Ok(rc as usize)
    }

    /// Sets or clears receive interest; takes effect at the next
    /// [`Poller::poll`], not retroactively.
    pub fn poll_recv(&mut self, item: &PollItem, enabled: bool) {
        set_bit(&mut self.fds[item.index].events, sys::NN_POLLIN, enabled);
    }

    /// Sets or clears send interest; takes effect at the next
    /// [`Poller::poll`].
    pub fn poll_send(&mut self, item: &PollItem, enabled: bool) {
        set_bit(&mut self.fds[item.index].events, sys::NN_POLLOUT, enabled);
    }

    /// Whether the last [`Poller::poll`] observed the entry ready to
    /// receive.
    #[must_use]
    pub fn can_recv(&self, item: &PollItem) -> bool {
        self.fds[item.index].revents & sys::NN_POLLIN != 0
    }

    /// Whether the last [`Poller::poll`] observed the entry ready to send.
    #[must_use]
    pub fn can_send(&self, item: &PollItem) -> bool {
        self.fds[item.index].revents & sys::NN_POLLOUT != 0
    }
}

fn set_bit(events: &mut c_short, bit: c_short, enabled: bool) {
    if enabled {
        *events |= bit;
    } else {
        *events &= !bit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_bits_set_and_clear() {
        let mut events: c_short = 0;
        set_bit(&mut events, sys::NN_POLLIN, true);
        set_bit(&mut events, sys::NN_POLLOUT, true);
        assert_eq!(events, sys::NN_POLLIN | sys::NN_POLLOUT);

        // Clearing twice must stay cleared, not flip back on.
        set_bit(&mut events, sys::NN_POLLOUT, false);
        set_bit(&mut events, sys::NN_POLLOUT, false);
        assert_eq!(events, sys::NN_POLLIN);
    }

    #[test]
    fn empty_poller_times_out_immediately() {
        let mut poller = Poller::new();
        assert!(poller.is_empty());
        assert_eq!(poller.poll(Some(Duration::from_millis(1))).unwrap(), 0);
    }
}
