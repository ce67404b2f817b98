//! Socket handles and their lifecycle.
//!
//! A [`Socket`] owns one native descriptor. Release happens exactly once:
//! either through the explicit, idempotent [`Socket::close`] or through
//! `Drop` as a safety net. A single atomic "consumed" flag is swapped before
//! either path touches the descriptor, so the two paths can never both reach
//! the engine, and a descriptor that was closed is never passed to a native
//! call again.

use std::ffi::CString;
use std::fmt;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_int, c_void};
use manifold_sys as sys;

use crate::endpoint::Endpoint;
use crate::error::{classify, last_error, Errno, Error, Result};
use crate::message::Message;

/// Address family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Standard socket with full end-to-end protocol processing.
    Standard,
    /// Raw socket, for intermediate topology nodes such as devices.
    Raw,
}

impl Domain {
    pub(crate) fn to_raw(self) -> c_int {
        match self {
            Self::Standard => sys::AF_SP,
            Self::Raw => sys::AF_SP_RAW,
        }
    }

    /// The domain's conventional name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "SP",
            Self::Raw => "SP_RAW",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The messaging pattern a socket implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Exclusive bidirectional communication with one peer.
    Pair,
    /// Publisher; distributes messages to all subscribers.
    Pub,
    /// Subscriber; receives messages matching subscribed topics.
    Sub,
    /// Request side of request/reply.
    Req,
    /// Reply side of request/reply.
    Rep,
    /// Pipeline sender; load-balances across connected pullers.
    Push,
    /// Pipeline receiver; fair-queues from connected pushers.
    Pull,
    /// Sends surveys and collects the responses.
    Surveyor,
    /// Answers surveys.
    Respondent,
    /// Many-to-many broadcast between all nodes in the topology.
    Bus,
    /// Fan-out sender towards a central sink.
    Source,
    /// Fan-in receiver aggregating many sources.
    Sink,
}

impl Protocol {
    // The engine folded the fan protocols into pipeline, so Source/Sink
    // share the push/pull identifiers.
    pub(crate) fn to_raw(self) -> c_int {
        match self {
            Self::Pair => sys::NN_PAIR,
            Self::Pub => sys::NN_PUB,
            Self::Sub => sys::NN_SUB,
            Self::Req => sys::NN_REQ,
            Self::Rep => sys::NN_REP,
            Self::Push | Self::Source => sys::NN_PUSH,
            Self::Pull | Self::Sink => sys::NN_PULL,
            Self::Surveyor => sys::NN_SURVEYOR,
            Self::Respondent => sys::NN_RESPONDENT,
            Self::Bus => sys::NN_BUS,
        }
    }

    /// The protocol's conventional name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pair => "PAIR",
            Self::Pub => "PUB",
            Self::Sub => "SUB",
            Self::Req => "REQ",
            Self::Rep => "REP",
            Self::Push => "PUSH",
            Self::Pull => "PULL",
            Self::Surveyor => "SURVEYOR",
            Self::Respondent => "RESPONDENT",
            Self::Bus => "BUS",
            Self::Source => "SOURCE",
            Self::Sink => "SINK",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalability-protocols socket.
///
/// # Concurrency
///
/// `Socket` is `Send + Sync`; the engine synchronizes individual native
/// calls internally and the binding adds no locking of its own. The relative
/// ordering of overlapping send/receive calls on the *same* socket from
/// multiple threads is engine-defined — multiplex with a
/// [`Poller`](crate::Poller) or use one socket per thread when ordering
/// matters. Closing a socket while another thread blocks on it has an
/// engine-defined effect and should not be relied upon for cancellation.
///
/// # Example
///
/// ```no_run
/// use manifold::{Domain, Protocol, Socket};
///
/// # fn main() -> manifold::Result<()> {
/// let server = Socket::new(Domain::Standard, Protocol::Pair)?;
/// server.bind("inproc://example")?;
///
/// let client = Socket::new(Domain::Standard, Protocol::Pair)?;
/// client.connect("inproc://example")?;
///
/// client.send(b"hello")?;
/// let msg = server.recv()?;
/// assert_eq!(&*msg, b"hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Socket {
    fd: c_int,
    domain: Domain,
    protocol: Protocol,
    closed: AtomicBool,
}

impl Socket {
    /// Allocates a new native socket.
    ///
    /// # Errors
    ///
    /// [`Error::Creation`] when the engine refuses the allocation (invalid
    /// domain/protocol combination, descriptor exhaustion, termination).
    pub fn new(domain: Domain, protocol: Protocol) -> Result<Self> {
        let fd = unsafe { sys::nn_socket(domain.to_raw(), protocol.to_raw()) };
        if fd < 0 {
            return Err(Error::Creation(Errno::last()));
        }
        tracing::debug!(fd, domain = %domain, protocol = %protocol, "socket created");
        Ok(Self {
            fd,
            domain,
            protocol,
            closed: AtomicBool::new(false),
        })
    }

    /// The address family this socket was created in.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The messaging pattern this socket implements.
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    fn check_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            Err(Error::SocketClosed)
        } else {
            Ok(())
        }
    }

    /// Closes the socket, flushing pending outbound data per the linger
    /// option. Closing an already-closed socket is a no-op success.
    ///
    /// # Errors
    ///
    /// If the native close is interrupted the handle stays open and `Drop`
    /// remains armed to retry; any other failure is surfaced without retry.
    pub fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let rc = unsafe { sys::nn_close(self.fd) };
        if rc == 0 {
            tracing::debug!(fd = self.fd, "socket closed");
            return Ok(());
        }
        let errno = Errno::last();
        if errno.code() == libc::EINTR {
            // Descriptor is still live; re-arm the drop path.
            self.closed.store(false, Ordering::Release);
        }
        Err(Error::System(errno))
    }

    /// Sends a message, blocking until the engine accepts it.
    ///
    /// Zero-length messages are legal. Returns the number of bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.send_flags(buf, 0)
    }

    /// Non-blocking send; fails with [`Error::WouldBlock`] when no peer can
    /// accept the message right now.
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.send_flags(buf, sys::NN_DONTWAIT)
    }

    fn send_flags(&self, buf: &[u8], flags: c_int) -> Result<usize> {
        self.check_open()?;
        let rc = unsafe { sys::nn_send(self.fd, buf.as_ptr().cast(), buf.len(), flags) };
        if rc < 0 {
            return Err(last_error());
        }
        tracing::trace!(fd = self.fd, bytes = rc, "sent");
        Ok(rc as usize)
    }

    /// Receives a message, blocking until one arrives or a configured
    /// receive timeout elapses ([`Error::Timeout`]).
    ///
    /// The returned [`Message`] aliases engine-owned memory; no copy is
    /// performed.
    pub fn recv(&self) -> Result<Message> {
        self.recv_flags(0)
    }

    /// Non-blocking receive; fails with [`Error::WouldBlock`] when no
    /// message is queued.
    pub fn try_recv(&self) -> Result<Message> {
        self.recv_flags(sys::NN_DONTWAIT)
    }

    fn recv_flags(&self, flags: c_int) -> Result<Message> {
        self.check_open()?;
        let mut buf: *mut c_void = ptr::null_mut();
        let rc = unsafe {
            sys::nn_recv(
                self.fd,
                (&mut buf as *mut *mut c_void).cast(),
                sys::NN_MSG,
                flags,
            )
        };
        if rc < 0 {
            return Err(last_error());
        }
        tracing::trace!(fd = self.fd, bytes = rc, "received");
        Ok(unsafe { Message::from_raw(buf.cast(), rc as usize) })
    }

    /// Adds a local endpoint. The address has the form
    /// `transport://transport-address`, e.g. `tcp://*:5555` or
    /// `inproc://name`.
    pub fn bind(&self, addr: &str) -> Result<Endpoint> {
        self.add_endpoint(addr, true)
    }

    /// Adds a remote endpoint. Same address syntax as [`Socket::bind`].
    pub fn connect(&self, addr: &str) -> Result<Endpoint> {
        self.add_endpoint(addr, false)
    }

    fn add_endpoint(&self, addr: &str, bind: bool) -> Result<Endpoint> {
        self.check_open()?;
        let caddr = CString::new(addr).map_err(|_| Error::Address(addr.to_owned()))?;
        let id = unsafe {
            if bind {
                sys::nn_bind(self.fd, caddr.as_ptr())
            } else {
                sys::nn_connect(self.fd, caddr.as_ptr())
            }
        };
        if id < 0 {
            let errno = Errno::last();
            return Err(match errno.code() {
                libc::EINVAL | libc::EPROTONOSUPPORT | libc::ENAMETOOLONG => {
                    Error::Address(addr.to_owned())
                }
                _ => classify(errno),
            });
        }
        tracing::debug!(fd = self.fd, addr, id, bind, "endpoint added");
        Ok(Endpoint::new(addr.to_owned(), id, self.fd))
    }

    /// Removes an endpoint, reversing the bind or connect that created it.
    ///
    /// Consumes the endpoint; an endpoint created by a different socket is
    /// rejected with [`Error::EndpointMismatch`].
    pub fn shutdown(&self, endpoint: Endpoint) -> Result<()> {
        self.check_open()?;
        if endpoint.owner() != self.fd {
            return Err(Error::EndpointMismatch);
        }
        let rc = unsafe { sys::nn_shutdown(self.fd, endpoint.id()) };
        if rc != 0 {
            return Err(last_error());
        }
        tracing::debug!(fd = self.fd, addr = %endpoint, "endpoint shut down");
        Ok(())
    }

    // Byte-level option primitives. The typed accessors in `options` are
    // built exclusively on these two.

    pub(crate) fn get_option(&self, level: c_int, option: c_int, buf: &mut [u8]) -> Result<usize> {
        self.check_open()?;
        let mut len: libc::size_t = buf.len();
        let rc = unsafe {
            sys::nn_getsockopt(self.fd, level, option, buf.as_mut_ptr().cast(), &mut len)
        };
        if rc != 0 {
            return Err(last_error());
        }
        Ok(len)
    }

    pub(crate) fn set_option(&self, level: c_int, option: c_int, val: &[u8]) -> Result<()> {
        self.check_open()?;
        let rc =
            unsafe { sys::nn_setsockopt(self.fd, level, option, val.as_ptr().cast(), val.len()) };
        if rc != 0 {
            return Err(last_error());
        }
        Ok(())
    }

    pub(crate) fn raw_fd(&self) -> c_int {
        self.fd
    }
}

impl Drop for Socket {
    fn drop(&mut self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        // Safety-net release; retry only while the engine reports an
        // interrupted close.
        loop {
            let rc = unsafe { sys::nn_close(self.fd) };
            if rc == 0 {
                break;
            }
            if Errno::last().code() != libc::EINTR {
                tracing::debug!(fd = self.fd, "native close failed during drop");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_names() {
        assert_eq!(Protocol::Surveyor.to_string(), "SURVEYOR");
        assert_eq!(Protocol::Pub.to_string(), "PUB");
        assert_eq!(Domain::Raw.to_string(), "SP_RAW");
    }

    #[test]
    fn fan_roles_share_pipeline_identifiers() {
        assert_eq!(Protocol::Source.to_raw(), Protocol::Push.to_raw());
        assert_eq!(Protocol::Sink.to_raw(), Protocol::Pull.to_raw());
    }
}
