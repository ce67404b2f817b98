//! Error taxonomy and translation of native engine failures.
//!
//! Every native call that reports a sentinel failure value is translated
//! here, at the call site, before being surfaced. Conditions with a
//! well-known general-purpose meaning normalize onto [`std::io::ErrorKind`]
//! so callers can match on them portably; conditions unique to the engine
//! (wrong protocol state, process-wide termination) are distinct variants.

use std::ffi::CStr;
use std::fmt;
use std::io;

use libc::c_int;
use manifold_sys as sys;
use thiserror::Error;

/// Result type alias for manifold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A numeric error code reported by the engine.
///
/// `Display` renders the engine's own human-readable description.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Errno(c_int);

impl Errno {
    pub(crate) fn last() -> Self {
        Self(unsafe { sys::nn_errno() })
    }

    #[cfg(test)]
    pub(crate) const fn from_raw(code: c_int) -> Self {
        Self(code)
    }

    /// The raw numeric code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.0
    }

    /// The closest standard [`io::ErrorKind`] for this code.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        use io::ErrorKind::*;
        match self.0 {
            libc::EADDRINUSE => AddrInUse,
            libc::EADDRNOTAVAIL => AddrNotAvailable,
            libc::ECONNREFUSED => ConnectionRefused,
            libc::ECONNRESET => ConnectionReset,
            libc::ECONNABORTED => ConnectionAborted,
            libc::ENOTCONN => NotConnected,
            libc::EPIPE => BrokenPipe,
            libc::EINTR => Interrupted,
            libc::EINVAL | libc::ENAMETOOLONG => InvalidInput,
            libc::EACCES => PermissionDenied,
            libc::ETIMEDOUT => TimedOut,
            libc::EAGAIN => WouldBlock,
            libc::ENOMEM | libc::ENOBUFS => OutOfMemory,
            libc::EPROTONOSUPPORT | libc::ENOTSUP | libc::EAFNOSUPPORT => Unsupported,
            _ => Other,
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = unsafe {
            let ptr = sys::nn_strerror(self.0);
            if ptr.is_null() {
                None
            } else {
                Some(CStr::from_ptr(ptr).to_string_lossy())
            }
        };
        match text {
            Some(text) => write!(f, "{text} (code {})", self.0),
            None => write!(f, "unknown engine error (code {})", self.0),
        }
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Errno({self})")
    }
}

/// Main error type for manifold operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Socket allocation failed.
    #[error("socket creation failed: {0}")]
    Creation(Errno),

    /// Malformed or unsupported endpoint address.
    #[error("invalid endpoint address `{0}`")]
    Address(String),

    /// Operation attempted on a handle that was already closed.
    #[error("socket closed")]
    SocketClosed,

    /// The endpoint passed to `shutdown` was created by a different socket.
    #[error("endpoint does not belong to this socket")]
    EndpointMismatch,

    /// A non-blocking operation had nothing to do immediately.
    #[error("operation would block")]
    WouldBlock,

    /// A configured send/receive/survey deadline elapsed.
    #[error("operation timed out")]
    Timeout,

    /// Operation not valid in the socket's current protocol state.
    #[error("operation not valid in the socket's current state")]
    InvalidState,

    /// The messaging library is shutting down process-wide.
    #[error("messaging library is terminating")]
    Terminating,

    /// Any other native failure, with the engine's code and description.
    #[error("{0}")]
    System(Errno),
}

impl Error {
    /// The closest standard [`io::ErrorKind`] for this error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Creation(e) | Self::System(e) => e.kind(),
            Self::Address(_) | Self::EndpointMismatch => io::ErrorKind::InvalidInput,
            Self::SocketClosed => io::ErrorKind::NotConnected,
            Self::WouldBlock => io::ErrorKind::WouldBlock,
            Self::Timeout => io::ErrorKind::TimedOut,
            Self::InvalidState | Self::Terminating => io::ErrorKind::Other,
        }
    }

    /// Whether retrying the same operation later may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::WouldBlock | Self::Timeout => true,
            Self::System(e) => e.code() == libc::EINTR,
            _ => false,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = err.kind();
        Self::new(kind, err)
    }
}

/// Maps an engine code onto the library taxonomy.
pub(crate) fn classify(errno: Errno) -> Error {
    match errno.code() {
        libc::EAGAIN => Error::WouldBlock,
        libc::ETIMEDOUT => Error::Timeout,
        sys::EFSM => Error::InvalidState,
        sys::ETERM => Error::Terminating,
        _ => Error::System(errno),
    }
}

/// Reads and classifies the engine's thread-local error code.
pub(crate) fn last_error() -> Error {
    classify(Errno::last())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(matches!(classify(Errno::from_raw(libc::EAGAIN)), Error::WouldBlock));
        assert!(matches!(classify(Errno::from_raw(libc::ETIMEDOUT)), Error::Timeout));
        assert!(matches!(classify(Errno::from_raw(sys::EFSM)), Error::InvalidState));
        assert!(matches!(classify(Errno::from_raw(sys::ETERM)), Error::Terminating));
        assert!(matches!(classify(Errno::from_raw(libc::ECONNREFUSED)), Error::System(_)));
    }

    #[test]
    fn errno_kind_normalization() {
        assert_eq!(Errno::from_raw(libc::EADDRINUSE).kind(), io::ErrorKind::AddrInUse);
        assert_eq!(
            Errno::from_raw(libc::ECONNREFUSED).kind(),
            io::ErrorKind::ConnectionRefused
        );
        assert_eq!(Errno::from_raw(libc::EINVAL).kind(), io::ErrorKind::InvalidInput);
        assert_eq!(Errno::from_raw(libc::EINTR).kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn transient_errors() {
        assert!(Error::WouldBlock.is_transient());
        assert!(Error::Timeout.is_transient());
        assert!(Error::System(Errno::from_raw(libc::EINTR)).is_transient());
        assert!(!Error::SocketClosed.is_transient());
        assert!(!Error::Terminating.is_transient());
    }
}
