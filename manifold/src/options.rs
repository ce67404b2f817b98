//! Typed socket options over the engine's byte-level option channel.
//!
//! Every named option is one of four typed projections — integer, boolean,
//! duration, bounded string — bound to a (scope, name) pair. The projections
//! are the only users of the raw byte primitives on [`Socket`]; adding an
//! option never adds mechanism, only a binding.
//!
//! Durations cross the boundary as integer milliseconds; a negative count
//! means "infinite" and is surfaced as `None`.

use std::time::Duration;

use libc::c_int;
use manifold_sys as sys;

use crate::error::Result;
use crate::socket::Socket;

/// Upper bound the engine places on socket names.
const SOCKET_NAME_MAX: usize = 63;

fn millis(duration: Duration) -> c_int {
    c_int::try_from(duration.as_millis()).unwrap_or(c_int::MAX)
}

impl Socket {
    // Typed projections -----------------------------------------------------

    pub(crate) fn option_int(&self, level: c_int, option: c_int) -> Result<i32> {
        let mut buf = [0u8; 4];
        let len = self.get_option(level, option, &mut buf)?;
        debug_assert_eq!(len, buf.len());
        Ok(i32::from_ne_bytes(buf))
    }

    pub(crate) fn set_option_int(&self, level: c_int, option: c_int, value: i32) -> Result<()> {
        self.set_option(level, option, &value.to_ne_bytes())
    }

    pub(crate) fn option_bool(&self, level: c_int, option: c_int) -> Result<bool> {
        Ok(self.option_int(level, option)? != 0)
    }

    pub(crate) fn set_option_bool(&self, level: c_int, option: c_int, value: bool) -> Result<()> {
        self.set_option_int(level, option, i32::from(value))
    }

    pub(crate) fn option_duration(
        &self,
        level: c_int,
        option: c_int,
    ) -> Result<Option<Duration>> {
        let ms = self.option_int(level, option)?;
        if ms < 0 {
            Ok(None)
        } else {
            Ok(Some(Duration::from_millis(u64::from(ms as u32))))
        }
    }

    pub(crate) fn set_option_duration(
        &self,
        level: c_int,
        option: c_int,
        value: Option<Duration>,
    ) -> Result<()> {
        self.set_option_int(level, option, value.map_or(-1, millis))
    }

    pub(crate) fn option_string(&self, level: c_int, option: c_int, max: usize) -> Result<String> {
        // One extra byte for the terminator the engine may append.
        let mut buf = vec![0u8; max + 1];
        let len = self.get_option(level, option, &mut buf)?;
        buf.truncate(len.min(max));
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub(crate) fn set_option_string(&self, level: c_int, option: c_int, value: &str) -> Result<()> {
        self.set_option(level, option, value.as_bytes())
    }

    // Socket-level options --------------------------------------------------

    /// How long pending outbound messages are flushed after [`close`]
    /// before being discarded. `None` lingers forever. Default one second.
    ///
    /// [`close`]: Socket::close
    pub fn linger(&self) -> Result<Option<Duration>> {
        self.option_duration(sys::NN_SOL_SOCKET, sys::NN_LINGER)
    }

    /// Sets the linger interval; `None` lingers forever.
    pub fn set_linger(&self, linger: Option<Duration>) -> Result<()> {
        self.set_option_duration(sys::NN_SOL_SOCKET, sys::NN_LINGER, linger)
    }

    /// Size of the outbound buffer in bytes.
    pub fn send_buffer_size(&self) -> Result<usize> {
        Ok(self.option_int(sys::NN_SOL_SOCKET, sys::NN_SNDBUF)?.max(0) as usize)
    }

    /// Sets the outbound buffer size in bytes.
    pub fn set_send_buffer_size(&self, bytes: usize) -> Result<()> {
        self.set_option_int(
            sys::NN_SOL_SOCKET,
            sys::NN_SNDBUF,
            i32::try_from(bytes).unwrap_or(i32::MAX),
        )
    }

    /// Size of the inbound buffer in bytes.
    pub fn recv_buffer_size(&self) -> Result<usize> {
        Ok(self.option_int(sys::NN_SOL_SOCKET, sys::NN_RCVBUF)?.max(0) as usize)
    }

    /// Sets the inbound buffer size in bytes.
    pub fn set_recv_buffer_size(&self, bytes: usize) -> Result<()> {
        self.set_option_int(
            sys::NN_SOL_SOCKET,
            sys::NN_RCVBUF,
            i32::try_from(bytes).unwrap_or(i32::MAX),
        )
    }

    /// Maximum time a blocking send may wait. `None` blocks indefinitely
    /// (default). An elapsed deadline surfaces as
    /// [`Error::Timeout`](crate::Error::Timeout).
    pub fn send_timeout(&self) -> Result<Option<Duration>> {
        self.option_duration(sys::NN_SOL_SOCKET, sys::NN_SNDTIMEO)
    }

    /// Sets the send timeout; `None` blocks indefinitely.
    pub fn set_send_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.set_option_duration(sys::NN_SOL_SOCKET, sys::NN_SNDTIMEO, timeout)
    }

    /// Maximum time a blocking receive may wait. `None` blocks indefinitely
    /// (default).
    pub fn recv_timeout(&self) -> Result<Option<Duration>> {
        self.option_duration(sys::NN_SOL_SOCKET, sys::NN_RCVTIMEO)
    }

    /// Sets the receive timeout; `None` blocks indefinitely.
    pub fn set_recv_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.set_option_duration(sys::NN_SOL_SOCKET, sys::NN_RCVTIMEO, timeout)
    }

    /// Delay before the first attempt to re-establish a broken connection.
    /// Default 100 ms.
    pub fn reconnect_interval(&self) -> Result<Duration> {
        let ms = self.option_int(sys::NN_SOL_SOCKET, sys::NN_RECONNECT_IVL)?;
        Ok(Duration::from_millis(u64::from(ms.max(0) as u32)))
    }

    /// Sets the initial reconnection delay.
    pub fn set_reconnect_interval(&self, interval: Duration) -> Result<()> {
        self.set_option_int(sys::NN_SOL_SOCKET, sys::NN_RECONNECT_IVL, millis(interval))
    }

    /// Ceiling for exponential reconnection backoff. Zero disables the
    /// backoff and reuses the base interval for every attempt.
    pub fn reconnect_interval_max(&self) -> Result<Duration> {
        let ms = self.option_int(sys::NN_SOL_SOCKET, sys::NN_RECONNECT_IVL_MAX)?;
        Ok(Duration::from_millis(u64::from(ms.max(0) as u32)))
    }

    /// Sets the reconnection backoff ceiling.
    pub fn set_reconnect_interval_max(&self, max: Duration) -> Result<()> {
        self.set_option_int(sys::NN_SOL_SOCKET, sys::NN_RECONNECT_IVL_MAX, millis(max))
    }

    /// Outbound priority of subsequently added endpoints, 1 (highest) to 16.
    pub fn send_priority(&self) -> Result<u8> {
        Ok(self.option_int(sys::NN_SOL_SOCKET, sys::NN_SNDPRIO)?.clamp(1, 16) as u8)
    }

    /// Sets the outbound priority for subsequently added endpoints.
    pub fn set_send_priority(&self, priority: u8) -> Result<()> {
        self.set_option_int(sys::NN_SOL_SOCKET, sys::NN_SNDPRIO, i32::from(priority))
    }

    /// Inbound priority of subsequently added endpoints, 1 (highest) to 16.
    pub fn recv_priority(&self) -> Result<u8> {
        Ok(self.option_int(sys::NN_SOL_SOCKET, sys::NN_RCVPRIO)?.clamp(1, 16) as u8)
    }

    /// Sets the inbound priority for subsequently added endpoints.
    pub fn set_recv_priority(&self, priority: u8) -> Result<()> {
        self.set_option_int(sys::NN_SOL_SOCKET, sys::NN_RCVPRIO, i32::from(priority))
    }

    /// Whether TCP endpoints are restricted to IPv4. Default true.
    pub fn ipv4_only(&self) -> Result<bool> {
        self.option_bool(sys::NN_SOL_SOCKET, sys::NN_IPV4ONLY)
    }

    /// Restricts or opens TCP endpoints to IPv4 / IPv6.
    pub fn set_ipv4_only(&self, ipv4_only: bool) -> Result<()> {
        self.set_option_bool(sys::NN_SOL_SOCKET, sys::NN_IPV4ONLY, ipv4_only)
    }

    /// The socket's diagnostic name.
    pub fn name(&self) -> Result<String> {
        self.option_string(sys::NN_SOL_SOCKET, sys::NN_SOCKET_NAME, SOCKET_NAME_MAX)
    }

    /// Sets the socket's diagnostic name (bounded at 63 bytes).
    pub fn set_name(&self, name: &str) -> Result<()> {
        self.set_option_string(sys::NN_SOL_SOCKET, sys::NN_SOCKET_NAME, name)
    }

    /// Cap on the size of received messages; `None` is unlimited.
    pub fn recv_max_size(&self) -> Result<Option<usize>> {
        let size = self.option_int(sys::NN_SOL_SOCKET, sys::NN_RCVMAXSIZE)?;
        if size < 0 {
            Ok(None)
        } else {
            Ok(Some(size as usize))
        }
    }

    /// Sets the received-message size cap; `None` removes the cap.
    pub fn set_recv_max_size(&self, max: Option<usize>) -> Result<()> {
        let value = match max {
            Some(bytes) => i32::try_from(bytes).unwrap_or(i32::MAX),
            None => -1,
        };
        self.set_option_int(sys::NN_SOL_SOCKET, sys::NN_RCVMAXSIZE, value)
    }

    // Transport-level options -----------------------------------------------

    /// Whether Nagle's algorithm is disabled on TCP endpoints.
    pub fn tcp_nodelay(&self) -> Result<bool> {
        self.option_bool(sys::NN_TCP, sys::NN_TCP_NODELAY)
    }

    /// Disables or re-enables Nagle's algorithm on TCP endpoints.
    pub fn set_tcp_nodelay(&self, nodelay: bool) -> Result<()> {
        self.set_option_bool(sys::NN_TCP, sys::NN_TCP_NODELAY, nodelay)
    }
}
