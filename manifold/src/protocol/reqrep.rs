//! REQ/REP: synchronous request/reply.

use std::time::Duration;

use manifold_sys as sys;

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Client side of request/reply: sends requests and receives the
    /// matching replies. Sending a second request before the reply arrived
    /// cancels the outstanding one.
    ReqSocket, Req
}

impl ReqSocket {
    /// Sends a request. Returns the number of bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`ReqSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives the reply to the outstanding request.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`ReqSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }

    /// How long to wait for a reply before the request is resent.
    /// Default one minute.
    pub fn resend_interval(&self) -> Result<Duration> {
        let ms = self.socket.option_int(sys::NN_REQ, sys::NN_REQ_RESEND_IVL)?;
        Ok(Duration::from_millis(u64::from(ms.max(0) as u32)))
    }

    /// Sets the automatic resend interval for unanswered requests.
    pub fn set_resend_interval(&self, interval: Duration) -> Result<()> {
        self.socket.set_option_int(
            sys::NN_REQ,
            sys::NN_REQ_RESEND_IVL,
            i32::try_from(interval.as_millis()).unwrap_or(i32::MAX),
        )
    }
}

flavor! {
    /// Server side of request/reply: a stateless worker that receives
    /// requests and sends replies. A reply is only valid after a request
    /// was received.
    RepSocket, Rep
}

impl RepSocket {
    /// Sends the reply to the last received request.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`RepSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives the next request.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`RepSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
