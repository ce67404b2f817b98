//! PUSH/PULL: load-balanced pipeline.

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Sends messages to a cluster of load-balanced nodes. Receiving is not
    /// part of the push pattern.
    PushSocket, Push
}

impl PushSocket {
    /// Sends a message to one of the connected pullers. Returns the number
    /// of bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`PushSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }
}

flavor! {
    /// Receives messages from a cluster of pushers, fair-queued. Sending is
    /// not part of the pull pattern.
    PullSocket, Pull
}

impl PullSocket {
    /// Receives the next message from the pipeline.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`PullSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
