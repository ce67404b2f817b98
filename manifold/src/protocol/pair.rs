//! PAIR: exclusive one-to-one communication.

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Communicates with exactly one peer; either party may send at any
    /// time. When the peer is unavailable or the send buffer is full, a
    /// blocking send waits until delivery becomes possible.
    PairSocket, Pair
}

impl PairSocket {
    /// Sends a message to the peer. Returns the number of bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`PairSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives a message from the peer.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`PairSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
