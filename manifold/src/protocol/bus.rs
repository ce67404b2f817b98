//! BUS: many-to-many broadcast.

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Broadcasts sent messages to every other node in the topology and
    /// fair-queues messages arriving from them. Messages are not forwarded
    /// between peers.
    BusSocket, Bus
}

impl BusSocket {
    /// Broadcasts a message to all connected nodes. Returns the number of
    /// bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`BusSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives the next message from any connected node.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`BusSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
