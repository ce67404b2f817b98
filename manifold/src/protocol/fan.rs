//! SOURCE/SINK: fan-out towards a central aggregation point.
//!
//! The engine implements the fan roles with the pipeline protocol; the
//! flavors keep the directional surface of the pattern.

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Sends messages towards the central sink. Receiving is not part of
    /// the source pattern.
    SourceSocket, Source
}

impl SourceSocket {
    /// Sends a message towards the sink. Returns the number of bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`SourceSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }
}

flavor! {
    /// Aggregates messages from many sources, fair-queued. Sending is not
    /// part of the sink pattern.
    SinkSocket, Sink
}

impl SinkSocket {
    /// Receives the next message from any connected source.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`SinkSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
