//! PUB/SUB: topic-filtered broadcast.

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;
use manifold_sys as sys;

flavor! {
    /// Distributes every sent message to all connected subscribers.
    /// Receiving is not part of the publish pattern.
    PubSocket, Pub
}

impl PubSocket {
    /// Broadcasts a message to the current subscribers. Returns the number
    /// of bytes sent. Subscribers that are not connected yet miss the
    /// message; there is no queueing towards absent peers.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`PubSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }
}

flavor! {
    /// Receives messages from publishers, filtered by subscribed topics.
    ///
    /// A fresh subscriber has no subscriptions and receives nothing until
    /// [`SubSocket::subscribe`] is called. The empty topic matches every
    /// message. Sending is not part of the subscribe pattern.
    SubSocket, Sub
}

impl SubSocket {
    /// Starts receiving messages whose body begins with `topic`.
    pub fn subscribe(&self, topic: &[u8]) -> Result<()> {
        self.socket.set_option(sys::NN_SUB, sys::NN_SUB_SUBSCRIBE, topic)
    }

    /// Stops receiving messages matching a previously subscribed `topic`.
    pub fn unsubscribe(&self, topic: &[u8]) -> Result<()> {
        self.socket.set_option(sys::NN_SUB, sys::NN_SUB_UNSUBSCRIBE, topic)
    }

    /// Receives the next matching message.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`SubSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
