//! SURVEYOR/RESPONDENT: one-to-many query with a deadline.

use std::time::Duration;

use manifold_sys as sys;

use crate::error::Result;
use crate::message::Message;
use crate::protocol::flavor;

flavor! {
    /// Sends a survey to all connected respondents, then collects their
    /// responses until the deadline expires. Once the deadline has passed,
    /// receiving fails with [`Error::Timeout`](crate::Error::Timeout) and
    /// late responses are dropped.
    SurveyorSocket, Surveyor
}

impl SurveyorSocket {
    /// Sends a survey to every connected respondent. Returns the number of
    /// bytes sent.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`SurveyorSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives the next response to the active survey.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`SurveyorSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }

    /// How long responses to a survey are accepted. Default one second.
    pub fn deadline(&self) -> Result<Duration> {
        let ms = self
            .socket
            .option_int(sys::NN_SURVEYOR, sys::NN_SURVEYOR_DEADLINE)?;
        Ok(Duration::from_millis(u64::from(ms.max(0) as u32)))
    }

    /// Sets the survey deadline.
    pub fn set_deadline(&self, deadline: Duration) -> Result<()> {
        self.socket.set_option_int(
            sys::NN_SURVEYOR,
            sys::NN_SURVEYOR_DEADLINE,
            i32::try_from(deadline.as_millis()).unwrap_or(i32::MAX),
        )
    }
}

flavor! {
    /// Answers surveys: receives a survey with `recv`, replies with `send`.
    RespondentSocket, Respondent
}

impl RespondentSocket {
    /// Sends the response to the last received survey.
    pub fn send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.send(buf)
    }

    /// Non-blocking variant of [`RespondentSocket::send`].
    pub fn try_send(&self, buf: &[u8]) -> Result<usize> {
        self.socket.try_send(buf)
    }

    /// Receives the next survey.
    pub fn recv(&self) -> Result<Message> {
        self.socket.recv()
    }

    /// Non-blocking variant of [`RespondentSocket::recv`].
    pub fn try_recv(&self) -> Result<Message> {
        self.socket.try_recv()
    }
}
