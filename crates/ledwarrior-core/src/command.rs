//! Interface to a DALI command model.
//!
//! The driver does not know the DALI command set. It only needs the forward
//! frame to transmit, how the command must be sent, and how to turn the raw
//! outcome into the command's own response type.

use crate::frame::{BackwardFrame, ForwardFrame};
use crate::transaction::Outcome;

pub trait DaliCommand {
    type Response;

    /// Address and opcode bytes, in transmission order.
    fn frame(&self) -> ForwardFrame;

    /// Config commands only take effect when received twice within 100ms.
    fn is_config(&self) -> bool {
        false
    }

    /// Query commands expect a backward frame.
    fn is_query(&self) -> bool {
        false
    }

    /// A framing error while this command waits for its answer means several
    /// gears answered at once, which counts as "yes" (COMPARE during
    /// addressing).
    fn collision_is_affirmative(&self) -> bool {
        false
    }

    /// Build the response from the received backward frame, or `None` when
    /// the bus stayed silent.
    fn response(&self, reply: Option<BackwardFrame>) -> Self::Response;
}

/// Result of sending a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<R> {
    /// Answer converted by the command.
    Decoded(R),
    /// Outcome passed through unchanged (non-query commands, invalid replies).
    Raw(Outcome),
}

impl<R> Response<R> {
    pub fn decoded(self) -> Option<R> {
        match self {
            Response::Decoded(response) => Some(response),
            Response::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<Outcome> {
        match self {
            Response::Decoded(_) => None,
            Response::Raw(outcome) => Some(*outcome),
        }
    }

    pub fn is_invalid_reply(&self) -> bool {
        matches!(self, Response::Raw(Outcome::InvalidReply))
    }
}
