//! Command/response transactions with the bridge.
//!
//! A transaction writes one request and then polls inbound frames until the
//! bridge closes the DALI reply timeframe. The deadline starts at the settle
//! window and is stretched to the reply window when the bridge reports that
//! a backward frame is on its way. It is checked between frame reads only:
//! each read runs on its own `ReadBudget`, so a message the bridge sends late
//! in the window is still picked up. Frames that cannot be decoded, unknown
//! headers and unrelated messages are skipped.

mod error;

pub use error::TransactionError;

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::command::{DaliCommand, Response};
use crate::frame::BackwardFrame;
use crate::protocol::{Message, ReadBudget, Request, parse_message, read_frame, stuff};
use crate::transport::Transport;

/// Raw result of a transaction, before any command-specific conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reply(BackwardFrame),
    NoReply,
    InvalidReply,
}

impl Outcome {
    pub fn backward_frame(self) -> Option<BackwardFrame> {
        match self {
            Outcome::Reply(frame) => Some(frame),
            _ => None,
        }
    }
}

/// DALI bus timing assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Initial deadline, covering the backward-frame settle time.
    pub settle_window: Duration,
    /// Deadline once a valid reply has been announced.
    pub reply_window: Duration,
    pub read_budget: ReadBudget,
}

impl Timing {
    pub const DEFAULT_SETTLE_WINDOW: Duration = Duration::from_millis(20);
    pub const DEFAULT_REPLY_WINDOW: Duration = Duration::from_millis(40);
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_window: Self::DEFAULT_SETTLE_WINDOW,
            reply_window: Self::DEFAULT_REPLY_WINDOW,
            read_budget: ReadBudget::default(),
        }
    }
}

/// Owns the transport and runs one transaction at a time.
///
/// Every operation takes `&mut self` and the engine is not `Clone`, so two
/// transactions can never interleave on the same link. Share it between
/// threads behind a `Mutex` if needed.
pub struct TransactionEngine<T> {
    transport: T,
    timing: Timing,
}

impl<T: Transport> TransactionEngine<T> {
    pub fn new(transport: T, timing: Timing) -> Self {
        Self { transport, timing }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Stuff and write a request.
    pub fn write_request(&mut self, request: &Request) -> Result<(), TransactionError> {
        let payload = request.to_payload();
        debug!("write serial frame {request:?}, payload {payload:02x?}");
        self.transport.write_all(&stuff(&payload))?;
        Ok(())
    }

    /// Read and decode the next message, or `None` when no frame arrived.
    ///
    /// Frames that fail to decode are logged and reported as `None`.
    pub fn read_message(&mut self) -> Result<Option<Message>, TransactionError> {
        let Some(frame) = read_frame(&mut self.transport, &self.timing.read_budget)? else {
            return Ok(None);
        };
        match parse_message(&frame) {
            Ok(message) => {
                debug!("read serial frame {frame:02x?}, decoded {message}");
                Ok(Some(message))
            }
            Err(err) => {
                warn!("dropping serial frame {frame:02x?}: {err}");
                Ok(None)
            }
        }
    }

    /// Send a DALI command and convert the outcome for the caller.
    ///
    /// Query commands get their answer (or silence) converted by the command.
    /// An invalid reply becomes an affirmative answer for commands that treat
    /// collisions as "yes"; otherwise it is returned raw.
    pub fn send<C: DaliCommand>(
        &mut self,
        command: &C,
        priority: u8,
        delay: u8,
    ) -> Result<Response<C::Response>, TransactionError> {
        let request = Request::DaliCommand {
            frame: command.frame(),
            priority,
            delay,
            send_twice: command.is_config(),
        };
        let outcome = self.transact(&request)?;

        let response = match outcome {
            Outcome::InvalidReply if command.collision_is_affirmative() => {
                Response::Decoded(command.response(Some(BackwardFrame::YES)))
            }
            Outcome::InvalidReply => Response::Raw(outcome),
            _ if command.is_query() => Response::Decoded(command.response(outcome.backward_frame())),
            _ => Response::Raw(outcome),
        };
        Ok(response)
    }

    /// Write `request` and wait for the bridge to resolve it.
    pub fn transact(&mut self, request: &Request) -> Result<Outcome, TransactionError> {
        self.write_request(request)?;

        let started = Instant::now();
        let mut window = self.timing.settle_window;
        let mut invalid_frame = false;

        loop {
            if started.elapsed() >= window {
                return Err(TransactionError::Timeout { window });
            }
            let Some(message) = self.read_message()? else {
                continue;
            };
            match message {
                Message::TimeframeExpired { status } => {
                    if invalid_frame {
                        debug!("transaction resolved: invalid reply");
                        return Ok(Outcome::InvalidReply);
                    }
                    if !status.valid_reply() {
                        return Ok(Outcome::NoReply);
                    }
                    window = self.timing.reply_window;
                }
                Message::InvalidDaliFrame { .. } => invalid_frame = true,
                Message::DaliRcv1Byte { frame, .. } => return Ok(Outcome::Reply(frame)),
                _ => {}
            }
        }
    }

    /// Send an echo request and return the echoed byte, if one came back.
    pub fn echo(&mut self, byte: u8) -> Result<Option<u8>, TransactionError> {
        self.write_request(&Request::Echo { byte })?;
        match self.read_message()? {
            Some(Message::Echo { byte }) => Ok(Some(byte)),
            _ => Ok(None),
        }
    }
}
