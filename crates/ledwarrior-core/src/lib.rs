//! Host-side driver for DALI lighting buses behind an LED Warrior 14 bridge.
//!
//! The bridge is a microcontroller attached over USB-serial. The host talks
//! to it with byte-stuffed frames; the bridge puts forward frames on the DALI
//! bus and reports what it hears back. This crate implements the serial
//! framing (`protocol::codec`), message decoding (`protocol::parser`), the
//! command/response transaction (`transaction`) and the driver facade
//! (`driver`). The DALI command set itself lives outside this crate behind
//! the [`DaliCommand`] trait.
//!
//! Invariants:
//! - One transaction at a time: the driver owns the transport and every
//!   operation takes `&mut self`.
//! - Serial noise never surfaces as an error; reassembly resynchronises on
//!   the next start marker.
//! - "No reply" and "invalid reply" are ordinary outcomes. Only a bridge that
//!   never closes the reply timeframe yields [`TransactionError::Timeout`].
//!
//! Version française (résumé):
//! Pilote côté hôte pour le pont USB-série LED Warrior 14 : tramage avec
//! échappement, décodage des messages, transaction commande/réponse avec les
//! fenêtres de temps DALI (20 ms puis 40 ms), et auto-test par écho à
//! l'ouverture.
//!
//! # Examples
//! ```no_run
//! use ledwarrior_core::{BackwardFrame, DaliCommand, ForwardFrame, Lw14Driver, Response};
//!
//! struct QueryActualLevel(u8);
//!
//! impl DaliCommand for QueryActualLevel {
//!     type Response = Option<u8>;
//!
//!     fn frame(&self) -> ForwardFrame {
//!         ForwardFrame::from_bytes([(self.0 << 1) | 1, 0xA0])
//!     }
//!
//!     fn is_query(&self) -> bool {
//!         true
//!     }
//!
//!     fn response(&self, reply: Option<BackwardFrame>) -> Option<u8> {
//!         reply.map(BackwardFrame::value)
//!     }
//! }
//!
//! let mut driver = Lw14Driver::open("/dev/ttyACM0")?;
//! if let Response::Decoded(Some(level)) = driver.send(&QueryActualLevel(3))? {
//!     println!("gear 3 level: {level}");
//! }
//! # Ok::<(), ledwarrior_core::DriverError>(())
//! ```

pub mod command;
pub mod config;
pub mod driver;
pub mod frame;
pub mod protocol;
pub mod transaction;
pub mod transport;

pub use command::{DaliCommand, Response};
pub use config::{ConfigError, DriverConfig};
pub use driver::{DriverError, Lw14Driver};
pub use frame::{BackwardFrame, ForwardFrame};
pub use protocol::{Message, StatusFlags};
pub use transaction::{Outcome, Timing, TransactionEngine, TransactionError};
pub use transport::{SerialTransport, Transport};
