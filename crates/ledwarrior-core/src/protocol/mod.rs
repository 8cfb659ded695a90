//! LED Warrior 14 serial protocol.
//!
//! The protocol follows a layered structure:
//! - `layout`: marker bytes, header values, status bits and offsets
//! - `codec`: byte stuffing and frame reassembly from the byte stream
//! - `reader`: bounds-checked access to decoded frames
//! - `parser`: message decoding (no direct byte indexing)
//! - `message`: inbound messages and outbound requests
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure; the only I/O is `codec::read_frame`, which pulls bytes
//! from a [`Transport`](crate::transport::Transport).
//!
//! Version française (résumé):
//! Trames délimitées par START/STOP avec échappement ESC ; l'en-tête du
//! message décide de la suite (statut, trame DALI, octet d'écho). Les en-têtes
//! inconnus donnent `Message::Unknown`, jamais une erreur.

pub mod codec;
pub mod error;
pub mod header;
pub mod layout;
pub mod message;
pub mod parser;
pub mod reader;
pub mod status;

pub use codec::{DecodeState, FrameDecoder, ReadBudget, read_frame, stuff};
pub use error::MessageError;
pub use header::Header;
pub use message::{Message, Request};
pub use parser::parse_message;
pub use status::{StatusFlag, StatusFlags};
