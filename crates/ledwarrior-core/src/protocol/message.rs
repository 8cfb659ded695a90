use std::fmt;

use super::header::Header;
use super::layout;
use super::status::StatusFlags;
use crate::frame::{BackwardFrame, ForwardFrame};

/// Message decoded from a frame sent by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Command frame echoed back; carries no decoded fields.
    DaliCommand,
    /// Backward frame received on the bus.
    DaliRcv1Byte {
        status: StatusFlags,
        frame: BackwardFrame,
    },
    /// Forward frame observed on the bus.
    DaliRcv2Bytes {
        status: StatusFlags,
        frame: ForwardFrame,
    },
    /// The reply timeframe of the last command closed.
    TimeframeExpired { status: StatusFlags },
    /// Something was received but it was not a valid DALI frame.
    InvalidDaliFrame { status: StatusFlags },
    Echo { byte: u8 },
    Unknown { header: u8 },
}

impl Message {
    /// Header the message was decoded from, `None` for unknown headers.
    pub fn header(&self) -> Option<Header> {
        match self {
            Message::DaliCommand => Some(Header::DaliCommand),
            Message::DaliRcv1Byte { .. } => Some(Header::DaliRcv1Byte),
            Message::DaliRcv2Bytes { .. } => Some(Header::DaliRcv2Bytes),
            Message::TimeframeExpired { .. } => Some(Header::TimeframeExpired),
            Message::InvalidDaliFrame { .. } => Some(Header::InvalidDaliFrame),
            Message::Echo { .. } => Some(Header::Echo),
            Message::Unknown { .. } => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::DaliCommand => write!(f, "{}", Header::DaliCommand),
            Message::DaliRcv1Byte { status, frame } => {
                write!(f, "{} status={status} frame={frame}", Header::DaliRcv1Byte)
            }
            Message::DaliRcv2Bytes { status, frame } => {
                write!(f, "{} status={status} frame={frame}", Header::DaliRcv2Bytes)
            }
            Message::TimeframeExpired { status } => {
                write!(f, "{} status={status}", Header::TimeframeExpired)
            }
            Message::InvalidDaliFrame { status } => {
                write!(f, "{} status={status}", Header::InvalidDaliFrame)
            }
            Message::Echo { byte } => write!(f, "{} byte=0x{byte:02x}", Header::Echo),
            Message::Unknown { header } => write!(f, "UNKNOWN_HEADER({header})"),
        }
    }
}

/// Message sent from the host to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    DaliCommand {
        frame: ForwardFrame,
        priority: u8,
        delay: u8,
        /// Config commands go out twice so the gear accepts them.
        send_twice: bool,
    },
    Echo { byte: u8 },
}

impl Request {
    /// Unstuffed payload: header byte followed by the request fields.
    ///
    /// # Examples
    /// ```
    /// use ledwarrior_core::ForwardFrame;
    /// use ledwarrior_core::protocol::Request;
    ///
    /// let request = Request::DaliCommand {
    ///     frame: ForwardFrame::from_bytes([0xA3, 0x10]),
    ///     priority: 2,
    ///     delay: 0,
    ///     send_twice: true,
    /// };
    /// assert_eq!(request.to_payload(), vec![1, 0xA3, 0x10, 2, 0, 0xA3, 0x10, 0, 0]);
    /// ```
    pub fn to_payload(&self) -> Vec<u8> {
        match *self {
            Request::DaliCommand {
                frame,
                priority,
                delay,
                send_twice,
            } => {
                let [address, opcode] = frame.as_bytes();
                let mut payload = vec![
                    Header::DaliCommand.as_u8(),
                    address,
                    opcode,
                    priority,
                    delay,
                ];
                if send_twice {
                    payload.extend_from_slice(&[address, opcode, layout::REPEAT_PRIORITY, delay]);
                }
                payload
            }
            Request::Echo { byte } => vec![Header::Echo.as_u8(), byte],
        }
    }
}
