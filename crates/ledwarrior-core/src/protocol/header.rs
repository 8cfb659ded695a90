use std::fmt;

use super::layout;

/// Message kind carried in the first byte of every decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Header {
    DaliCommand = layout::HEADER_DALI_COMMAND,
    DaliRcv1Byte = layout::HEADER_DALI_RCV_1BYTE,
    DaliRcv2Bytes = layout::HEADER_DALI_RCV_2BYTES,
    TimeframeExpired = layout::HEADER_TIMEFRAME_EXPIRED,
    InvalidDaliFrame = layout::HEADER_INVALID_DALI_FRAME,
    Echo = layout::HEADER_ECHO,
}

impl Header {
    pub const ALL: [Header; 6] = [
        Header::DaliCommand,
        Header::DaliRcv1Byte,
        Header::DaliRcv2Bytes,
        Header::TimeframeExpired,
        Header::InvalidDaliFrame,
        Header::Echo,
    ];

    /// Map a wire value to a header; `None` for values the bridge does not define.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            layout::HEADER_DALI_COMMAND => Some(Header::DaliCommand),
            layout::HEADER_DALI_RCV_1BYTE => Some(Header::DaliRcv1Byte),
            layout::HEADER_DALI_RCV_2BYTES => Some(Header::DaliRcv2Bytes),
            layout::HEADER_TIMEFRAME_EXPIRED => Some(Header::TimeframeExpired),
            layout::HEADER_INVALID_DALI_FRAME => Some(Header::InvalidDaliFrame),
            layout::HEADER_ECHO => Some(Header::Echo),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Name used by the bridge firmware documentation.
    pub fn name(self) -> &'static str {
        match self {
            Header::DaliCommand => "DALI_COMMANDS",
            Header::DaliRcv1Byte => "DALI_RCV_1BYTES",
            Header::DaliRcv2Bytes => "DALI_RCV_2BYTES",
            Header::TimeframeExpired => "TIMEFRAME_EXPIRED",
            Header::InvalidDaliFrame => "INVALID_DALI_FRAME",
            Header::Echo => "ECHO",
        }
    }
}

impl From<Header> for u8 {
    fn from(header: Header) -> Self {
        header.as_u8()
    }
}

impl TryFrom<u8> for Header {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Header::from_u8(value).ok_or(value)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
