//! DALI bus frame values.
//!
//! Forward frames travel from the bridge to the gear (address byte followed
//! by opcode byte); backward frames are the single-byte answers of the gear.

use std::fmt;

/// 8-bit reply sent by a control gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackwardFrame(u8);

impl BackwardFrame {
    /// Backward frame a gear sends to answer "yes".
    pub const YES: BackwardFrame = BackwardFrame(0xFF);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for BackwardFrame {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for BackwardFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// 16-bit command frame, stored in transmission order.
///
/// # Examples
/// ```
/// use ledwarrior_core::ForwardFrame;
///
/// let frame = ForwardFrame::from_bytes([0xFF, 0x05]);
/// assert_eq!(frame.value(), 0xFF05);
/// assert_eq!(frame.address(), 0xFF);
/// assert_eq!(frame.opcode(), 0x05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardFrame(u16);

impl ForwardFrame {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub const fn as_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn address(self) -> u8 {
        self.as_bytes()[0]
    }

    pub const fn opcode(self) -> u8 {
        self.as_bytes()[1]
    }
}

impl fmt::Display for ForwardFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
