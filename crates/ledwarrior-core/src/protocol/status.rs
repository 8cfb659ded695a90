use std::fmt;

use super::layout;

/// Named bits of the bridge status byte, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFlag {
    BusError,
    Busy,
    Overrun,
    FrameError,
    ValidReply,
    Timeframe,
    Rcv2Byte,
    Rcv1Byte,
}

impl StatusFlag {
    pub const ALL: [StatusFlag; 8] = [
        StatusFlag::BusError,
        StatusFlag::Busy,
        StatusFlag::Overrun,
        StatusFlag::FrameError,
        StatusFlag::ValidReply,
        StatusFlag::Timeframe,
        StatusFlag::Rcv2Byte,
        StatusFlag::Rcv1Byte,
    ];

    pub fn mask(self) -> u8 {
        match self {
            StatusFlag::BusError => layout::STATUS_BUS_ERR,
            StatusFlag::Busy => layout::STATUS_BUSY,
            StatusFlag::Overrun => layout::STATUS_OVERRUN,
            StatusFlag::FrameError => layout::STATUS_FRAME_ERROR,
            StatusFlag::ValidReply => layout::STATUS_VALID_REPLY,
            StatusFlag::Timeframe => layout::STATUS_TIMEFRAME,
            StatusFlag::Rcv2Byte => layout::STATUS_RCV_2BYTE,
            StatusFlag::Rcv1Byte => layout::STATUS_RCV_1BYTE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusFlag::BusError => "BUS_ERR",
            StatusFlag::Busy => "BUSY",
            StatusFlag::Overrun => "OVERRUN",
            StatusFlag::FrameError => "FRAME_ERROR",
            StatusFlag::ValidReply => "VALID_REPLY",
            StatusFlag::Timeframe => "TIMEFRAME",
            StatusFlag::Rcv2Byte => "RCV_2BYTE",
            StatusFlag::Rcv1Byte => "RCV_1BYTE",
        }
    }
}

/// Status byte reported with replies and timeframe notifications.
///
/// # Examples
/// ```
/// use ledwarrior_core::StatusFlags;
///
/// let status = StatusFlags::new(0b0000_1000);
/// assert!(status.valid_reply());
/// assert!(!status.busy());
/// assert_eq!(status.to_string(), "0b00001000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusFlags(u8);

impl StatusFlags {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, flag: StatusFlag) -> bool {
        self.0 & flag.mask() != 0
    }

    pub fn bus_error(self) -> bool {
        self.contains(StatusFlag::BusError)
    }

    pub fn busy(self) -> bool {
        self.contains(StatusFlag::Busy)
    }

    pub fn overrun(self) -> bool {
        self.contains(StatusFlag::Overrun)
    }

    pub fn frame_error(self) -> bool {
        self.contains(StatusFlag::FrameError)
    }

    pub fn valid_reply(self) -> bool {
        self.contains(StatusFlag::ValidReply)
    }

    pub fn timeframe(self) -> bool {
        self.contains(StatusFlag::Timeframe)
    }

    pub fn rcv_2byte(self) -> bool {
        self.contains(StatusFlag::Rcv2Byte)
    }

    pub fn rcv_1byte(self) -> bool {
        self.contains(StatusFlag::Rcv1Byte)
    }

    /// Set flags in bit order, most significant first.
    pub fn iter(self) -> impl Iterator<Item = StatusFlag> {
        StatusFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl From<u8> for StatusFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusFlag, StatusFlags};

    #[test]
    fn every_flag_matches_its_bit() {
        for bits in 0..=u8::MAX {
            let status = StatusFlags::new(bits);
            assert_eq!(status.bus_error(), bits & 0x80 != 0);
            assert_eq!(status.busy(), bits & 0x40 != 0);
            assert_eq!(status.overrun(), bits & 0x20 != 0);
            assert_eq!(status.frame_error(), bits & 0x10 != 0);
            assert_eq!(status.valid_reply(), bits & 0x08 != 0);
            assert_eq!(status.timeframe(), bits & 0x04 != 0);
            assert_eq!(status.rcv_2byte(), bits & 0x02 != 0);
            assert_eq!(status.rcv_1byte(), bits & 0x01 != 0);
        }
    }

    #[test]
    fn iter_lists_set_flags_in_bit_order() {
        let status = StatusFlags::new(0b1000_1001);
        let flags: Vec<_> = status.iter().collect();
        assert_eq!(
            flags,
            vec![
                StatusFlag::BusError,
                StatusFlag::ValidReply,
                StatusFlag::Rcv1Byte
            ]
        );
    }

    #[test]
    fn display_is_padded_binary() {
        assert_eq!(StatusFlags::new(0).to_string(), "0b00000000");
        assert_eq!(StatusFlags::new(0xFF).to_string(), "0b11111111");
    }
}
