pub const START: u8 = 0x7C;
pub const STOP: u8 = 0x7D;
pub const ESC: u8 = 0x7E;

pub const HEADER_DALI_COMMAND: u8 = 1;
pub const HEADER_DALI_RCV_1BYTE: u8 = 2;
pub const HEADER_DALI_RCV_2BYTES: u8 = 3;
pub const HEADER_TIMEFRAME_EXPIRED: u8 = 10;
pub const HEADER_INVALID_DALI_FRAME: u8 = 11;
pub const HEADER_ECHO: u8 = 30;

pub const STATUS_BUS_ERR: u8 = 1 << 7;
pub const STATUS_BUSY: u8 = 1 << 6;
pub const STATUS_OVERRUN: u8 = 1 << 5;
pub const STATUS_FRAME_ERROR: u8 = 1 << 4;
pub const STATUS_VALID_REPLY: u8 = 1 << 3;
pub const STATUS_TIMEFRAME: u8 = 1 << 2;
pub const STATUS_RCV_2BYTE: u8 = 1 << 1;
pub const STATUS_RCV_1BYTE: u8 = 1 << 0;

// Offsets into a decoded frame (header byte included).
pub const HEADER_OFFSET: usize = 0;
pub const STATUS_OFFSET: usize = 1;
pub const ECHO_OFFSET: usize = 1;
pub const BACKWARD_FRAME_OFFSET: usize = 2;
pub const FORWARD_FRAME_RANGE: std::ops::Range<usize> = 2..4;

/// Repeat of a config command carries this priority.
pub const REPEAT_PRIORITY: u8 = 0;

/// Bytes consumed by a single frame read before giving up.
pub const MAX_FRAME_BYTES: usize = 40;
