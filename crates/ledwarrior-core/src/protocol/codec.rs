//! Byte stuffing and frame reassembly.
//!
//! A frame on the wire is `START payload STOP`, where every START, STOP or
//! ESC byte inside the payload is preceded by ESC. Reassembly resynchronises
//! on the next START, so noise between frames is dropped without error.

use std::io;
use std::time::Duration;

use log::warn;

use super::layout;
use crate::transport::Transport;

fn is_marker(byte: u8) -> bool {
    matches!(byte, layout::START | layout::STOP | layout::ESC)
}

/// Stuff a payload into a wire frame.
///
/// # Examples
/// ```
/// use ledwarrior_core::protocol::stuff;
///
/// assert_eq!(stuff(&[0x1E, 0x7C]), vec![0x7C, 0x1E, 0x7E, 0x7C, 0x7D]);
/// ```
pub fn stuff(payload: &[u8]) -> Vec<u8> {
    let escapes = payload.iter().filter(|byte| is_marker(**byte)).count();
    let mut stuffed = Vec::with_capacity(payload.len() + escapes + 2);
    stuffed.push(layout::START);
    for &byte in payload {
        if is_marker(byte) {
            stuffed.push(layout::ESC);
        }
        stuffed.push(byte);
    }
    stuffed.push(layout::STOP);
    stuffed
}

/// Where a [`FrameDecoder`] is within the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// No frame open; bytes are discarded until START.
    Seeking,
    /// START seen; bytes accumulate until STOP.
    InFrame,
    /// The next byte is literal. Outside a frame it is discarded.
    Escaped { in_frame: bool },
}

/// Reassembles one frame from bytes fed one at a time.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    buffer: Vec<u8>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            state: DecodeState::Seeking,
            buffer: Vec::new(),
        }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Bytes accumulated for the frame currently open, if any.
    pub fn partial(&self) -> Option<&[u8]> {
        match self.state {
            DecodeState::Seeking | DecodeState::Escaped { in_frame: false } => None,
            _ => Some(self.buffer.as_slice()),
        }
    }

    pub fn reset(&mut self) {
        self.state = DecodeState::Seeking;
        self.buffer.clear();
    }

    /// Feed one byte; returns the unstuffed frame once STOP closes it.
    pub fn feed(&mut self, byte: u8) -> Option<Vec<u8>> {
        match self.state {
            DecodeState::Seeking => match byte {
                layout::START => {
                    self.buffer.clear();
                    self.state = DecodeState::InFrame;
                }
                layout::ESC => self.state = DecodeState::Escaped { in_frame: false },
                _ => {}
            },
            DecodeState::InFrame => match byte {
                layout::STOP => {
                    self.state = DecodeState::Seeking;
                    return Some(std::mem::take(&mut self.buffer));
                }
                layout::ESC => self.state = DecodeState::Escaped { in_frame: true },
                _ => self.buffer.push(byte),
            },
            DecodeState::Escaped { in_frame } => {
                if in_frame {
                    self.buffer.push(byte);
                    self.state = DecodeState::InFrame;
                } else {
                    self.state = DecodeState::Seeking;
                }
            }
        }
        None
    }
}

/// Give-up conditions for a single frame read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadBudget {
    /// Bytes consumed without completing a frame before giving up.
    pub max_bytes: usize,
    /// Empty polls tolerated while the line is silent.
    pub wait_cycles: u32,
    /// Longest wait of a single poll.
    pub poll_interval: Duration,
}

impl ReadBudget {
    pub const DEFAULT_WAIT_CYCLES: u32 = 60;
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);
}

impl Default for ReadBudget {
    fn default() -> Self {
        Self {
            max_bytes: layout::MAX_FRAME_BYTES,
            wait_cycles: Self::DEFAULT_WAIT_CYCLES,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Read the next complete frame from `transport`.
///
/// The read is bounded by `budget` alone: it gives up once `max_bytes` bytes
/// went by without a complete frame, or after `wait_cycles` empty polls.
/// Partial data is dropped on give-up. Only transport errors are returned as
/// errors.
pub fn read_frame<T: Transport + ?Sized>(
    transport: &mut T,
    budget: &ReadBudget,
) -> io::Result<Option<Vec<u8>>> {
    let mut decoder = FrameDecoder::new();
    let mut bytes_read = 0usize;
    let mut cycles = 0u32;

    while bytes_read < budget.max_bytes && cycles < budget.wait_cycles {
        match transport.read_byte(budget.poll_interval)? {
            Some(byte) => {
                bytes_read += 1;
                if let Some(frame) = decoder.feed(byte) {
                    return Ok(Some(frame));
                }
            }
            None => cycles += 1,
        }
    }

    let cause = if bytes_read >= budget.max_bytes {
        "byte cap reached"
    } else {
        "line silent"
    };
    warn!(
        "no frame read ({cause}): wait cycles {}/{}, bytes read {}/{}, partial frame {:02x?}",
        cycles,
        budget.wait_cycles,
        bytes_read,
        budget.max_bytes,
        decoder.partial()
    );
    Ok(None)
}
