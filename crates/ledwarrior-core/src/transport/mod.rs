//! Byte transport between the host and the bridge.
//!
//! The driver only needs three capabilities from the link: a single-byte
//! read that waits at most a given time, writing a whole stuffed frame, and
//! discarding whatever is buffered in either direction. `SerialTransport`
//! provides them for a USB-serial port; tests plug in scripted transports.

mod serial;

pub use serial::SerialTransport;

use std::io;
use std::time::Duration;

pub trait Transport {
    /// Read one byte, waiting at most `timeout`.
    ///
    /// Returns `Ok(None)` when nothing arrived in time.
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>>;

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Drop buffered input and pending output.
    fn clear_buffers(&mut self) -> io::Result<()> {
        Ok(())
    }
}
