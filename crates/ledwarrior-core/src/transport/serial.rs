use std::io::{self, Read, Write};
use std::time::Duration;

use log::info;
use serialport::{ClearBuffer, SerialPort};

use super::Transport;
use crate::config::DriverConfig;

/// Transport over a USB-serial port.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Wrap a port that was opened elsewhere.
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }

    pub fn open(config: &DriverConfig) -> Result<Self, serialport::Error> {
        info!(
            "opening serial port {} at {} baud",
            config.port, config.baud_rate
        );
        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .timeout(config.timing().read_budget.poll_interval)
            .open()?;
        Ok(Self::new(port))
    }
}

/// Ports report their timeout at millisecond resolution on some platforms.
fn timeout_changed(current: Duration, wanted: Duration) -> bool {
    current.as_millis() != wanted.as_millis()
}

impl Transport for SerialTransport {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if timeout_changed(self.port.timeout(), timeout) {
            self.port.set_timeout(timeout)?;
        }
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.port.write_all(bytes)?;
        self.port.flush()
    }

    fn clear_buffers(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::All)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::timeout_changed;

    #[test]
    fn timeout_compared_in_whole_milliseconds() {
        let poll = Duration::from_millis(1);
        assert!(!timeout_changed(poll, poll));
        assert!(!timeout_changed(Duration::from_micros(1_400), poll));
        assert!(timeout_changed(Duration::from_millis(10), poll));
        assert!(timeout_changed(Duration::ZERO, poll));
    }
}
