use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::protocol::ReadBudget;
use crate::protocol::layout;
use crate::transaction::Timing;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid driver config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Serial and timing settings for the driver.
///
/// Every field is optional in TOML; timing fields set to zero fall back to
/// their defaults. The serial port is opened with `poll_interval_ms` as its
/// read timeout, which is also the wait of every single-byte poll.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use ledwarrior_core::DriverConfig;
///
/// let config = DriverConfig::from_toml_str("port = \"/dev/ttyUSB0\"\nreply_window_ms = 60\n")?;
/// assert_eq!(config.port, "/dev/ttyUSB0");
/// assert_eq!(config.timing().reply_window, Duration::from_millis(60));
/// assert_eq!(config.timing().settle_window, Duration::from_millis(20));
/// # Ok::<(), ledwarrior_core::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "DriverConfig::default_port")]
    pub port: String,
    #[serde(default = "DriverConfig::default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "DriverConfig::default_settle_window_ms")]
    pub settle_window_ms: u64,
    #[serde(default = "DriverConfig::default_reply_window_ms")]
    pub reply_window_ms: u64,
    #[serde(default = "DriverConfig::default_wait_cycles")]
    pub wait_cycles: u32,
    #[serde(default = "DriverConfig::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "DriverConfig::default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl DriverConfig {
    fn default_port() -> String {
        "/dev/ttyACM0".to_string()
    }
    fn default_baud_rate() -> u32 {
        9600
    }
    fn default_settle_window_ms() -> u64 {
        Timing::DEFAULT_SETTLE_WINDOW.as_millis() as u64
    }
    fn default_reply_window_ms() -> u64 {
        Timing::DEFAULT_REPLY_WINDOW.as_millis() as u64
    }
    fn default_wait_cycles() -> u32 {
        ReadBudget::DEFAULT_WAIT_CYCLES
    }
    fn default_poll_interval_ms() -> u64 {
        ReadBudget::DEFAULT_POLL_INTERVAL.as_millis() as u64
    }
    fn default_max_frame_bytes() -> usize {
        layout::MAX_FRAME_BYTES
    }

    /// Defaults with a different device path.
    pub fn for_port(port: &str) -> Self {
        Self {
            port: port.to_string(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut cfg: DriverConfig = toml::from_str(text)?;
        if cfg.settle_window_ms == 0 {
            cfg.settle_window_ms = Self::default_settle_window_ms();
        }
        if cfg.reply_window_ms == 0 {
            cfg.reply_window_ms = Self::default_reply_window_ms();
        }
        if cfg.wait_cycles == 0 {
            cfg.wait_cycles = Self::default_wait_cycles();
        }
        if cfg.poll_interval_ms == 0 {
            cfg.poll_interval_ms = Self::default_poll_interval_ms();
        }
        if cfg.max_frame_bytes == 0 {
            cfg.max_frame_bytes = Self::default_max_frame_bytes();
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            settle_window: Duration::from_millis(self.settle_window_ms),
            reply_window: Duration::from_millis(self.reply_window_ms),
            read_budget: ReadBudget {
                max_bytes: self.max_frame_bytes,
                wait_cycles: self.wait_cycles,
                poll_interval: Duration::from_millis(self.poll_interval_ms),
            },
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
            baud_rate: Self::default_baud_rate(),
            settle_window_ms: Self::default_settle_window_ms(),
            reply_window_ms: Self::default_reply_window_ms(),
            wait_cycles: Self::default_wait_cycles(),
            poll_interval_ms: Self::default_poll_interval_ms(),
            max_frame_bytes: Self::default_max_frame_bytes(),
        }
    }
}
