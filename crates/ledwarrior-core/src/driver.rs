use log::{debug, info};
use thiserror::Error;

use crate::command::{DaliCommand, Response};
use crate::config::DriverConfig;
use crate::transaction::{Timing, TransactionEngine, TransactionError};
use crate::transport::{SerialTransport, Transport};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("cannot draw echo byte: {0}")]
    Entropy(#[from] getrandom::Error),
    #[error("no echo received for byte 0x{sent:02x}")]
    NoEcho { sent: u8 },
    #[error("self-test failed: sent 0x{sent:02x}, echoed 0x{received:02x}")]
    SelfTest { sent: u8, received: u8 },
}

/// Driver for an LED Warrior 14 bridge.
///
/// The driver exclusively owns its transport; all operations take
/// `&mut self` and block until the bridge answers or the window elapses.
pub struct Lw14Driver<T = SerialTransport> {
    engine: TransactionEngine<T>,
}

impl Lw14Driver<SerialTransport> {
    /// Open `port` with default settings and run the self-test.
    pub fn open(port: &str) -> Result<Self, DriverError> {
        Self::open_with_config(&DriverConfig::for_port(port))
    }

    pub fn open_with_config(config: &DriverConfig) -> Result<Self, DriverError> {
        let transport = SerialTransport::open(config)?;
        Self::with_timing(transport, config.timing())
    }
}

impl<T: Transport> Lw14Driver<T> {
    /// Use an already opened transport with the default DALI timing.
    pub fn with_transport(transport: T) -> Result<Self, DriverError> {
        Self::with_timing(transport, Timing::default())
    }

    /// Clear the link buffers and check the bridge echoes a random byte.
    pub fn with_timing(mut transport: T, timing: Timing) -> Result<Self, DriverError> {
        info!("initialising LED Warrior bridge");
        transport.clear_buffers()?;
        let mut driver = Self {
            engine: TransactionEngine::new(transport, timing),
        };

        let mut sent = [0u8; 1];
        getrandom::getrandom(&mut sent)?;
        let sent = sent[0];
        debug!("self-test echo byte 0x{sent:02x}");
        let received = driver.echo(sent)?;
        if received != sent {
            return Err(DriverError::SelfTest { sent, received });
        }
        Ok(driver)
    }

    /// Send `command` with priority 0 and no delay.
    pub fn send<C: DaliCommand>(
        &mut self,
        command: &C,
    ) -> Result<Response<C::Response>, DriverError> {
        self.send_with(command, 0, 0)
    }

    pub fn send_with<C: DaliCommand>(
        &mut self,
        command: &C,
        priority: u8,
        delay: u8,
    ) -> Result<Response<C::Response>, DriverError> {
        Ok(self.engine.send(command, priority, delay)?)
    }

    /// Round-trip one byte through the bridge.
    pub fn echo(&mut self, byte: u8) -> Result<u8, DriverError> {
        self.engine
            .echo(byte)?
            .ok_or(DriverError::NoEcho { sent: byte })
    }

    pub fn timing(&self) -> &Timing {
        self.engine.timing()
    }

    pub fn transport(&self) -> &T {
        self.engine.transport()
    }

    /// Release the transport, closing the driver.
    pub fn into_transport(self) -> T {
        self.engine.into_transport()
    }
}
