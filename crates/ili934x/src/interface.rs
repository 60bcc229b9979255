//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ILI9341 controller over a 4-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! The ILI9341 requires:
//! - SPI bus (MOSI + SCK, MISO for read-back)
//! - 3 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! The driver toggles CS itself around every transaction, so the bus is an
//! [`SpiBus`] rather than an `SpiDevice`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ili934x::{DisplayInterface, Interface};
//!
//! let mut interface = Interface::new(spi_bus, cs_pin, dc_pin, rst_pin);
//!
//! // Hardware reset
//! interface.reset(&mut delay)?;
//!
//! // Command followed by its parameters
//! interface.send_command(0x3A)?;
//! interface.send_data(&[0x55])?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Time RST is held low, and the settling time after it is released
pub const RESET_PULSE_MS: u32 = 50;

/// Trait for hardware interface to the ILI9341 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implementations
/// must release chip select when a transaction fails part way.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Assert CS, send the command byte, release CS
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Assert CS, send the bytes, release CS
    ///
    /// An empty slice is a legal, empty data phase.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send a command byte and read `buf.len()` bytes back
    ///
    /// DC stays low for the whole transaction, including the read.
    fn read(&mut self, command: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 50ms
    /// 3. Set RST pin high
    /// 4. Wait at least 50ms
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug, PartialEq)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for ILI9341
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, CS, DC, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, CS, DC, RST> Interface<SPI, CS, DC, RST> {
    /// Create a new Interface
    ///
    /// Pin levels are not touched until the first transaction or reset.
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self { spi, cs, dc, rst }
    }

    /// Hand the bus and pins back to the caller
    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }
}

impl<SPI, CS, DC, RST, PinErr> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
{
    /// Run `transfer` with CS asserted, then release CS no matter what
    ///
    /// The SPI error wins over a CS release error when both happen.
    fn transaction<F>(&mut self, transfer: F) -> Result<(), InterfaceError<SPI::Error, PinErr>>
    where
        F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
    {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let result = transfer(&mut self.spi).and_then(|()| self.spi.flush());
        let released = self.cs.set_high();
        result.map_err(InterfaceError::Spi)?;
        released.map_err(InterfaceError::Pin)
    }
}

impl<SPI, CS, DC, RST, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.transaction(|spi| spi.write(&[command]))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.transaction(|spi| spi.write(data))
    }

    fn read(&mut self, command: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.transaction(|spi| {
            spi.write(&[command])?;
            spi.read(buf)
        })
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        // Reset sequence: LOW -> wait 50ms -> HIGH -> wait 50ms
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }
}
