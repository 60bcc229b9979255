//! Wire-level tests for the SPI interface and display driver
//!
//! Every test drives a real [`Interface`] over embedded-hal-mock and checks
//! the exact byte and pin sequence seen by the controller.
//!
//! Run with: cargo test -p ili934x --test wire_protocol

use std::io::ErrorKind;

use embedded_hal_mock::eh1::MockError;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use ili934x::command::{
    COLUMN_ADDRESS_SET, DISPLAY_ON, MEMORY_ACCESS_CONTROL, MEMORY_READ, MEMORY_WRITE,
    PAGE_ADDRESS_SET, SLEEP_OUT, VERTICAL_SCROLL_START,
};
use ili934x::init::INIT_SEQUENCE;
use ili934x::{Config, Display, Error, Interface, InterfaceError};

type MockDisplay = Display<Interface<SpiMock<u8>, PinMock, PinMock, PinMock>>;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Expected traffic on the SPI bus and the three control pins
#[derive(Default)]
struct Wire {
    spi: Vec<SpiTransaction<u8>>,
    cs: Vec<PinTransaction>,
    dc: Vec<PinTransaction>,
    rst: Vec<PinTransaction>,
}

impl Wire {
    /// One chip-select framed write
    fn framed_write(&mut self, dc: PinState, bytes: &[u8]) {
        self.dc.push(PinTransaction::set(dc));
        self.cs.push(PinTransaction::set(PinState::Low));
        self.spi.push(SpiTransaction::write_vec(bytes.to_vec()));
        self.spi.push(SpiTransaction::flush());
        self.cs.push(PinTransaction::set(PinState::High));
    }

    fn command(&mut self, command: u8) -> &mut Self {
        self.framed_write(PinState::Low, &[command]);
        self
    }

    fn data(&mut self, bytes: &[u8]) -> &mut Self {
        self.framed_write(PinState::High, bytes);
        self
    }

    /// Command byte and read-back in one transaction with DC held low
    fn read(&mut self, command: u8, response: &[u8]) -> &mut Self {
        self.dc.push(PinTransaction::set(PinState::Low));
        self.cs.push(PinTransaction::set(PinState::Low));
        self.spi.push(SpiTransaction::write_vec(vec![command]));
        self.spi.push(SpiTransaction::read_vec(response.to_vec()));
        self.spi.push(SpiTransaction::flush());
        self.cs.push(PinTransaction::set(PinState::High));
        self
    }

    fn window(&mut self, caset: [u8; 4], paset: [u8; 4]) -> &mut Self {
        self.command(COLUMN_ADDRESS_SET)
            .data(&caset)
            .command(PAGE_ADDRESS_SET)
            .data(&paset)
    }

    /// Reset pulse plus the full power-on sequence for `config`
    fn construction(&mut self, config: &Config) -> &mut Self {
        self.rst.push(PinTransaction::set(PinState::Low));
        self.rst.push(PinTransaction::set(PinState::High));
        for (command, params) in INIT_SEQUENCE {
            self.command(command);
            if command == MEMORY_ACCESS_CONTROL {
                self.data(&[config.memory_access_control]);
            } else {
                self.data(params);
            }
        }
        self.command(SLEEP_OUT).command(DISPLAY_ON)
    }

    fn build(&self) -> (SpiMock<u8>, PinMock, PinMock, PinMock) {
        (
            SpiMock::new(&self.spi),
            PinMock::new(&self.cs),
            PinMock::new(&self.dc),
            PinMock::new(&self.rst),
        )
    }
}

fn open(wire: &Wire) -> MockDisplay {
    let (spi, cs, dc, rst) = wire.build();
    Display::new(
        Interface::new(spi, cs, dc, rst),
        Config::default(),
        &mut NoopDelay,
    )
    .unwrap()
}

fn finish(display: MockDisplay) {
    let (mut spi, mut cs, mut dc, mut rst) = display.release().release();
    spi.done();
    cs.done();
    dc.done();
    rst.done();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Construction pulses reset, then sends every init step framed by CS
#[test]
fn test_construction_wire_sequence() {
    let mut wire = Wire::default();
    wire.construction(&Config::default());

    let display = open(&wire);
    assert_eq!(display.scroll_offset(), 0);
    finish(display);
}

/// A single pixel is a window of one followed by a 2-byte memory write
#[test]
fn test_write_pixel_wire_sequence() {
    let mut wire = Wire::default();
    wire.construction(&Config::default())
        .window([0x01, 0x0A, 0x01, 0x0A], [0x00, 0x14, 0x00, 0x14])
        .command(MEMORY_WRITE)
        .data(&[0xF8, 0x00]);

    let mut display = open(&wire);
    display.write_pixel(266, 20, 0xF800).unwrap();
    finish(display);
}

/// A small fill opens the window with a bare memory write, then one
/// remainder transaction carrying all pixels
#[test]
fn test_fill_rectangle_wire_sequence() {
    let mut wire = Wire::default();
    wire.construction(&Config::default())
        .window([0x00, 0x0A, 0x00, 0x0C], [0x00, 0x05, 0x00, 0x05])
        .command(MEMORY_WRITE)
        .data(&[0x12, 0x34, 0x12, 0x34, 0x12, 0x34]);

    let mut display = open(&wire);
    display.fill_rectangle(10, 5, 3, 1, 0x1234).unwrap();
    finish(display);
}

/// Off-screen pixels produce no bus or pin activity at all
#[test]
fn test_write_pixel_off_screen_is_silent() {
    let mut wire = Wire::default();
    wire.construction(&Config::default());

    let mut display = open(&wire);
    display.write_pixel(-1, 0, 0xFFFF).unwrap();
    display.write_pixel(0, 240, 0xFFFF).unwrap();
    display.write_pixel(320, 0, 0xFFFF).unwrap();
    finish(display);
}

/// Read-back keeps DC low and rebuilds the color from R, B, G bytes
#[test]
fn test_read_pixel_wire_sequence() {
    let mut wire = Wire::default();
    wire.construction(&Config::default())
        .window([0x00, 0x05, 0x00, 0x05], [0x00, 0x06, 0x00, 0x06])
        .read(MEMORY_READ, &[0xFF, 0x00, 0xFF]);

    let mut display = open(&wire);
    assert_eq!(display.read_pixel(5, 6).unwrap(), 0xFFE0);
    finish(display);
}

/// Out-of-range reads are rejected before any traffic
#[test]
fn test_read_pixel_out_of_bounds() {
    let mut wire = Wire::default();
    wire.construction(&Config::default());

    let mut display = open(&wire);
    let result = display.read_pixel(320, 0);
    assert!(matches!(result, Err(Error::OutOfBounds { x: 320, y: 0 })));
    finish(display);
}

/// Scrolling writes the wrapped offset as a big-endian parameter
#[test]
fn test_scroll_wire_sequence() {
    let mut wire = Wire::default();
    wire.construction(&Config::default())
        .command(VERTICAL_SCROLL_START)
        .data(&[0x00, 0xEF]);

    let mut display = open(&wire);
    display.scroll(-1).unwrap();
    assert_eq!(display.scroll_offset(), 239);
    finish(display);
}

/// A failing pin aborts construction with the pin error
#[test]
fn test_construction_pin_failure() {
    let rst = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];
    let dc = [PinTransaction::set(PinState::Low).with_error(MockError::Io(ErrorKind::NotConnected))];

    let mut spi = SpiMock::new(&[]);
    let mut cs = PinMock::new(&[]);
    let mut dc = PinMock::new(&dc);
    let mut rst = PinMock::new(&rst);

    let result = Display::new(
        Interface::new(spi.clone(), cs.clone(), dc.clone(), rst.clone()),
        Config::default(),
        &mut NoopDelay,
    );
    assert!(matches!(
        result,
        Err(Error::Interface(InterfaceError::Pin(MockError::Io(
            ErrorKind::NotConnected
        ))))
    ));

    spi.done();
    cs.done();
    dc.done();
    rst.done();
}
