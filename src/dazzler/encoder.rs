//! Encoding of register and video memory writes into frames for the rendering device.
use super::registers::LARGE_WINDOW;
use crate::host::{Level, SpiBus};

/// Command ids leading each frame
pub mod command {
    /// Single byte update. Reserved, the encoder always sends full frames.
    pub const MEMBYTE: u8 = 0x10;
    /// Frame boundary, followed by the whole buffer
    pub const FULLFRAME: u8 = 0x20;
    pub const CTRL: u8 = 0x30;
    pub const CTRLPIC: u8 = 0x40;
}

pub const BUFFER_SIZE: usize = LARGE_WINDOW as usize;

/// The device expects the nibbles of every video byte the other way round
#[inline]
pub fn nibble_swap(v: u8) -> u8 {
    (v & 0x0F) << 4 | (v & 0xF0) >> 4
}

/// Owns the link to the device and the copy of video memory sent with every frame
#[derive(Debug)]
pub struct FrameEncoder<B: SpiBus> {
    bus: B,
    buffer: Box<[u8; BUFFER_SIZE]>,
}

impl<B: SpiBus> FrameEncoder<B> {
    pub fn new(bus: B) -> Self {
        FrameEncoder {
            bus,
            buffer: Box::new([0; BUFFER_SIZE]),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn send_control_frame(&mut self, data: &[u8]) {
        self.bus.set_chip_select(Level::High);
        self.bus.set_register_select(Level::Low);
        self.bus.send(data);
    }

    pub fn send_full_frame(&mut self) {
        self.bus.set_chip_select(Level::High);
        self.bus.set_register_select(Level::Low);
        self.bus.send_byte(command::FULLFRAME);

        self.bus.set_register_select(Level::High);
        self.bus.set_chip_select(Level::Low);
        self.bus.send(&self.buffer[..]);
    }

    /// Store a byte at `offset` into the window and send the whole buffer.
    ///
    /// Offsets past the buffer wrap around.
    pub fn write_memory_byte(&mut self, offset: u16, v: u8) {
        self.buffer[offset as usize % BUFFER_SIZE] = nibble_swap(v);
        self.send_full_frame();
    }
}
