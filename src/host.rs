//! The pieces of the host the Dazzler talks to but does not own: the SPI link
//! to the rendering device and the serial interfaces inbound bytes arrive on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// SPI link plus the two select lines wired to the rendering device.
///
/// Sends are fire-and-forget. The device has no way to report a failed transfer.
pub trait SpiBus {
    fn set_chip_select(&mut self, level: Level);
    fn set_register_select(&mut self, level: Level);
    fn send(&mut self, data: &[u8]);

    fn send_byte(&mut self, data: u8) {
        self.send(&[data])
    }

    /// Bring up the link with the clock running at the MCU clock divided by `divisor`
    fn init(&mut self, _divisor: u8) {}
}

/// Something that was installed as the receive handler of a serial interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveHandler {
    Dazzler,
    /// Opaque id for whatever the host had installed
    Other(u16),
}

/// Where decoded keyboard bytes end up.
pub trait KeySink {
    /// Host interface the simulated SIO card is mapped to, if any
    fn sio_host_interface(&self) -> Option<u8>;
    fn receive_host_data(&mut self, iface: u8, data: u8);
}

pub trait SerialPorts: KeySink {
    /// Install `handler` as the receive handler of `iface`, returning the one it replaces
    fn set_receive_handler(
        &mut self,
        iface: u8,
        handler: Option<ReceiveHandler>,
    ) -> Option<ReceiveHandler>;
}

/// One frame as the rendering device sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: u8,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    ChipSelect(Level),
    RegisterSelect(Level),
    Data(Vec<u8>),
}

/// `SpiBus` that keeps everything it is asked to do. Useful for tests and for
/// hosts that forward frames somewhere other than a real SPI peripheral.
#[derive(Debug)]
pub struct RecordingBus {
    pub events: Vec<BusEvent>,
    pub divisor: Option<u8>,
}

impl RecordingBus {
    pub fn new() -> Self {
        RecordingBus {
            events: Vec::new(),
            divisor: None,
        }
    }

    /// Rebuild the frames from the recorded traffic.
    ///
    /// Data sent with register-select low starts a new frame (first byte is the
    /// command). Data sent with register-select high is payload of the last frame.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames: Vec<Frame> = Vec::new();
        let mut rs = Level::High;

        for event in &self.events {
            match event {
                BusEvent::RegisterSelect(level) => rs = *level,
                BusEvent::ChipSelect(_) => (),
                BusEvent::Data(bytes) if bytes.is_empty() => (),
                BusEvent::Data(bytes) => match (rs, frames.last_mut()) {
                    (Level::High, Some(frame)) => frame.payload.extend_from_slice(bytes),
                    _ => frames.push(Frame {
                        command: bytes[0],
                        payload: bytes[1..].to_vec(),
                    }),
                },
            }
        }

        frames
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for RecordingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiBus for RecordingBus {
    fn set_chip_select(&mut self, level: Level) {
        self.events.push(BusEvent::ChipSelect(level));
    }

    fn set_register_select(&mut self, level: Level) {
        self.events.push(BusEvent::RegisterSelect(level));
    }

    fn send(&mut self, data: &[u8]) {
        self.events.push(BusEvent::Data(data.to_vec()));
    }

    fn init(&mut self, divisor: u8) {
        self.divisor = Some(divisor);
    }
}
