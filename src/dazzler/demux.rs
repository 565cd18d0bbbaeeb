//! Splits the bytes the rendering device sends back into joystick state and
//! keyboard input.
//!
//! Every byte starting a sequence carries its kind in the top nibble:
//!
//! * `0x1n` joystick 1 buttons in `n`, followed by its X and Y axis bytes
//! * `0x2n` joystick 2 buttons in `n`, followed by its X and Y axis bytes
//! * `0x30` followed by one key code
//!
//! Bytes with any other top nibble are dropped.
use log::{trace, warn};
use paste::paste;

use crate::host::KeySink;

pub const JOY1: u8 = 0x10;
pub const JOY2: u8 = 0x20;
pub const KEY: u8 = 0x30;

/// Number of D+7A ports, starting at port 0o30
pub const D7A_PORTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemuxState {
    #[default]
    Idle,
    AwaitingJoy1Byte1,
    AwaitingJoy1Byte2,
    AwaitingJoy2Byte1,
    AwaitingJoy2Byte2,
    AwaitingKeyByte,
}

/// The D+7A I/O board the joysticks are read through.
///
/// Port 0 holds the buttons of both joysticks (joystick 1 in the low nibble),
/// ports 1-4 the X/Y axes of joystick 1 then joystick 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D7aPorts([u8; D7A_PORTS]);

macro_rules! joystick_axes {
    ($($joy:ident: $x:literal, $y:literal);+) => {
        $(
            paste! {
                pub fn [<$joy _x>](&self) -> u8 {
                    self.0[$x]
                }

                pub fn [<$joy _y>](&self) -> u8 {
                    self.0[$y]
                }
            }
        )+
    };
}

impl D7aPorts {
    pub fn new() -> Self {
        D7aPorts([0xFF; D7A_PORTS])
    }

    pub fn get(&self, port: usize) -> Option<u8> {
        self.0.get(port).copied()
    }

    pub fn buttons(&self) -> u8 {
        self.0[0]
    }

    joystick_axes!(joy1: 1, 2; joy2: 3, 4);

    fn set(&mut self, port: usize, v: u8) {
        trace!("set_d7a_port({:o}, {:02X})", 0o30 + port, v);
        self.0[port] = v;
    }
}

impl Default for D7aPorts {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Demux {
    pub state: DemuxState,
    pub ports: D7aPorts,
}

impl Demux {
    pub fn new() -> Self {
        Demux::default()
    }

    pub fn reset(&mut self) {
        self.state = DemuxState::Idle;
    }

    /// Feed one inbound byte. Never blocks; at most one port write or one key forwarded.
    pub fn receive(&mut self, data: u8, sink: &mut impl KeySink) {
        use DemuxState::*;

        trace!("dazzler receive {:02X} in {:?}", data, self.state);

        self.state = match self.state {
            Idle => match data & 0xF0 {
                JOY1 => {
                    let buttons = (self.ports.buttons() & 0xF0) | (data & 0x0F);
                    self.ports.set(0, buttons);
                    AwaitingJoy1Byte1
                }
                JOY2 => {
                    let buttons = (self.ports.buttons() & 0x0F) | ((data & 0x0F) << 4);
                    self.ports.set(0, buttons);
                    AwaitingJoy2Byte1
                }
                KEY => AwaitingKeyByte,
                _ => Idle,
            },
            AwaitingJoy1Byte1 => {
                self.ports.set(1, data);
                AwaitingJoy1Byte2
            }
            AwaitingJoy1Byte2 => {
                self.ports.set(2, data);
                Idle
            }
            AwaitingJoy2Byte1 => {
                self.ports.set(3, data);
                AwaitingJoy2Byte2
            }
            AwaitingJoy2Byte2 => {
                self.ports.set(4, data);
                Idle
            }
            AwaitingKeyByte => {
                match sink.sio_host_interface() {
                    Some(iface) => sink.receive_host_data(iface, data),
                    None => warn!("key {:02X} dropped, SIO is not mapped to a host interface", data),
                }
                Idle
            }
        };
    }
}
