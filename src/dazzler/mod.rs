pub mod demux;
pub mod encoder;
pub mod iface;
pub mod registers;
pub mod status;

use log::{debug, trace};

use crate::{
    chip::{Chip, CpuOutputPins},
    config::{Config, Interface},
    host::{KeySink, SerialPorts, SpiBus},
};
use demux::{D7aPorts, Demux, DemuxState, D7A_PORTS};
use encoder::{command, FrameEncoder};
use iface::InterfaceBinding;
use registers::{Control, Picture, RegisterBank, VideoWindow};

/// Control register (out)
pub const CTRL_PORT: u8 = 0o16;
/// Picture register (out)
pub const PICT_PORT: u8 = 0o17;
/// Vertical sync / line parity (in)
pub const STATUS_PORT: u8 = 0o16;
/// First of the D+7A joystick ports (in)
pub const D7A_PORT: u8 = 0o30;

/// A Dazzler board plus the D+7A board its joysticks are read through.
///
/// Everything is driven from the emulator's single thread: CPU cycles, inbound
/// serial bytes and status reads never overlap, so the device keeps plain
/// owned state and every operation takes `&mut self`.
#[derive(Debug)]
pub struct Dazzler<B: SpiBus> {
    regs: RegisterBank,
    encoder: FrameEncoder<B>,
    demux: Demux,
    binding: InterfaceBinding,
}

impl<B: SpiBus> Dazzler<B> {
    pub fn new(mut bus: B, config: Config, ports: &mut impl SerialPorts) -> Self {
        bus.init(config.spi_divisor);

        let mut dazzler = Dazzler {
            regs: RegisterBank::new(),
            encoder: FrameEncoder::new(bus),
            demux: Demux::new(),
            binding: InterfaceBinding::new(),
        };
        dazzler.set_iface(config.interface, ports);
        dazzler
    }

    pub fn window(&self) -> VideoWindow {
        self.regs.window()
    }

    pub fn d7a_ports(&self) -> &D7aPorts {
        &self.demux.ports
    }

    pub fn demux_state(&self) -> DemuxState {
        self.demux.state
    }

    pub fn bus(&self) -> &B {
        self.encoder.bus()
    }

    pub fn bus_mut(&mut self) -> &mut B {
        self.encoder.bus_mut()
    }

    /// The device sees every write, even ones that leave the window where it was
    pub fn out_ctrl(&mut self, v: u8) {
        self.encoder.send_control_frame(&[command::CTRL, v]);
        self.regs.write_control(Control::from_bits_retain(v));
    }

    pub fn out_pict(&mut self, v: u8) {
        self.encoder.send_control_frame(&[command::CTRLPIC, v]);
        if self.regs.write_picture(Picture::from_bits_retain(v)) {
            debug!("video window grew to {} bytes", self.regs.window().size);
            self.encoder.send_full_frame();
        }
    }

    /// Forward a write to video memory. `addr` must be inside the window.
    pub fn write_memory_byte(&mut self, addr: u16, v: u8) {
        let offset = addr.wrapping_sub(self.regs.window().start);
        self.encoder.write_memory_byte(offset, v);
    }

    /// Forward a memory write if it falls inside the window. Returns whether it did.
    pub fn write_memory(&mut self, addr: u16, v: u8) -> bool {
        let in_window = self.regs.window().contains(addr);
        if in_window {
            self.write_memory_byte(addr, v);
        }
        in_window
    }

    pub fn port_in(&self, port: u8, cycles: u32) -> u8 {
        let v = match port {
            STATUS_PORT => status::status(cycles).bits(),
            p if (D7A_PORT..D7A_PORT + D7A_PORTS as u8).contains(&p) => {
                self.demux.ports.get((p - D7A_PORT) as usize).unwrap_or(0)
            }
            _ => 0,
        };
        trace!("dazzler_in({:o})={:02X}", port, v);
        v
    }

    pub fn port_out(&mut self, port: u8, v: u8) {
        match port {
            CTRL_PORT => self.out_ctrl(v),
            PICT_PORT => self.out_pict(v),
            _ => (),
        }
    }

    /// Handle a byte arriving on the bound serial interface
    pub fn receive(&mut self, data: u8, sink: &mut impl KeySink) {
        if self.binding.interface() == Interface::None {
            trace!("dazzler disabled, dropping {:02X}", data);
            return;
        }
        self.demux.receive(data, sink);
    }

    /// Move the Dazzler to another serial interface; `0xFF` or `Interface::None` disables it
    pub fn set_iface(&mut self, iface: impl Into<Interface>, ports: &mut impl SerialPorts) {
        if self.binding.bind(iface.into(), ports) {
            self.demux.reset();
        }
    }

    pub fn get_iface(&self) -> u8 {
        self.binding.interface().to_raw()
    }
}

impl<B: SpiBus> Chip for Dazzler<B> {
    fn clock(&mut self, input: CpuOutputPins, cycles: u32, data: &mut u8) {
        match input {
            CpuOutputPins::Out { port, data: v } => self.port_out(port, v),
            CpuOutputPins::In { port }
                if port == STATUS_PORT
                    || (D7A_PORT..D7A_PORT + D7A_PORTS as u8).contains(&port) =>
            {
                *data = self.port_in(port, cycles)
            }
            CpuOutputPins::MemWrite { addr, data: v } => {
                self.write_memory(addr, v);
            }
            _ => (),
        }
    }
}
