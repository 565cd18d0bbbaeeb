use bitflags::bitflags;
use log::debug;

/// Size of the video window with `Picture::MEM_2K` clear
pub const SMALL_WINDOW: u16 = 512;
/// Size of the video window with `Picture::MEM_2K` set, and of the transmit buffer
pub const LARGE_WINDOW: u16 = 2048;

bitflags! {
    /// Control register, written to port 0o16
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Control: u8 {
        const ENABLE = 0x80;
        /// Bits 15-9 of the video memory address
        const ADDRESS = 0x7F;
    }
}

impl Control {
    #[inline]
    pub fn base_address(self) -> u16 {
        ((self & Control::ADDRESS).bits() as u16) << 9
    }
}

bitflags! {
    /// Picture register, written to port 0o17. Bit 7 is unused.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Picture: u8 {
        /// x4 resolution, single color
        const HIGH_RES = 0x40;
        const MEM_2K = 0x20;
        const COLOR = 0x10;
        /// Color for the x4 resolution mode
        const COLOR_INFO = 0x0F;
    }
}

impl Picture {
    #[inline]
    pub fn window_size(self) -> u16 {
        if self.contains(Picture::MEM_2K) {
            LARGE_WINDOW
        } else {
            SMALL_WINDOW
        }
    }
}

/// Range of emulated memory currently mapped to the video device.
///
/// `end` is exclusive and kept wider than an address, since a 2K window at
/// 0xFE00 runs past the top of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoWindow {
    pub start: u16,
    pub end: u32,
    pub size: u16,
}

impl VideoWindow {
    pub fn new() -> Self {
        VideoWindow {
            start: 0,
            end: 0,
            size: SMALL_WINDOW,
        }
    }

    #[inline]
    pub fn contains(&self, addr: u16) -> bool {
        (self.start as u32..self.end).contains(&(addr as u32))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start as u32
    }

    #[inline]
    fn recompute_end(&mut self) {
        self.end = self.start as u32 + self.size as u32;
    }
}

impl Default for VideoWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// The two write-only registers and the window derived from them
#[derive(Debug, Default, Clone)]
pub struct RegisterBank {
    pub ctrl: Control,
    pub pict: Picture,
    window: VideoWindow,
}

impl RegisterBank {
    pub fn new() -> Self {
        RegisterBank::default()
    }

    pub fn window(&self) -> VideoWindow {
        self.window
    }

    pub fn write_control(&mut self, ctrl: Control) {
        if ctrl != self.ctrl {
            debug!("control register {:02X}", ctrl.bits());
        }
        self.ctrl = ctrl;

        let base = ctrl.base_address();
        if !ctrl.contains(Control::ENABLE) {
            self.window.start = 0;
            self.window.end = 0;
        } else if base != self.window.start {
            self.window.start = base;
            self.window.recompute_end();
        }
    }

    /// Returns true if the window grew, i.e. the device must be sent a full frame
    pub fn write_picture(&mut self, pict: Picture) -> bool {
        if pict != self.pict {
            debug!("picture register {:02X}", pict.bits());
        }
        self.pict = pict;

        let size = pict.window_size();
        let grew = size > self.window.size;
        self.window.size = size;
        self.window.recompute_end();
        grew
    }
}
