//! Fake vertical sync for programs that poll the status port.
//!
//! Nothing here is tied to what the rendering device actually shows. The Dazzler
//! does not interlace; it counts each 262 line field as a frame, so one frame is
//! 1/59.94 s, or 33367 cycles at 2 MHz.
use bitflags::bitflags;
use log::trace;

pub const CYCLES_PER_FRAME: u32 = 33367;
pub const LINES_PER_FRAME: u32 = 262;
pub const CYCLES_PER_LINE: u32 = CYCLES_PER_FRAME / LINES_PER_FRAME;
/// Bit 6 is low for about 4ms at the start of every frame
pub const BLANKING_CYCLES: u32 = 8000;

bitflags! {
    /// Status port bits. Both are active low, bits 0-5 always read high.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const EVEN_LINE = 0x80;
        const NOT_BLANKING = 0x40;
        const UNUSED = 0x3F;
    }
}

pub fn status(cycles: u32) -> Status {
    let c = cycles % CYCLES_PER_FRAME;
    let mut v = Status::all();

    // bit 7 is pulled low together with bit 6 during blanking
    if c < BLANKING_CYCLES {
        v.remove(Status::EVEN_LINE | Status::NOT_BLANKING);
    }

    if (c / CYCLES_PER_LINE) & 1 != 0 {
        v.remove(Status::EVEN_LINE);
    }

    trace!("dazzler status at {}: {:02X}", c, v.bits());
    v
}
