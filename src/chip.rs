/// One CPU bus cycle, as seen by the chips hanging off the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuOutputPins {
    MemRead { addr: u16 },
    MemWrite { addr: u16, data: u8 },
    In { port: u8 },
    Out { port: u8, data: u8 },
}

/// Using this trait makes it easy to clock every chip on the bus independently
pub trait Chip {
    /// Clock by one bus cycle. `cycles` is the free-running system cycle counter.
    ///
    /// A chip only drives `data` for reads it decodes; otherwise it is left alone.
    fn clock(&mut self, input: CpuOutputPins, cycles: u32, data: &mut u8);
}
