/// The serial interface carrying Dazzler traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interface {
    #[default]
    None,
    Serial(u8),
}

impl Interface {
    pub const RAW_NONE: u8 = 0xFF;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::RAW_NONE => Interface::None,
            n => Interface::Serial(n),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            Interface::None => Self::RAW_NONE,
            Interface::Serial(n) => n,
        }
    }
}

impl From<u8> for Interface {
    fn from(raw: u8) -> Self {
        Interface::from_raw(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub interface: Interface,
    /// SPI clock is the MCU clock divided by this
    pub spi_divisor: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interface: Interface::None,
            spi_divisor: 2,
        }
    }
}

impl Config {
    pub fn with_interface(interface: Interface) -> Self {
        Config {
            interface,
            ..Default::default()
        }
    }
}
