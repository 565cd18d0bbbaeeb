use log::debug;

use crate::{
    config::Interface,
    host::{ReceiveHandler, SerialPorts},
};

/// Which serial interface the Dazzler listens on, and the handler it displaced there
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InterfaceBinding {
    iface: Interface,
    previous: Option<ReceiveHandler>,
}

impl InterfaceBinding {
    pub fn new() -> Self {
        InterfaceBinding::default()
    }

    pub fn interface(&self) -> Interface {
        self.iface
    }

    /// Move the Dazzler to `iface`. Returns false if it was already there.
    pub fn bind(&mut self, iface: Interface, ports: &mut impl SerialPorts) -> bool {
        if iface == self.iface {
            return false;
        }

        if let Interface::Serial(old) = self.iface {
            let restored = self.previous.take();
            debug!("restoring handler {:?} on interface {}", restored, old);
            ports.set_receive_handler(old, restored);
        }

        self.iface = iface;
        self.previous = match iface {
            Interface::Serial(n) => ports.set_receive_handler(n, Some(ReceiveHandler::Dazzler)),
            Interface::None => None,
        };

        match iface {
            Interface::None => debug!("Dazzler disabled"),
            Interface::Serial(n) => debug!("Dazzler on interface {}", n),
        }
        true
    }
}
