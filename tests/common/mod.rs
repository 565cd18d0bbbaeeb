use std::collections::HashMap;

use dazzler_core::host::{KeySink, ReceiveHandler, SerialPorts};

/// Stand-in for the host's serial layer
#[derive(Debug, Default)]
pub struct HostSerial {
    pub handlers: HashMap<u8, ReceiveHandler>,
    pub sio: Option<u8>,
    pub received: Vec<(u8, u8)>,
}

impl HostSerial {
    /// Interfaces 0-3 with their default handlers installed, SIO mapped to interface 0
    pub fn new() -> Self {
        let mut serial = HostSerial {
            sio: Some(0),
            ..Default::default()
        };
        for iface in 0..4 {
            serial
                .handlers
                .insert(iface, ReceiveHandler::Other(iface as u16));
        }
        serial
    }

    #[allow(dead_code)]
    pub fn dazzler_interfaces(&self) -> Vec<u8> {
        let mut ifaces: Vec<u8> = self
            .handlers
            .iter()
            .filter(|(_, h)| **h == ReceiveHandler::Dazzler)
            .map(|(i, _)| *i)
            .collect();
        ifaces.sort();
        ifaces
    }
}

impl KeySink for HostSerial {
    fn sio_host_interface(&self) -> Option<u8> {
        self.sio
    }

    fn receive_host_data(&mut self, iface: u8, data: u8) {
        self.received.push((iface, data));
    }
}

impl SerialPorts for HostSerial {
    fn set_receive_handler(
        &mut self,
        iface: u8,
        handler: Option<ReceiveHandler>,
    ) -> Option<ReceiveHandler> {
        match handler {
            Some(h) => self.handlers.insert(iface, h),
            None => self.handlers.remove(&iface),
        }
    }
}
