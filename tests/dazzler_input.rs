mod common;

use common::HostSerial;
use dazzler_core::{
    dazzler::{demux::DemuxState, D7A_PORT},
    host::{ReceiveHandler, RecordingBus},
    Config, Dazzler, Interface,
};

fn dazzler_on(iface: Interface, serial: &mut HostSerial) -> Dazzler<RecordingBus> {
    Dazzler::new(RecordingBus::new(), Config::with_interface(iface), serial)
}

#[test]
fn setup_binds_configured_interface() {
    let mut serial = HostSerial::new();
    let d = dazzler_on(Interface::Serial(2), &mut serial);

    assert_eq!(d.get_iface(), 2);
    assert_eq!(serial.dazzler_interfaces(), vec![2]);
}

#[test]
fn key_is_forwarded_to_sio() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::Serial(1), &mut serial);

    for b in [0x30, 0x41] {
        d.receive(b, &mut serial);
    }

    assert_eq!(serial.received, vec![(0, 0x41)]);
    for port in D7A_PORT..D7A_PORT + 5 {
        assert_eq!(d.port_in(port, 0), 0xFF);
    }
}

#[test]
fn joysticks_show_up_on_d7a_ports() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::Serial(1), &mut serial);

    for b in [0x1E, 0x80, 0x7F, 0x2D, 0x01, 0xFE] {
        d.receive(b, &mut serial);
    }

    let ports: Vec<u8> = (D7A_PORT..D7A_PORT + 5).map(|p| d.port_in(p, 0)).collect();
    assert_eq!(ports, vec![0xDE, 0x80, 0x7F, 0x01, 0xFE]);
    assert_eq!(d.d7a_ports().joy2_y(), 0xFE);
    assert!(serial.received.is_empty());
}

#[test]
fn rebinding_restores_handlers() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::Serial(1), &mut serial);

    d.set_iface(3u8, &mut serial);
    assert_eq!(serial.handlers[&1], ReceiveHandler::Other(1));
    assert_eq!(serial.handlers[&3], ReceiveHandler::Dazzler);
    assert_eq!(d.get_iface(), 3);

    d.set_iface(0xFFu8, &mut serial);
    assert_eq!(serial.handlers[&3], ReceiveHandler::Other(3));
    assert!(serial.dazzler_interfaces().is_empty());
    assert_eq!(d.get_iface(), 0xFF);
}

#[test]
fn rebinding_drops_a_half_received_sequence() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::Serial(1), &mut serial);

    d.receive(0x10, &mut serial);
    assert_eq!(d.demux_state(), DemuxState::AwaitingJoy1Byte1);

    d.set_iface(1u8, &mut serial);
    assert_eq!(d.demux_state(), DemuxState::AwaitingJoy1Byte1);

    d.set_iface(2u8, &mut serial);
    assert_eq!(d.demux_state(), DemuxState::Idle);
}

#[test]
fn nothing_is_decoded_after_unbinding() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::Serial(1), &mut serial);

    d.set_iface(0xFFu8, &mut serial);
    for b in [0x30, 0x41, 0x1E, 0x80, 0x7F] {
        d.receive(b, &mut serial);
    }

    assert!(serial.received.is_empty());
    for port in D7A_PORT..D7A_PORT + 5 {
        assert_eq!(d.port_in(port, 0), 0xFF);
    }
    assert_eq!(d.demux_state(), DemuxState::Idle);
}

#[test]
fn never_bound_dazzler_ignores_input() {
    let mut serial = HostSerial::new();
    let mut d = dazzler_on(Interface::None, &mut serial);

    for b in [0x30, 0x41] {
        d.receive(b, &mut serial);
    }
    assert!(serial.received.is_empty());
}
