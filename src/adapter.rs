//! Adapter: the client only knows how to plug a Lightning connector into a
//! [`Computer`]. Windows machines only take USB, so [`WindowsAdapter`]
//! translates one call into the other.

use tracing::debug;

/// Anything that accepts a Lightning connector.
pub trait Computer {
    fn insert_into_lightning_port(&self);
}

/// Native capability of USB-only devices.
#[cfg_attr(test, mockall::automock)]
pub trait UsbPort {
    fn insert_into_usb_port(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Mac;

impl Computer for Mac {
    fn insert_into_lightning_port(&self) {
        println!("Lightning connector is plugged into mac machine.");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Windows;

impl UsbPort for Windows {
    fn insert_into_usb_port(&self) {
        println!("USB connector is plugged into windows machine.");
    }
}

/// Wraps a USB-only device and exposes it as a [`Computer`].
#[derive(Debug, Default, Clone)]
pub struct WindowsAdapter<P: UsbPort = Windows> {
    machine: P,
}

impl<P: UsbPort> WindowsAdapter<P> {
    pub fn new(machine: P) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> &P {
        &self.machine
    }

    pub fn into_inner(self) -> P {
        self.machine
    }
}

impl<P: UsbPort> Computer for WindowsAdapter<P> {
    fn insert_into_lightning_port(&self) {
        println!("Adapter converts Lightning signal to USB.");
        debug!("delegating lightning insertion to usb port");
        self.machine.insert_into_usb_port();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Client;

impl Client {
    /// Works against the capability only; the concrete machine is unknown here.
    pub fn insert_lightning_connector_into_computer(&self, computer: &dyn Computer) {
        println!("Client inserts Lightning connector into computer.");
        computer.insert_into_lightning_port();
    }
}
