//! Factory Method: `get_gun` maps a type name to a concrete [`Gun`].

use tracing::{debug, warn};

use crate::error::{Error, Result};

pub trait Gun {
    fn set_name(&mut self, name: &str);
    fn set_power(&mut self, power: u32);
    fn name(&self) -> &str;
    fn power(&self) -> u32;
}

/// State shared by every gun. Concrete guns embed it and delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GunBase {
    name: String,
    power: u32,
}

impl GunBase {
    fn new(name: &str, power: u32) -> Self {
        Self {
            name: name.to_string(),
            power,
        }
    }
}

impl Gun for GunBase {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_power(&mut self, power: u32) {
        self.power = power;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn power(&self) -> u32 {
        self.power
    }
}

macro_rules! delegate_gun {
    ($name:ident) => {
        impl Gun for $name {
            fn set_name(&mut self, name: &str) {
                self.base.set_name(name);
            }

            fn set_power(&mut self, power: u32) {
                self.base.set_power(power);
            }

            fn name(&self) -> &str {
                self.base.name()
            }

            fn power(&self) -> u32 {
                self.base.power()
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ak47 {
    base: GunBase,
}

impl Ak47 {
    pub fn new() -> Self {
        Self {
            base: GunBase::new("AK47", 47),
        }
    }
}

impl Default for Ak47 {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M16 {
    base: GunBase,
}

impl M16 {
    pub fn new() -> Self {
        Self {
            base: GunBase::new("M16", 1600),
        }
    }
}

impl Default for M16 {
    fn default() -> Self {
        Self::new()
    }
}

delegate_gun!(Ak47);
delegate_gun!(M16);

/// Builds the gun registered under `gun_type`.
///
/// Recognized names are `"AK47"` and `"M16"`.
pub fn get_gun(gun_type: &str) -> Result<Box<dyn Gun>> {
    let gun: Box<dyn Gun> = match gun_type {
        "AK47" => Box::new(Ak47::new()),
        "M16" => Box::new(M16::new()),
        other => {
            warn!(gun_type = other, "no constructor registered");
            return Err(Error::UnknownGunType(other.to_string()));
        }
    };
    debug!(name = gun.name(), power = gun.power(), "gun constructed");
    Ok(gun)
}
