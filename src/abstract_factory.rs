//! Abstract Factory: a brand picks a factory, the factory builds a matching
//! shoe and shirt.
//!
//! Every product coming out of one factory carries that factory's brand as
//! its logo.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Size stamped on every product.
pub const DEFAULT_SIZE: u32 = 14;

// =============================================================================
// Products
// =============================================================================

pub trait Shoe {
    fn logo(&self) -> &str;
    fn size(&self) -> u32;
}

pub trait Shirt {
    fn logo(&self) -> &str;
    fn size(&self) -> u32;
}

/// Fields shared by every apparel product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apparel {
    logo: String,
    size: u32,
}

impl Apparel {
    fn new(brand: Brand) -> Self {
        Self {
            logo: brand.as_str().to_string(),
            size: DEFAULT_SIZE,
        }
    }
}

macro_rules! apparel_product {
    ($name:ident, $capability:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            apparel: Apparel,
        }

        impl $capability for $name {
            fn logo(&self) -> &str {
                &self.apparel.logo
            }

            fn size(&self) -> u32 {
                self.apparel.size
            }
        }
    };
}

apparel_product!(AdidasShoe, Shoe);
apparel_product!(AdidasShirt, Shirt);
apparel_product!(NikeShoe, Shoe);
apparel_product!(NikeShirt, Shirt);

// =============================================================================
// Factories
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Adidas,
    Nike,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Adidas, Brand::Nike];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Adidas => "adidas",
            Brand::Nike => "nike",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "adidas" => Ok(Brand::Adidas),
            "nike" => Ok(Brand::Nike),
            other => Err(Error::UnknownBrand(other.to_string())),
        }
    }
}

pub trait SportsFactory {
    fn brand(&self) -> Brand;
    fn make_shoe(&self) -> Box<dyn Shoe>;
    fn make_shirt(&self) -> Box<dyn Shirt>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Adidas;

impl SportsFactory for Adidas {
    fn brand(&self) -> Brand {
        Brand::Adidas
    }

    fn make_shoe(&self) -> Box<dyn Shoe> {
        Box::new(AdidasShoe {
            apparel: Apparel::new(self.brand()),
        })
    }

    fn make_shirt(&self) -> Box<dyn Shirt> {
        Box::new(AdidasShirt {
            apparel: Apparel::new(self.brand()),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Nike;

impl SportsFactory for Nike {
    fn brand(&self) -> Brand {
        Brand::Nike
    }

    fn make_shoe(&self) -> Box<dyn Shoe> {
        Box::new(NikeShoe {
            apparel: Apparel::new(self.brand()),
        })
    }

    fn make_shirt(&self) -> Box<dyn Shirt> {
        Box::new(NikeShirt {
            apparel: Apparel::new(self.brand()),
        })
    }
}

/// Returns the factory for an already-parsed brand.
pub fn factory_for(brand: Brand) -> Box<dyn SportsFactory> {
    debug!(%brand, "building sports factory");
    match brand {
        Brand::Adidas => Box::new(Adidas),
        Brand::Nike => Box::new(Nike),
    }
}

/// Looks up the factory for `brand`.
///
/// Only `"adidas"` and `"nike"` are recognized; anything else yields
/// [`Error::UnknownBrand`].
pub fn get_sports_factory(brand: &str) -> Result<Box<dyn SportsFactory>> {
    let brand = brand.parse::<Brand>().map_err(|err| {
        warn!(%err, "sports factory lookup failed");
        err
    })?;
    Ok(factory_for(brand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_carry_factory_brand() {
        for brand in Brand::ALL {
            let factory = factory_for(brand);
            assert_eq!(factory.brand(), brand);

            let shoe = factory.make_shoe();
            assert_eq!(shoe.logo(), brand.as_str());
            assert_eq!(shoe.size(), DEFAULT_SIZE);

            let shirt = factory.make_shirt();
            assert_eq!(shirt.logo(), brand.as_str());
            assert_eq!(shirt.size(), DEFAULT_SIZE);
        }
    }

    #[test]
    fn test_brand_parse_is_case_sensitive() {
        assert_eq!("nike".parse::<Brand>(), Ok(Brand::Nike));
        assert_eq!(
            "Nike".parse::<Brand>(),
            Err(Error::UnknownBrand("Nike".into()))
        );
    }

    #[test]
    fn test_brand_display_round_trips() {
        for brand in Brand::ALL {
            assert_eq!(brand.to_string().parse::<Brand>(), Ok(brand));
        }
    }
}
