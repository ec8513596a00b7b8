use thiserror::Error;

/// Failures raised by the registry lookups.
///
/// Only the keyed constructors can fail; the adapter and observer demos
/// have no error paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    #[error("no gun type found for {0}")]
    UnknownGunType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
