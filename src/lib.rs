//! Small, self-contained renditions of four classic object-oriented
//! design patterns.
//!
//! Each module stands on its own; run the matching binary to see the demo:
//!
//! ```text
//! cargo run --bin abstract_factory
//! cargo run --bin adapter
//! cargo run --bin factory_method
//! cargo run --bin observer
//! ```

pub mod abstract_factory;
pub mod adapter;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod observer;

pub use error::{Error, Result};
