//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and performs the file I/O.

pub mod error;
pub mod resolver;
pub mod writer;

pub use error::{ApplicationError, ApplicationResult};
pub use resolver::{Origin, Resolution, Resolver};
pub use writer::ConfigWriter;
