//! Pages

pub mod dashboard;

pub use dashboard::{BootFailure, Dashboard};
