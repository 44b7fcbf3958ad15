//! API Routes
//!
//! Route handlers organized by resource.

pub mod feedback;
pub mod health;
pub mod metrics;
pub mod predict;
pub mod roadmap;
