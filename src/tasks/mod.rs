//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Metrics Reporter: Logs cache metrics at configured intervals

mod reporter;

pub use reporter::spawn_metrics_reporter;
