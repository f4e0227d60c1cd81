//! Business logic services.

pub mod auth;
pub mod dashboard;
pub mod metrics;
pub mod notifications;
pub mod profiles;
pub mod timestamp;
