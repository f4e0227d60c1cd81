//! Database rows, request DTOs and dashboard view-models.

pub mod dashboard;
pub mod notification;
pub mod pagination;
pub mod profile;
pub mod transaction;
pub mod user;
