//! Entities

pub mod claims;
pub mod user;
