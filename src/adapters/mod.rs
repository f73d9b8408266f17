//! Outbound adapters implementing the ports.

pub mod argon2;
pub mod email;
pub mod persistence;
