//! Core entities of account creation.

pub mod account;
pub mod error;
pub mod password;

pub use account::*;
pub use password::*;
