//! Use cases offered by the application.

pub mod create_account;

pub use create_account::*;
