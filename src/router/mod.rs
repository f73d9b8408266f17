//! HTTP routes.

pub mod metrics;
pub mod signup;
pub mod status;
