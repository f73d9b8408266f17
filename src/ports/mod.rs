//! Boundaries between the core and the outside world.

pub mod inbound;
pub mod outbound;
