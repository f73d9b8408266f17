//! Transport-independent controllers and their envelopes.

pub mod errors;
pub mod helpers;
pub mod protocols;
pub mod signup;

pub use errors::*;
pub use protocols::*;
pub use signup::*;
