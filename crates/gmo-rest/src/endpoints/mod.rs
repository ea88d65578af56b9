//! Endpoint descriptors for supported operations
//!
//! Each descriptor pairs a method and path with its parameter, body and
//! response shapes. Public descriptors are sent under `/public`, private
//! ones under `/private` with a signature.

pub mod private;
pub mod public;

pub use private::{ASSETS, MARGIN, ORDER};
pub use public::{STATUS, TICKER};
