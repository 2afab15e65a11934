//! Application use cases

pub mod poster;

pub use poster::{PostOutcome, Poster};
