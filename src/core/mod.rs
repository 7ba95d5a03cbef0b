// src/core/mod.rs

pub mod candidate;
pub mod form;
pub mod output_location;
pub mod poly_pair;

pub use candidate::Candidate;
pub use form::FormDescriptor;
pub use output_location::OutputLocation;
pub use poly_pair::{PolyPair, Side};
