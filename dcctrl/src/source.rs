//! Places case details are looked up from.

mod portal;
mod sample;

pub use portal::{
    Court,
    CourtPortal,
};
pub use sample::SampleSource;
