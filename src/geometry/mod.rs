pub mod distance;

pub use distance::{Units, distance};
