pub mod aqicn;
pub mod types;

pub use aqicn::{AqicnClient, AqicnError, MapBounds};
