pub mod advisory;
pub mod analysis;
pub mod consumption;
pub mod efficiency;
pub mod emission;
pub mod solar;
pub mod usage;
pub mod waste;
