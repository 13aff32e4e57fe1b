//! Translation of API records into observations.

mod aircon;
pub mod appliance;
pub mod device;
mod light;
pub mod smart_meter;

pub use appliance::create_appliance_metrics;
pub use device::create_device_metrics;
