mod client;
pub mod model;

pub use client::{Client, API_PATH_APPLIANCES, API_PATH_DEVICES};
pub use model::{Appliance, ApplianceKind, Device, DeviceCore};
