//! Collector implementations for the two Nature Remo resource collections.

pub mod appliance_collector;
pub mod device_collector;

pub use appliance_collector::ApplianceMetricCollector;
pub use device_collector::DeviceMetricCollector;
