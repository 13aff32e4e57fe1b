//! Device metric collector implementation.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::exporter::metrics::create_device_metrics;
use crate::model::{MetricCollector, MetricDescs, Observation};
use crate::natureremo::Client;

/// Collector for the sensor readings and calibration offsets of Remo hubs.
pub struct DeviceMetricCollector {
    client: Arc<Client>,
    descs: Arc<MetricDescs>,
}

impl DeviceMetricCollector {
    /// Creates a new DeviceMetricCollector instance.
    pub fn new(client: Arc<Client>, descs: Arc<MetricDescs>) -> Self {
        Self { client, descs }
    }
}

#[async_trait]
impl MetricCollector for DeviceMetricCollector {
    async fn collect(&self) -> Result<Vec<Observation>> {
        let devices = self.client.fetch_devices().await?;
        tracing::info!("Fetched {} devices", devices.len());

        Ok(devices
            .iter()
            .flat_map(|device| create_device_metrics(&self.descs, device))
            .collect())
    }
}
