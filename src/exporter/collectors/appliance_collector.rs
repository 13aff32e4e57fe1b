//! Appliance metric collector implementation.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::exporter::metrics::create_appliance_metrics;
use crate::model::{MetricCollector, MetricDescs, Observation};
use crate::natureremo::Client;

/// Collector for air conditioners, lights and smart meters.
pub struct ApplianceMetricCollector {
    client: Arc<Client>,
    descs: Arc<MetricDescs>,
}

impl ApplianceMetricCollector {
    /// Creates a new ApplianceMetricCollector instance.
    pub fn new(client: Arc<Client>, descs: Arc<MetricDescs>) -> Self {
        Self { client, descs }
    }
}

#[async_trait]
impl MetricCollector for ApplianceMetricCollector {
    async fn collect(&self) -> Result<Vec<Observation>> {
        let appliances = self.client.fetch_appliances().await?;
        tracing::info!("Fetched {} appliances", appliances.len());

        Ok(appliances
            .iter()
            .flat_map(|appliance| create_appliance_metrics(&self.descs, appliance))
            .collect())
    }
}
