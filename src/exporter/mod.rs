//! Nature Remo exporter: one fetch-and-translate pass per scrape.

pub mod collectors;
pub mod metrics;

use std::sync::Arc;

use crate::model::{batch_collect_metrics, MetricCollector, MetricDescs, Observation};
use crate::natureremo::Client;

pub use collectors::{ApplianceMetricCollector, DeviceMetricCollector};

pub struct Exporter {
    descs: Arc<MetricDescs>,
    collectors: Vec<Box<dyn MetricCollector>>,
}

impl Exporter {
    /// Creates an exporter that collects devices and appliances through `client`.
    pub fn new(client: Arc<Client>, descs: Arc<MetricDescs>) -> Self {
        let collectors: Vec<Box<dyn MetricCollector>> = vec![
            Box::new(DeviceMetricCollector::new(
                Arc::clone(&client),
                Arc::clone(&descs),
            )),
            Box::new(ApplianceMetricCollector::new(client, Arc::clone(&descs))),
        ];
        Self::with_collectors(descs, collectors)
    }

    pub fn with_collectors(
        descs: Arc<MetricDescs>,
        collectors: Vec<Box<dyn MetricCollector>>,
    ) -> Self {
        Self { descs, collectors }
    }

    pub fn descs(&self) -> &MetricDescs {
        &self.descs
    }

    /// Runs every collector concurrently and waits for all of them.
    pub async fn collect(&self) -> Vec<Observation> {
        batch_collect_metrics(&self.collectors).await
    }
}
