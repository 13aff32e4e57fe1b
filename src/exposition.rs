//! Rendering of observations in the Prometheus text exposition format.

use crate::error::SinkError;
use crate::model::{MetricDescs, Observation};
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;

pub use prometheus::TEXT_FORMAT as CONTENT_TYPE;

/// Renders one scrape worth of observations.
///
/// A fresh registry is built for every call, so samples never outlive the scrape
/// that produced them. Families without samples are left out.
pub fn render(descs: &MetricDescs, observations: &[Observation]) -> Result<String, SinkError> {
    let registry = Registry::new();
    let mut gauges: HashMap<&str, GaugeVec> = HashMap::new();

    for desc in descs.all() {
        let gauge = GaugeVec::new(Opts::new(desc.fq_name.as_str(), desc.help), desc.labels)?;
        registry.register(Box::new(gauge.clone()))?;
        gauges.insert(desc.fq_name.as_str(), gauge);
    }

    for observation in observations {
        let Some(gauge) = gauges.get(observation.name()) else {
            tracing::warn!("Dropping sample of unregistered metric {}", observation.name());
            continue;
        };
        let values: Vec<&str> = observation
            .label_values
            .iter()
            .map(String::as_str)
            .collect();
        match gauge.get_metric_with_label_values(&values) {
            Ok(metric) => metric.set(observation.value),
            Err(e) => tracing::warn!("Dropping sample of {}: {}", observation.name(), e),
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
