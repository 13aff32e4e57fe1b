use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Prefix shared by every exported metric name.
pub const NAMESPACE: &str = "natureremo";

/// Label names attached to metrics derived from a device.
pub const DEVICE_LABELS: &[&str] = &["remoid", "name", "serial"];

/// Label names attached to metrics derived from an appliance.
pub const APPLIANCE_LABELS: &[&str] = &["id", "remoid", "name"];

/// Label names of air-conditioner metrics that also carry the operation mode.
pub const AC_MODE_LABELS: &[&str] = &["mode", "id", "remoid", "name"];

/// Static description of one exported gauge.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDesc {
    pub fq_name: String,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

impl MetricDesc {
    fn new(
        subsystem: &str,
        name: &str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Arc<Self> {
        Arc::new(Self {
            fq_name: build_fq_name(NAMESPACE, subsystem, name),
            help,
            labels,
        })
    }
}

/// Joins the non-empty name components with underscores.
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// The complete, immutable table of exported metrics.
///
/// Built once at startup and shared by the collectors, which attach a descriptor
/// to every observation, and by the exposition renderer, which registers them.
#[derive(Debug)]
pub struct MetricDescs {
    pub sensor_temperature: Arc<MetricDesc>,
    pub sensor_humidity: Arc<MetricDesc>,
    pub sensor_illuminance: Arc<MetricDesc>,
    pub sensor_motion: Arc<MetricDesc>,
    pub sensor_offset_temperature: Arc<MetricDesc>,
    pub sensor_offset_humidity: Arc<MetricDesc>,
    pub ac_on: Arc<MetricDesc>,
    pub ac_mode: Arc<MetricDesc>,
    pub ac_temperature_celsius: Arc<MetricDesc>,
    pub ac_temperature_fahrenheit: Arc<MetricDesc>,
    pub light_on: Arc<MetricDesc>,
    pub light_brightness: Arc<MetricDesc>,
    pub smart_meter_forward_energy: Arc<MetricDesc>,
    pub smart_meter_backward_energy: Arc<MetricDesc>,
    pub smart_meter_instantaneous_power: Arc<MetricDesc>,
}

impl MetricDescs {
    pub fn new() -> Self {
        Self {
            sensor_temperature: MetricDesc::new(
                "sensor",
                "temperature",
                "Measured temperature",
                DEVICE_LABELS,
            ),
            sensor_humidity: MetricDesc::new(
                "sensor",
                "humidity",
                "Measured humidity",
                DEVICE_LABELS,
            ),
            sensor_illuminance: MetricDesc::new(
                "sensor",
                "illuminance",
                "Measured illuminance",
                DEVICE_LABELS,
            ),
            sensor_motion: MetricDesc::new("sensor", "motion", "Measured motion", DEVICE_LABELS),
            sensor_offset_temperature: MetricDesc::new(
                "sensor_offset",
                "temperature",
                "Temperature offset setting",
                DEVICE_LABELS,
            ),
            sensor_offset_humidity: MetricDesc::new(
                "sensor_offset",
                "humidity",
                "Humidity offset setting",
                DEVICE_LABELS,
            ),
            ac_on: MetricDesc::new(
                "ac",
                "on",
                "Whether air-conditioning is turned on",
                APPLIANCE_LABELS,
            ),
            ac_mode: MetricDesc::new(
                "ac",
                "mode",
                "Air-conditioning mode setting",
                AC_MODE_LABELS,
            ),
            ac_temperature_celsius: MetricDesc::new(
                "ac",
                "temperature_celsius",
                "Air-conditioning temperature setting in degrees Celsius",
                AC_MODE_LABELS,
            ),
            ac_temperature_fahrenheit: MetricDesc::new(
                "ac",
                "temperature_fahrenheit",
                "Air-conditioning temperature setting in degrees Fahrenheit",
                AC_MODE_LABELS,
            ),
            light_on: MetricDesc::new(
                "light",
                "on",
                "Whether light is turned on",
                APPLIANCE_LABELS,
            ),
            light_brightness: MetricDesc::new(
                "light",
                "brightness",
                "Light brightness setting",
                APPLIANCE_LABELS,
            ),
            smart_meter_forward_energy: MetricDesc::new(
                "smart_meter",
                "forward_energy_kilowatthours",
                "Cumulative forward energy",
                APPLIANCE_LABELS,
            ),
            smart_meter_backward_energy: MetricDesc::new(
                "smart_meter",
                "backward_energy_kilowatthours",
                "Cumulative backward energy",
                APPLIANCE_LABELS,
            ),
            smart_meter_instantaneous_power: MetricDesc::new(
                "smart_meter",
                "instantaneous_power_watts",
                "Measured instantaneous power",
                APPLIANCE_LABELS,
            ),
        }
    }

    /// Every descriptor, in a stable order.
    pub fn all(&self) -> [&Arc<MetricDesc>; 15] {
        [
            &self.sensor_temperature,
            &self.sensor_humidity,
            &self.sensor_illuminance,
            &self.sensor_motion,
            &self.sensor_offset_temperature,
            &self.sensor_offset_humidity,
            &self.ac_on,
            &self.ac_mode,
            &self.ac_temperature_celsius,
            &self.ac_temperature_fahrenheit,
            &self.light_on,
            &self.light_brightness,
            &self.smart_meter_forward_energy,
            &self.smart_meter_backward_energy,
            &self.smart_meter_instantaneous_power,
        ]
    }
}

impl Default for MetricDescs {
    fn default() -> Self {
        Self::new()
    }
}

/// One labeled sample produced by a scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub desc: Arc<MetricDesc>,
    /// Values in the order of `desc.labels`.
    pub label_values: Vec<String>,
    pub value: f64,
}

impl Observation {
    pub fn new(desc: &Arc<MetricDesc>, label_values: Vec<String>, value: f64) -> Self {
        Self {
            desc: Arc::clone(desc),
            label_values,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.desc.fq_name
    }
}

/// Trait for types that fetch one resource collection and translate it.
///
/// A failing collector only loses its own observations; see [`batch_collect_metrics`].
#[async_trait]
pub trait MetricCollector: Send + Sync {
    async fn collect(&self) -> Result<Vec<Observation>>;
}

/// Runs all collectors concurrently and concatenates their observations.
///
/// Failures are logged as warnings and contribute nothing, so one unreachable
/// resource never hides the metrics of another.
pub async fn batch_collect_metrics(collectors: &[Box<dyn MetricCollector>]) -> Vec<Observation> {
    let results = join_all(collectors.iter().map(|collector| collector.collect())).await;

    results
        .into_iter()
        .filter_map(|res| match res {
            Ok(observations) => Some(observations),
            Err(e) => {
                tracing::warn!("Failed to collect metrics: {:#}", e);
                None
            }
        })
        .flatten()
        .collect()
}
