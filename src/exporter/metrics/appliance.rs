//! Appliance metric building: dispatch on the appliance kind.

use crate::error::TranslateError;
use crate::exporter::metrics::{aircon, light, smart_meter};
use crate::model::{MetricDescs, Observation};
use crate::natureremo::{Appliance, ApplianceKind};

/// Label values shared by every appliance metric.
pub(crate) struct ApplianceLabels<'a> {
    id: &'a str,
    remoid: &'a str,
    name: &'a str,
}

impl<'a> ApplianceLabels<'a> {
    pub(crate) fn new(appliance: &'a Appliance) -> Self {
        Self {
            id: &appliance.id,
            remoid: &appliance.device.id,
            name: &appliance.nickname,
        }
    }

    pub(crate) fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.remoid.to_string(),
            self.name.to_string(),
        ]
    }

    /// Label values prefixed by the operation mode.
    pub(crate) fn with_mode(&self, mode: &str) -> Vec<String> {
        let mut values = Vec::with_capacity(4);
        values.push(mode.to_string());
        values.extend(self.values());
        values
    }
}

/// Creates the observations for one appliance.
///
/// Types without metrics (IR, TV, anything unknown) yield nothing. A missing
/// payload or a broken smart-meter scale is logged and ends the translation of
/// this appliance, keeping whatever was already emitted.
pub fn create_appliance_metrics(descs: &MetricDescs, appliance: &Appliance) -> Vec<Observation> {
    let labels = ApplianceLabels::new(appliance);
    let mut metrics = Vec::new();

    let result = match &appliance.kind {
        ApplianceKind::Aircon { aircon, settings } => aircon::emit_aircon_metrics(
            descs,
            &labels,
            aircon.as_ref(),
            settings.as_ref(),
            &mut metrics,
        ),
        ApplianceKind::Light(light) => {
            light::emit_light_metrics(descs, &labels, light.as_ref(), &mut metrics)
        }
        ApplianceKind::SmartMeter(smart_meter) => smart_meter::emit_smart_meter_metrics(
            descs,
            &labels,
            smart_meter.as_ref(),
            &mut metrics,
        ),
        ApplianceKind::Ir | ApplianceKind::Tv | ApplianceKind::Unknown(_) => {
            tracing::debug!(
                "No metrics for appliance {} with type={}",
                appliance.id,
                appliance.kind.type_name()
            );
            Ok(())
        }
    };

    match result {
        Ok(()) => {}
        Err(e @ TranslateError::MissingSubPayload { .. }) => {
            tracing::warn!("{} (appliance {})", e, appliance.id);
        }
        Err(e) => {
            tracing::error!(
                "Skipping remaining metrics of {} appliance {}: {}",
                appliance.kind.type_name(),
                appliance.id,
                e
            );
        }
    }

    metrics
}
