use crate::error::TranslateError;
use crate::exporter::metrics::appliance::ApplianceLabels;
use crate::model::{MetricDescs, Observation};
use crate::natureremo::model::{Light, APPLIANCE_LIGHT};

pub(crate) fn emit_light_metrics(
    descs: &MetricDescs,
    labels: &ApplianceLabels,
    light: Option<&Light>,
    metrics: &mut Vec<Observation>,
) -> Result<(), TranslateError> {
    let light = light.ok_or_else(|| TranslateError::missing_sub_payload(APPLIANCE_LIGHT, "light"))?;
    let settings = &light.settings;

    let on = if settings.power == "on" { 1.0 } else { 0.0 };
    metrics.push(Observation::new(&descs.light_on, labels.values(), on));

    if let Ok(brightness) = settings.brightness.parse::<f64>() {
        metrics.push(Observation::new(
            &descs.light_brightness,
            labels.values(),
            brightness,
        ));
    }

    Ok(())
}
