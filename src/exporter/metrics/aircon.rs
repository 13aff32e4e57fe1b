use crate::error::TranslateError;
use crate::exporter::metrics::appliance::ApplianceLabels;
use crate::model::{MetricDescs, Observation};
use crate::natureremo::model::{Aircon, AirconSettings, APPLIANCE_AC};

const BUTTON_POWER_OFF: &str = "power-off";

pub(crate) fn emit_aircon_metrics(
    descs: &MetricDescs,
    labels: &ApplianceLabels,
    aircon: Option<&Aircon>,
    settings: Option<&AirconSettings>,
    metrics: &mut Vec<Observation>,
) -> Result<(), TranslateError> {
    let aircon = aircon.ok_or_else(|| TranslateError::missing_sub_payload(APPLIANCE_AC, "aircon"))?;
    let settings =
        settings.ok_or_else(|| TranslateError::missing_sub_payload(APPLIANCE_AC, "settings"))?;

    let on = if settings.button == BUTTON_POWER_OFF {
        0.0
    } else {
        1.0
    };
    metrics.push(Observation::new(&descs.ac_on, labels.values(), on));

    // ac_mode reports whether the set mode is currently running, hence `on`
    let mode = settings.mode.as_str();
    if !mode.is_empty() {
        metrics.push(Observation::new(&descs.ac_mode, labels.with_mode(mode), on));
    }

    let desc = match aircon.temperature_unit.as_str() {
        "c" => &descs.ac_temperature_celsius,
        "f" => &descs.ac_temperature_fahrenheit,
        _ => return Ok(()),
    };
    // non-numeric settings such as "auto" have no temperature to report
    if let Ok(temperature) = settings.temperature.parse::<f64>() {
        metrics.push(Observation::new(desc, labels.with_mode(mode), temperature));
    }

    Ok(())
}
