//! Smart meter metric building.
//!
//! The meter reports ECHONET Lite properties. Cumulative energy registers are raw
//! integers which have to be scaled by the coefficient (EPC 0xD3) and the unit
//! (EPC 0xE1) to obtain kilowatt-hours.

use crate::error::TranslateError;
use crate::exporter::metrics::appliance::ApplianceLabels;
use crate::model::{MetricDescs, Observation};
use crate::natureremo::model::{SmartMeter, APPLIANCE_EL_SMART_METER};

pub const EPC_COEFFICIENT: i64 = 0xD3;
pub const EPC_FORWARD_ENERGY: i64 = 0xE0;
pub const EPC_UNIT: i64 = 0xE1;
pub const EPC_BACKWARD_ENERGY: i64 = 0xE3;
pub const EPC_INSTANTANEOUS_POWER: i64 = 0xE7;

/// Decodes the unit code of EPC 0xE1 into a decimal multiplier.
///
/// Codes below 0x0A are negative powers of ten (0x01 = 0.1 kWh), from 0x0A on they
/// are positive powers starting at ten (0x0A = 10 kWh). Codes far outside the
/// ECHONET Lite range saturate to infinity.
pub fn sm_unit(code: i64) -> f64 {
    if code < 0x0A {
        pow10(code.saturating_neg())
    } else {
        pow10(code.saturating_sub(0x09))
    }
}

fn pow10(exp: i64) -> f64 {
    let exp = exp.clamp(-(i32::MAX as i64), i32::MAX as i64) as i32;
    // dividing by an exact power keeps 10^-n the closest double to the literal
    if exp >= 0 {
        10f64.powi(exp)
    } else {
        1.0 / 10f64.powi(-exp)
    }
}

pub(crate) fn emit_smart_meter_metrics(
    descs: &MetricDescs,
    labels: &ApplianceLabels,
    smart_meter: Option<&SmartMeter>,
    metrics: &mut Vec<Observation>,
) -> Result<(), TranslateError> {
    let sm = smart_meter
        .ok_or_else(|| TranslateError::missing_sub_payload(APPLIANCE_EL_SMART_METER, "smart_meter"))?;

    match sm.find_int_property(EPC_INSTANTANEOUS_POWER) {
        Ok(Some(watts)) => metrics.push(Observation::new(
            &descs.smart_meter_instantaneous_power,
            labels.values(),
            watts as f64,
        )),
        Ok(None) => {}
        Err(e) => tracing::warn!("{}", e),
    }

    // both registers share this scale, a wrong one is worse than none
    let coefficient = sm.find_int_property(EPC_COEFFICIENT)?.unwrap_or(1);
    let unit = match sm.find_int_property(EPC_UNIT)? {
        Some(code) => {
            let unit = sm_unit(code);
            if !unit.is_finite() {
                return Err(TranslateError::field_parse(
                    format!("EPC {}", EPC_UNIT),
                    code.to_string(),
                    "unit multiplier is out of range",
                ));
            }
            unit
        }
        None => 1.0,
    };

    let registers = [
        (&descs.smart_meter_forward_energy, EPC_FORWARD_ENERGY),
        (&descs.smart_meter_backward_energy, EPC_BACKWARD_ENERGY),
    ];
    for (desc, epc) in registers {
        match sm.find_int_property(epc) {
            Ok(Some(raw)) => metrics.push(Observation::new(
                desc,
                labels.values(),
                raw as f64 * coefficient as f64 * unit,
            )),
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }

    Ok(())
}
