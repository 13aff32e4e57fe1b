//! Typed records returned by the Nature Remo cloud API.
//!
//! Absent or `null` scalar fields decode to their zero value. Sub-payloads that the
//! API may omit are kept as `Option` so that translators can report the anomaly.

use crate::error::TranslateError;
use serde::Deserializer;
use serde_derive::Deserialize;

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Identity shared by devices and by the device embedded in an appliance.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DeviceCore {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub serial_number: String,
    #[serde(deserialize_with = "nullable")]
    pub temperature_offset: f64,
    #[serde(deserialize_with = "nullable")]
    pub humidity_offset: f64,
}

/// A Remo hub with its most recent sensor readings.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Device {
    #[serde(flatten)]
    pub core: DeviceCore,
    #[serde(default, rename = "newest_events", deserialize_with = "nullable")]
    pub events: SensorValues,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SensorValues {
    #[serde(rename = "te")]
    pub temperature: Option<SensorValue>,
    #[serde(rename = "hu")]
    pub humidity: Option<SensorValue>,
    #[serde(rename = "il")]
    pub illuminance: Option<SensorValue>,
    #[serde(rename = "mo")]
    pub motion: Option<SensorValue>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SensorValue {
    #[serde(rename = "val", default, deserialize_with = "nullable")]
    pub value: f64,
}

pub const APPLIANCE_IR: &str = "IR";
pub const APPLIANCE_AC: &str = "AC";
pub const APPLIANCE_TV: &str = "TV";
pub const APPLIANCE_LIGHT: &str = "LIGHT";
pub const APPLIANCE_EL_SMART_METER: &str = "EL_SMART_METER";

/// An appliance registered on a Remo hub.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "ApplianceRecord")]
pub struct Appliance {
    pub id: String,
    pub device: DeviceCore,
    pub nickname: String,
    pub kind: ApplianceKind,
}

/// Appliance type together with the payload that belongs to it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceKind {
    Ir,
    Aircon {
        aircon: Option<Aircon>,
        settings: Option<AirconSettings>,
    },
    Tv,
    Light(Option<Light>),
    SmartMeter(Option<SmartMeter>),
    /// A type this exporter does not know about yet.
    Unknown(String),
}

impl ApplianceKind {
    pub fn type_name(&self) -> &str {
        match self {
            ApplianceKind::Ir => APPLIANCE_IR,
            ApplianceKind::Aircon { .. } => APPLIANCE_AC,
            ApplianceKind::Tv => APPLIANCE_TV,
            ApplianceKind::Light(_) => APPLIANCE_LIGHT,
            ApplianceKind::SmartMeter(_) => APPLIANCE_EL_SMART_METER,
            ApplianceKind::Unknown(name) => name,
        }
    }
}

/// Wire shape of an appliance; every sub-payload is optional regardless of type.
#[derive(Deserialize)]
struct ApplianceRecord {
    #[serde(default, deserialize_with = "nullable")]
    id: String,
    #[serde(default, deserialize_with = "nullable")]
    device: DeviceCore,
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    appliance_type: String,
    #[serde(default, deserialize_with = "nullable")]
    nickname: String,
    #[serde(default)]
    settings: Option<AirconSettings>,
    #[serde(default)]
    aircon: Option<Aircon>,
    #[serde(default)]
    light: Option<Light>,
    #[serde(default)]
    smart_meter: Option<SmartMeter>,
}

impl From<ApplianceRecord> for Appliance {
    fn from(record: ApplianceRecord) -> Self {
        let kind = match record.appliance_type.as_str() {
            APPLIANCE_IR => ApplianceKind::Ir,
            APPLIANCE_AC => ApplianceKind::Aircon {
                aircon: record.aircon,
                settings: record.settings,
            },
            APPLIANCE_TV => ApplianceKind::Tv,
            APPLIANCE_LIGHT => ApplianceKind::Light(record.light),
            APPLIANCE_EL_SMART_METER => ApplianceKind::SmartMeter(record.smart_meter),
            _ => ApplianceKind::Unknown(record.appliance_type),
        };

        Self {
            id: record.id,
            device: record.device,
            nickname: record.nickname,
            kind,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AirconSettings {
    #[serde(rename = "temp", deserialize_with = "nullable")]
    pub temperature: String,
    #[serde(deserialize_with = "nullable")]
    pub mode: String,
    #[serde(rename = "vol", deserialize_with = "nullable")]
    pub volume: String,
    #[serde(rename = "dir", deserialize_with = "nullable")]
    pub direction: String,
    #[serde(deserialize_with = "nullable")]
    pub button: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Aircon {
    #[serde(rename = "tempUnit", deserialize_with = "nullable")]
    pub temperature_unit: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Light {
    #[serde(rename = "state", deserialize_with = "nullable")]
    pub settings: LightSettings,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LightSettings {
    #[serde(deserialize_with = "nullable")]
    pub brightness: String,
    #[serde(deserialize_with = "nullable")]
    pub power: String,
}

/// ECHONET Lite property list reported by a smart meter.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SmartMeter {
    #[serde(rename = "echonetlite_properties", deserialize_with = "nullable")]
    pub properties: Vec<ELProperty>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ELProperty {
    pub epc: i64,
    #[serde(rename = "val", default, deserialize_with = "nullable")]
    pub value: String,
}

impl SmartMeter {
    /// Returns the raw value of the first property with the given EPC.
    pub fn find_property(&self, epc: i64) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.epc == epc)
            .map(|property| property.value.as_str())
    }

    /// Returns the property parsed as an integer, `None` when it is absent.
    pub fn find_int_property(&self, epc: i64) -> Result<Option<i64>, TranslateError> {
        let Some(raw) = self.find_property(epc) else {
            return Ok(None);
        };

        raw.parse::<i64>()
            .map(Some)
            .map_err(|e| TranslateError::field_parse(format!("EPC {}", epc), raw, e))
    }
}
