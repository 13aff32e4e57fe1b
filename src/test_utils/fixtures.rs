//! Test fixtures and common test data.
//!
//! Response bodies shaped like those of the Nature Remo cloud API.

/// Two devices: one reporting every sensor, one reporting only temperature.
pub const DEVICES_JSON: &str = r#"[
  {
    "name": "Living Remo",
    "id": "device-1",
    "created_at": "2020-01-01T00:00:00Z",
    "updated_at": "2024-06-15T12:00:00Z",
    "mac_address": "00:11:22:33:44:55",
    "serial_number": "1W320000000001",
    "firmware_version": "Remo/1.14.6",
    "temperature_offset": -1.5,
    "humidity_offset": 2,
    "users": [],
    "newest_events": {
      "te": { "val": 23.5, "created_at": "2024-06-15T11:59:00Z" },
      "hu": { "val": 48, "created_at": "2024-06-15T11:59:00Z" },
      "il": { "val": 120, "created_at": "2024-06-15T11:59:00Z" },
      "mo": { "val": 1, "created_at": "2024-06-15T11:40:00Z" }
    }
  },
  {
    "name": "Bedroom Remo mini",
    "id": "device-2",
    "serial_number": "1W320000000002",
    "temperature_offset": 0,
    "humidity_offset": 0,
    "newest_events": {
      "te": { "val": 19.25, "created_at": "2024-06-15T11:58:00Z" }
    }
  }
]"#;

/// One appliance of every type; IR, TV and the unknown one produce no metrics.
pub const APPLIANCES_JSON: &str = r#"[
  {
    "id": "appliance-ac",
    "device": { "name": "Living Remo", "id": "device-1", "serial_number": "1W320000000001", "temperature_offset": -1.5, "humidity_offset": 2 },
    "model": { "id": "m-1", "manufacturer": "panasonic", "name": "Panasonic AC 001" },
    "type": "AC",
    "nickname": "Living AC",
    "image": "ico_ac_1",
    "settings": { "temp": "26", "temp_unit": "c", "mode": "cool", "vol": "auto", "dir": "auto", "dirh": "", "button": "", "updated_at": "2024-06-15T10:00:00Z" },
    "aircon": { "range": { "modes": {}, "fixedButtons": ["power-off"] }, "tempUnit": "c" },
    "signals": []
  },
  {
    "id": "appliance-light",
    "device": { "name": "Living Remo", "id": "device-1" },
    "type": "LIGHT",
    "nickname": "Ceiling Light",
    "settings": null,
    "aircon": null,
    "light": { "buttons": [], "state": { "brightness": "100", "power": "on", "last_button": "on" } },
    "signals": []
  },
  {
    "id": "appliance-meter",
    "device": { "name": "Remo E lite", "id": "device-3" },
    "type": "EL_SMART_METER",
    "nickname": "Smart Meter",
    "smart_meter": {
      "echonetlite_properties": [
        { "name": "coefficient", "epc": 211, "val": "1", "updated_at": "2024-06-15T11:00:00Z" },
        { "name": "cumulative_electric_energy_effective_digits", "epc": 215, "val": "6", "updated_at": "2024-06-15T11:00:00Z" },
        { "name": "normal_direction_cumulative_electric_energy", "epc": 224, "val": "123456", "updated_at": "2024-06-15T11:00:00Z" },
        { "name": "cumulative_electric_energy_unit", "epc": 225, "val": "1", "updated_at": "2024-06-15T11:00:00Z" },
        { "name": "reverse_direction_cumulative_electric_energy", "epc": 227, "val": "20", "updated_at": "2024-06-15T11:00:00Z" },
        { "name": "measured_instantaneous", "epc": 231, "val": "512", "updated_at": "2024-06-15T11:00:00Z" }
      ]
    }
  },
  {
    "id": "appliance-ir",
    "device": { "name": "Living Remo", "id": "device-1" },
    "type": "IR",
    "nickname": "Fan",
    "signals": [{ "id": "s-1", "name": "on", "image": "ico_on" }]
  },
  {
    "id": "appliance-tv",
    "device": { "name": "Living Remo", "id": "device-1" },
    "type": "TV",
    "nickname": "TV",
    "tv": { "state": { "input": "t" } }
  },
  {
    "id": "appliance-future",
    "device": { "name": "Living Remo", "id": "device-1" },
    "type": "QUANTUM_FRIDGE",
    "nickname": "Fridge"
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_json_arrays() {
        for fixture in [DEVICES_JSON, APPLIANCES_JSON] {
            let value: serde_json::Value = serde_json::from_str(fixture).unwrap();
            assert!(value.is_array());
        }
    }
}
