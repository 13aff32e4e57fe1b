//! Device (Remo hub) metric building.

use crate::model::{MetricDescs, Observation};
use crate::natureremo::{Device, DeviceCore};

fn device_labels(core: &DeviceCore) -> Vec<String> {
    vec![
        core.id.clone(),
        core.name.clone(),
        core.serial_number.clone(),
    ]
}

/// Creates the observations for one device.
///
/// Offsets are always emitted. Sensor readings are emitted only when the device
/// reported them; a missing reading is not a zero.
pub fn create_device_metrics(descs: &MetricDescs, device: &Device) -> Vec<Observation> {
    let labels = device_labels(&device.core);
    let mut metrics = vec![
        Observation::new(
            &descs.sensor_offset_temperature,
            labels.clone(),
            device.core.temperature_offset,
        ),
        Observation::new(
            &descs.sensor_offset_humidity,
            labels.clone(),
            device.core.humidity_offset,
        ),
    ];

    let events = &device.events;
    let readings = [
        (&descs.sensor_temperature, events.temperature),
        (&descs.sensor_humidity, events.humidity),
        (&descs.sensor_illuminance, events.illuminance),
        (&descs.sensor_motion, events.motion),
    ];
    for (desc, reading) in readings {
        if let Some(reading) = reading {
            metrics.push(Observation::new(desc, labels.clone(), reading.value));
        }
    }

    metrics
}
