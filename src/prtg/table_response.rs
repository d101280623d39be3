use serde::Deserialize;

// PRTG table API, output=json. Requesting a text column also yields its
// unformatted `_raw` variant; the raw forms are the ones compared against.

#[derive(Debug, Deserialize)]
pub struct DeviceTableResponse {
    pub devices: Vec<DeviceRow>,
}

#[derive(Debug, Deserialize)]
pub struct DeviceRow {
    pub objid: u64,
    pub host: String,
}

#[derive(Debug, Deserialize)]
pub struct SensorTableResponse {
    pub sensors: Vec<SensorRow>,
}

#[derive(Debug, Deserialize)]
pub struct SensorRow {
    pub probe: String,
    pub device_raw: String,
    pub message_raw: String,
    pub parentid: u64,
}
