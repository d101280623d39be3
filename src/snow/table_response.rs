use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SnowTableResponse {
    pub result: Vec<SnowCloverRow>,
}

/// A Clover row as the ServiceNow table API returns it, before any
/// normalization or validation.
#[derive(Clone, Debug, Deserialize)]
pub struct SnowCloverRow {
    pub name: String,
    pub mac_address: String,
    pub ip_address: String,
    pub serial_number: String,
    pub u_active_contract: String,
}
