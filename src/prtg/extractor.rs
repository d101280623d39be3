use crate::app_config::AppConfig;
use crate::domain::{MAC_LEN, PrtgClover, SERIAL_LEN, SERIAL_UNAVAILABLE};
use crate::extensions::str_ext::CharSuffix;
use crate::patterns::Patterns;
use crate::prtg::table_response::{DeviceTableResponse, SensorTableResponse};
use regex::Regex;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Bracketed site-code token embedded in device display names, e.g. `[ABC123]`.
static SITE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[A-Za-z]+[0-9]{3}]").unwrap());

/// Probe names carry this tag for sites on a cellular backup link.
const LTE_ONLY_TAG: &str = "(LTE Only)";

const RESULT_CAP: &str = "50000";

/// Retrieves every Clover PRTG knows about and returns them keyed by MAC
/// address. Sensors whose device display name is malformed are logged and
/// left out; a later sensor row with the same MAC overwrites an earlier one.
#[instrument(skip_all)]
pub async fn fetch_clovers(
    client: &Client,
    config: &AppConfig,
    patterns: &Patterns,
) -> Result<HashMap<String, PrtgClover>, PrtgError> {
    let api_url = config.prtg().api_url();

    // The sensor table has no IP column, so device IPs come from a separate
    // devices call, keyed by PRTG object id.
    info!("Retrieving Clover devices from PRTG...");
    let response = client
        .get(&api_url)
        .query(&[
            ("content", "devices"),
            ("columns", "probe,group,name,objid,host"),
            ("filter_group", "@sub(Clover)"),
            ("sortby", "probe"),
            ("output", "json"),
            ("count", RESULT_CAP),
            ("username", config.prtg().username()),
            ("password", config.prtg().password()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let devices = response.json::<DeviceTableResponse>().await?;
    info!("Retrieving Clover devices from PRTG... OK, {} found", devices.devices.len());

    let device_ips = devices
        .devices
        .iter()
        .map(|device| (device.objid, device.host.as_str()))
        .collect::<HashMap<u64, &str>>();

    // The Sys Descr sensor carries the serial number in its message and the
    // site, name and MAC address in its probe and device columns.
    info!("Retrieving Sys Descr sensors from PRTG...");
    let response = client
        .get(&api_url)
        .query(&[
            ("content", "sensors"),
            ("columns", "name,probe,device,message,status,parentid"),
            ("filter_name", "@sub(Descr)"),
            ("sortby", "probe"),
            ("output", "json"),
            ("count", RESULT_CAP),
            ("username", config.prtg().username()),
            ("password", config.prtg().password()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let sensors = response.json::<SensorTableResponse>().await?;
    info!("Retrieving Sys Descr sensors from PRTG... OK, {} found", sensors.sensors.len());

    let mut clovers = HashMap::new();
    for sensor in &sensors.sensors {
        if !patterns.prtg_clover_name.is_match(&sensor.device_raw) {
            #[rustfmt::skip]
            warn!("⚠️ Clover {} {} is named incorrectly in PRTG", sensor.probe, sensor.device_raw);
            continue;
        }

        let site = sensor.probe.replace(LTE_ONLY_TAG, "").trim().to_string();
        let device_name = sensor.device_raw.trim();
        let name = SITE_CODE.replace_all(device_name, "").trim().to_string();
        let mac = device_name.last_chars(MAC_LEN).to_string();
        let ip = device_ips
            .get(&sensor.parentid)
            .copied()
            .ok_or(PrtgError::UnknownParentDevice {
                parent_id: sensor.parentid,
            })?
            .to_string();
        let serial = if patterns.prtg_clover_serial.is_match(&sensor.message_raw) {
            sensor.message_raw.last_chars(SERIAL_LEN).to_string()
        } else {
            SERIAL_UNAVAILABLE.to_string()
        };

        clovers.insert(mac.clone(), PrtgClover { site, name, mac, ip, serial });
    }

    info!("Extracted {} Clovers from PRTG", clovers.len());
    Ok(clovers)
}

#[derive(Error, Debug)]
pub enum PrtgError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("sensor references unknown parent device {parent_id}")]
    UnknownParentDevice { parent_id: u64 },
}
