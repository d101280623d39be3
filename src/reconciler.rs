use crate::app_config::AppConfig;
use crate::domain::{MAC_LEN, MismatchReason, MismatchRecord, PrtgClover, SERIAL_UNAVAILABLE};
use crate::extensions::str_ext::CharSuffix;
use crate::patterns::Patterns;
use crate::snow::table;
use crate::snow::table::SnowError;
use crate::snow::table_response::SnowCloverRow;
use reqwest::Client;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Retrieves the customer's Clovers from ServiceNow and compares every
/// active one against the PRTG extraction, returning the records that
/// disagree along with every reason found.
#[instrument(skip_all)]
pub async fn find_mismatches(
    client: &Client,
    config: &AppConfig,
    patterns: &Patterns,
    prtg_clovers: &HashMap<String, PrtgClover>,
) -> Result<Vec<MismatchRecord>, SnowError> {
    let rows = table::fetch_clovers(client, config).await?;
    let mismatches = reconcile(&rows, prtg_clovers, patterns);

    info!("Reconciled {} active ServiceNow Clovers, {} mismatched", rows.len(), mismatches.len());
    Ok(mismatches)
}

fn reconcile(
    rows: &[SnowCloverRow],
    prtg_clovers: &HashMap<String, PrtgClover>,
    patterns: &Patterns,
) -> Vec<MismatchRecord> {
    let mut mismatches = Vec::new();

    for row in rows {
        // Retired Clovers are excluded. The contract flag is a string field
        // in ServiceNow; only the literal "false" counts as retired.
        if row.u_active_contract == "false" {
            continue;
        }

        let mut record = normalize(row, patterns);

        // Without a PRTG record at this MAC there is nothing to compare
        // against; the lookup failure is the only comparison result.
        let Some(prtg_clover) = prtg_clovers.get(&record.mac) else {
            record.reasons.push(MismatchReason::MacNotInPrtg);
            mismatches.push(record);
            continue;
        };

        if expected_snow_name(prtg_clover) != record.name {
            record.reasons.push(MismatchReason::NameMismatch);
        }

        if prtg_clover.ip != record.ip {
            record.reasons.push(MismatchReason::IpMismatch);
        }

        if prtg_clover.serial != record.serial {
            record.reasons.push(if prtg_clover.serial == SERIAL_UNAVAILABLE {
                MismatchReason::SerialUnavailable
            } else {
                MismatchReason::SerialMismatch
            });
        }

        if !record.reasons.is_empty() {
            mismatches.push(record);
        }
    }

    mismatches
}

/// Copies the raw row into a record and validates each field against its
/// required format. Every failed validation appends its own reason; the
/// checks are independent, so several can accumulate on one record.
fn normalize(row: &SnowCloverRow, patterns: &Patterns) -> MismatchRecord {
    let mut reasons = Vec::new();

    if !patterns.snow_clover_name.is_match(&row.name) {
        reasons.push(MismatchReason::NameFormat);
    }
    if !patterns.mac_address.is_match(&row.mac_address) {
        reasons.push(MismatchReason::MacFormat);
    }
    if !patterns.ipv4.is_match(&row.ip_address) {
        reasons.push(MismatchReason::IpFormat);
    }
    if !patterns.snow_clover_serial.is_match(&row.serial_number) {
        reasons.push(MismatchReason::SerialFormat);
    }

    MismatchRecord {
        name: row.name.clone(),
        mac: row.mac_address.clone(),
        ip: row.ip_address.clone(),
        serial: row.serial_number.clone(),
        reasons,
    }
}

/// What a PRTG Clover should be called in ServiceNow: the site, the device
/// class, and the PRTG display name with its MAC suffix removed and all
/// spaces stripped.
fn expected_snow_name(clover: &PrtgClover) -> String {
    let trailing = clover.name.without_last_chars(MAC_LEN).replace(' ', "");
    format!("{} Clover {}", clover.site, trailing)
}
