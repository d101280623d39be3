use crate::domain::MismatchRecord;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// The report lands in the current working directory.
pub const REPORT_FILE_NAME: &str = "clover-mismatches.xlsx";

const HEADERS: [&str; 5] = [
    "Name in ServiceNow",
    "MAC Address",
    "IPv4 Address",
    "Serial Number",
    "Mismatch Reason",
];

/// Writes one worksheet with a header row and one row per mismatch, sorted
/// ascending by ServiceNow name. An existing file at `path` is overwritten.
#[instrument(skip_all)]
pub fn write_report(mismatches: &[MismatchRecord], path: &Path) -> Result<(), ReportError> {
    info!("Writing {} mismatched Clovers to '{}'...", mismatches.len(), path.display());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (column, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, column as u16, *header)?;
    }

    for (index, record) in sorted_by_name(mismatches).iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_string(row, 1, &record.mac)?;
        worksheet.write_string(row, 2, &record.ip)?;
        worksheet.write_string(row, 3, &record.serial)?;
        worksheet.write_string(row, 4, record.reason_text())?;
    }

    workbook.save(path)?;
    info!("Writing mismatched Clovers... OK");

    Ok(())
}

fn sorted_by_name(mismatches: &[MismatchRecord]) -> Vec<&MismatchRecord> {
    let mut sorted = mismatches.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MismatchReason;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use std::fs;

    fn record(name: &str) -> MismatchRecord {
        MismatchRecord {
            name: name.to_string(),
            mac: "AA:BB:CC:DD:EE:FF".to_string(),
            ip: "10.0.0.5".to_string(),
            serial: "12345678901234".to_string(),
            reasons: vec![MismatchReason::IpMismatch],
        }
    }

    #[test]
    fn rows_are_sorted_ascending_by_servicenow_name() {
        let records = vec![record("Store2 Clover B"), record("Store1 Clover A"), record("Store1 Clover C")];

        let names = sorted_by_name(&records).iter().map(|r| r.name.as_str()).collect::<Vec<_>>();

        assert_eq!(names, vec!["Store1 Clover A", "Store1 Clover C", "Store2 Clover B"]);
    }

    #[test]
    fn write_report_creates_and_overwrites_the_file() -> Result<(), ReportError> {
        let path = temp_dir().join("clover-mismatches-test.xlsx");

        write_report(&[record("Store1 Clover A")], &path)?;
        let first_size = fs::metadata(&path).unwrap().len();
        assert!(first_size > 0);

        // A second run replaces the file rather than appending to it.
        write_report(&[record("Store1 Clover A"), record("Store2 Clover B")], &path)?;
        assert!(fs::metadata(&path).unwrap().len() > 0);

        fs::remove_file(&path).unwrap();
        Ok(())
    }

    #[test]
    fn write_report_accepts_an_empty_mismatch_list() -> Result<(), ReportError> {
        let path = temp_dir().join("clover-mismatches-empty-test.xlsx");

        write_report(&[], &path)?;
        assert!(path.is_file());

        fs::remove_file(&path).unwrap();
        Ok(())
    }
}
