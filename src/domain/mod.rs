use std::fmt;

/// Serial value used when the Sys Descr sensor message does not carry one.
pub const SERIAL_UNAVAILABLE: &str = "Unavailable";

/// Length of a colon- or hyphen-separated MAC address.
pub const MAC_LEN: usize = 17;

/// Length of a Clover serial number.
pub const SERIAL_LEN: usize = 14;

/// A Clover as PRTG knows it, keyed by MAC address in the extractor's output.
/// `name` is the device display name with the bracketed site-code token
/// removed; it still ends with the MAC address.
#[derive(Clone, PartialEq, Debug)]
pub struct PrtgClover {
    pub site: String,
    pub name: String,
    pub mac: String,
    pub ip: String,
    pub serial: String,
}

/// One specific way a ServiceNow record disagrees with (or cannot be matched
/// to) PRTG. Reasons accumulate in order on a record; the report writer joins
/// them into the free-text reason column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MismatchReason {
    NameFormat,
    MacFormat,
    IpFormat,
    SerialFormat,
    MacNotInPrtg,
    NameMismatch,
    IpMismatch,
    SerialMismatch,
    SerialUnavailable,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MismatchReason::NameFormat => "SNow name not formatted correctly",
            MismatchReason::MacFormat => "SNow MAC not formatted correctly",
            MismatchReason::IpFormat => "SNow IP not formatted correctly",
            MismatchReason::SerialFormat => "SNow S/N not formatted correctly",
            MismatchReason::MacNotInPrtg => "MAC address from SNow not found in PRTG",
            MismatchReason::NameMismatch => "Names do not match",
            MismatchReason::IpMismatch => "IPs do not match",
            MismatchReason::SerialMismatch => "S/Ns do not match",
            MismatchReason::SerialUnavailable => "S/N unavailable from PRTG",
        };
        write!(f, "{}", text)
    }
}

/// A ServiceNow Clover that failed reconciliation, with every reason found.
#[derive(Clone, PartialEq, Debug)]
pub struct MismatchRecord {
    pub name: String,
    pub mac: String,
    pub ip: String,
    pub serial: String,
    pub reasons: Vec<MismatchReason>,
}

impl MismatchRecord {
    /// The reason column as it appears in the report: every tag followed by
    /// a trailing `"; "`.
    pub fn reason_text(&self) -> String {
        self.reasons.iter().map(|reason| format!("{}; ", reason)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reason_text_joins_tags_in_order_with_trailing_separator() {
        let record = MismatchRecord {
            name: "Store1 Clover Clover1".to_string(),
            mac: "AA:BB:CC:DD:EE:FF".to_string(),
            ip: "10.0.0.9".to_string(),
            serial: "12345678901234".to_string(),
            reasons: vec![MismatchReason::NameMismatch, MismatchReason::IpMismatch],
        };

        assert_eq!(record.reason_text(), "Names do not match; IPs do not match; ");
    }

    #[test]
    fn reason_text_is_empty_for_no_reasons() {
        let record = MismatchRecord {
            name: "Store1 Clover Clover1".to_string(),
            mac: "AA:BB:CC:DD:EE:FF".to_string(),
            ip: "10.0.0.9".to_string(),
            serial: "12345678901234".to_string(),
            reasons: vec![],
        };

        assert_eq!(record.reason_text(), "");
    }
}
