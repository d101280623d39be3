use crate::app_config::RegexConfig;
use regex::Regex;

/// The compiled validation patterns, built once at startup and passed into
/// the extractor and the reconciler.
#[derive(Debug)]
pub struct Patterns {
    pub mac_address: Regex,
    pub ipv4: Regex,
    pub prtg_clover_name: Regex,
    pub prtg_clover_serial: Regex,
    pub snow_clover_name: Regex,
    pub snow_clover_serial: Regex,
}

impl Patterns {
    pub fn compile(config: &RegexConfig) -> Result<Self, regex::Error> {
        Ok(Patterns {
            mac_address: anchored(&config.mac_address)?,
            ipv4: anchored(&config.ipv4)?,
            prtg_clover_name: anchored(&config.prtg_clover_name)?,
            prtg_clover_serial: anchored(&config.prtg_clover_serial)?,
            snow_clover_name: anchored(&config.snow_clover_name)?,
            snow_clover_serial: anchored(&config.snow_clover_serial)?,
        })
    }
}

// Field validation matches from the start of the field, so operator patterns
// do not need a leading anchor themselves.
fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}
