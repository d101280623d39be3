use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    customer: Customer,
    prtg: Prtg,
    servicenow: ServiceNow,
    regex: RegexConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn prtg(&self) -> &Prtg {
        &self.prtg
    }

    pub fn servicenow(&self) -> &ServiceNow {
        &self.servicenow
    }

    pub fn regex(&self) -> &RegexConfig {
        &self.regex
    }
}

#[derive(Debug, Deserialize)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize)]
pub struct Prtg {
    server_url: String,
    table: String,
    username: String,
    password: String,
}

impl Prtg {
    /// Full URL of the PRTG table API.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server_url, self.table)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceNow {
    instance_url: String,
    username: String,
    password: String,
    clover_table: String,
}

impl ServiceNow {
    /// Full URL of the Clover table API on the instance.
    pub fn clover_table_url(&self) -> String {
        format!("{}{}", self.instance_url, self.clover_table)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// The six operator-supplied validation patterns. Kept as plain strings here;
/// compiled once at startup into `patterns::Patterns`.
#[derive(Debug, Deserialize)]
pub struct RegexConfig {
    pub mac_address: String,
    pub ipv4: String,
    pub prtg_clover_name: String,
    pub prtg_clover_serial: String,
    pub snow_clover_name: String,
    pub snow_clover_serial: String,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                customer: Customer {
                    name: "Acme Stores".to_string(),
                },
                prtg: Prtg {
                    server_url: "https://prtg.url".to_string(),
                    table: "/api/table.json".to_string(),
                    username: "prtg-user".to_string(),
                    password: "prtg-pass".to_string(),
                },
                servicenow: ServiceNow {
                    instance_url: "https://snow.url".to_string(),
                    username: "snow-user".to_string(),
                    password: "snow-pass".to_string(),
                    clover_table: "/api/now/table/u_clover".to_string(),
                },
                regex: RegexConfig {
                    mac_address: r"([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$".to_string(),
                    ipv4: r"(\d{1,3}\.){3}\d{1,3}$".to_string(),
                    prtg_clover_name: r".+ ([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$".to_string(),
                    prtg_clover_serial: r".*[A-Za-z0-9]{14}$".to_string(),
                    snow_clover_name: r"[A-Za-z0-9 ]+ Clover [A-Za-z0-9]+$".to_string(),
                    snow_clover_serial: r"[A-Za-z0-9]{14}$".to_string(),
                },
            },
        }
    }

    pub fn prtg_server_url(mut self, url: String) -> Self {
        self.config.prtg.server_url = url;
        self
    }

    pub fn servicenow_instance_url(mut self, url: String) -> Self {
        self.config.servicenow.instance_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
