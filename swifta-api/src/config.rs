use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Flat fee added to every booking, in naira
    pub booking_fee_naira: i64,
    /// Naira of spend per loyalty point
    pub loyalty_accrual_divisor: i64,
    /// Probability that a seat starts out occupied (stand-in for a
    /// real inventory check)
    #[serde(default = "default_occupancy_rate")]
    pub occupancy_rate: f64,
}

fn default_occupancy_rate() -> f64 {
    0.25
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment, e.g. APP_SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_rate_defaults() {
        let rules: BusinessRules = serde_json::from_str(
            r#"{ "booking_fee_naira": 500, "loyalty_accrual_divisor": 100 }"#,
        )
        .unwrap();
        assert_eq!(rules.booking_fee_naira, 500);
        assert!((rules.occupancy_rate - 0.25).abs() < f64::EPSILON);
    }
}
