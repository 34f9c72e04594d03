use rust_decimal::Decimal;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::calendar::DEFAULT_WINDOW_MONTHS;
use crate::pricing::DEFAULT_SERVICE_FEE_PERCENT;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Months after today that remain bookable.
    pub booking_window_months: u32,
    pub service_fee_percent: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            booking_window_months: DEFAULT_WINDOW_MONTHS,
            service_fee_percent: Decimal::from(DEFAULT_SERVICE_FEE_PERCENT),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or invalid
    /// values keep their defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let service_fee_percent = parse_or("SERVICE_FEE_PERCENT", &lookup, defaults.service_fee_percent);
        let service_fee_percent = if service_fee_percent.is_sign_negative() {
            tracing::warn!("Config: SERVICE_FEE_PERCENT must not be negative, using default");
            defaults.service_fee_percent
        } else {
            service_fee_percent
        };

        Self {
            host: parse_or("HOST", &lookup, defaults.host),
            port: parse_or("PORT", &lookup, defaults.port),
            booking_window_months: parse_or(
                "BOOKING_WINDOW_MONTHS",
                &lookup,
                defaults.booking_window_months,
            ),
            service_fee_percent,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Config: Invalid {} '{}': {}, using {}", key, raw, e, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.booking_window_months, 6);
        assert_eq!(config.service_fee_percent, Decimal::from(10));
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("BOOKING_WINDOW_MONTHS", "3"),
            ("SERVICE_FEE_PERCENT", "12.5"),
        ]);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.booking_window_months, 3);
        assert_eq!(config.service_fee_percent, Decimal::new(125, 1));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("BOOKING_WINDOW_MONTHS", "-1"),
            ("SERVICE_FEE_PERCENT", "-5"),
        ]);
        assert_eq!(config, Config::default());
    }
}
