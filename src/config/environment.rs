//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

/// Política ante un car sin identidad válida (`id <= 0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidIdPolicy {
    /// Error de validación estructurado (400)
    #[default]
    Reject,
    /// Registro centinela con estado de éxito, para clientes legacy
    Sentinel,
}

impl FromStr for InvalidIdPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "reject" => Ok(InvalidIdPolicy::Reject),
            "sentinel" => Ok(InvalidIdPolicy::Sentinel),
            other => bail!("INVALID_ID_POLICY must be 'reject' or 'sentinel', got '{}'", other),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub invalid_id_policy: InvalidIdPolicy,
    pub seed_demo_data: bool,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            database_url: None,
            cors_origins: Vec::new(),
            invalid_id_policy: InvalidIdPolicy::Reject,
            seed_demo_data: false,
            log_level: tracing::Level::DEBUG,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del proceso; las variables ausentes toman el valor por defecto
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match var("PORT") {
            Some(p) => p.trim().parse().with_context(|| format!("PORT must be a valid number, got '{}'", p))?,
            None => defaults.port,
        };

        let invalid_id_policy: InvalidIdPolicy = match var("INVALID_ID_POLICY") {
            Some(p) => p.parse()?,
            None => defaults.invalid_id_policy,
        };

        let seed_demo_data: bool = match var("SEED_DEMO_DATA") {
            Some(v) => parse_bool(&v).with_context(|| format!("SEED_DEMO_DATA must be a boolean, got '{}'", v))?,
            None => defaults.seed_demo_data,
        };

        let log_level: tracing::Level = match var("LOG_LEVEL") {
            Some(l) => l
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL must be one of trace/debug/info/warn/error, got '{}'", l))?,
            None => defaults.log_level,
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: var("HOST").unwrap_or(defaults.host),
            database_url: var("DATABASE_URL"),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            invalid_id_policy,
            seed_demo_data,
            log_level,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert!(config.database_url.is_none());
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.invalid_id_policy, InvalidIdPolicy::Reject);
        assert!(!config.is_production());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = EnvironmentConfig::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_URL", "postgresql://u:p@localhost/cars"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("INVALID_ID_POLICY", "Sentinel"),
            ("SEED_DEMO_DATA", "yes"),
            ("LOG_LEVEL", "warn"),
        ]))
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.invalid_id_policy, InvalidIdPolicy::Sentinel);
        assert!(config.seed_demo_data);
        assert_eq!(config.log_level, tracing::Level::WARN);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(EnvironmentConfig::from_lookup(lookup(&[("PORT", "abc")])).is_err());
        assert!(EnvironmentConfig::from_lookup(lookup(&[("INVALID_ID_POLICY", "ignore")])).is_err());
        assert!(EnvironmentConfig::from_lookup(lookup(&[("SEED_DEMO_DATA", "maybe")])).is_err());
        assert!(EnvironmentConfig::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).is_err());
    }
}
