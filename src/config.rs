//! Environment configuration
//!
//! All settings come from environment variables set on the Lambda function.
//! They are read once at cold start and stay fixed for the lifetime of the
//! invocation.

use crate::error::ConfigError;
use std::env;

/// Requested end state for the matched Auto Scaling groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Parse the `ACTION` variable. Matching is case-sensitive.
    ///
    /// An unrecognized value is a hard error so a misconfigured function
    /// fails before any region is touched, instead of silently doing
    /// nothing every time the schedule fires.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "enable" | "start" => Ok(Action::Start),
            "disable" | "stop" => Ok(Action::Stop),
            other => Err(ConfigError::InvalidValue {
                var: "ACTION".to_string(),
                reason: format!("expected enable|start|disable|stop, got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub action: Action,
    pub tag_key: String,
    pub tag_value: String,
    /// Regions are processed strictly in this order.
    pub regions: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Tests pass a map-backed closure here so they never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let action = Action::parse(&require(&lookup, "ACTION")?)?;

        let tag_key = require(&lookup, "RESOURCE_TAG_KEY")?;
        if tag_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESOURCE_TAG_KEY".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let tag_value = require(&lookup, "RESOURCE_TAG_VALUE")?;

        let regions: Vec<String> = require(&lookup, "AWS_REGIONS")?
            .split(',')
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_string)
            .collect();
        if regions.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "AWS_REGIONS".to_string(),
                reason: "no region identifiers".to_string(),
            });
        }

        Ok(Self {
            action,
            tag_key,
            tag_value,
            regions,
        })
    }
}

fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).ok_or_else(|| ConfigError::MissingVar(var.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_action_parse_families() {
        assert_eq!(Action::parse("start").unwrap(), Action::Start);
        assert_eq!(Action::parse("enable").unwrap(), Action::Start);
        assert_eq!(Action::parse("stop").unwrap(), Action::Stop);
        assert_eq!(Action::parse("disable").unwrap(), Action::Stop);
    }

    #[test]
    fn test_action_parse_is_case_sensitive() {
        assert!(Action::parse("Start").is_err());
        assert!(Action::parse("STOP").is_err());
    }

    #[test]
    fn test_action_parse_unrecognized_fails() {
        let err = Action::parse("restart").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "ACTION"));
    }

    #[test]
    fn test_config_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("ACTION", "stop"),
            ("RESOURCE_TAG_KEY", "scheduled"),
            ("RESOURCE_TAG_VALUE", "office-hours"),
            ("AWS_REGIONS", "us-east-1, eu-west-1 ,eu-central-1"),
        ]))
        .unwrap();

        assert_eq!(config.action, Action::Stop);
        assert_eq!(config.tag_key, "scheduled");
        assert_eq!(config.tag_value, "office-hours");
        assert_eq!(config.regions, vec!["us-east-1", "eu-west-1", "eu-central-1"]);
    }

    #[test]
    fn test_config_missing_variable() {
        let err = Config::from_lookup(lookup(&[("ACTION", "start")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref var) if var == "RESOURCE_TAG_KEY"));
    }

    #[test]
    fn test_config_empty_region_list() {
        let err = Config::from_lookup(lookup(&[
            ("ACTION", "start"),
            ("RESOURCE_TAG_KEY", "scheduled"),
            ("RESOURCE_TAG_VALUE", "office-hours"),
            ("AWS_REGIONS", " , "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "AWS_REGIONS"));
    }
}
