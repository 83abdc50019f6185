//! Environment-driven settings.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use pantry_core::ExpirationDate;
use pantry_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "PANTRY_LOG_FORMAT";
pub const TODAY_VAR: &str = "PANTRY_TODAY";
pub const ADVANCE_DAYS_VAR: &str = "PANTRY_ADVANCE_DAYS";

const DEFAULT_ADVANCE_DAYS: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_format: LogFormat,
    /// Fixed "today" for the expiry report; `None` uses the local date.
    pub today: Option<NaiveDate>,
    pub advance_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            today: None,
            advance_days: DEFAULT_ADVANCE_DAYS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key → value source. Unset keys keep their
    /// defaults; set but invalid values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            settings.log_format = raw
                .parse()
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?;
        }

        if let Some(raw) = lookup(TODAY_VAR) {
            let date = ExpirationDate::parse(raw.trim())
                .with_context(|| format!("invalid {TODAY_VAR}"))?;
            settings.today = Some(date.date());
        }

        if let Some(raw) = lookup(ADVANCE_DAYS_VAR) {
            settings.advance_days = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {ADVANCE_DAYS_VAR}: {raw:?}"))?;
        }

        Ok(settings)
    }

    /// The date expiry is measured from.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.advance_days, 10);
        assert_eq!(settings.today, None);
    }

    #[test]
    fn reads_every_variable() {
        let settings = settings_from(&[
            (LOG_FORMAT_VAR, "pretty"),
            (TODAY_VAR, "2023-07-20"),
            (ADVANCE_DAYS_VAR, "-3"),
        ])
        .unwrap();

        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2023, 7, 20));
        assert_eq!(settings.today(), NaiveDate::from_ymd_opt(2023, 7, 20).unwrap());
        assert_eq!(settings.advance_days, -3);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = settings_from(&[(TODAY_VAR, "20.07.2023")]).unwrap_err();
        assert!(err.to_string().contains(TODAY_VAR));

        let err = settings_from(&[(ADVANCE_DAYS_VAR, "ten")]).unwrap_err();
        assert!(err.to_string().contains(ADVANCE_DAYS_VAR));

        let err = settings_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    }
}
