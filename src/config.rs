//! Site configuration.
//!
//! Values are baked in at compile time so the server render and the WASM
//! client always agree. Override them by exporting the variables below when
//! building:
//!
//! - `FARMER_SITE_TITLE`: document title
//! - `FARMER_ORGANIZATION`: organization name in the header and footer
//! - `FARMER_BRAND_YEAR`: year shown next to the header brand

use crate::shared::constants::{DEFAULT_BRAND_YEAR, DEFAULT_ORGANIZATION, DEFAULT_SITE_TITLE};
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_title: String,
    pub organization: String,
    pub brand_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            brand_year: DEFAULT_BRAND_YEAR,
        }
    }
}

impl SiteConfig {
    /// Configuration from the build environment
    pub fn load() -> Result<Self> {
        Self::from_values(
            option_env!("FARMER_SITE_TITLE"),
            option_env!("FARMER_ORGANIZATION"),
            option_env!("FARMER_BRAND_YEAR"),
        )
    }

    /// Build a configuration from optional raw values, falling back to the
    /// defaults for anything unset. Blank strings count as unset.
    pub fn from_values(
        site_title: Option<&str>,
        organization: Option<&str>,
        brand_year: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let brand_year = match non_blank(brand_year) {
            Some(raw) => raw.parse::<u16>().map_err(|_| AppError::InvalidConfig {
                key: "FARMER_BRAND_YEAR",
                value: raw.to_string(),
            })?,
            None => defaults.brand_year,
        };

        Ok(Self {
            site_title: non_blank(site_title).map_or(defaults.site_title, str::to_string),
            organization: non_blank(organization).map_or(defaults.organization, str::to_string),
            brand_year,
        })
    }

    /// Text next to the header logo, e.g. "Local Farmer Community 2024"
    pub fn brand_text(&self) -> String {
        format!("{} {}", self.organization, self.brand_year)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_values(None, None, None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site_title, "Local Farmer Community");
        assert_eq!(config.brand_text(), "Local Farmer Community 2024");
    }

    #[test]
    fn test_overrides() {
        let config =
            SiteConfig::from_values(Some("Harvest Hub"), Some("Harvest Co-op"), Some(" 2025 ")).unwrap();
        assert_eq!(config.site_title, "Harvest Hub");
        assert_eq!(config.brand_text(), "Harvest Co-op 2025");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = SiteConfig::from_values(Some("  "), Some(""), Some("")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_year_is_rejected() {
        let err = SiteConfig::from_values(None, None, Some("next year")).unwrap_err();
        match err {
            AppError::InvalidConfig { key, value } => {
                assert_eq!(key, "FARMER_BRAND_YEAR");
                assert_eq!(value, "next year");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
