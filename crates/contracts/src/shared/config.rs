use crate::usecases::u501_create_campaign::preview::TrafficFilter;
use crate::usecases::u501_create_campaign::wizard::WizardVariant;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub wizard: WizardConfig,
    pub preview: PreviewConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WizardConfig {
    pub variant: WizardVariant,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PreviewConfig {
    pub default_filter: TrafficFilter,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub currency: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[wizard]
variant = "templated"

[preview]
default_filter = "all"

[ui]
currency = "AED"
"#;

/// Overrides taken from the page query string (`?variant=classic&filter=high`).
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Parse a TOML document into a [`DashboardConfig`].
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents).context("invalid dashboard config")?;
    Ok(config)
}

/// Load the embedded default configuration and apply query-string overrides on top.
pub fn load_config(overrides: &ConfigOverrides) -> anyhow::Result<DashboardConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(variant) = overrides.variant.as_deref() {
        config.wizard.variant = variant
            .parse()
            .with_context(|| format!("override `variant={}`", variant))?;
    }
    if let Some(filter) = overrides.filter.as_deref() {
        config.preview.default_filter = filter
            .parse()
            .with_context(|| format!("override `filter={}`", filter))?;
    }
    if let Some(currency) = overrides.currency.as_deref() {
        if !currency.trim().is_empty() {
            config.ui.currency = currency.trim().to_uppercase();
        }
    }

    Ok(config)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            wizard: WizardConfig {
                variant: WizardVariant::Templated,
            },
            preview: PreviewConfig {
                default_filter: TrafficFilter::All,
            },
            ui: UiConfig {
                currency: "AED".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ConfigOverrides {
            variant: Some("classic".to_string()),
            filter: Some("high".to_string()),
            currency: Some("usd".to_string()),
        };
        let config = load_config(&overrides).unwrap();
        assert_eq!(config.wizard.variant, WizardVariant::Classic);
        assert_eq!(config.preview.default_filter, TrafficFilter::High);
        assert_eq!(config.ui.currency, "USD");
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let overrides = ConfigOverrides {
            variant: Some("five-step".to_string()),
            ..Default::default()
        };
        assert!(load_config(&overrides).is_err());
    }

    #[test]
    fn test_rejects_unknown_variant_in_toml() {
        let doc = DEFAULT_CONFIG.replace("templated", "wizardless");
        assert!(parse_config(&doc).is_err());
    }
}
