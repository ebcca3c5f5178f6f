use contracts::shared::config::{load_config, ConfigOverrides, DashboardConfig};
use web_sys::window;

/// Embedded defaults plus query-string overrides. Falls back to the defaults on any error.
pub fn load_page_config() -> DashboardConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    config_from_search(&search)
}

pub fn config_from_search(search: &str) -> DashboardConfig {
    let overrides: ConfigOverrides = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(overrides) => overrides,
        Err(e) => {
            log::warn!("ignoring query overrides: {}", e);
            ConfigOverrides::default()
        }
    };

    match load_config(&overrides) {
        Ok(config) => {
            log::debug!("config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("falling back to default config: {:#}", e);
            DashboardConfig::default()
        }
    }
}

/// Config provided by `App`; defaults when rendered outside of it.
pub fn use_config() -> DashboardConfig {
    leptos::context::use_context::<DashboardConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_create_campaign::preview::TrafficFilter;
    use contracts::usecases::u501_create_campaign::WizardVariant;

    #[test]
    fn test_query_overrides() {
        let config = config_from_search("?variant=classic&filter=high&tab=operations");
        assert_eq!(config.wizard.variant, WizardVariant::Classic);
        assert_eq!(config.preview.default_filter, TrafficFilter::High);
    }

    #[test]
    fn test_bad_override_falls_back() {
        let config = config_from_search("?variant=wizardly");
        assert_eq!(config, DashboardConfig::default());
    }
}
