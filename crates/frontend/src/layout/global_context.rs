use contracts::dashboards::d400_ads_performance::DashboardTab;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<DashboardTab>,
    pub campaign_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(DashboardTab::Summary),
            campaign_open: RwSignal::new(false),
        }
    }

    /// Restores the tab from `?tab=` and keeps the query in sync afterwards.
    pub fn init_url_integration(&self) {
        let search = current_search();
        if let Some(tab) = tab_from_search(&search) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active_tab.get();
            let current = current_search();
            let new_url = with_tab_param(&current, tab);

            // Only update URL if it actually changed
            if current != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: DashboardTab) {
        log::debug!("activate_tab: {}", tab.code());
        self.active_tab.set(tab);
    }

    pub fn open_campaign(&self) {
        self.campaign_open.set(true);
    }

    pub fn close_campaign(&self) {
        self.campaign_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn query_params(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Unknown tab codes are ignored.
pub fn tab_from_search(search: &str) -> Option<DashboardTab> {
    query_params(search)
        .get(TAB_PARAM)
        .and_then(|code| code.parse().ok())
}

/// Rewrites the `tab` parameter, keeping every other parameter of `search`.
pub fn with_tab_param(search: &str, tab: DashboardTab) -> String {
    let mut params = query_params(search);
    params.insert(TAB_PARAM.to_string(), tab.code().to_string());
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_search() {
        assert_eq!(
            tab_from_search("?tab=operations"),
            Some(DashboardTab::Operations)
        );
        assert_eq!(tab_from_search("?tab=unknown"), None);
        assert_eq!(tab_from_search(""), None);
    }

    #[test]
    fn test_with_tab_param_keeps_other_params() {
        assert_eq!(
            with_tab_param("?variant=classic", DashboardTab::Delivery),
            "?tab=delivery&variant=classic"
        );
        assert_eq!(
            with_tab_param("?tab=summary", DashboardTab::Marketing),
            "?tab=marketing"
        );
    }
}
