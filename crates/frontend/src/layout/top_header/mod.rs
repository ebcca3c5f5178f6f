//! TopHeader component - dashboard tab switch and the campaign button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::tab_navigation::TabNavigation;
use crate::shared::icons::icon;
use contracts::dashboards::d400_ads_performance::DashboardTab;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let tabs: Vec<(String, String)> = DashboardTab::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.label().to_string()))
        .collect();

    let on_tab_change = Callback::new(move |code: String| match code.parse::<DashboardTab>() {
        Ok(tab) => ctx.activate_tab(tab),
        Err(e) => log::warn!("{}", e),
    });

    view! {
        <div class="top-header">
            <TabNavigation
                tabs=tabs
                active=Signal::derive(move || ctx.active_tab.get().code().to_string())
                on_change=on_tab_change
            />

            <button
                class="top-header__create-btn"
                on:click=move |_| ctx.open_campaign()
            >
                {icon("plus-circle")}
                <span>"Create a new campaign"</span>
            </button>
        </div>
    }
}
