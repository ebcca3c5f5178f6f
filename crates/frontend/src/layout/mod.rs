pub mod global_context;
pub mod top_header;

use crate::dashboards::{AdsPerformanceDashboard, OperationsDashboard};
use crate::usecases::u501_create_campaign::CreateCampaignDrawer;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (tabs + create campaign)      |
/// +------------------------------------------+
/// |  Active dashboard                        |
/// +------------------------------------------+
/// |  CreateCampaignDrawer (overlay)          |
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_close = Callback::new(move |_| ctx.close_campaign());

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                {move || {
                    if ctx.active_tab.get().shows_ads_overview() {
                        view! { <AdsPerformanceDashboard /> }.into_any()
                    } else {
                        view! { <OperationsDashboard /> }.into_any()
                    }
                }}
            </div>

            <CreateCampaignDrawer
                is_open=Signal::derive(move || ctx.campaign_open.get())
                on_close=on_close
            />
        </div>
    }
}
