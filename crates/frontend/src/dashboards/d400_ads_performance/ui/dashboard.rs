use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::metric_card::MetricCard;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use contracts::dashboards::d400_ads_performance::{AdsPerformanceOverview, DashboardTab};
use contracts::shared::indicators::MetricCardData;
use leptos::prelude::*;

/// Stagger between consecutive cards.
const CARD_DELAY_STEP_MS: u32 = 60;

fn card_row(cards: Vec<MetricCardData>, first_delay_ms: u32) -> impl IntoView {
    cards
        .into_iter()
        .enumerate()
        .map(|(i, data)| {
            view! {
                <CardAnimated delay_ms=first_delay_ms + i as u32 * CARD_DELAY_STEP_MS class="metric-card-wrap">
                    <MetricCard data=data />
                </CardAnimated>
            }
        })
        .collect_view()
}

/// Marketing tab. Figures are static mock data.
#[component]
pub fn AdsPerformanceDashboard() -> impl IntoView {
    let config = use_config();
    let overview = AdsPerformanceOverview::mock(&config.ui.currency);
    let bottom_start = overview.top_row.len() as u32 * CARD_DELAY_STEP_MS;

    // there is no campaign list page; the marketing tab is the closest view
    let ctx = use_context::<AppGlobalContext>();
    let on_view_all = Callback::new(move |_| match ctx {
        Some(ctx) => ctx.activate_tab(DashboardTab::Marketing),
        None => log::warn!("AppGlobalContext not provided"),
    });

    view! {
        <section class="dashboard ads-dashboard">
            <div class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Ads Performance"</h1>
                    <p class="dashboard__subtitle">"Track how your campaigns perform across platforms"</p>
                </div>
                <Button variant="outline" on_click=on_view_all>
                    "View All Running Campaigns"
                </Button>
            </div>

            <h2 class="dashboard__section-title">"Performance Overview"</h2>
            <div class="metric-grid">{card_row(overview.top_row, 0)}</div>
            <div class="metric-grid">{card_row(overview.bottom_row, bottom_start)}</div>
        </section>
    }
}
