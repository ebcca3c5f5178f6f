use super::PlatformMetricsCard;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::tab_navigation::TabNavigation;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::dashboards::d401_operations::{
    Alert, AlertStatus, KpiTile, LocationPerformance, OperationsOverview, Timeframe,
};
use leptos::prelude::*;

fn status_variant(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => "active",
        AlertStatus::Resolved => "resolved",
    }
}

#[component]
fn KpiTileCard(tile: KpiTile, delay_ms: u32) -> impl IntoView {
    let progress = tile.progress;
    view! {
        <CardAnimated delay_ms=delay_ms class="kpi-tile">
            <div class="kpi-tile__header">
                <span class="kpi-tile__icon">{icon(&tile.icon)}</span>
                <span class="kpi-tile__label">{tile.label}</span>
            </div>
            <div class="kpi-tile__value">{format!("{}%", tile.value)}</div>
            <ProgressBar value=Signal::derive(move || progress) />
        </CardAnimated>
    }
}

#[component]
fn AlertsTable(alerts: Vec<Alert>) -> impl IntoView {
    view! {
        <table class="data-table alerts-table">
            <thead>
                <tr>
                    <th>"Platform"</th>
                    <th>"Issue"</th>
                    <th>"Time"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {alerts
                    .into_iter()
                    .map(|alert| {
                        view! {
                            <tr>
                                <td>{alert.platform.display_name()}</td>
                                <td>
                                    <span class="alerts-table__issue">
                                        {icon("alert-circle")}
                                        {alert.issue}
                                    </span>
                                </td>
                                <td>{alert.time}</td>
                                <td>{alert.location}</td>
                                <td>
                                    <Badge variant=status_variant(alert.status)>
                                        {alert.status.label()}
                                    </Badge>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn LocationList(locations: Vec<LocationPerformance>) -> impl IntoView {
    view! {
        <ul class="location-list">
            {locations
                .into_iter()
                .map(|entry| {
                    let score = entry.score as f64;
                    view! {
                        <li class="location-list__item">
                            <div class="location-list__row">
                                <span>{entry.location}</span>
                                <span class="location-list__score">{format!("{}/100", entry.score)}</span>
                            </div>
                            <ProgressBar value=Signal::derive(move || score) />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Operations tab: KPI tiles, per-platform scores, alerts and locations.
#[component]
pub fn OperationsDashboard() -> impl IntoView {
    // the switch is visual only; mock figures are the same for every timeframe
    let timeframe = RwSignal::new(Timeframe::Week);
    let data = OperationsOverview::mock();

    let timeframe_tabs: Vec<(String, String)> = Timeframe::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.label().to_string()))
        .collect();
    let on_timeframe = Callback::new(move |code: String| match code.parse::<Timeframe>() {
        Ok(t) => {
            log::debug!("operations timeframe: {}", t.code());
            timeframe.set(t);
        }
        Err(e) => log::warn!("{}", e),
    });

    view! {
        <section class="dashboard operations-dashboard">
            <div class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Operations Performance"</h1>
                    <p class="dashboard__subtitle">"Service quality across platforms and branches"</p>
                </div>
                <TabNavigation
                    tabs=timeframe_tabs
                    active=Signal::derive(move || timeframe.get().code().to_string())
                    on_change=on_timeframe
                />
            </div>

            <div class="kpi-grid">
                {data
                    .kpis
                    .into_iter()
                    .enumerate()
                    .map(|(i, tile)| view! { <KpiTileCard tile=tile delay_ms=i as u32 * 60 /> })
                    .collect_view()}
            </div>

            <h2 class="dashboard__section-title">"Platform Performance"</h2>
            <div class="platform-grid">
                {data
                    .platforms
                    .into_iter()
                    .map(|p| view! { <PlatformMetricsCard data=p /> })
                    .collect_view()}
            </div>

            <div class="operations-dashboard__bottom">
                <CardAnimated delay_ms=120 class="operations-dashboard__alerts">
                    <h2 class="dashboard__section-title">"Recent Alerts"</h2>
                    <AlertsTable alerts=data.alerts />
                </CardAnimated>
                <CardAnimated delay_ms=180 class="operations-dashboard__locations">
                    <h2 class="dashboard__section-title">"Performance by Location"</h2>
                    <LocationList locations=data.locations />
                </CardAnimated>
            </div>
        </section>
    }
}
