use crate::shared::components::tab_navigation::TabNavigation;
use contracts::enums::PlatformSet;
use contracts::usecases::u501_create_campaign::preview::{
    heat_level, heat_opacity, hour_label, AreaSales, HeatmapGrid, PreviewData, PreviewTab,
    TrafficFilter, HOURS,
};
use leptos::prelude::*;

/// Opacity of filtered-out cells and bars.
const DIMMED_OPACITY: f64 = 0.1;
/// Top of the area sales range, used as the bar chart scale.
const AREA_SALES_SCALE: f64 = 6000.0;

pub fn cell_opacity(value: u32, filter: TrafficFilter) -> f64 {
    if filter.matches_cell(value) {
        heat_opacity(value)
    } else {
        DIMMED_OPACITY
    }
}

pub fn bar_height_percent(sales: u32) -> f64 {
    (sales as f64 / AREA_SALES_SCALE * 100.0).min(100.0)
}

/// Mock performance preview. Data is regenerated when the platform selection changes,
/// not on every render; the filter only changes how cells and bars are drawn.
#[component]
pub fn CampaignPreview(
    #[prop(into)]
    platforms: Signal<PlatformSet>,
    default_filter: TrafficFilter,
    #[prop(into)]
    currency: String,
) -> impl IntoView {
    let filter = RwSignal::new(default_filter);
    let tab = RwSignal::new(PreviewTab::Heatmap);

    // regenerated whenever the selection changes
    let data = Memo::new(move |_| PreviewData::generate(&platforms.get(), &mut rand::thread_rng()));
    let has_areas = move || data.with(|d| d.area_sales.is_some());
    let active_tab = move || {
        if has_areas() {
            tab.get()
        } else {
            PreviewTab::Heatmap
        }
    };

    let tab_options = move || {
        let mut tabs = vec![PreviewTab::Heatmap];
        if has_areas() {
            tabs.push(PreviewTab::Areas);
        }
        tabs
    };

    let filter_tabs: Vec<(String, String)> = TrafficFilter::all()
        .into_iter()
        .map(|f| (f.code().to_string(), f.label().to_string()))
        .collect();
    let on_filter = Callback::new(move |code: String| match code.parse::<TrafficFilter>() {
        Ok(f) => filter.set(f),
        Err(e) => log::warn!("{}", e),
    });

    view! {
        <div class="preview">
            <h3 class="wizard-step__title">"Campaign Performance Preview"</h3>
            <p class="wizard-step__hint">
                "This is a simulation of how your campaign might perform based on historical data."
            </p>

            <div class="preview__controls">
                <div class="preview__tabs">
                    {move || {
                        tab_options()
                            .into_iter()
                            .map(|t| {
                                let is_active = move || active_tab() == t;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if is_active() { "preview__tab preview__tab--active" } else { "preview__tab" }
                                        }
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <TabNavigation
                    tabs=filter_tabs
                    active=Signal::derive(move || filter.get().code().to_string())
                    on_change=on_filter
                    class="preview__filter"
                />
            </div>

            {move || match (active_tab(), data.get().area_sales) {
                (PreviewTab::Areas, Some(sales)) => view! {
                    <AreaSalesChart sales=sales filter=filter currency=currency.clone() />
                }
                .into_any(),
                _ => view! { <Heatmap grid=data.get().heatmap filter=filter /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Heatmap(grid: HeatmapGrid, #[prop(into)] filter: Signal<TrafficFilter>) -> impl IntoView {
    view! {
        <div class="heatmap">
            <h4 class="preview__section-title">"Sales By Hour & Day (Heat Map)"</h4>
            <div class="heatmap__scroll">
                <div class="heatmap__grid">
                    <div class="heatmap__corner">"Day / Hour"</div>
                    {(0..HOURS)
                        .map(|h| view! { <div class="heatmap__hour">{hour_label(h)}</div> })
                        .collect_view()}
                    {grid
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="heatmap__day">{row.day}</div>
                                {row
                                    .values
                                    .into_iter()
                                    .map(|value| {
                                        let style = move || {
                                            format!(
                                                "background-color: {}; opacity: {:.3};",
                                                heat_level(value).color(),
                                                cell_opacity(value, filter.get()),
                                            )
                                        };
                                        view! { <div class="heatmap__cell" style=style>{value}</div> }
                                    })
                                    .collect_view()}
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AreaSalesChart(
    sales: Vec<AreaSales>,
    #[prop(into)] filter: Signal<TrafficFilter>,
    currency: String,
) -> impl IntoView {
    view! {
        <div class="area-chart">
            <h4 class="preview__section-title">"Sales By Area"</h4>
            <div class="area-chart__bars">
                {sales
                    .into_iter()
                    .map(|entry| {
                        let amount = format!("{} {}", currency, entry.sales);
                        let style = move || {
                            let opacity = if filter.get().matches_area(entry.sales) {
                                1.0
                            } else {
                                DIMMED_OPACITY
                            };
                            format!(
                                "height: {:.1}%; opacity: {};",
                                bar_height_percent(entry.sales),
                                opacity
                            )
                        };
                        let title = amount.clone();
                        view! {
                            <div class="area-chart__column" title=title>
                                <span class="area-chart__value">{amount}</span>
                                <div class="area-chart__track">
                                    <div class="area-chart__bar" style=style></div>
                                </div>
                                <span class="area-chart__label">{entry.area.display_name()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_opacity_dims_filtered_cells() {
        assert_eq!(cell_opacity(30, TrafficFilter::High), DIMMED_OPACITY);
        assert!((cell_opacity(150, TrafficFilter::High) - 1.0).abs() < 1e-9);
        assert_eq!(cell_opacity(30, TrafficFilter::All), heat_opacity(30));
    }

    #[test]
    fn test_bar_height_percent() {
        assert_eq!(bar_height_percent(3000), 50.0);
        assert_eq!(bar_height_percent(6000), 100.0);
        assert_eq!(bar_height_percent(9000), 100.0);
    }
}
