use crate::shared::components::donut_gauge::DonutGauge;
use crate::shared::components::ui::Badge;
use contracts::dashboards::d401_operations::PlatformMetrics;
use leptos::prelude::*;

/// Ring background: level colour over the achieved share, grey for the rest.
pub fn gauge_fill(color: &str, percentage: f64) -> String {
    format!(
        "conic-gradient({} {:.1}%, #e5e7eb 0)",
        color,
        percentage.clamp(0.0, 100.0)
    )
}

/// "Operations on {platform}" card with the score gauge and metric rows.
#[component]
pub fn PlatformMetricsCard(data: PlatformMetrics) -> impl IntoView {
    let level = data.level();
    let platform = data.platform;
    let footnote = format!("{}/{}", data.score.current, data.score.total);

    view! {
        <div class="ops-platform-card">
            <div class="ops-platform-card__header">
                <span class=format!("platform-logo platform-logo--{}", platform.code())>
                    {platform.initial()}
                </span>
                <h3 class="ops-platform-card__title">
                    {format!("Operations on {}", platform.display_name())}
                </h3>
            </div>

            <div class="ops-platform-card__gauge">
                <DonutGauge
                    color=gauge_fill(level.color(), data.score.percentage())
                    headline=level.label()
                    caption="Operation"
                    footnote=footnote
                />
            </div>

            <ul class="ops-platform-card__metrics">
                {data
                    .metrics
                    .into_iter()
                    .map(|metric| {
                        let modifier = metric.trend.direction.modifier().to_string();
                        view! {
                            <li class="ops-platform-card__metric">
                                <span class="ops-platform-card__metric-label">{metric.label}</span>
                                <span class="ops-platform-card__metric-value">{metric.value}</span>
                                <Badge variant=modifier>{metric.trend.value}</Badge>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_fill() {
        assert_eq!(gauge_fill("#16a34a", 93.75), "conic-gradient(#16a34a 93.8%, #e5e7eb 0)");
        assert_eq!(gauge_fill("#ef4444", 140.0), "conic-gradient(#ef4444 100.0%, #e5e7eb 0)");
    }
}
