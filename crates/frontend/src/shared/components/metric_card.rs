use crate::shared::icons::icon;
use contracts::shared::indicators::{MetricCardData, TrendDirection, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let cents = (val * 100.0).round() as i64;
            let whole = format_thousands(cents / 100);
            let frac = (cents % 100).abs();
            if frac == 0 {
                format!("{} {}", currency, whole)
            } else {
                format!("{} {}.{:02}", currency, whole, frac)
            }
        }
        ValueFormat::Number { decimals } => format!("{:.prec$}", val, prec = *decimals as usize),
        ValueFormat::Percent { decimals } => format!("{:.prec$}%", val, prec = *decimals as usize),
        ValueFormat::Multiplier { decimals } => {
            format!("{:.prec$}x", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn MetricCard(data: MetricCardData) -> impl IntoView {
    let formatted = format_value(data.value, &data.format);
    let icon_class = format!("metric-card__icon metric-card__icon--{}", data.accent.modifier());

    let trend_view = data.trend.map(|trend| {
        let cls = format!("metric-card__trend metric-card__trend--{}", trend.direction.modifier());
        let arrow = match trend.direction {
            TrendDirection::Down => icon("trending-down"),
            _ => icon("trending-up"),
        };
        view! {
            <div class=cls>
                {arrow}
                <span>{trend.value}</span>
            </div>
        }
    });

    view! {
        <div class="metric-card">
            <div class="metric-card__top">
                <div class=icon_class>
                    {icon(&data.icon)}
                </div>
                {trend_view}
            </div>
            <div class="metric-card__content">
                <h3 class="metric-card__label">{data.label}</h3>
                <p class="metric-card__value">{formatted}</p>
            </div>
        </div>
    }
}
