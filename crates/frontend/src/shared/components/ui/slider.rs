use leptos::prelude::*;

/// Range input for `f64` values with an optional highlighted band (e.g. commonly used bids).
#[component]
pub fn Slider(
    #[prop(into)]
    value: Signal<f64>,
    min: f64,
    max: f64,
    step: f64,
    #[prop(optional)]
    on_change: Option<Callback<f64>>,
    /// (from, to) in value units
    #[prop(optional)]
    band: Option<(f64, f64)>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let band_view = band.map(|(from, to)| {
        let style = band_style(min, max, from, to);
        view! { <div class="slider__band" style=style></div> }
    });

    view! {
        <div class="slider">
            {band_view}
            <input
                id=id
                type="range"
                class="slider__input"
                min=min
                max=max
                step=step
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let Some(handler) = on_change else { return };
                    match event_target_value(&ev).parse::<f64>() {
                        Ok(v) => handler.run(v),
                        Err(e) => log::debug!("slider value ignored: {}", e),
                    }
                }
            />
            <div class="slider__scale">
                <span>{min}</span>
                <span>{max}</span>
            </div>
        </div>
    }
}

/// Absolute placement of the band as left/right percentages of the track.
fn band_style(min: f64, max: f64, from: f64, to: f64) -> String {
    let span = max - min;
    if span <= 0.0 {
        return String::new();
    }
    let left = (from - min) / span * 100.0;
    let right = (max - to) / span * 100.0;
    format!("left: {:.2}%; right: {:.2}%;", left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_style() {
        assert_eq!(band_style(0.0, 7.0, 2.0, 4.0), "left: 28.57%; right: 42.86%;");
        assert_eq!(band_style(1.0, 1.0, 0.0, 1.0), "");
    }
}
