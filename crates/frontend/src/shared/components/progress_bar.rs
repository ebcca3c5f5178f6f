use leptos::prelude::*;

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(
    /// 0..=100, clamped
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    let width = move || format!("width: {:.1}%;", clamp_percent(value.get()));

    view! {
        <div class="progress" role="progressbar">
            <div class="progress__fill" style=width></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(93.7), 93.7);
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
