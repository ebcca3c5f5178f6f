use leptos::prelude::*;

/// Solid ring with a centred headline, caption and footnote.
#[component]
pub fn DonutGauge(
    /// CSS colour of the ring
    #[prop(into)]
    color: String,
    #[prop(into)]
    headline: String,
    #[prop(into)]
    caption: String,
    #[prop(optional, into)]
    footnote: MaybeProp<String>,
) -> impl IntoView {
    let ring_style = format!("background: {};", color);

    view! {
        <div class="donut" style=ring_style>
            <div class="donut__hole">
                <span class="donut__headline">{headline}</span>
                <span class="donut__caption">{caption}</span>
                {move || footnote.get().map(|f| view! { <span class="donut__footnote">{f}</span> })}
            </div>
        </div>
    }
}
