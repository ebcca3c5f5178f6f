use leptos::prelude::*;

/// Pill badge: "up", "down", "flat" for trends, "active"/"resolved" for alert states
#[component]
pub fn Badge(
    #[prop(into)]
    variant: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--{}", variant.get())>
            {children()}
        </span>
    }
}
