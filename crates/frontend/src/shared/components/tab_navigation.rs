use leptos::prelude::*;

/// Pill-shaped segmented tab switch.
#[component]
pub fn TabNavigation(
    /// (id, label) pairs in display order
    tabs: Vec<(String, String)>,
    #[prop(into)]
    active: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tab-nav {}", additional_class())>
            {tabs
                .into_iter()
                .map(|(id, label)| {
                    let id_active = id.clone();
                    let is_active = move || active.get() == id_active;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "tab-nav__item tab-nav__item--active" } else { "tab-nav__item" }
                            }
                            on:click=move |_| on_change.run(id.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
