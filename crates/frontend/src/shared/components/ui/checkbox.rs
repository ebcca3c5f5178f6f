use leptos::prelude::*;

/// Checkbox with a clickable label
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the new checked state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Must be unique per page: the label targets it
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let label_for = id.clone();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__checkbox-wrapper {}", additional_class())>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
