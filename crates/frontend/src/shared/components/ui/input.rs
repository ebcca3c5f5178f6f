use leptos::prelude::*;

/// Labelled input. `input_type` defaults to "text"; numeric inputs take `min`/`step` hints.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let label_for = id.clone();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=id
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                min=move || min.get()
                step=move || step.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
