use crate::shared::icons::icon;
use contracts::usecases::u501_create_campaign::{TemplateId, TEMPLATES};
use leptos::prelude::*;

#[component]
pub fn TemplateSelector(
    #[prop(into)]
    selected: Signal<Option<TemplateId>>,
    on_select: Callback<TemplateId>,
) -> impl IntoView {
    view! {
        <div class="wizard-step template-selector">
            <div>
                <h3 class="wizard-step__title">"Choose a Campaign Template"</h3>
                <p class="wizard-step__hint">
                    "Select a predefined template or start from scratch to design your campaign."
                </p>
            </div>

            <div class="template-selector__list">
                {TEMPLATES
                    .iter()
                    .map(|template| {
                        let id = template.id;
                        let is_selected = move || selected.get() == Some(id);
                        view! {
                            <div
                                class=move || {
                                    if is_selected() {
                                        "template-card template-card--selected"
                                    } else {
                                        "template-card"
                                    }
                                }
                                on:click=move |_| on_select.run(id)
                            >
                                <div class=format!("template-card__icon template-card__icon--{}", id.code())>
                                    {icon(&template.icon)}
                                </div>
                                <div class="template-card__body">
                                    <h4 class="template-card__name">{template.name.clone()}</h4>
                                    <p class="template-card__description">{template.description.clone()}</p>
                                </div>
                                <span class="template-card__chevron">{icon("chevron-right")}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
