use crate::shared::components::ui::Checkbox;
use contracts::enums::{PlatformId, PlatformSet};
use contracts::usecases::u501_create_campaign::WizardAction;
use leptos::prelude::*;

#[component]
pub fn PlatformSelector(
    #[prop(into)]
    platforms: Signal<PlatformSet>,
    on_action: Callback<WizardAction>,
) -> impl IntoView {
    let catalog = PlatformId::campaign_catalog();
    let catalog_len = catalog.len();
    let all_selected = move || platforms.with(|set| set.len() == catalog_len);

    view! {
        <div class="wizard-step platform-selector">
            <div>
                <h3 class="wizard-step__title">"Select Platform(s)"</h3>
                <p class="wizard-step__hint">
                    "Choose which food delivery platforms you want to run your campaign on. "
                    "Each platform has different options and target audiences."
                </p>
                <Checkbox
                    id="select-all"
                    label="Select All Platforms".to_string()
                    checked=Signal::derive(all_selected)
                    on_change=Callback::new(move |_| on_action.run(WizardAction::SelectAllPlatforms))
                />
            </div>

            <div class="platform-selector__list">
                {catalog
                    .into_iter()
                    .map(|platform| {
                        let is_selected = move || platforms.with(|set| set.contains(&platform));
                        let toggle = move || on_action.run(WizardAction::TogglePlatform(platform));
                        view! {
                            <div
                                class=move || {
                                    if is_selected() {
                                        "platform-card platform-card--selected"
                                    } else {
                                        "platform-card"
                                    }
                                }
                                on:click=move |_| toggle()
                            >
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    id=platform.code()
                                    prop:checked=is_selected
                                    // the card click already toggles
                                    on:click=|ev| ev.prevent_default()
                                />
                                <div class="platform-card__body">
                                    <span class="platform-card__name">{platform.display_name()}</span>
                                    <p class="platform-card__description">{platform.description()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
