use crate::shared::date_utils::format_optional;
use contracts::enums::PlatformId;
use contracts::usecases::u501_create_campaign::form_fields::{
    shows_area_selector, visible_audience_flags,
};
use contracts::usecases::u501_create_campaign::{WizardState, WizardVariant};
use leptos::prelude::*;

fn row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p class="summary__row">
            <span class="summary__label">{label}": "</span>
            {value}
        </p>
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Read-only review of the whole draft.
#[component]
pub fn CampaignSummary(
    #[prop(into)]
    state: Signal<WizardState>,
    #[prop(into)]
    currency: String,
) -> impl IntoView {
    let body = move || {
        let s = state.get();
        let draft = &s.draft;

        let platforms = s
            .platforms
            .iter()
            .map(PlatformId::display_name)
            .collect::<Vec<_>>()
            .join(", ");

        let identity = match s.variant {
            WizardVariant::Templated => view! {
                {row("Template", s.selected_template.map(|t| t.template().name.clone()).unwrap_or_else(|| "-".to_string()))}
                {row("Name", or_dash(&draft.name))}
                {row("Objective", or_dash(&draft.objective))}
                {row("Target Audience", or_dash(&draft.target_audience))}
                {row("Description", or_dash(&draft.description))}
            }
            .into_any(),
            WizardVariant::Classic => view! {
                {row("Account", or_dash(&draft.account))}
                {row("Brand", or_dash(&draft.brand))}
                {row("Outlet", or_dash(&draft.outlet))}
            }
            .into_any(),
        };

        let total_days = draft
            .duration
            .is_custom()
            .then(|| draft.total_days())
            .flatten()
            .map(|days| row("Total Days", days.to_string()));

        let audience = (!visible_audience_flags(&s.platforms).is_empty()).then(|| {
            let enabled = draft.audience.enabled();
            view! {
                <div class="summary__list">
                    <p class="summary__label">"Target Audience:"</p>
                    <ul>
                        {enabled.into_iter().map(|f| view! { <li>{f.label()}</li> }).collect_view()}
                    </ul>
                </div>
            }
        });

        let areas = (shows_area_selector(&s.platforms) && !draft.target_areas.is_empty()).then(|| {
            view! {
                <div class="summary__list">
                    <p class="summary__label">"Target Areas:"</p>
                    <ul>
                        {draft
                            .target_areas
                            .iter()
                            .map(|a| view! { <li>{a.display_name()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        });

        view! {
            {row("Platforms", platforms)}
            {identity}
            {row("Bid per Click", format!("{} {:.2}", currency, draft.bid_per_click))}
            {row("Budget", format!("{} {}", currency, or_dash(&draft.budget)))}
            {row("Duration", draft.duration.label())}
            {row("Start Date", format_optional(draft.start_date))}
            {row("End Date", format_optional(draft.effective_end_date()))}
            {total_days}
            {audience}
            {areas}
        }
    };

    view! {
        <div class="wizard-step summary">
            <h3 class="wizard-step__title">"Campaign Summary"</h3>
            <div class="summary__rows">{body}</div>
        </div>
    }
}
