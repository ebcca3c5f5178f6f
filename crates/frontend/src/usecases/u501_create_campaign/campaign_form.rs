use crate::shared::components::ui::{Checkbox, Input, Select, Slider, Textarea};
use crate::shared::date_utils::{format_long, parse_input_date, to_input_value};
use chrono::{Duration, NaiveDate};
use contracts::enums::{AreaId, PlatformSet};
use contracts::usecases::u501_create_campaign::draft::{
    ACCOUNT_OPTIONS, BRAND_OPTIONS, OUTLET_OPTIONS,
};
use contracts::usecases::u501_create_campaign::form_fields::{
    platform_sections, PlatformSection, BID_COMMON_RANGE, BID_MAX, BID_MIN, BID_STEP, BUDGET_MIN,
    BUDGET_STEP,
};
use contracts::usecases::u501_create_campaign::{
    CampaignDraft, CampaignDuration, DraftPatch, WizardAction, WizardVariant,
};
use leptos::prelude::*;

fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Text field callback that emits a single-field patch.
fn patch_with(
    on_action: Callback<WizardAction>,
    build: fn(String) -> DraftPatch,
) -> Callback<String> {
    Callback::new(move |value| on_action.run(WizardAction::Patch(build(value))))
}

#[component]
pub fn CampaignForm(
    variant: WizardVariant,
    #[prop(into)]
    platforms: Signal<PlatformSet>,
    #[prop(into)]
    draft: Signal<CampaignDraft>,
    /// Earliest selectable start date.
    min_start: NaiveDate,
    #[prop(into)]
    currency: String,
    on_action: Callback<WizardAction>,
) -> impl IntoView {
    let field = move |get: fn(&CampaignDraft) -> String| Signal::derive(move || draft.with(get));

    let identity_fields = match variant {
        WizardVariant::Templated => view! {
            <Input
                id="campaign-name"
                label="Campaign Name"
                placeholder="Enter campaign name"
                value=field(|d| d.name.clone())
                on_input=patch_with(on_action, |v| DraftPatch { name: Some(v), ..Default::default() })
            />
            <Input
                id="campaign-objective"
                label="Objective"
                placeholder="What should this campaign achieve?"
                value=field(|d| d.objective.clone())
                on_input=patch_with(on_action, |v| DraftPatch { objective: Some(v), ..Default::default() })
            />
            <Input
                id="campaign-target-audience"
                label="Target Audience"
                placeholder="Who is this campaign for?"
                value=field(|d| d.target_audience.clone())
                on_input=patch_with(on_action, |v| DraftPatch { target_audience: Some(v), ..Default::default() })
            />
            <Textarea
                id="campaign-description"
                label="Description"
                rows=3
                value=field(|d| d.description.clone())
                on_input=patch_with(on_action, |v| DraftPatch { description: Some(v), ..Default::default() })
            />
        }
        .into_any(),
        WizardVariant::Classic => view! {
            <Select
                id="account"
                label="Select Account"
                placeholder="Select Account"
                value=field(|d| d.account.clone())
                options=options(&ACCOUNT_OPTIONS)
                on_change=patch_with(on_action, |v| DraftPatch { account: Some(v), ..Default::default() })
            />
            <Select
                id="brand"
                label="Select Brand"
                placeholder="Select Brand"
                value=field(|d| d.brand.clone())
                options=options(&BRAND_OPTIONS)
                on_change=patch_with(on_action, |v| DraftPatch { brand: Some(v), ..Default::default() })
            />
            <Select
                id="outlet"
                label="Select Outlet"
                placeholder="Select Outlet"
                value=field(|d| d.outlet.clone())
                options=options(&OUTLET_OPTIONS)
                on_change=patch_with(on_action, |v| DraftPatch { outlet: Some(v), ..Default::default() })
            />
        }
        .into_any(),
    };

    let durations: Vec<(String, String)> = CampaignDuration::all()
        .into_iter()
        .map(|d| (d.code(), d.label()))
        .collect();

    let on_duration = Callback::new(move |code: String| match code.parse::<CampaignDuration>() {
        Ok(duration) => on_action.run(WizardAction::SetDuration(duration)),
        Err(e) => log::warn!("{}", e),
    });

    let bid_label = {
        let currency = currency.clone();
        move || format!("Bid per Click ({}): {:.2}", currency, draft.with(|d| d.bid_per_click))
    };
    let band_hint = format!(
        "Commonly Used ({}-{} {})",
        BID_COMMON_RANGE.0, BID_COMMON_RANGE.1, currency
    );

    let start_value = move || to_input_value(draft.with(|d| d.start_date));
    let end_value = move || to_input_value(draft.with(|d| d.end_date));
    let end_min = move || {
        draft
            .with(|d| d.start_date)
            .unwrap_or(min_start)
            .checked_add_signed(Duration::days(1))
            .map(|d| to_input_value(Some(d)))
            .unwrap_or_default()
    };
    let is_custom = move || draft.with(|d| d.duration.is_custom());

    view! {
        <div class="wizard-step campaign-form">
            <h3 class="wizard-step__title">"Campaign Details"</h3>

            <div class="campaign-form__common">
                {identity_fields}

                <div class="form__group">
                    <label class="form__label" for="bid-per-click">{bid_label}</label>
                    <Slider
                        id="bid-per-click"
                        min=BID_MIN
                        max=BID_MAX
                        step=BID_STEP
                        band=BID_COMMON_RANGE
                        value=Signal::derive(move || draft.with(|d| d.bid_per_click))
                        on_change=Callback::new(move |v| on_action.run(WizardAction::SetBidPerClick(v)))
                    />
                    <span class="form__hint">{band_hint}</span>
                </div>

                <Input
                    id="budget"
                    label=format!("Budget ({})", currency)
                    input_type="number"
                    min=BUDGET_MIN.to_string()
                    step=BUDGET_STEP.to_string()
                    value=field(|d| d.budget.clone())
                    on_input=patch_with(on_action, |v| DraftPatch { budget: Some(v), ..Default::default() })
                />

                <Select
                    id="duration"
                    label="Duration"
                    value=Signal::derive(move || draft.with(|d| d.duration.code()))
                    options=durations
                    on_change=on_duration
                />

                <div class="form__group">
                    <label class="form__label" for="start-date">"Start Date"</label>
                    <input
                        id="start-date"
                        type="date"
                        class="form__input"
                        min=to_input_value(Some(min_start))
                        prop:value=start_value
                        on:change=move |ev| {
                            if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                                on_action.run(WizardAction::SetStartDate(date));
                            }
                        }
                    />
                </div>

                <Show
                    when=is_custom
                    fallback=move || {
                        let ends_on = move || {
                            draft
                                .with(|d| d.effective_end_date())
                                .map(|end| format!("Ends on {}", format_long(end)))
                        };
                        view! { <p class="form__hint">{ends_on}</p> }
                    }
                >
                    <div class="form__group">
                        <label class="form__label" for="end-date">"End Date"</label>
                        <input
                            id="end-date"
                            type="date"
                            class="form__input"
                            min=end_min
                            prop:value=end_value
                            on:change=move |ev| {
                                if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                                    on_action.run(WizardAction::SetEndDate(date));
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            {move || {
                platform_sections(&platforms.get())
                    .into_iter()
                    .map(|section| view! { <PlatformOptions section=section draft=draft on_action=on_action /> })
                    .collect_view()
            }}
        </div>
    }
}

/// "Talabat Options" and friends: audience flags plus, for Talabat, the area grid.
#[component]
fn PlatformOptions(
    section: PlatformSection,
    draft: Signal<CampaignDraft>,
    on_action: Callback<WizardAction>,
) -> impl IntoView {
    let platform = section.platform;

    let flags = section
        .audience_flags
        .iter()
        .copied()
        .map(|flag| {
            view! {
                <Checkbox
                    id=format!("{}-{}", platform.code(), flag.code())
                    label=flag.label().to_string()
                    checked=Signal::derive(move || draft.with(|d| d.audience.get(flag)))
                    on_change=Callback::new(move |value| {
                        on_action.run(WizardAction::SetAudienceFlag(flag, value))
                    })
                />
            }
        })
        .collect_view();

    let areas = section.shows_areas.then(|| {
        view! {
            <div class="form__group">
                <span class="form__label">"Target Areas"</span>
                <div class="campaign-form__areas">
                    {AreaId::all()
                        .into_iter()
                        .map(|area| view! {
                            <Checkbox
                                id=format!("area-{}", area.code())
                                label=area.display_name().to_string()
                                checked=Signal::derive(move || draft.with(|d| d.target_areas.contains(&area)))
                                on_change=Callback::new(move |_| on_action.run(WizardAction::ToggleArea(area)))
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <div class="campaign-form__platform">
            <h4 class="campaign-form__platform-title">
                {format!("{} Options", platform.display_name())}
            </h4>
            <div class="form__group">
                <span class="form__label">"Target Audience"</span>
                {flags}
            </div>
            {areas}
        </div>
    }
}
