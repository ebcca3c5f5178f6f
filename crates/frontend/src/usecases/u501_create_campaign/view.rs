use super::campaign_form::CampaignForm;
use super::campaign_preview::CampaignPreview;
use super::campaign_summary::CampaignSummary;
use super::platform_selector::PlatformSelector;
use super::template_selector::TemplateSelector;
use super::view_model::CampaignWizardVm;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::date_utils::today;
use crate::shared::drawer_frame::DrawerFrame;
use crate::shared::icons::icon;
use contracts::usecases::u501_create_campaign::{WizardAction, WizardState, WizardStep};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

impl StepStatus {
    fn modifier(&self) -> &'static str {
        match self {
            StepStatus::Done => "done",
            StepStatus::Current => "current",
            StepStatus::Pending => "pending",
        }
    }
}

/// Steps shown in the indicator. The details step disappears when a template filled it in.
pub fn indicator_steps(state: &WizardState) -> Vec<(WizardStep, StepStatus)> {
    state
        .steps()
        .iter()
        .enumerate()
        .filter(|(_, step)| !(state.details_skipped() && **step == WizardStep::Details))
        .map(|(i, step)| {
            let position = i + 1;
            let status = if position < state.current_step {
                StepStatus::Done
            } else if position == state.current_step {
                StepStatus::Current
            } else {
                StepStatus::Pending
            };
            (*step, status)
        })
        .collect()
}

/// Campaign creation wizard in a bottom drawer.
#[component]
pub fn CreateCampaignDrawer(
    #[prop(into)]
    is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let currency = config.ui.currency.clone();
    let default_filter = config.preview.default_filter;

    let vm = CampaignWizardVm::new(config.wizard.variant, today());
    let state = vm.state;
    let on_action = vm.actions();

    // every opening starts from a fresh draft anchored to the current date
    Effect::new(move |_| {
        if is_open.get() {
            vm.open(today());
        } else if state.with_untracked(|s| s.is_open) {
            vm.close();
        }
    });

    let kind = Memo::new(move |_| state.with(|s| s.current_kind()));
    let title = vm.title();

    let steps = move || {
        state.with(indicator_steps)
            .into_iter()
            .enumerate()
            .map(|(i, (step, status))| {
                view! {
                    <li class=format!("wizard-steps__item wizard-steps__item--{}", status.modifier())>
                        <span class="wizard-steps__marker">
                            {if status == StepStatus::Done {
                                icon("check")
                            } else {
                                view! { <span>{i + 1}</span> }.into_any()
                            }}
                        </span>
                        <span class="wizard-steps__title">{step.title()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    let step_body = {
        let currency = currency.clone();
        move || match kind.get() {
            WizardStep::Platforms => view! {
                <PlatformSelector platforms=vm.platforms() on_action=on_action />
            }
            .into_any(),
            WizardStep::Template => view! {
                <TemplateSelector
                    selected=vm.selected_template()
                    on_select=Callback::new(move |id| vm.dispatch(WizardAction::SelectTemplate(id)))
                />
            }
            .into_any(),
            WizardStep::Details => view! {
                <CampaignForm
                    variant=state.with_untracked(|s| s.variant)
                    platforms=vm.platforms()
                    draft=vm.draft()
                    min_start=state.with_untracked(|s| s.opened_on)
                    currency=currency.clone()
                    on_action=on_action
                />
            }
            .into_any(),
            WizardStep::Preview => view! {
                <CampaignSummary state=state currency=currency.clone() />
            }
            .into_any(),
        }
    };

    let can_go_back = move || state.with(|s| s.can_go_back());
    let can_go_next = move || state.with(|s| s.can_go_next());
    let can_submit = move || state.with(|s| s.can_submit());
    let is_final = move || state.with(|s| s.is_final_step());

    view! {
        <DrawerFrame is_open=is_open on_close=on_close drawer_class="campaign-drawer">
            <div class="drawer__header">
                <div class="drawer__header-row">
                    <h2 class="drawer__title">{title}</h2>
                    <Button
                        variant="ghost"
                        size="icon"
                        title="Close"
                        on_click=Callback::new(move |_| on_close.run(()))
                    >
                        {icon("x")}
                    </Button>
                </div>
                <ol class="wizard-steps">{steps}</ol>
            </div>

            <div class="drawer__body campaign-drawer__body">
                <div class="campaign-drawer__form">{step_body.clone()}</div>
                <div class="campaign-drawer__preview">
                    <CampaignPreview
                        platforms=vm.platforms()
                        default_filter=default_filter
                        currency=currency.clone()
                    />
                </div>
            </div>

            <div class="drawer__footer">
                <Button
                    variant="outline"
                    disabled=Signal::derive(move || !can_go_back())
                    on_click=Callback::new(move |_| vm.dispatch(WizardAction::Back))
                >
                    "Back"
                </Button>
                <Show
                    when=is_final
                    fallback=move || view! {
                        <Button
                            disabled=Signal::derive(move || !can_go_next())
                            on_click=Callback::new(move |_| vm.dispatch(WizardAction::Next))
                        >
                            "Next"
                        </Button>
                    }
                >
                    <Button
                        variant="success"
                        disabled=Signal::derive(move || !can_submit())
                        on_click=Callback::new(move |_| vm.submit_command(on_close))
                    >
                        "Create Campaign"
                    </Button>
                </Show>
            </div>
        </DrawerFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::PlatformId;
    use contracts::usecases::u501_create_campaign::{reduce, TemplateId, WizardVariant};

    fn opened(variant: WizardVariant) -> WizardState {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        reduce(&WizardState::new(variant, today), WizardAction::Open { today })
    }

    #[test]
    fn test_indicator_on_first_step() {
        let state = opened(WizardVariant::Classic);
        let steps = indicator_steps(&state);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], (WizardStep::Platforms, StepStatus::Current));
        assert_eq!(steps[2].1, StepStatus::Pending);
    }

    #[test]
    fn test_indicator_hides_skipped_details() {
        let mut state = opened(WizardVariant::Templated);
        state = reduce(&state, WizardAction::TogglePlatform(PlatformId::Noon));
        state = reduce(&state, WizardAction::Next);
        state = reduce(&state, WizardAction::SelectTemplate(TemplateId::PromoDeal));

        let steps = indicator_steps(&state);
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|(step, _)| *step != WizardStep::Details));
        assert_eq!(steps[0].1, StepStatus::Done);
    }
}
