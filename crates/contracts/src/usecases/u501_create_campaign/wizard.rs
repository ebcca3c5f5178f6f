//! Campaign creation wizard state machine.
//!
//! The whole wizard is a value ([`WizardState`]) and a pure transition
//! function ([`reduce`]). The UI keeps one `WizardState` in a signal and
//! replaces it on every dispatched [`WizardAction`].

use super::draft::{AudienceFlag, AudiencePatch, CampaignDraft, CampaignDuration, DraftPatch};
use super::form_fields::normalize_bid;
use super::template::TemplateId;
use super::validation;
use crate::enums::{
    select_all_platforms, toggle_area, toggle_platform, AreaId, PlatformId, PlatformSet,
};
use crate::shared::error::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardVariant {
    /// Platforms → Details → Review
    Classic,
    /// Platforms → Template → Details → Review
    Templated,
}

impl WizardVariant {
    pub fn code(&self) -> &'static str {
        match self {
            WizardVariant::Classic => "classic",
            WizardVariant::Templated => "templated",
        }
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        match self {
            WizardVariant::Classic => &[WizardStep::Platforms, WizardStep::Details, WizardStep::Preview],
            WizardVariant::Templated => &[
                WizardStep::Platforms,
                WizardStep::Template,
                WizardStep::Details,
                WizardStep::Preview,
            ],
        }
    }
}

impl FromStr for WizardVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(WizardVariant::Classic),
            "templated" => Ok(WizardVariant::Templated),
            _ => Err(ParseError::Variant(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Platforms,
    Template,
    Details,
    Preview,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Platforms => "Select Platform",
            WizardStep::Template => "Choose Template",
            WizardStep::Details => "Campaign Details",
            WizardStep::Preview => "Review & Confirm",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Open { today: NaiveDate },
    Close,
    TogglePlatform(PlatformId),
    SelectAllPlatforms,
    SelectTemplate(TemplateId),
    Patch(DraftPatch),
    SetAudienceFlag(AudienceFlag, bool),
    ToggleArea(AreaId),
    SetStartDate(NaiveDate),
    SetEndDate(NaiveDate),
    SetDuration(CampaignDuration),
    SetBidPerClick(f64),
    Next,
    Back,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub variant: WizardVariant,
    /// Date the defaults were anchored to when the wizard was (re)opened.
    pub opened_on: NaiveDate,
    pub is_open: bool,
    /// 1-based, always within `1..=total_steps()`.
    pub current_step: usize,
    pub platforms: PlatformSet,
    pub selected_template: Option<TemplateId>,
    pub draft: CampaignDraft,
}

/// Payload written to the diagnostic log on submit. Nothing else consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSubmission {
    pub id: Uuid,
    pub variant: WizardVariant,
    pub platforms: Vec<PlatformId>,
    pub template: Option<TemplateId>,
    pub campaign: CampaignDraft,
}

impl WizardState {
    /// Closed wizard with default draft.
    pub fn new(variant: WizardVariant, today: NaiveDate) -> Self {
        Self {
            variant,
            opened_on: today,
            is_open: false,
            current_step: 1,
            platforms: PlatformSet::new(),
            selected_template: None,
            draft: CampaignDraft::defaults(variant, today),
        }
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        self.variant.steps()
    }

    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    pub fn current_kind(&self) -> WizardStep {
        self.kind_at(self.current_step)
    }

    fn kind_at(&self, step: usize) -> WizardStep {
        let steps = self.steps();
        steps[step.clamp(1, steps.len()) - 1]
    }

    fn index_of(&self, kind: WizardStep) -> Option<usize> {
        self.steps().iter().position(|s| *s == kind).map(|i| i + 1)
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    /// The chosen template pre-filled the draft, so the details step is bypassed.
    pub fn details_skipped(&self) -> bool {
        self.index_of(WizardStep::Template).is_some()
            && self.selected_template.map(|t| t.skips_details()).unwrap_or(false)
    }

    /// Step count as the user perceives it (3 when the details step is skipped).
    pub fn perceived_total_steps(&self) -> usize {
        if self.details_skipped() {
            self.total_steps() - 1
        } else {
            self.total_steps()
        }
    }

    /// `(position, total)` for the "Create Campaign (x/y)" header.
    pub fn display_position(&self) -> (usize, usize) {
        let position = if self.details_skipped() && self.current_kind() == WizardStep::Preview {
            self.current_step - 1
        } else {
            self.current_step
        };
        (position, self.perceived_total_steps())
    }

    pub fn is_step_valid(&self, step: usize) -> bool {
        match self.kind_at(step) {
            WizardStep::Platforms => validation::platforms_step_valid(&self.platforms),
            WizardStep::Template => validation::template_step_valid(self.selected_template),
            WizardStep::Details => validation::details_step_valid(self.variant, &self.draft),
            WizardStep::Preview => true,
        }
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_final_step() && self.is_step_valid(self.current_step)
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step > 1
    }

    pub fn can_submit(&self) -> bool {
        self.is_final_step() && validation::can_submit(&self.draft)
    }

    pub fn submission(&self) -> CampaignSubmission {
        CampaignSubmission {
            id: Uuid::new_v4(),
            variant: self.variant,
            platforms: self.platforms.iter().copied().collect(),
            template: self.selected_template,
            campaign: self.draft.clone(),
        }
    }

    fn with_draft(&self, draft: CampaignDraft) -> Self {
        Self {
            draft,
            ..self.clone()
        }
    }

    fn at_step(&self, current_step: usize) -> Self {
        Self {
            current_step: current_step.clamp(1, self.total_steps()),
            ..self.clone()
        }
    }

    fn reset(&self, today: NaiveDate) -> Self {
        Self::new(self.variant, today)
    }
}

/// Apply one action. The input state is never modified.
pub fn reduce(state: &WizardState, action: WizardAction) -> WizardState {
    match action {
        WizardAction::Open { today } => WizardState {
            is_open: true,
            ..state.reset(today)
        },
        WizardAction::Close => state.reset(state.opened_on),
        WizardAction::TogglePlatform(platform) => WizardState {
            platforms: toggle_platform(&state.platforms, platform),
            ..state.clone()
        },
        WizardAction::SelectAllPlatforms => WizardState {
            platforms: select_all_platforms(&state.platforms),
            ..state.clone()
        },
        WizardAction::SelectTemplate(template) => {
            if state.index_of(WizardStep::Template).is_none() {
                log::debug!("template {:?} ignored: variant has no template step", template);
                return state.clone();
            }
            WizardState {
                selected_template: Some(template),
                ..state.clone()
            }
        }
        WizardAction::Patch(patch) => state.with_draft(state.draft.merged(&patch)),
        WizardAction::SetAudienceFlag(flag, value) => state.with_draft(state.draft.merged(&DraftPatch {
            audience: Some(AudiencePatch::single(flag, value)),
            ..Default::default()
        })),
        WizardAction::ToggleArea(area) => state.with_draft(state.draft.merged(&DraftPatch {
            target_areas: Some(toggle_area(&state.draft.target_areas, area)),
            ..Default::default()
        })),
        WizardAction::SetStartDate(date) => state.with_draft(state.draft.with_start_date(date)),
        WizardAction::SetEndDate(date) => match state.draft.with_end_date(date) {
            Some(draft) => state.with_draft(draft),
            None => {
                log::debug!("end date {} rejected: not after start date", date);
                state.clone()
            }
        },
        WizardAction::SetDuration(duration) => state.with_draft(state.draft.with_duration(duration)),
        WizardAction::SetBidPerClick(value) => {
            let mut draft = state.draft.clone();
            draft.bid_per_click = normalize_bid(value);
            state.with_draft(draft)
        }
        WizardAction::Next => next(state),
        WizardAction::Back => back(state),
        WizardAction::Submit => {
            if state.can_submit() {
                state.reset(state.opened_on)
            } else {
                log::debug!("submit ignored at step {}", state.current_step);
                state.clone()
            }
        }
    }
}

fn next(state: &WizardState) -> WizardState {
    if !state.can_go_next() {
        log::debug!("next blocked at step {}", state.current_step);
        return state.clone();
    }

    if state.current_kind() == WizardStep::Template {
        if let Some(template) = state.selected_template.filter(|t| t.skips_details()) {
            let presets = template.template().presets.as_patch();
            let prefilled = state.with_draft(state.draft.merged(&presets));
            return prefilled.at_step(state.current_step + 2);
        }
    }

    state.at_step(state.current_step + 1)
}

fn back(state: &WizardState) -> WizardState {
    if !state.can_go_back() {
        return state.clone();
    }

    if state.current_kind() == WizardStep::Preview && state.details_skipped() {
        if let Some(template_step) = state.index_of(WizardStep::Template) {
            return state.at_step(template_step);
        }
    }

    state.at_step(state.current_step - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn open(variant: WizardVariant) -> WizardState {
        reduce(
            &WizardState::new(variant, today()),
            WizardAction::Open { today: today() },
        )
    }

    fn run(state: WizardState, actions: Vec<WizardAction>) -> WizardState {
        actions.into_iter().fold(state, |s, a| reduce(&s, a))
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_initial_state() {
        let state = open(WizardVariant::Templated);
        assert!(state.is_open);
        assert_eq!(state.current_step, 1);
        assert_eq!(state.total_steps(), 4);
        assert!(state.platforms.is_empty());
        assert!(!state.can_go_next());
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_platform_step_gates_next() {
        let state = open(WizardVariant::Templated);
        let blocked = reduce(&state, WizardAction::Next);
        assert_eq!(blocked, state);

        let state = run(
            state,
            vec![WizardAction::TogglePlatform(PlatformId::Noon), WizardAction::Next],
        );
        assert_eq!(state.current_kind(), WizardStep::Template);
    }

    #[test]
    fn test_new_menu_template_skips_details() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Talabat),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::NewMenu),
            ],
        );
        assert_eq!(state.current_step, 2);
        let state = reduce(&state, WizardAction::Next);
        assert_eq!(state.current_step, 4);
        assert_eq!(state.current_kind(), WizardStep::Preview);

        assert_eq!(state.draft.name, "New Menu Launch");
        assert_eq!(state.draft.budget, "5000");
        assert_eq!(state.draft.objective, "Increase orders of new menu items");
        assert_eq!(state.draft.target_audience, "Existing customers");
        assert_eq!(
            state.draft.description,
            "Campaign to highlight our delicious new menu items and drive repeat orders."
        );
        assert_eq!(state.display_position(), (3, 3));
    }

    #[test]
    fn test_back_after_skip_returns_to_template() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Noon),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::PromoDeal),
                WizardAction::Next,
                WizardAction::Back,
            ],
        );
        assert_eq!(state.current_step, 2);
        assert_eq!(state.current_kind(), WizardStep::Template);
    }

    #[test]
    fn test_custom_template_goes_through_details() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Deliveroo),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::Custom),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.current_kind(), WizardStep::Details);
        assert!(state.draft.name.is_empty());
        assert!(!state.can_go_next());

        let state = run(
            state,
            vec![
                WizardAction::Patch(DraftPatch {
                    name: text("Ramadan"),
                    objective: text("Reach new customers"),
                    ..Default::default()
                }),
                WizardAction::SetStartDate(today()),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.current_kind(), WizardStep::Preview);
        assert_eq!(reduce(&state, WizardAction::Back).current_kind(), WizardStep::Details);
    }

    #[test]
    fn test_template_step_requires_selection() {
        let state = run(
            open(WizardVariant::Templated),
            vec![WizardAction::TogglePlatform(PlatformId::Noon), WizardAction::Next],
        );
        assert!(!state.can_go_next());
        assert_eq!(reduce(&state, WizardAction::Next).current_step, 2);
    }

    #[test]
    fn test_submit_requires_final_step_and_budget() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Noon),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::Custom),
                WizardAction::Next,
                WizardAction::Patch(DraftPatch {
                    name: text("Weekend"),
                    objective: text("Orders"),
                    ..Default::default()
                }),
                WizardAction::SetStartDate(today()),
            ],
        );
        // not on the final step yet
        assert!(!state.can_submit());
        assert_eq!(reduce(&state, WizardAction::Submit), state);

        // empty budget passes the details gate but blocks submission
        let preview = reduce(&state, WizardAction::Next);
        assert!(preview.is_final_step());
        assert!(!preview.can_submit());
        assert_eq!(reduce(&preview, WizardAction::Submit), preview);

        let priced = reduce(
            &preview,
            WizardAction::Patch(DraftPatch {
                budget: text("2500"),
                ..Default::default()
            }),
        );
        assert!(priced.can_submit());
        let submitted = reduce(&priced, WizardAction::Submit);
        assert!(!submitted.is_open);
        assert_eq!(submitted.current_step, 1);
        assert_eq!(submitted.draft, CampaignDraft::defaults(WizardVariant::Templated, today()));
    }

    #[test]
    fn test_close_resets_everything() {
        let state = run(
            open(WizardVariant::Classic),
            vec![
                WizardAction::SelectAllPlatforms,
                WizardAction::Next,
                WizardAction::Patch(DraftPatch {
                    account: text("Account 2"),
                    brand: text("Brand 1"),
                    outlet: text("Outlet 1"),
                    budget: text("4200"),
                    ..Default::default()
                }),
                WizardAction::SetAudienceFlag(AudienceFlag::DeliverooPlus, true),
                WizardAction::ToggleArea(AreaId::Jbr),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.current_step, 3);
        assert_eq!(state.draft.budget, "4200");

        let closed = reduce(&state, WizardAction::Close);
        let reopened = reduce(&closed, WizardAction::Open { today: today() });
        assert_eq!(reopened.current_step, 1);
        assert!(reopened.platforms.is_empty());
        assert_eq!(reopened.selected_template, None);
        assert_eq!(reopened.draft.budget, "1000");
        assert!(reopened.draft.target_areas.is_empty());
        assert!(!reopened.draft.audience.deliveroo_plus);
    }

    #[test]
    fn test_classic_variant_has_three_steps_and_no_template() {
        let state = open(WizardVariant::Classic);
        assert_eq!(state.total_steps(), 3);
        let state = reduce(&state, WizardAction::SelectTemplate(TemplateId::NewMenu));
        assert_eq!(state.selected_template, None);
        assert_eq!(state.perceived_total_steps(), 3);
    }

    #[test]
    fn test_next_on_final_step_is_noop() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Noon),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::NewMenu),
                WizardAction::Next,
            ],
        );
        assert!(state.is_final_step());
        assert_eq!(reduce(&state, WizardAction::Next), state);
    }

    #[test]
    fn test_custom_duration_coupling_through_reducer() {
        let d0 = today();
        let d1 = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::SetStartDate(d0),
                WizardAction::SetDuration(CampaignDuration::Custom),
                WizardAction::SetEndDate(d0 + chrono::Duration::days(10)),
                WizardAction::SetStartDate(d1),
            ],
        );
        assert_eq!(state.draft.end_date, Some(d1 + chrono::Duration::days(10)));

        // an end date before the start is ignored
        let rejected = reduce(&state, WizardAction::SetEndDate(d0));
        assert_eq!(rejected.draft.end_date, state.draft.end_date);
    }

    #[test]
    fn test_end_picked_before_start_never_precedes_it() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 9, day).unwrap();
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Noon),
                WizardAction::Next,
                WizardAction::SelectTemplate(TemplateId::Custom),
                WizardAction::Next,
                WizardAction::Patch(DraftPatch {
                    name: text("Autumn"),
                    objective: text("Orders"),
                    ..Default::default()
                }),
                WizardAction::SetDuration(CampaignDuration::Custom),
                WizardAction::SetEndDate(d(5)),
                WizardAction::SetStartDate(d(20)),
            ],
        );
        assert_eq!(state.current_kind(), WizardStep::Details);
        assert_eq!(state.draft.start_date, Some(d(20)));
        let end = state.draft.end_date.unwrap();
        assert!(end > d(20), "end {} not after start", end);
        assert!(state.draft.total_days().unwrap() > 0);
        assert!(state.can_go_next());
    }

    #[test]
    fn test_bid_is_clamped() {
        let state = reduce(&open(WizardVariant::Classic), WizardAction::SetBidPerClick(12.0));
        assert_eq!(state.draft.bid_per_click, 7.0);
        let state = reduce(&state, WizardAction::SetBidPerClick(2.5));
        assert_eq!(state.draft.bid_per_click, 2.5);
    }

    #[test]
    fn test_submission_payload() {
        let state = run(
            open(WizardVariant::Templated),
            vec![
                WizardAction::TogglePlatform(PlatformId::Talabat),
                WizardAction::TogglePlatform(PlatformId::Noon),
            ],
        );
        let submission = state.submission();
        assert_eq!(submission.platforms, vec![PlatformId::Noon, PlatformId::Talabat]);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["variant"], "templated");
        assert_eq!(json["platforms"][1], "Talabat");
    }

    #[test]
    fn test_step_index_stays_in_bounds() {
        let actions = |rng: &mut StdRng| -> WizardAction {
            match rng.gen_range(0..9) {
                0 => WizardAction::Next,
                1 => WizardAction::Back,
                2 => WizardAction::TogglePlatform(PlatformId::campaign_catalog()[rng.gen_range(0..3)]),
                3 => WizardAction::SelectTemplate(TemplateId::all()[rng.gen_range(0..3)]),
                4 => WizardAction::Patch(DraftPatch {
                    name: text("n"),
                    objective: text("o"),
                    budget: text(if rng.gen_bool(0.5) { "100" } else { "" }),
                    ..Default::default()
                }),
                5 => WizardAction::SetStartDate(today()),
                6 => WizardAction::Submit,
                7 => WizardAction::SetDuration(CampaignDuration::all()[rng.gen_range(0..6)]),
                _ => WizardAction::Next,
            }
        };

        for variant in [WizardVariant::Classic, WizardVariant::Templated] {
            for seed in 0..50u64 {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut state = open(variant);
                for _ in 0..200 {
                    let action = actions(&mut rng);
                    state = reduce(&state, action);
                    assert!(state.current_step >= 1);
                    assert!(state.current_step <= state.total_steps());
                }
            }
        }
    }
}
