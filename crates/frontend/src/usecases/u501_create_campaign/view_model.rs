use chrono::NaiveDate;
use contracts::enums::PlatformSet;
use contracts::usecases::u501_create_campaign::{
    reduce, CampaignDraft, TemplateId, WizardAction, WizardState, WizardVariant,
};
use leptos::prelude::*;

/// ViewModel for the campaign wizard drawer
#[derive(Clone, Copy)]
pub struct CampaignWizardVm {
    pub state: RwSignal<WizardState>,
}

impl CampaignWizardVm {
    pub fn new(variant: WizardVariant, today: NaiveDate) -> Self {
        Self {
            state: RwSignal::new(WizardState::new(variant, today)),
        }
    }

    /// Replace the state with the reducer's result in one write.
    pub fn dispatch(&self, action: WizardAction) {
        log::debug!("wizard action: {:?}", action);
        self.state.update(|state| {
            let next = reduce(state, action);
            *state = next;
        });
    }

    pub fn actions(&self) -> Callback<WizardAction> {
        let vm = *self;
        Callback::new(move |action| vm.dispatch(action))
    }

    pub fn open(&self, today: NaiveDate) {
        self.dispatch(WizardAction::Open { today });
    }

    pub fn close(&self) {
        self.dispatch(WizardAction::Close);
    }

    /// Logs the submission and calls `on_done`; no-op while submit is not allowed.
    pub fn submit_command(&self, on_done: Callback<()>) {
        let current = self.state.get_untracked();
        if !current.can_submit() {
            log::debug!("submit blocked at step {}", current.current_step);
            return;
        }

        let submission = current.submission();
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("campaign submitted: {}", json),
            Err(e) => log::error!("failed to serialize campaign {}: {}", submission.id, e),
        }

        self.dispatch(WizardAction::Submit);
        on_done.run(());
    }

    /// Memoized so that subscribers only rerun when the selection itself changes.
    pub fn platforms(&self) -> Signal<PlatformSet> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.platforms.clone())).into()
    }

    pub fn draft(&self) -> Signal<CampaignDraft> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.draft.clone()))
    }

    pub fn selected_template(&self) -> Signal<Option<TemplateId>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_template))
    }

    /// "Create Campaign (x/y)"
    pub fn title(&self) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || {
            let (position, total) = state.with(|s| s.display_position());
            format!("Create Campaign ({}/{})", position, total)
        }
    }
}
