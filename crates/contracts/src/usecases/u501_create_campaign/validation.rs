use super::draft::CampaignDraft;
use super::template::TemplateId;
use super::wizard::WizardVariant;
use crate::enums::PlatformSet;

/// Budget as a positive finite number, `None` for anything else.
pub fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Details-step budget rule: an empty budget passes, anything typed must parse.
pub fn budget_gate_ok(raw: &str) -> bool {
    raw.trim().is_empty() || parse_budget(raw).is_some()
}

pub fn platforms_step_valid(platforms: &PlatformSet) -> bool {
    !platforms.is_empty()
}

pub fn template_step_valid(template: Option<TemplateId>) -> bool {
    template.is_some()
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn details_step_valid(variant: WizardVariant, draft: &CampaignDraft) -> bool {
    let required = match variant {
        WizardVariant::Templated => {
            filled(&draft.name)
                && draft.start_date.is_some()
                && draft.end_date.is_some()
                && filled(&draft.objective)
        }
        WizardVariant::Classic => {
            filled(&draft.account) && filled(&draft.brand) && filled(&draft.outlet)
        }
    };
    required && custom_span_ok(draft) && budget_gate_ok(&draft.budget)
}

/// A custom end date, when both dates are set, must be strictly after the start.
fn custom_span_ok(draft: &CampaignDraft) -> bool {
    if !draft.duration.is_custom() {
        return true;
    }
    match (draft.start_date, draft.end_date) {
        (Some(start), Some(end)) => end > start,
        _ => true,
    }
}

/// Final submission needs a real budget; the details gate alone tolerates an empty one.
pub fn can_submit(draft: &CampaignDraft) -> bool {
    parse_budget(&draft.budget).is_some()
}
