pub mod draft;
pub mod form_fields;
pub mod preview;
pub mod template;
pub mod validation;
pub mod wizard;

pub use draft::{AudienceFlag, AudienceFlags, CampaignDraft, CampaignDuration, DraftPatch};
pub use template::{CampaignTemplate, TemplateId, TEMPLATES};
pub use wizard::{reduce, CampaignSubmission, WizardAction, WizardState, WizardStep, WizardVariant};
