//! Campaign creation wizard UI
//!
//! - view_model.rs: `CampaignWizardVm`, one `RwSignal<WizardState>` driven by `contracts` `reduce`
//! - view.rs: `CreateCampaignDrawer`, the drawer with step header and footer navigation
//! - step components render one step each and only emit actions

mod campaign_form;
mod campaign_preview;
mod campaign_summary;
mod platform_selector;
mod template_selector;
mod view;
mod view_model;

pub use campaign_preview::CampaignPreview;
pub use view::CreateCampaignDrawer;
pub use view_model::CampaignWizardVm;
