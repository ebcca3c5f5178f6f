use super::draft::DraftPatch;
use crate::shared::error::ParseError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateId {
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "new-menu")]
    NewMenu,
    #[serde(rename = "promo-deal")]
    PromoDeal,
}

impl TemplateId {
    pub fn code(&self) -> &'static str {
        match self {
            TemplateId::Custom => "custom",
            TemplateId::NewMenu => "new-menu",
            TemplateId::PromoDeal => "promo-deal",
        }
    }

    pub fn all() -> Vec<TemplateId> {
        vec![TemplateId::Custom, TemplateId::NewMenu, TemplateId::PromoDeal]
    }

    /// Any preset other than "start from scratch" replaces manual entry.
    pub fn skips_details(&self) -> bool {
        !matches!(self, TemplateId::Custom)
    }

    pub fn template(&self) -> &'static CampaignTemplate {
        TEMPLATES
            .iter()
            .find(|t| t.id == *self)
            .unwrap_or(&TEMPLATES[0])
    }
}

impl FromStr for TemplateId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::all()
            .into_iter()
            .find(|t| t.code() == s.trim())
            .ok_or_else(|| ParseError::Template(s.to_string()))
    }
}

/// Field bundle applied to the draft when the template is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePresets {
    pub name: String,
    pub budget: String,
    pub objective: String,
    pub target_audience: String,
    pub description: String,
}

impl TemplatePresets {
    pub fn as_patch(&self) -> DraftPatch {
        DraftPatch {
            name: Some(self.name.clone()),
            budget: Some(self.budget.clone()),
            objective: Some(self.objective.clone()),
            target_audience: Some(self.target_audience.clone()),
            description: Some(self.description.clone()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    /// Icon name understood by the frontend `icon()` helper.
    pub icon: String,
    pub presets: TemplatePresets,
}

fn template(
    id: TemplateId,
    name: &str,
    description: &str,
    icon: &str,
    presets: [&str; 5],
) -> CampaignTemplate {
    let [p_name, budget, objective, target_audience, p_description] = presets;
    CampaignTemplate {
        id,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        presets: TemplatePresets {
            name: p_name.to_string(),
            budget: budget.to_string(),
            objective: objective.to_string(),
            target_audience: target_audience.to_string(),
            description: p_description.to_string(),
        },
    }
}

/// Template catalog in display order. `Custom` must stay first.
pub static TEMPLATES: Lazy<Vec<CampaignTemplate>> = Lazy::new(|| {
    vec![
        template(
            TemplateId::Custom,
            "Start from scratch",
            "Create your own custom campaign with full control",
            "file-plus",
            ["", "", "", "", ""],
        ),
        template(
            TemplateId::NewMenu,
            "New Menu Launch",
            "Promote your new menu items to existing customers",
            "file-check",
            [
                "New Menu Launch",
                "5000",
                "Increase orders of new menu items",
                "Existing customers",
                "Campaign to highlight our delicious new menu items and drive repeat orders.",
            ],
        ),
        template(
            TemplateId::PromoDeal,
            "Promotional Deal",
            "Limited time offer with special discounts",
            "file-code",
            [
                "Special Promotion",
                "3000",
                "Drive sales through limited-time offers",
                "Price-sensitive customers",
                "Limited-time promotion with special discounts to increase order volume.",
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_ids() {
        for id in TemplateId::all() {
            assert_eq!(id.template().id, id);
        }
        assert_eq!(TEMPLATES[0].id, TemplateId::Custom);
    }

    #[test]
    fn test_custom_presets_are_empty() {
        let presets = &TemplateId::Custom.template().presets;
        assert!(presets.name.is_empty());
        assert!(presets.budget.is_empty());
        assert!(!TemplateId::Custom.skips_details());
    }

    #[test]
    fn test_promo_preset_patch() {
        let patch = TemplateId::PromoDeal.template().presets.as_patch();
        assert_eq!(patch.name.as_deref(), Some("Special Promotion"));
        assert_eq!(patch.budget.as_deref(), Some("3000"));
        assert_eq!(patch.account, None);
        assert!(TemplateId::PromoDeal.skips_details());
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        assert_eq!("new-menu".parse::<TemplateId>(), Ok(TemplateId::NewMenu));
        assert!("seasonal".parse::<TemplateId>().is_err());
    }
}
