use super::wizard::WizardVariant;
use crate::enums::AreaSet;
use crate::shared::error::ParseError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ACCOUNT_OPTIONS: [&str; 3] = ["Account 1", "Account 2", "Account 3"];
pub const BRAND_OPTIONS: [&str; 3] = ["Brand 1", "Brand 2", "Brand 3"];
pub const OUTLET_OPTIONS: [&str; 3] = ["Outlet 1", "Outlet 2", "Outlet 3"];

pub const DEFAULT_BID_PER_CLICK: f64 = 3.0;
pub const CLASSIC_DEFAULT_BUDGET: &str = "1000";
/// Span seeded when switching a fixed duration to `Custom`.
pub const CUSTOM_SEED_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignDuration {
    OneDay,
    ThreeDays,
    SevenDays,
    FourteenDays,
    ThirtyDays,
    Custom,
}

impl CampaignDuration {
    pub fn all() -> Vec<CampaignDuration> {
        vec![
            CampaignDuration::OneDay,
            CampaignDuration::ThreeDays,
            CampaignDuration::SevenDays,
            CampaignDuration::FourteenDays,
            CampaignDuration::ThirtyDays,
            CampaignDuration::Custom,
        ]
    }

    /// Number of days for fixed durations, `None` for `Custom`.
    pub fn days(&self) -> Option<u32> {
        match self {
            CampaignDuration::OneDay => Some(1),
            CampaignDuration::ThreeDays => Some(3),
            CampaignDuration::SevenDays => Some(7),
            CampaignDuration::FourteenDays => Some(14),
            CampaignDuration::ThirtyDays => Some(30),
            CampaignDuration::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CampaignDuration::Custom)
    }

    /// Value used in the `<select>`.
    pub fn code(&self) -> String {
        match self.days() {
            Some(days) => days.to_string(),
            None => "custom".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self.days() {
            Some(1) => "1 day".to_string(),
            Some(days) => format!("{} days", days),
            None => "Custom".to_string(),
        }
    }
}

impl fmt::Display for CampaignDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for CampaignDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CampaignDuration::all()
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::Duration(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Audience flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudienceFlag {
    AllCustomers,
    NewCustomers,
    LapsedCustomers,
    DeliverooPlus,
    NoonPrime,
}

impl AudienceFlag {
    pub fn code(&self) -> &'static str {
        match self {
            AudienceFlag::AllCustomers => "all-customers",
            AudienceFlag::NewCustomers => "new-customers",
            AudienceFlag::LapsedCustomers => "lapsed-customers",
            AudienceFlag::DeliverooPlus => "deliveroo-plus",
            AudienceFlag::NoonPrime => "noon-prime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AudienceFlag::AllCustomers => "All Customers",
            AudienceFlag::NewCustomers => "New Customers",
            AudienceFlag::LapsedCustomers => "Lapsed Customers",
            AudienceFlag::DeliverooPlus => "Deliveroo Plus Customers",
            AudienceFlag::NoonPrime => "Noon Prime Customers",
        }
    }

    pub fn all() -> Vec<AudienceFlag> {
        vec![
            AudienceFlag::AllCustomers,
            AudienceFlag::NewCustomers,
            AudienceFlag::LapsedCustomers,
            AudienceFlag::DeliverooPlus,
            AudienceFlag::NoonPrime,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceFlags {
    pub all_customers: bool,
    pub new_customers: bool,
    pub lapsed_customers: bool,
    pub deliveroo_plus: bool,
    pub noon_prime: bool,
}

impl AudienceFlags {
    pub fn get(&self, flag: AudienceFlag) -> bool {
        match flag {
            AudienceFlag::AllCustomers => self.all_customers,
            AudienceFlag::NewCustomers => self.new_customers,
            AudienceFlag::LapsedCustomers => self.lapsed_customers,
            AudienceFlag::DeliverooPlus => self.deliveroo_plus,
            AudienceFlag::NoonPrime => self.noon_prime,
        }
    }

    pub fn with(mut self, flag: AudienceFlag, value: bool) -> Self {
        match flag {
            AudienceFlag::AllCustomers => self.all_customers = value,
            AudienceFlag::NewCustomers => self.new_customers = value,
            AudienceFlag::LapsedCustomers => self.lapsed_customers = value,
            AudienceFlag::DeliverooPlus => self.deliveroo_plus = value,
            AudienceFlag::NoonPrime => self.noon_prime = value,
        }
        self
    }

    /// Flags that are switched on, in declaration order.
    pub fn enabled(&self) -> Vec<AudienceFlag> {
        AudienceFlag::all()
            .into_iter()
            .filter(|f| self.get(*f))
            .collect()
    }

    /// Field-wise merge: only flags present in the patch change.
    pub fn merged(&self, patch: &AudiencePatch) -> Self {
        Self {
            all_customers: patch.all_customers.unwrap_or(self.all_customers),
            new_customers: patch.new_customers.unwrap_or(self.new_customers),
            lapsed_customers: patch.lapsed_customers.unwrap_or(self.lapsed_customers),
            deliveroo_plus: patch.deliveroo_plus.unwrap_or(self.deliveroo_plus),
            noon_prime: patch.noon_prime.unwrap_or(self.noon_prime),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudiencePatch {
    pub all_customers: Option<bool>,
    pub new_customers: Option<bool>,
    pub lapsed_customers: Option<bool>,
    pub deliveroo_plus: Option<bool>,
    pub noon_prime: Option<bool>,
}

impl AudiencePatch {
    pub fn single(flag: AudienceFlag, value: bool) -> Self {
        let mut patch = Self::default();
        match flag {
            AudienceFlag::AllCustomers => patch.all_customers = Some(value),
            AudienceFlag::NewCustomers => patch.new_customers = Some(value),
            AudienceFlag::LapsedCustomers => patch.lapsed_customers = Some(value),
            AudienceFlag::DeliverooPlus => patch.deliveroo_plus = Some(value),
            AudienceFlag::NoonPrime => patch.noon_prime = Some(value),
        }
        patch
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// In-progress campaign record owned by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub objective: String,
    pub target_audience: String,
    pub description: String,
    /// Decimal string as typed; see `validation::parse_budget`.
    pub budget: String,
    pub bid_per_click: f64,
    pub duration: CampaignDuration,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub account: String,
    pub brand: String,
    pub outlet: String,
    pub audience: AudienceFlags,
    pub target_areas: AreaSet,
}

/// Partial update emitted by step components. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub objective: Option<String>,
    pub target_audience: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub account: Option<String>,
    pub brand: Option<String>,
    pub outlet: Option<String>,
    pub audience: Option<AudiencePatch>,
    pub target_areas: Option<AreaSet>,
}

impl CampaignDraft {
    pub fn defaults(variant: WizardVariant, today: NaiveDate) -> Self {
        let duration = CampaignDuration::SevenDays;
        let (budget, start_date) = match variant {
            WizardVariant::Classic => (CLASSIC_DEFAULT_BUDGET.to_string(), Some(today)),
            WizardVariant::Templated => (String::new(), None),
        };
        Self {
            name: String::new(),
            objective: String::new(),
            target_audience: String::new(),
            description: String::new(),
            budget,
            bid_per_click: DEFAULT_BID_PER_CLICK,
            duration,
            start_date,
            end_date: start_date.and_then(|d| add_days(d, duration_days(duration))),
            account: String::new(),
            brand: String::new(),
            outlet: String::new(),
            audience: AudienceFlags::default(),
            target_areas: AreaSet::new(),
        }
    }

    /// Shallow merge of top-level fields, nested merge for audience flags.
    pub fn merged(&self, patch: &DraftPatch) -> Self {
        let pick = |new: &Option<String>, old: &String| new.clone().unwrap_or_else(|| old.clone());
        Self {
            name: pick(&patch.name, &self.name),
            objective: pick(&patch.objective, &self.objective),
            target_audience: pick(&patch.target_audience, &self.target_audience),
            description: pick(&patch.description, &self.description),
            budget: pick(&patch.budget, &self.budget),
            account: pick(&patch.account, &self.account),
            brand: pick(&patch.brand, &self.brand),
            outlet: pick(&patch.outlet, &self.outlet),
            audience: match &patch.audience {
                Some(audience) => self.audience.merged(audience),
                None => self.audience,
            },
            target_areas: patch
                .target_areas
                .clone()
                .unwrap_or_else(|| self.target_areas.clone()),
            ..self.clone()
        }
    }

    /// Move the start date, keeping the end date consistent with the duration.
    pub fn with_start_date(&self, start: NaiveDate) -> Self {
        let end_date = if self.duration.is_custom() {
            match (self.start_date, self.end_date) {
                (Some(old_start), Some(old_end)) => add_days(start, (old_end - old_start).num_days()),
                // no previous span to preserve; an end picked before any start must still follow it
                (None, Some(end)) if end > start => Some(end),
                (None, Some(_)) => add_days(start, CUSTOM_SEED_DAYS),
                (_, None) => None,
            }
        } else {
            add_days(start, duration_days(self.duration))
        };
        Self {
            start_date: Some(start),
            end_date,
            ..self.clone()
        }
    }

    pub fn with_duration(&self, duration: CampaignDuration) -> Self {
        let end_date = match (duration, self.start_date) {
            (CampaignDuration::Custom, _) if self.duration.is_custom() => self.end_date,
            (CampaignDuration::Custom, Some(start)) => add_days(start, CUSTOM_SEED_DAYS),
            (fixed, Some(start)) => add_days(start, duration_days(fixed)),
            (_, None) => self.end_date,
        };
        Self {
            duration,
            end_date,
            ..self.clone()
        }
    }

    /// Returns `None` when `end` is not strictly after the start date.
    pub fn with_end_date(&self, end: NaiveDate) -> Option<Self> {
        if let Some(start) = self.start_date {
            if end <= start {
                return None;
            }
        }
        Some(Self {
            end_date: Some(end),
            ..self.clone()
        })
    }

    /// End date as shown on the review step.
    pub fn effective_end_date(&self) -> Option<NaiveDate> {
        match self.duration.days() {
            Some(days) => self.start_date.and_then(|s| add_days(s, days as i64)),
            None => self.end_date,
        }
    }

    pub fn total_days(&self) -> Option<i64> {
        match (self.start_date, self.effective_end_date()) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

fn duration_days(duration: CampaignDuration) -> i64 {
    duration.days().map(i64::from).unwrap_or(CUSTOM_SEED_DAYS)
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_defaults_per_variant() {
        let today = d(2024, 3, 1);
        let classic = CampaignDraft::defaults(WizardVariant::Classic, today);
        assert_eq!(classic.budget, "1000");
        assert_eq!(classic.start_date, Some(today));
        assert_eq!(classic.end_date, Some(d(2024, 3, 8)));
        assert_eq!(classic.bid_per_click, 3.0);

        let templated = CampaignDraft::defaults(WizardVariant::Templated, today);
        assert_eq!(templated.budget, "");
        assert_eq!(templated.start_date, None);
        assert_eq!(templated.end_date, None);
        assert_eq!(templated.duration, CampaignDuration::SevenDays);
    }

    #[test]
    fn test_custom_span_follows_start_date() {
        let d0 = d(2024, 5, 1);
        let draft = CampaignDraft {
            duration: CampaignDuration::Custom,
            start_date: Some(d0),
            end_date: Some(d(2024, 5, 11)),
            ..CampaignDraft::defaults(WizardVariant::Templated, d0)
        };
        let moved = draft.with_start_date(d(2024, 6, 20));
        assert_eq!(moved.start_date, Some(d(2024, 6, 20)));
        assert_eq!(moved.end_date, Some(d(2024, 6, 30)));
    }

    #[test]
    fn test_custom_without_end_keeps_none() {
        let draft = CampaignDraft {
            duration: CampaignDuration::Custom,
            ..CampaignDraft::defaults(WizardVariant::Templated, d(2024, 1, 1))
        };
        let moved = draft.with_start_date(d(2024, 2, 1));
        assert_eq!(moved.end_date, None);
    }

    #[test]
    fn test_custom_end_without_start_is_reseeded_when_start_passes_it() {
        let draft = CampaignDraft {
            duration: CampaignDuration::Custom,
            end_date: Some(d(2024, 9, 5)),
            ..CampaignDraft::defaults(WizardVariant::Templated, d(2024, 9, 1))
        };
        let moved = draft.with_start_date(d(2024, 9, 20));
        assert_eq!(moved.end_date, Some(d(2024, 10, 20)));

        // an end still after the new start is kept
        let kept = draft.with_start_date(d(2024, 9, 2));
        assert_eq!(kept.end_date, Some(d(2024, 9, 5)));
    }

    #[test]
    fn test_fixed_duration_derives_end() {
        let draft = CampaignDraft::defaults(WizardVariant::Templated, d(2024, 1, 1))
            .with_start_date(d(2024, 1, 10));
        assert_eq!(draft.end_date, Some(d(2024, 1, 17)));
        let longer = draft.with_duration(CampaignDuration::FourteenDays);
        assert_eq!(longer.end_date, Some(d(2024, 1, 24)));
    }

    #[test]
    fn test_switch_to_custom_seeds_thirty_days() {
        let draft = CampaignDraft::defaults(WizardVariant::Classic, d(2024, 1, 1))
            .with_duration(CampaignDuration::Custom);
        assert_eq!(draft.end_date, Some(d(2024, 1, 31)));
        assert_eq!(draft.total_days(), Some(30));
    }

    #[test]
    fn test_end_date_must_follow_start() {
        let draft = CampaignDraft::defaults(WizardVariant::Classic, d(2024, 1, 1))
            .with_duration(CampaignDuration::Custom);
        assert!(draft.with_end_date(d(2024, 1, 1)).is_none());
        assert!(draft.with_end_date(d(2023, 12, 31)).is_none());
        let ok = draft.with_end_date(d(2024, 1, 2)).unwrap();
        assert_eq!(ok.end_date, Some(d(2024, 1, 2)));
    }

    #[test]
    fn test_audience_patch_keeps_siblings() {
        let draft = CampaignDraft::defaults(WizardVariant::Classic, d(2024, 1, 1));
        let first = draft.merged(&DraftPatch {
            audience: Some(AudiencePatch::single(AudienceFlag::NewCustomers, true)),
            ..Default::default()
        });
        let second = first.merged(&DraftPatch {
            audience: Some(AudiencePatch::single(AudienceFlag::NoonPrime, true)),
            ..Default::default()
        });
        assert!(second.audience.new_customers);
        assert!(second.audience.noon_prime);
        assert!(!second.audience.all_customers);
        assert_eq!(
            second.audience.enabled(),
            vec![AudienceFlag::NewCustomers, AudienceFlag::NoonPrime]
        );
    }

    #[test]
    fn test_patch_is_shallow() {
        let draft = CampaignDraft::defaults(WizardVariant::Classic, d(2024, 1, 1));
        let patched = draft.merged(&DraftPatch {
            brand: Some("Brand 2".to_string()),
            ..Default::default()
        });
        assert_eq!(patched.brand, "Brand 2");
        assert_eq!(patched.budget, draft.budget);
        assert_eq!(patched.start_date, draft.start_date);
    }

    #[test]
    fn test_duration_codes() {
        assert_eq!("14".parse::<CampaignDuration>(), Ok(CampaignDuration::FourteenDays));
        assert_eq!("custom".parse::<CampaignDuration>(), Ok(CampaignDuration::Custom));
        assert!("5".parse::<CampaignDuration>().is_err());
        assert_eq!(CampaignDuration::OneDay.label(), "1 day");
        assert_eq!(CampaignDuration::ThirtyDays.label(), "30 days");
    }
}
