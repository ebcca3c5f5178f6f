use super::draft::AudienceFlag;
use crate::enums::{PlatformId, PlatformSet};

pub const BID_MIN: f64 = 0.0;
pub const BID_MAX: f64 = 7.0;
pub const BID_STEP: f64 = 0.1;
/// Band highlighted on the bid slider as "Commonly Used".
pub const BID_COMMON_RANGE: (f64, f64) = (2.0, 4.0);

/// Budget input hints. Not enforced beyond "> 0 and parseable".
pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_STEP: u32 = 100;

/// Audience flags offered per platform, in display order.
pub const PLATFORM_AUDIENCE_FLAGS: &[(PlatformId, &[AudienceFlag])] = &[
    (
        PlatformId::Noon,
        &[AudienceFlag::AllCustomers, AudienceFlag::NoonPrime],
    ),
    (
        PlatformId::Talabat,
        &[AudienceFlag::AllCustomers, AudienceFlag::NewCustomers],
    ),
    (
        PlatformId::Deliveroo,
        &[
            AudienceFlag::NewCustomers,
            AudienceFlag::LapsedCustomers,
            AudienceFlag::DeliverooPlus,
        ],
    ),
];

/// Platforms whose section includes the area multi-select.
const AREA_TARGETING: &[PlatformId] = &[PlatformId::Talabat];

/// One "<Platform> Options" block of the details form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSection {
    pub platform: PlatformId,
    pub audience_flags: Vec<AudienceFlag>,
    pub shows_areas: bool,
}

pub fn audience_flags_for(platform: PlatformId) -> &'static [AudienceFlag] {
    PLATFORM_AUDIENCE_FLAGS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, flags)| *flags)
        .unwrap_or(&[])
}

/// Sections to render for the selected platforms. Platforms without extra fields are skipped.
pub fn platform_sections(platforms: &PlatformSet) -> Vec<PlatformSection> {
    platforms
        .iter()
        .map(|p| PlatformSection {
            platform: *p,
            audience_flags: audience_flags_for(*p).to_vec(),
            shows_areas: AREA_TARGETING.contains(p),
        })
        .filter(|s| !s.audience_flags.is_empty() || s.shows_areas)
        .collect()
}

/// Union of audience flags across the selection, first occurrence wins the position.
pub fn visible_audience_flags(platforms: &PlatformSet) -> Vec<AudienceFlag> {
    let mut flags: Vec<AudienceFlag> = Vec::new();
    for platform in platforms {
        for flag in audience_flags_for(*platform) {
            if !flags.contains(flag) {
                flags.push(*flag);
            }
        }
    }
    flags
}

pub fn shows_area_selector(platforms: &PlatformSet) -> bool {
    platforms.iter().any(|p| AREA_TARGETING.contains(p))
}

/// Clamp to slider bounds and snap to the slider step.
pub fn normalize_bid(value: f64) -> f64 {
    if !value.is_finite() {
        return BID_MIN;
    }
    let snapped = (value / BID_STEP).round() * BID_STEP;
    // one decimal is enough; avoids 2.9000000000000004
    ((snapped * 10.0).round() / 10.0).clamp(BID_MIN, BID_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[PlatformId]) -> PlatformSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_talabat_fields() {
        let platforms = set(&[PlatformId::Talabat]);
        assert_eq!(
            visible_audience_flags(&platforms),
            vec![AudienceFlag::AllCustomers, AudienceFlag::NewCustomers]
        );
        assert!(shows_area_selector(&platforms));
    }

    #[test]
    fn test_deliveroo_fields() {
        let platforms = set(&[PlatformId::Deliveroo]);
        assert_eq!(
            visible_audience_flags(&platforms),
            vec![
                AudienceFlag::NewCustomers,
                AudienceFlag::LapsedCustomers,
                AudienceFlag::DeliverooPlus
            ]
        );
        assert!(!shows_area_selector(&platforms));
    }

    #[test]
    fn test_union_is_deduplicated() {
        let platforms = set(&[PlatformId::Noon, PlatformId::Talabat, PlatformId::Deliveroo]);
        let flags = visible_audience_flags(&platforms);
        assert_eq!(flags.len(), 5);
        assert_eq!(flags[0], AudienceFlag::AllCustomers);
        assert_eq!(flags[1], AudienceFlag::NoonPrime);
    }

    #[test]
    fn test_sections_skip_platforms_without_fields() {
        let sections = platform_sections(&set(&[PlatformId::Careem, PlatformId::Talabat]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].platform, PlatformId::Talabat);
        assert!(sections[0].shows_areas);
        assert!(platform_sections(&PlatformSet::new()).is_empty());
    }

    #[test]
    fn test_normalize_bid() {
        assert_eq!(normalize_bid(-1.0), 0.0);
        assert_eq!(normalize_bid(9.5), 7.0);
        assert_eq!(normalize_bid(2.94), 2.9);
        assert_eq!(normalize_bid(f64::NAN), 0.0);
    }
}
