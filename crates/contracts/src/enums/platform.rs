use crate::shared::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Платформы доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlatformId {
    Noon,
    Talabat,
    Deliveroo,
    Careem,
}

/// Selected platforms. Ordered so that rendering follows catalog order.
pub type PlatformSet = BTreeSet<PlatformId>;

impl PlatformId {
    /// Получить код платформы
    pub fn code(&self) -> &'static str {
        match self {
            PlatformId::Noon => "noon",
            PlatformId::Talabat => "talabat",
            PlatformId::Deliveroo => "deliveroo",
            PlatformId::Careem => "careem",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformId::Noon => "Noon",
            PlatformId::Talabat => "Talabat",
            PlatformId::Deliveroo => "Deliveroo",
            PlatformId::Careem => "Careem",
        }
    }

    /// Short blurb shown on the platform selection card.
    pub fn description(&self) -> &'static str {
        match self {
            PlatformId::Noon => "Standard campaign with bid and budget settings",
            PlatformId::Talabat => "Includes target audience and area selections",
            PlatformId::Deliveroo => "Includes customer segmentation options",
            PlatformId::Careem => "Operations reporting only",
        }
    }

    /// Single-letter logo used where no artwork is available.
    pub fn initial(&self) -> char {
        match self {
            PlatformId::Noon => 'N',
            PlatformId::Talabat => 'T',
            PlatformId::Deliveroo => 'D',
            PlatformId::Careem => 'C',
        }
    }

    /// Platforms a campaign can be created on.
    pub fn campaign_catalog() -> Vec<PlatformId> {
        vec![PlatformId::Noon, PlatformId::Talabat, PlatformId::Deliveroo]
    }

    /// Получить все платформы
    pub fn all() -> Vec<PlatformId> {
        vec![
            PlatformId::Noon,
            PlatformId::Talabat,
            PlatformId::Deliveroo,
            PlatformId::Careem,
        ]
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlatformId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PlatformId::all()
            .into_iter()
            .find(|p| {
                p.code().eq_ignore_ascii_case(needle) || p.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::Platform(s.to_string()))
    }
}

/// Returns a new set with `platform` added if absent, removed if present.
pub fn toggle_platform(current: &PlatformSet, platform: PlatformId) -> PlatformSet {
    let mut next = current.clone();
    if !next.remove(&platform) {
        next.insert(platform);
    }
    next
}

/// "Select all" checkbox: clears a full selection, otherwise selects the whole catalog.
pub fn select_all_platforms(current: &PlatformSet) -> PlatformSet {
    let catalog: PlatformSet = PlatformId::campaign_catalog().into_iter().collect();
    if *current == catalog {
        PlatformSet::new()
    } else {
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[PlatformId]) -> PlatformSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let start = set(&[PlatformId::Noon]);
        for platform in PlatformId::campaign_catalog() {
            let once = toggle_platform(&start, platform);
            assert_ne!(once, start);
            assert_eq!(toggle_platform(&once, platform), start);
        }
    }

    #[test]
    fn test_toggle_does_not_touch_input() {
        let start = set(&[PlatformId::Talabat]);
        let _ = toggle_platform(&start, PlatformId::Talabat);
        assert_eq!(start, set(&[PlatformId::Talabat]));
    }

    #[test]
    fn test_select_all_from_full_clears() {
        let full = set(&[PlatformId::Noon, PlatformId::Talabat, PlatformId::Deliveroo]);
        assert!(select_all_platforms(&full).is_empty());
    }

    #[test]
    fn test_select_all_from_partial_fills_catalog() {
        let full = set(&[PlatformId::Noon, PlatformId::Talabat, PlatformId::Deliveroo]);
        assert_eq!(select_all_platforms(&PlatformSet::new()), full);
        assert_eq!(select_all_platforms(&set(&[PlatformId::Deliveroo])), full);
        // Careem is outside the campaign catalog, so this is not "full"
        assert_eq!(select_all_platforms(&set(&[PlatformId::Careem])), full);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("talabat".parse::<PlatformId>(), Ok(PlatformId::Talabat));
        assert_eq!("Deliveroo".parse::<PlatformId>(), Ok(PlatformId::Deliveroo));
        assert_eq!(" NOON ".parse::<PlatformId>(), Ok(PlatformId::Noon));
        assert!("uber".parse::<PlatformId>().is_err());
    }
}
