use crate::shared::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Delivery areas available for Talabat area targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AreaId {
    DubaiMarina,
    DowntownDubai,
    Jbr,
    BusinessBay,
    Jumeirah,
    PalmJumeirah,
    Jlt,
    Difc,
}

pub type AreaSet = BTreeSet<AreaId>;

impl AreaId {
    pub fn code(&self) -> &'static str {
        match self {
            AreaId::DubaiMarina => "dubai-marina",
            AreaId::DowntownDubai => "downtown-dubai",
            AreaId::Jbr => "jbr",
            AreaId::BusinessBay => "business-bay",
            AreaId::Jumeirah => "jumeirah",
            AreaId::PalmJumeirah => "palm-jumeirah",
            AreaId::Jlt => "jlt",
            AreaId::Difc => "difc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AreaId::DubaiMarina => "Dubai Marina",
            AreaId::DowntownDubai => "Downtown Dubai",
            AreaId::Jbr => "JBR",
            AreaId::BusinessBay => "Business Bay",
            AreaId::Jumeirah => "Jumeirah",
            AreaId::PalmJumeirah => "Palm Jumeirah",
            AreaId::Jlt => "JLT",
            AreaId::Difc => "DIFC",
        }
    }

    pub fn all() -> Vec<AreaId> {
        vec![
            AreaId::DubaiMarina,
            AreaId::DowntownDubai,
            AreaId::Jbr,
            AreaId::BusinessBay,
            AreaId::Jumeirah,
            AreaId::PalmJumeirah,
            AreaId::Jlt,
            AreaId::Difc,
        ]
    }

    /// Areas plotted on the sales-by-area preview chart (first six of the catalog).
    pub fn preview_areas() -> Vec<AreaId> {
        Self::all().into_iter().take(6).collect()
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AreaId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AreaId::all()
            .into_iter()
            .find(|a| {
                a.code().eq_ignore_ascii_case(needle) || a.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::Area(s.to_string()))
    }
}

/// Same toggle semantics as platforms: add if absent, remove if present.
pub fn toggle_area(current: &AreaSet, area: AreaId) -> AreaSet {
    let mut next = current.clone();
    if !next.remove(&area) {
        next.insert(area);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_area() {
        let empty = AreaSet::new();
        let one = toggle_area(&empty, AreaId::Jbr);
        assert!(one.contains(&AreaId::Jbr));
        let two = toggle_area(&one, AreaId::Difc);
        assert_eq!(two.len(), 2);
        assert_eq!(toggle_area(&two, AreaId::Jbr), [AreaId::Difc].into_iter().collect());
    }

    #[test]
    fn test_preview_areas() {
        let areas = AreaId::preview_areas();
        assert_eq!(areas.len(), 6);
        assert_eq!(areas.first(), Some(&AreaId::DubaiMarina));
        assert_eq!(areas.last(), Some(&AreaId::PalmJumeirah));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Palm Jumeirah".parse::<AreaId>(), Ok(AreaId::PalmJumeirah));
        assert_eq!("difc".parse::<AreaId>(), Ok(AreaId::Difc));
        assert!("Sharjah".parse::<AreaId>().is_err());
    }
}
