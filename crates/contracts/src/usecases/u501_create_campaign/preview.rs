//! Mock performance data for the campaign preview panel.
//!
//! Generation and display are separate: filters only change how cells are
//! drawn and never touch the generated values.

use crate::enums::{AreaId, PlatformId, PlatformSet};
use crate::shared::error::ParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

pub const HOURS: usize = 24;
pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const HEAT_HIGH_MIN: u32 = 70;
pub const HEAT_MEDIUM_MIN: u32 = 40;
pub const AREA_HIGH_ABOVE: u32 = 3000;
pub const AREA_MEDIUM_MIN: u32 = 2000;

/// Traffic range for an hour of the day: lunch and dinner peaks, quiet nights.
pub fn hour_value_range(hour: usize) -> Range<u32> {
    match hour {
        11..=14 => 50..100,
        18..=21 => 70..150,
        7..=9 => 20..50,
        1..=5 => 0..10,
        _ => 10..50,
    }
}

pub fn hour_label(hour: usize) -> String {
    format!("{:02}:00", hour)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub day: String,
    pub values: [u32; HOURS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    pub rows: Vec<HeatmapRow>,
}

impl HeatmapGrid {
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flat_map(|r| r.values.iter().copied())
    }
}

pub fn generate_heatmap<R: Rng>(rng: &mut R) -> HeatmapGrid {
    let rows = DAYS
        .iter()
        .map(|day| {
            let mut values = [0u32; HOURS];
            for (hour, value) in values.iter_mut().enumerate() {
                *value = rng.gen_range(hour_value_range(hour));
            }
            HeatmapRow {
                day: day.to_string(),
                values,
            }
        })
        .collect();
    HeatmapGrid { rows }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSales {
    pub area: AreaId,
    pub sales: u32,
}

pub fn generate_area_sales<R: Rng>(rng: &mut R) -> Vec<AreaSales> {
    AreaId::preview_areas()
        .into_iter()
        .map(|area| AreaSales {
            area,
            sales: rng.gen_range(1000..6000),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewData {
    pub heatmap: HeatmapGrid,
    /// Present only when Talabat is selected.
    pub area_sales: Option<Vec<AreaSales>>,
}

impl PreviewData {
    pub fn generate<R: Rng>(platforms: &PlatformSet, rng: &mut R) -> Self {
        let heatmap = generate_heatmap(rng);
        let area_sales = platforms
            .contains(&PlatformId::Talabat)
            .then(|| generate_area_sales(rng));
        Self {
            heatmap,
            area_sales,
        }
    }
}

// ---------------------------------------------------------------------------
// Display filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficFilter {
    All,
    High,
    Medium,
    Low,
}

impl TrafficFilter {
    pub fn all() -> Vec<TrafficFilter> {
        vec![
            TrafficFilter::All,
            TrafficFilter::High,
            TrafficFilter::Medium,
            TrafficFilter::Low,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            TrafficFilter::All => "all",
            TrafficFilter::High => "high",
            TrafficFilter::Medium => "medium",
            TrafficFilter::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficFilter::All => "All",
            TrafficFilter::High => "High",
            TrafficFilter::Medium => "Medium",
            TrafficFilter::Low => "Low",
        }
    }

    /// Heat-map cell thresholds: high >= 70, medium 40..70, low < 40.
    pub fn matches_cell(&self, value: u32) -> bool {
        match self {
            TrafficFilter::All => true,
            TrafficFilter::High => value >= HEAT_HIGH_MIN,
            TrafficFilter::Medium => (HEAT_MEDIUM_MIN..HEAT_HIGH_MIN).contains(&value),
            TrafficFilter::Low => value < HEAT_MEDIUM_MIN,
        }
    }

    /// Area bar thresholds: high > 3000, medium 2000..=3000, low < 2000.
    pub fn matches_area(&self, sales: u32) -> bool {
        match self {
            TrafficFilter::All => true,
            TrafficFilter::High => sales > AREA_HIGH_ABOVE,
            TrafficFilter::Medium => (AREA_MEDIUM_MIN..=AREA_HIGH_ABOVE).contains(&sales),
            TrafficFilter::Low => sales < AREA_MEDIUM_MIN,
        }
    }
}

impl FromStr for TrafficFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TrafficFilter::all()
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::Filter(s.to_string()))
    }
}

/// Colour bucket of a heat-map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    Peak,
    High,
    Medium,
    MediumLow,
    Low,
}

impl HeatLevel {
    pub fn color(&self) -> &'static str {
        match self {
            HeatLevel::Peak => "#ef4444",
            HeatLevel::High => "#f97316",
            HeatLevel::Medium => "#eab308",
            HeatLevel::MediumLow => "#84cc16",
            HeatLevel::Low => "#22c55e",
        }
    }
}

pub fn heat_level(value: u32) -> HeatLevel {
    match value {
        100..=u32::MAX => HeatLevel::Peak,
        70..=99 => HeatLevel::High,
        40..=69 => HeatLevel::Medium,
        20..=39 => HeatLevel::MediumLow,
        _ => HeatLevel::Low,
    }
}

/// Cell opacity grows with traffic; 150 is the top of the dinner range.
pub fn heat_opacity(value: u32) -> f64 {
    (0.1 + (value as f64 / 150.0) * 0.9).min(1.0)
}

/// Preview panel sections (richer preview variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTab {
    Heatmap,
    Areas,
}

impl PreviewTab {
    pub fn label(&self) -> &'static str {
        match self {
            PreviewTab::Heatmap => "Sales By Hour & Day",
            PreviewTab::Areas => "Sales By Area",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hour_ranges() {
        assert_eq!(hour_value_range(12), 50..100);
        assert_eq!(hour_value_range(21), 70..150);
        assert_eq!(hour_value_range(8), 20..50);
        assert_eq!(hour_value_range(3), 0..10);
        assert_eq!(hour_value_range(0), 10..50);
        assert_eq!(hour_value_range(23), 10..50);
        assert_eq!(hour_label(7), "07:00");
        assert_eq!(hour_label(18), "18:00");
    }

    #[test]
    fn test_heatmap_shape_and_ranges() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_heatmap(&mut rng);
            assert_eq!(grid.rows.len(), 7);
            assert_eq!(grid.rows[0].day, "Mon");
            for row in &grid.rows {
                for (hour, value) in row.values.iter().enumerate() {
                    assert!(hour_value_range(hour).contains(value));
                }
            }
        }
    }

    #[test]
    fn test_area_sales_only_with_talabat() {
        let mut rng = StdRng::seed_from_u64(7);
        let noon: PlatformSet = [PlatformId::Noon].into_iter().collect();
        assert!(PreviewData::generate(&noon, &mut rng).area_sales.is_none());

        let talabat: PlatformSet = [PlatformId::Talabat].into_iter().collect();
        let sales = PreviewData::generate(&talabat, &mut rng).area_sales.unwrap();
        assert_eq!(sales.len(), 6);
        assert!(sales.iter().all(|s| (1000..6000).contains(&s.sales)));
    }

    #[test]
    fn test_high_filter_on_any_dataset() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_heatmap(&mut rng);
            let before = grid.clone();
            for value in grid.cells() {
                if TrafficFilter::High.matches_cell(value) {
                    assert!(value >= 70);
                } else {
                    assert!(value < 70);
                }
            }
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn test_filters_partition_cells() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = generate_heatmap(&mut rng);
        for value in grid.cells() {
            let hits = [TrafficFilter::High, TrafficFilter::Medium, TrafficFilter::Low]
                .iter()
                .filter(|f| f.matches_cell(value))
                .count();
            assert_eq!(hits, 1);
            assert!(TrafficFilter::All.matches_cell(value));
        }
    }

    #[test]
    fn test_area_thresholds() {
        assert!(TrafficFilter::High.matches_area(3001));
        assert!(!TrafficFilter::High.matches_area(3000));
        assert!(TrafficFilter::Medium.matches_area(3000));
        assert!(TrafficFilter::Medium.matches_area(2000));
        assert!(TrafficFilter::Low.matches_area(1999));
        assert!(!TrafficFilter::Low.matches_area(2000));
    }

    #[test]
    fn test_heat_levels() {
        assert_eq!(heat_level(120), HeatLevel::Peak);
        assert_eq!(heat_level(70), HeatLevel::High);
        assert_eq!(heat_level(45), HeatLevel::Medium);
        assert_eq!(heat_level(20), HeatLevel::MediumLow);
        assert_eq!(heat_level(3), HeatLevel::Low);
        assert!((heat_opacity(0) - 0.1).abs() < 1e-9);
        assert!((heat_opacity(150) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("HIGH".parse::<TrafficFilter>(), Ok(TrafficFilter::High));
        assert!("extreme".parse::<TrafficFilter>().is_err());
    }
}
