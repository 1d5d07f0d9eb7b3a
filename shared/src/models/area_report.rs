//! Area Utilization Report Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Survey record row; `layout_id` is NULL until a layout is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SurveyRecord {
    pub survey_id: i64,
    pub layout_id: Option<i64>,
}

/// Area row bound to a layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Area {
    pub area_id: i64,
    pub name: String,
}

/// Seat usage of one area under a survey
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaUsage {
    /// No seat capacity recorded for the area
    Room,
    /// Occupied seats over total capacity, `ratio` is not rounded
    Ratio {
        occupied: i64,
        total: i64,
        ratio: f64,
    },
}

impl AreaUsage {
    /// Build the usage from raw seat counts.
    ///
    /// A zero total never reaches the division.
    pub fn from_counts(occupied: i64, total: i64) -> Self {
        if total == 0 {
            return Self::Room;
        }
        Self::Ratio {
            occupied,
            total,
            ratio: occupied as f64 / total as f64,
        }
    }

    pub fn is_room(&self) -> bool {
        matches!(self, Self::Room)
    }

    /// Seat capacity counted for the area (0 for rooms)
    pub fn total(&self) -> i64 {
        match self {
            Self::Room => 0,
            Self::Ratio { total, .. } => *total,
        }
    }

    /// Occupied seats counted for the area (0 for rooms)
    pub fn occupied(&self) -> i64 {
        match self {
            Self::Room => 0,
            Self::Ratio { occupied, .. } => *occupied,
        }
    }
}

/// One line of the area utilization report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaUtilization {
    pub area_id: i64,
    pub name: String,
    pub usage: AreaUsage,
}

impl AreaUtilization {
    /// Text form: `<name> is a room.` or `<name> use ratio: <occupied> / <total>= <ratio>`
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AreaUtilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.usage {
            AreaUsage::Room => write!(f, "{} is a room.", self.name),
            AreaUsage::Ratio {
                occupied,
                total,
                ratio,
            } => write!(
                f,
                "{} use ratio: {} / {}= {}",
                self.name, occupied, total, ratio
            ),
        }
    }
}

/// Area utilization report for one survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaUtilizationReport {
    pub survey_id: i64,
    pub layout_id: i64,
    /// Ordered by area id
    pub areas: Vec<AreaUtilization>,
}

impl AreaUtilizationReport {
    /// One text line per area
    pub fn lines(&self) -> Vec<String> {
        self.areas.iter().map(AreaUtilization::line).collect()
    }

    /// Lines joined with `\n`
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    /// Seat capacity summed over every area of the layout
    pub fn total_seats(&self) -> i64 {
        self.areas.iter().map(|a| a.usage.total()).sum()
    }

    /// Occupied seats summed over every area of the layout
    pub fn occupied_seats(&self) -> i64 {
        self.areas.iter().map(|a| a.usage.occupied()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(area_id: i64, name: &str, occupied: i64, total: i64) -> AreaUtilization {
        AreaUtilization {
            area_id,
            name: name.to_string(),
            usage: AreaUsage::from_counts(occupied, total),
        }
    }

    #[test]
    fn test_zero_total_is_room() {
        assert_eq!(AreaUsage::from_counts(0, 0), AreaUsage::Room);
        // occupied seats without capacity still report as a room
        assert_eq!(AreaUsage::from_counts(3, 0), AreaUsage::Room);
    }

    #[test]
    fn test_ratio_is_exact_division() {
        match AreaUsage::from_counts(1, 3) {
            AreaUsage::Ratio {
                occupied,
                total,
                ratio,
            } => {
                assert_eq!(occupied, 1);
                assert_eq!(total, 3);
                assert_eq!(ratio, 1.0 / 3.0);
            }
            AreaUsage::Room => panic!("expected ratio"),
        }
    }

    #[test]
    fn test_ratio_line() {
        assert_eq!(
            area(1, "Reading Room", 8, 20).line(),
            "Reading Room use ratio: 8 / 20= 0.4"
        );
        assert_eq!(
            area(2, "Study Hall", 20, 20).line(),
            "Study Hall use ratio: 20 / 20= 1"
        );
        assert_eq!(area(3, "Quiet Zone", 0, 6).line(), "Quiet Zone use ratio: 0 / 6= 0");
    }

    #[test]
    fn test_room_line() {
        assert_eq!(area(4, "Storage", 0, 0).line(), "Storage is a room.");
    }

    #[test]
    fn test_report_render_and_totals() {
        let report = AreaUtilizationReport {
            survey_id: 5,
            layout_id: 2,
            areas: vec![
                area(1, "Reading Room", 8, 20),
                area(2, "Storage", 0, 0),
                area(3, "Group Study", 3, 12),
            ],
        };

        assert_eq!(
            report.render(),
            "Reading Room use ratio: 8 / 20= 0.4\nStorage is a room.\nGroup Study use ratio: 3 / 12= 0.25"
        );
        assert_eq!(report.total_seats(), 32);
        assert_eq!(report.occupied_seats(), 11);
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = AreaUtilizationReport {
            survey_id: 1,
            layout_id: 1,
            areas: Vec::new(),
        };
        assert!(report.lines().is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(report.total_seats(), 0);
    }

    #[test]
    fn test_usage_serialization() {
        let json = serde_json::to_value(AreaUsage::from_counts(8, 20)).unwrap();
        assert_eq!(json["kind"], "ratio");
        assert_eq!(json["occupied"], 8);
        assert_eq!(json["total"], 20);
        assert_eq!(json["ratio"], 0.4);

        let json = serde_json::to_value(AreaUsage::Room).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "room" }));
    }
}
