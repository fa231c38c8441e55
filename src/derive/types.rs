use crate::dataset::{Outcome, RecordId};
use serde::Serialize;

/// One wedge of a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionChart {
    pub title: String,
    /// Column the wedges are grouped by (`Launch Site` or `class`).
    pub names_column: &'static str,
    pub rows: Vec<Slice>,
}

impl ProportionChart {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|s| s.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<u64> {
        self.rows.iter().find(|s| s.label == label).map(|s| s.value)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|s| s.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub record: RecordId,
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_column: &'static str,
    pub y_column: &'static str,
    pub color_column: &'static str,
    /// Distinct booster categories among the points, legend order.
    pub groups: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn record_ids(&self) -> Vec<RecordId> {
        self.points.iter().map(|p| p.record).collect()
    }

    pub fn points_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ScatterPoint> {
        self.points.iter().filter(move |p| p.booster_category == group)
    }
}
