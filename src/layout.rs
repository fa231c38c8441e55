use crate::dataset::Dataset;
use crate::filter::{PayloadRange, ALL_SITES, SLIDER_MARKS, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use serde::Serialize;
use std::collections::BTreeMap;

pub const HEADING: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PROPORTION_GRAPH_ID: &str = "success-pie-chart";
pub const CORRELATION_GRAPH_ID: &str = "success-payload-scatter-chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<SiteOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Mark position (as integer kg string) -> label.
    pub marks: BTreeMap<String, String>,
    pub value: PayloadRange,
}

/// Everything the page needs to draw its controls and chart regions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLayout {
    pub heading: &'static str,
    pub site_dropdown: Dropdown,
    pub slider_caption: &'static str,
    pub payload_slider: RangeSlider,
    pub proportion_graph_id: &'static str,
    pub correlation_graph_id: &'static str,
}

/// `All Sites` first, then each site in first-seen order.
pub fn site_options(dataset: &Dataset) -> Vec<SiteOption> {
    let mut options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(dataset.distinct_sites().iter().map(|s| SiteOption {
        label: s.clone(),
        value: s.clone(),
    }));
    options
}

pub fn slider_marks() -> BTreeMap<String, String> {
    SLIDER_MARKS
        .iter()
        .map(|m| {
            let label = format!("{}", *m as u64);
            (label.clone(), label)
        })
        .collect()
}

impl DashboardLayout {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            heading: HEADING,
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID,
                options: site_options(dataset),
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here",
                searchable: true,
            },
            slider_caption: "Payload range (Kg):",
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks: slider_marks(),
                value: PayloadRange::full(dataset),
            },
            proportion_graph_id: PROPORTION_GRAPH_ID,
            correlation_graph_id: CORRELATION_GRAPH_ID,
        }
    }
}
