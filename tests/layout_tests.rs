mod common;

use common::scenario_dataset;
use launchboard::derive::{outcome_proportion, payload_correlation};
use launchboard::filter::{PayloadRange, SiteSelection, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use launchboard::layout::{site_options, slider_marks, DashboardLayout};
use launchboard::render::{correlation_figure, proportion_figure};
use serde_json::json;

#[test]
fn test_site_options_start_with_all_sites() {
    let options = site_options(&scenario_dataset());
    let pairs: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.label.as_str(), o.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("All Sites", "ALL"), ("siteA", "siteA"), ("siteB", "siteB")]
    );
}

#[test]
fn test_slider_marks_cover_domain() {
    let marks = slider_marks();
    let keys: Vec<&str> = marks.keys().map(String::as_str).collect();
    for k in ["0", "2500", "5000", "7500", "10000"] {
        assert!(keys.contains(&k));
        assert_eq!(marks[k], k);
    }
    assert_eq!(marks.len(), 5);
}

#[test]
fn test_layout_json_shape() {
    let layout = DashboardLayout::for_dataset(&scenario_dataset());
    let v = serde_json::to_value(&layout).unwrap();

    assert_eq!(v["heading"], "SpaceX Launch Records Dashboard");
    assert_eq!(v["siteDropdown"]["id"], "site-dropdown");
    assert_eq!(v["siteDropdown"]["value"], "ALL");
    assert_eq!(v["siteDropdown"]["placeholder"], "Select a Launch Site here");
    assert_eq!(v["siteDropdown"]["searchable"], true);
    assert_eq!(v["sliderCaption"], "Payload range (Kg):");
    assert_eq!(v["payloadSlider"]["min"], SLIDER_MIN);
    assert_eq!(v["payloadSlider"]["max"], SLIDER_MAX);
    assert_eq!(v["payloadSlider"]["step"], SLIDER_STEP);
    assert_eq!(v["payloadSlider"]["value"], json!([500.0, 9000.0]));
    assert_eq!(v["proportionGraphId"], "success-pie-chart");
    assert_eq!(v["correlationGraphId"], "success-payload-scatter-chart");
}

#[test]
fn test_proportion_figure() {
    let chart = outcome_proportion(&scenario_dataset(), &SiteSelection::site("siteA"));
    let fig = proportion_figure(&chart);

    assert_eq!(fig["data"][0]["type"], "pie");
    assert_eq!(fig["data"][0]["labels"], json!(["Success", "Failure"]));
    assert_eq!(fig["data"][0]["values"], json!([1, 1]));
    assert_eq!(
        fig["layout"]["title"]["text"],
        "Total Launch Outcome for site siteA"
    );
}

#[test]
fn test_correlation_figure_has_trace_per_booster() {
    let ds = scenario_dataset();
    let range = PayloadRange::new(0.0, 10000.0).unwrap();
    let fig = correlation_figure(&payload_correlation(&ds, &SiteSelection::All, &range));

    let traces = fig["data"].as_array().unwrap();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0]["name"], "v1");
    assert_eq!(traces[0]["mode"], "markers");
    assert_eq!(traces[0]["x"], json!([500.0, 3000.0]));
    assert_eq!(traces[0]["y"], json!([1, 0]));
    assert_eq!(traces[1]["name"], "v2");
    assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    assert_eq!(fig["layout"]["yaxis"]["title"]["text"], "class");
}

#[test]
fn test_empty_scatter_figure_keeps_title() {
    let ds = scenario_dataset();
    let range = PayloadRange::new(9500.0, 10000.0).unwrap();
    let fig = correlation_figure(&payload_correlation(&ds, &SiteSelection::site("siteA"), &range));

    assert_eq!(fig["data"], json!([]));
    assert_eq!(
        fig["layout"]["title"]["text"],
        "Correlation between Payload and Success for site siteA"
    );
}
