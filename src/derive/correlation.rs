use super::types::{ScatterChart, ScatterPoint};
use crate::dataset::{Dataset, COL_BOOSTER_CATEGORY, COL_CLASS, COL_PAYLOAD};
use crate::filter::{PayloadRange, SiteSelection};

pub const TITLE_ALL_SITES: &str = "Correlation between Payload and Success for All Sites";

pub fn site_title(site: &str) -> String {
    format!("Correlation between Payload and Success for site {}", site)
}

/// Payload-vs-outcome scatter: one point per record inside the range (both
/// ends inclusive) and, unless `All`, at the selected site. Points keep file
/// order and are never merged.
pub fn payload_correlation(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let mut groups: Vec<String> = Vec::new();
    let mut points = Vec::new();

    for (id, r) in dataset.iter() {
        if !range.contains(r.payload_mass) || !selection.matches(&r.site) {
            continue;
        }
        if !groups.contains(&r.booster_category) {
            groups.push(r.booster_category.clone());
        }
        points.push(ScatterPoint {
            record: id,
            payload_mass: r.payload_mass,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        });
    }

    let title = match selection {
        SiteSelection::All => TITLE_ALL_SITES.to_string(),
        SiteSelection::Site(site) => site_title(site),
    };

    ScatterChart {
        title,
        x_column: COL_PAYLOAD,
        y_column: COL_CLASS,
        color_column: COL_BOOSTER_CATEGORY,
        groups,
        points,
    }
}
