use super::types::{ProportionChart, Slice};
use crate::dataset::{Dataset, Outcome, COL_CLASS, COL_SITE};
use crate::filter::SiteSelection;

pub const TITLE_ALL_SITES: &str = "Total Success Launches by Site";

pub fn site_title(site: &str) -> String {
    format!("Total Launch Outcome for site {}", site)
}

/// Outcome-proportion chart for the current site selection.
///
/// `All` sums successes per site (sites without a success keep a zero wedge).
/// A single site counts its records per outcome; only outcomes that occur
/// get a wedge, so an unknown or empty site yields an empty chart.
pub fn outcome_proportion(dataset: &Dataset, selection: &SiteSelection) -> ProportionChart {
    match selection {
        SiteSelection::All => {
            let rows = dataset
                .distinct_sites()
                .iter()
                .map(|site| Slice {
                    label: site.clone(),
                    value: dataset
                        .all_records()
                        .iter()
                        .filter(|r| &r.site == site && r.outcome.is_success())
                        .count() as u64,
                })
                .collect();

            ProportionChart {
                title: TITLE_ALL_SITES.to_string(),
                names_column: COL_SITE,
                rows,
            }
        }
        SiteSelection::Site(site) => {
            let mut counts: Vec<(Outcome, u64)> = Vec::with_capacity(2);
            for r in dataset.all_records().iter().filter(|r| &r.site == site) {
                match counts.iter_mut().find(|(o, _)| *o == r.outcome) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((r.outcome, 1)),
                }
            }

            ProportionChart {
                title: site_title(site),
                names_column: COL_CLASS,
                rows: counts
                    .into_iter()
                    .map(|(outcome, value)| Slice {
                        label: outcome.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
    }
}
