use crate::dataset::Dataset;
use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ALL_SITES: &str = "ALL";

// Range slider domain
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;
pub const SLIDER_MARKS: [f64; 5] = [0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0];

/// The site dropdown value: every site, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: &str) -> Self {
        SiteSelection::Site(name.to_string())
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// Rejects a site the dataset has never seen.
    pub fn validate(self, dataset: &Dataset) -> Result<Self, FilterError> {
        if let SiteSelection::Site(s) = &self {
            if !dataset.has_site(s) {
                return Err(FilterError::UnknownSite(s.clone()));
            }
        }
        Ok(self)
    }
}

impl From<&str> for SiteSelection {
    fn from(raw: &str) -> Self {
        if raw == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(raw: String) -> Self {
        if raw == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(sel: SiteSelection) -> Self {
        sel.to_string()
    }
}

impl FromStr for SiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

/// Inclusive payload mass window in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, FilterError> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || low > high {
            return Err(FilterError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// `(minPayload, maxPayload)`: contains every record of the dataset.
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            low: dataset.min_payload(),
            high: dataset.max_payload(),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn within_slider_domain(&self) -> bool {
        SLIDER_MIN <= self.low && self.high <= SLIDER_MAX
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = FilterError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(r: PayloadRange) -> Self {
        [r.low, r.high]
    }
}

/// What the two controls currently show. Replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterState {
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::full(dataset),
        }
    }

    pub fn with_site(&self, site: SiteSelection) -> Self {
        Self {
            site,
            payload_range: self.payload_range,
        }
    }

    pub fn with_range(&self, payload_range: PayloadRange) -> Self {
        Self {
            site: self.site.clone(),
            payload_range,
        }
    }
}
