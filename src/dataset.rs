use crate::error::{LoadError, LoadResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info};

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Position of a record in the source file. Stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecordId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Parses the binary `class` column (`1` = success, `0` = failure).
    pub fn from_class(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" | "1.0" => Some(Outcome::Success),
            "0" | "0.0" => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric class value, as plotted on the y axis.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub site: String,
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,

    // Optional columns, carried through when the source has them
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

impl Record {
    pub fn new(site: &str, payload_mass: f64, outcome: Outcome, booster_category: &str) -> Self {
        Self {
            site: site.to_string(),
            payload_mass,
            outcome,
            booster_category: booster_category.to_string(),
            flight_number: None,
            booster_version: None,
        }
    }
}

/// Immutable launch table plus the payload bounds computed at load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

struct Columns {
    site: usize,
    payload: usize,
    class: usize,
    booster_category: usize,
    flight: Option<usize>,
    booster_version: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        Ok(Self {
            site: require(COL_SITE)?,
            payload: require(COL_PAYLOAD)?,
            class: require(COL_CLASS)?,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            flight: find(COL_FLIGHT),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }
}

fn invalid(row: usize, column: &'static str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    }
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading launch records from {}", path.display());

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} records across {} sites (payload {} .. {} kg)",
            dataset.len(),
            dataset.sites.len(),
            dataset.min_payload,
            dataset.max_payload
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let cols = Columns::resolve(rdr.headers()?)?;
        let mut records = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let rec = result?;
            let row = idx + 1;

            let site = rec[cols.site].trim();
            if site.is_empty() {
                return Err(invalid(row, COL_SITE, site));
            }

            let raw_payload = rec[cols.payload].trim();
            let payload_mass: f64 = raw_payload
                .parse()
                .ok()
                .filter(|m: &f64| m.is_finite() && *m >= 0.0)
                .ok_or_else(|| invalid(row, COL_PAYLOAD, raw_payload))?;

            let raw_class = &rec[cols.class];
            let outcome =
                Outcome::from_class(raw_class).ok_or_else(|| invalid(row, COL_CLASS, raw_class))?;

            let flight_number = match cols.flight.map(|i| rec[i].trim()) {
                Some(raw) if !raw.is_empty() => Some(
                    raw.parse::<u32>()
                        .map_err(|_| invalid(row, COL_FLIGHT, raw))?,
                ),
                _ => None,
            };

            let booster_version = cols
                .booster_version
                .map(|i| rec[i].trim().to_string())
                .filter(|s| !s.is_empty());

            records.push(Record {
                site: site.to_string(),
                payload_mass,
                outcome,
                booster_category: rec[cols.booster_category].trim().to_string(),
                flight_number,
                booster_version,
            });
        }

        debug!("Parsed {} data rows", records.len());
        Self::from_records(records)
    }

    /// Builds the store from already-parsed records. Fails only when empty.
    pub fn from_records(records: Vec<Record>) -> LoadResult<Self> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut sites = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for r in &records {
            if seen.insert(r.site.clone()) {
                sites.push(r.site.clone());
            }
            min_payload = min_payload.min(r.payload_mass);
            max_payload = max_payload.max(r.payload_mass);
        }

        Ok(Self {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    /// Records paired with their stable ids, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (RecordId(i), r))
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.0)
    }

    /// Distinct launch sites in first-seen order.
    pub fn distinct_sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn site_count(&self, site: &str) -> usize {
        self.records.iter().filter(|r| r.site == site).count()
    }

    pub fn total_successes(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
