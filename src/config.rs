use crate::dataset::Dataset;
use crate::error::FilterError;
use crate::filter::{FilterState, PayloadRange, SiteSelection};
use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

#[derive(Args, Debug, Clone)]
pub struct DataSource {
    /// Launch records CSV, loaded once at startup
    #[arg(global = true, short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ServerParams {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    #[arg(long, short, default_value_t = 8050)]
    pub port: u16,
}

impl ServerParams {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerParams {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8050,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Launch site, or ALL
    #[arg(long, default_value = "ALL")]
    pub site: String,
    /// Lower payload bound in kg (defaults to the dataset minimum)
    #[arg(long)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (defaults to the dataset maximum)
    #[arg(long)]
    pub high: Option<f64>,
}

impl FilterArgs {
    /// Turns command-line filters into a validated filter state. Missing
    /// bounds fall back to the dataset's own payload bounds.
    pub fn resolve(&self, dataset: &Dataset) -> Result<FilterState, FilterError> {
        let site = SiteSelection::from(self.site.as_str()).validate(dataset)?;
        let payload_range = PayloadRange::new(
            self.low.unwrap_or(dataset.min_payload()),
            self.high.unwrap_or(dataset.max_payload()),
        )?;
        Ok(FilterState {
            site,
            payload_range,
        })
    }
}
