//! A small Rust client for NOAA's NOMADS GRIB filter service.
//!
//! Given a date range, forecast cycle(s), grid resolution and bounding
//! box, this crate enumerates the exact filter-endpoint URIs covering
//! every matching GFS GRIB2 file, then fetches each one and saves it to
//! disk under `gfs.<YYYYMMDDHH>.<suffix>`.
//!
//! ## Quick start
//! - Describe the request in a YAML file (see the crate README for the
//!   recognized keys).
//! - Build a [`Service`] from it and hand the plan to a [`Downloader`].
//!
//! ```no_run
//! use nomads::{Downloader, RequestConfig, Service};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RequestConfig::load("request.yaml".as_ref())?;
//!     let service = Service::new(config.to_params()?)?;
//!     let downloader = Downloader::new(config.output_folder(None))?;
//!     service.get_files(&downloader)?;
//!     Ok(())
//! }
//! ```
//!
//! Plan generation is pure: [`Service::plan`] returns the URI list
//! without touching the network, which is all the `get` command does
//! before the first HTTP request goes out.

#![forbid(unsafe_code)]

mod config;
mod download;
mod error;
mod grib2;
mod ncdc;
mod ncep;
mod params;
mod region;
mod repository;
mod service;

pub use config::{DateRangeStrings, RequestConfig};
pub use download::Downloader;
pub use error::{Error, Result};
pub use grib2::{Grib2, Grib2Value};
pub use ncdc::NcdcRepository;
pub use ncep::NcepRepository;
pub use params::{
    ClimateVariable, Cycle, DateRange, Level, Params, RepositoryType, Resolution, TimeFrame,
};
pub use region::Region;
pub use repository::{FileSuffix, Repository, new_repository};
pub use service::Service;
