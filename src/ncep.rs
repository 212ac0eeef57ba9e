//! The NCEP NOMADS filter backend.
//!
//! This is the only backend with a working URL grammar. Each generated
//! URI asks the filter CGI for one GRIB2 file, subset to the configured
//! region, levels and variables.

use chrono::{NaiveDate, Utc};
use log::debug;

use crate::error::{Error, Result};
use crate::params::{ClimateVariable, Cycle, DateRange, Level, Params, Resolution};
use crate::region::Region;
use crate::repository::{FileSuffix, Repository};

const BASE_URL: &str = "https://nomads.ncep.noaa.gov/cgi-bin";

/// Highest forecast-hour offset served per cycle, in hours.
const MAX_FORECAST_HOUR: u32 = 384;
/// Spacing between forecast snapshots, in hours.
const FORECAST_STEP_HOURS: u32 = 3;
/// One analysis URI plus one per forecast step.
const URIS_PER_CYCLE: usize = (MAX_FORECAST_HOUR / FORECAST_STEP_HOURS) as usize + 2;

/// Plan generator bound to the NCEP filter endpoints.
#[derive(Debug, Default)]
pub struct NcepRepository {
    resolution: Option<Resolution>,
    date_range: Option<DateRange>,
    cycles: Vec<Cycle>,
    #[allow(dead_code)]
    is_additional_precipitation_included: bool,
    region: Region,
    // wildcard fragments, rendered once at load time
    levels_query: String,
    climate_variables_query: String,
}

impl NcepRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_uri(
        &self,
        base: &str,
        resolution: Resolution,
        date: NaiveDate,
        cycle: Cycle,
        suffix: FileSuffix,
    ) -> String {
        let uri = format!(
            "{}?file=gfs.t{hh}z.pgrb2.{res}.{suffix}&{lev}&{var}&{region}&dir=%2Fgfs.{date}%2F{hh}",
            base,
            hh = cycle.as_str(),
            res = resolution,
            suffix = suffix,
            lev = self.levels_query,
            var = self.climate_variables_query,
            region = self.region.to_query(),
            date = date.format("%Y%m%d"),
        );
        debug!("{uri}");
        uri
    }
}

impl Repository for NcepRepository {
    fn load_params(&mut self, params: &Params) -> Result<()> {
        self.resolution = Some(params.resolution);
        self.date_range = Some(params.date_range);
        self.cycles = params.time_frame.cycles().to_vec();
        self.is_additional_precipitation_included = params.is_additional_precipitation_included;
        self.region = params.region;
        self.levels_query = levels_query(&params.levels)?;
        self.climate_variables_query = climate_variables_query(&params.climate_variables)?;
        Ok(())
    }

    fn base_url(&self) -> Result<String> {
        let resolution = self
            .resolution
            .ok_or_else(|| Error::Config("no resolution set".to_string()))?;
        Ok(format!("{BASE_URL}/filter_gfs_{resolution}.pl"))
    }

    fn uris(&self) -> Result<Vec<String>> {
        let range = self
            .date_range
            .ok_or_else(|| Error::Config("no date range set".to_string()))?;

        // checked at plan time, not parse time: "now" moves
        if range.end > Utc::now().date_naive() {
            return Err(Error::Validation(
                "end date can not be in the future".to_string(),
            ));
        }

        let capacity = range.number_of_days() as usize * self.cycles.len() * URIS_PER_CYCLE;
        let mut uris = Vec::with_capacity(capacity);
        for day in range.days() {
            uris.extend(self.uris_for_date(day)?);
        }
        Ok(uris)
    }

    fn uris_for_date(&self, date: NaiveDate) -> Result<Vec<String>> {
        let mut uris = Vec::with_capacity(self.cycles.len() * URIS_PER_CYCLE);
        for cycle in &self.cycles {
            uris.extend(self.uris_for_date_and_cycle(date, *cycle)?);
        }
        Ok(uris)
    }

    fn uris_for_date_and_cycle(&self, date: NaiveDate, cycle: Cycle) -> Result<Vec<String>> {
        let resolution = self
            .resolution
            .ok_or_else(|| Error::Config("no resolution set".to_string()))?;
        let base = self.base_url()?;

        let mut uris = Vec::with_capacity(URIS_PER_CYCLE);

        // the zero-hour analysis has its own suffix
        uris.push(self.build_uri(&base, resolution, date, cycle, FileSuffix::Analysis));

        for hour in (0..=MAX_FORECAST_HOUR).step_by(FORECAST_STEP_HOURS as usize) {
            uris.push(self.build_uri(&base, resolution, date, cycle, FileSuffix::Forecast(hour)));
        }

        Ok(uris)
    }
}

fn levels_query(levels: &[Level]) -> Result<String> {
    if !levels.is_empty() {
        // TODO: render per-level lev_<key>=on fields once a config path
        // exists to populate the selection
        return Err(Error::Config(
            "partial level selection is not implemented".to_string(),
        ));
    }
    Ok("all_lev=on".to_string())
}

fn climate_variables_query(variables: &[ClimateVariable]) -> Result<String> {
    if !variables.is_empty() {
        return Err(Error::Config(
            "partial variable selection is not implemented".to_string(),
        ));
    }
    Ok("all_var=on".to_string())
}
