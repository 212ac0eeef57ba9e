use std::fmt;

use chrono::NaiveDate;

use crate::error::Result;
use crate::ncdc::NcdcRepository;
use crate::ncep::NcepRepository;
use crate::params::{Cycle, Params, RepositoryType};

/// Final component of a remote GRIB2 file name: the zero-hour analysis
/// field, or a forecast-hour offset from the cycle's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSuffix {
    Analysis,
    Forecast(u32),
}

impl fmt::Display for FileSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSuffix::Analysis => f.write_str("anl"),
            FileSuffix::Forecast(hour) => write!(f, "f{hour:03}"),
        }
    }
}

/// A NOMADS file server's URL grammar.
///
/// Implementations turn a loaded [`Params`] into the ordered list of
/// request URIs covering every matching file. Plans are pure functions
/// of the loaded parameters: calling an enumeration method twice yields
/// the same freshly built list both times.
pub trait Repository {
    /// Copies the request parameters into backend state.
    fn load_params(&mut self, params: &Params) -> Result<()>;

    /// Root endpoint for the configured resolution.
    fn base_url(&self) -> Result<String>;

    /// The full plan: every URI for every day of the range, day-ascending.
    fn uris(&self) -> Result<Vec<String>>;

    /// URIs for a single day, covering each configured cycle in order.
    fn uris_for_date(&self, date: NaiveDate) -> Result<Vec<String>>;

    /// URIs for one day and one cycle: the analysis followed by the
    /// three-hourly forecasts out to the maximum horizon.
    fn uris_for_date_and_cycle(&self, date: NaiveDate, cycle: Cycle) -> Result<Vec<String>>;
}

/// Creates the backend matching `kind`.
///
/// Both recognized kinds construct; a backend without a working grammar
/// reports that as a typed error from its enumeration calls instead of
/// failing here.
pub fn new_repository(kind: RepositoryType) -> Box<dyn Repository> {
    match kind {
        RepositoryType::Ncep => Box::new(NcepRepository::new()),
        RepositoryType::Ncdc => Box::new(NcdcRepository::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_suffix_renders_anl() {
        assert_eq!(FileSuffix::Analysis.to_string(), "anl");
    }

    #[test]
    fn forecast_suffix_is_zero_padded() {
        assert_eq!(FileSuffix::Forecast(0).to_string(), "f000");
        assert_eq!(FileSuffix::Forecast(3).to_string(), "f003");
        assert_eq!(FileSuffix::Forecast(27).to_string(), "f027");
        assert_eq!(FileSuffix::Forecast(384).to_string(), "f384");
    }
}
