use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::params::{Cycle, DateRange, Params};
use crate::repository::Repository;

const BASE_URL: &str = "https://nomads.ncdc.noaa.gov/data/";

/// Structural stub for the NCDC archive server.
///
/// The backend is recognized so configurations naming it get a
/// diagnostic instead of a deserialization error, but its URI grammar
/// has never been specified and every enumeration call says so.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct NcdcRepository {
    date_range: Option<DateRange>,
    is_additional_precipitation_included: bool,
}

impl NcdcRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn unimplemented() -> Error {
        Error::Config("the NCDC backend has no URI grammar implemented".to_string())
    }
}

impl Repository for NcdcRepository {
    fn load_params(&mut self, params: &Params) -> Result<()> {
        self.date_range = Some(params.date_range);
        self.is_additional_precipitation_included = params.is_additional_precipitation_included;
        Ok(())
    }

    fn base_url(&self) -> Result<String> {
        Ok(BASE_URL.to_string())
    }

    fn uris(&self) -> Result<Vec<String>> {
        Err(Self::unimplemented())
    }

    fn uris_for_date(&self, _date: NaiveDate) -> Result<Vec<String>> {
        Err(Self::unimplemented())
    }

    fn uris_for_date_and_cycle(&self, _date: NaiveDate, _cycle: Cycle) -> Result<Vec<String>> {
        Err(Self::unimplemented())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_the_archive_root() {
        assert_eq!(
            NcdcRepository::new().base_url().unwrap(),
            "https://nomads.ncdc.noaa.gov/data/"
        );
    }

    #[test]
    fn enumeration_reports_missing_grammar() {
        let repository = NcdcRepository::new();
        assert!(matches!(repository.uris(), Err(Error::Config(_))));
    }
}
