//! Request-configuration loading.
//!
//! The on-disk document is deserialized verbatim, then validated into an
//! immutable [`Params`] value; nothing downstream re-reads the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::params::{DateRange, Params, RepositoryType, Resolution, TimeFrame};
use crate::region::Region;

/// The one data source this tool understands.
const DATA_SOURCE_GFS: &str = "gfs";

/// On-disk request description.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    pub data_source: String,
    pub repository_type: RepositoryType,
    pub resolution: Resolution,
    pub date_range: DateRangeStrings,
    pub time_frame: TimeFrame,
    #[serde(default)]
    pub is_additional_precipitation_included: bool,
    #[serde(default)]
    pub output_folder: Option<PathBuf>,
}

/// Date bounds as written in the file, parsed later into a [`DateRange`].
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeStrings {
    pub start: String,
    pub end: String,
}

impl RequestConfig {
    /// Reads and deserializes a request configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Validates the raw document into a parameter set.
    pub fn to_params(&self) -> Result<Params> {
        if self.data_source != DATA_SOURCE_GFS {
            return Err(Error::Config(format!(
                "unrecognized data source: {}",
                self.data_source
            )));
        }

        let date_range = DateRange::from_strings(&self.date_range.start, &self.date_range.end)?;
        if date_range.end < date_range.start {
            return Err(Error::Config("end date is before start date".to_string()));
        }

        Ok(Params {
            repository_type: self.repository_type,
            resolution: self.resolution,
            date_range,
            time_frame: self.time_frame,
            is_additional_precipitation_included: self.is_additional_precipitation_included,
            region: Region::full_earth(),
            levels: Vec::new(),
            climate_variables: Vec::new(),
        })
    }

    /// Output directory, preferring the command-line override.
    pub fn output_folder(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.output_folder.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
data_source: gfs
repository_type: NCEP
resolution: 1p00
date_range:
  start: 2023-06-01
  end: 2023-06-02
time_frame: "12"
is_additional_precipitation_included: true
output_folder: ./data
"#;

    #[test]
    fn parses_a_full_document() {
        let config: RequestConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.data_source, "gfs");
        assert_eq!(config.repository_type, RepositoryType::Ncep);
        assert_eq!(config.resolution, Resolution::OneDegree);
        assert_eq!(config.time_frame, TimeFrame::T12);
        assert!(config.is_additional_precipitation_included);
        assert_eq!(config.output_folder, Some(PathBuf::from("./data")));

        let params = config.to_params().unwrap();
        assert_eq!(params.date_range.number_of_days(), 1);
        assert_eq!(params.region, Region::full_earth());
    }

    #[test]
    fn optional_keys_have_defaults() {
        let config: RequestConfig = serde_yaml::from_str(
            r#"
data_source: gfs
repository_type: NCEP
resolution: 0p25
date_range:
  start: 2023-06-01
  end: 2023-06-01
time_frame: ALL
"#,
        )
        .unwrap();
        assert!(!config.is_additional_precipitation_included);
        assert_eq!(config.output_folder, None);
        assert_eq!(config.output_folder(None), PathBuf::from("."));
    }

    #[test]
    fn cli_override_wins_over_configured_folder() {
        let config: RequestConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(
            config.output_folder(Some(PathBuf::from("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
        assert_eq!(config.output_folder(None), PathBuf::from("./data"));
    }

    #[test]
    fn rejects_unknown_data_source() {
        let mut config: RequestConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        config.data_source = "cfs".to_string();
        assert!(matches!(config.to_params(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_reversed_date_range() {
        let mut config: RequestConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        config.date_range.start = "2023-06-03".to_string();
        assert!(matches!(config.to_params(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_malformed_date() {
        let mut config: RequestConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        config.date_range.start = "06-01-2023".to_string();
        assert!(matches!(config.to_params(), Err(Error::DateParse(_))));
    }

    #[test]
    fn rejects_unrecognized_resolution_token() {
        let err = serde_yaml::from_str::<RequestConfig>(
            r#"
data_source: gfs
repository_type: NCEP
resolution: 2p00
date_range:
  start: 2023-06-01
  end: 2023-06-01
time_frame: "00"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2p00"));
    }
}
