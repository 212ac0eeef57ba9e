//! Sequential fetch-and-save of planned URIs.
//!
//! One blocking GET per URI, in plan order, no retries and no
//! concurrency. A failure aborts the run; files already written stay in
//! place.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{Error, Result};

/// Fetches each planned URI and persists the response body.
pub struct Downloader {
    http: HttpClient,
    output_dir: PathBuf,
    progress: bool,
}

impl Downloader {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("nomads-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("nomads-rs")),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(600))
            .build()?;

        Ok(Self {
            http,
            output_dir: output_dir.into(),
            progress: true,
        })
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Retrieves every URI in order, saving each response before moving
    /// on to the next.
    pub fn fetch_all(&self, uris: &[String]) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        let pb = if self.progress {
            let pb = ProgressBar::new(uris.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner:.green} {pos}/{len} {wide_bar} {eta}")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        for uri in uris {
            let file_name = file_name_for(uri)?;
            let body = self.fetch(uri)?;
            self.save(&file_name, &body)?;
            debug!("saved {file_name}");
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }

        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }
        Ok(())
    }

    fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        let response = self.http.get(uri).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    /// Writes `data` under `file_name` in the output directory, refusing
    /// to overwrite an existing file.
    fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(path)
    }
}

/// Derives the local file name `gfs.<YYYYMMDDHH>.<suffix>` from a filter
/// URI's `file=` and `dir=` query fields.
fn file_name_for(uri: &str) -> Result<String> {
    let query = uri.split_once('?').map(|(_, query)| query).unwrap_or(uri);

    let mut file_field = None;
    let mut dir_field = None;
    for field in query.split('&') {
        if let Some(value) = field.strip_prefix("file=") {
            file_field = Some(value);
        } else if let Some(value) = field.strip_prefix("dir=") {
            dir_field = Some(value);
        }
    }

    let (file_field, dir_field) = match (file_field, dir_field) {
        (Some(file), Some(dir)) => (file, dir),
        _ => {
            return Err(Error::Config(format!(
                "URI has no file/dir query fields: {uri}"
            )));
        }
    };

    // file=gfs.t12z.pgrb2.1p00.anl -> cycle hour "12", suffix "anl"
    let hour = file_field
        .split('.')
        .nth(1)
        .and_then(|part| part.strip_prefix('t'))
        .and_then(|part| part.strip_suffix('z'))
        .ok_or_else(|| Error::Config(format!("URI has no cycle hour: {uri}")))?;
    let suffix = file_field
        .rsplit('.')
        .next()
        .filter(|part| !part.is_empty())
        .ok_or_else(|| Error::Config(format!("URI has no file suffix: {uri}")))?;

    // dir=%2Fgfs.20230601%2F12 -> data date "20230601"
    let date = dir_field
        .strip_prefix("%2Fgfs.")
        .and_then(|rest| rest.split("%2F").next())
        .ok_or_else(|| Error::Config(format!("URI has no data date: {uri}")))?;

    Ok(format!("gfs.{date}{hour}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYSIS_URI: &str = "https://nomads.ncep.noaa.gov/cgi-bin/filter_gfs_1p00.pl\
         ?file=gfs.t12z.pgrb2.1p00.anl&all_lev=on&all_var=on\
         &leftlon=0.00&rightlong=360.00&toplat=90.00&bottomlat=-90.00\
         &dir=%2Fgfs.20230601%2F12";

    #[test]
    fn derives_analysis_file_name() {
        assert_eq!(file_name_for(ANALYSIS_URI).unwrap(), "gfs.2023060112.anl");
    }

    #[test]
    fn derives_forecast_file_name() {
        let uri = ANALYSIS_URI.replace(".anl&", ".f003&");
        assert_eq!(file_name_for(&uri).unwrap(), "gfs.2023060112.f003");
    }

    #[test]
    fn rejects_uri_without_query_fields() {
        assert!(file_name_for("https://example.com/file.grib2").is_err());
    }

    #[test]
    fn save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(dir.path()).unwrap().with_progress(false);

        downloader.save("gfs.2023060112.anl", b"first").unwrap();
        let second = downloader.save("gfs.2023060112.anl", b"second");

        assert!(
            matches!(second, Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::AlreadyExists)
        );
        assert_eq!(
            std::fs::read(dir.path().join("gfs.2023060112.anl")).unwrap(),
            b"first"
        );
    }
}
