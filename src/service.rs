use log::info;

use crate::download::Downloader;
use crate::error::Result;
use crate::params::Params;
use crate::repository::{Repository, new_repository};

/// One retrieval run: a configured backend plus the parameters that
/// configured it.
///
/// Built once per invocation; a new parameter set means a new service.
pub struct Service {
    repository: Box<dyn Repository>,
    params: Params,
}

impl Service {
    /// Selects and configures the backend matching `params`.
    ///
    /// This is the boundary the CLI treats as fatal: a failure here ends
    /// the run with a diagnostic.
    pub fn new(params: Params) -> Result<Self> {
        let mut repository = new_repository(params.repository_type);
        repository.load_params(&params)?;
        Ok(Self { repository, params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The full, ordered URI plan for the configured request.
    pub fn plan(&self) -> Result<Vec<String>> {
        self.repository.uris()
    }

    /// Computes the plan and hands every URI to the downloader, in order.
    pub fn get_files(&self, downloader: &Downloader) -> Result<()> {
        // diagnostic only; the plan URIs embed the base themselves
        let base_url = self.repository.base_url()?;
        info!("retrieving from {base_url}");

        let uris = self.plan()?;
        info!("{} file(s) to retrieve", uris.len());

        downloader.fetch_all(&uris)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::params::{DateRange, RepositoryType, Resolution, TimeFrame};
    use crate::region::Region;

    fn params(repository_type: RepositoryType) -> Params {
        Params {
            repository_type,
            resolution: Resolution::OneDegree,
            date_range: DateRange::from_strings("2023-06-01", "2023-06-01").unwrap(),
            time_frame: TimeFrame::T12,
            is_additional_precipitation_included: false,
            region: Region::full_earth(),
            levels: Vec::new(),
            climate_variables: Vec::new(),
        }
    }

    #[test]
    fn ncep_service_plans_a_full_cycle() {
        let service = Service::new(params(RepositoryType::Ncep)).unwrap();
        let plan = service.plan().unwrap();

        assert_eq!(plan.len(), 130);
        for uri in &plan {
            assert!(uri.contains("gfs.t12z.pgrb2.1p00."));
            assert!(uri.contains("dir=%2Fgfs.20230601%2F12"));
        }
    }

    #[test]
    fn ncdc_service_constructs_but_cannot_plan() {
        let service = Service::new(params(RepositoryType::Ncdc)).unwrap();
        assert!(matches!(service.plan(), Err(Error::Config(_))));
    }
}
