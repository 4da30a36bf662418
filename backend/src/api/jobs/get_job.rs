//! Endpoint for a single job with its company.

use anyhow::Context;
use common::job::{JobDetail, JobId};

use crate::mock_data::{JobCatalogue, load_catalogue};

pub async fn get_job(job_id: JobId) -> anyhow::Result<JobDetail> {
    let catalogue = load_catalogue().await?;
    job_detail(catalogue, job_id)
}

pub(crate) fn job_detail(catalogue: &JobCatalogue, job_id: JobId) -> anyhow::Result<JobDetail> {
    let job = catalogue.job(job_id).with_context(|| format!("Job {job_id} not found"))?;
    let company = catalogue
        .company(job.company_id)
        .with_context(|| format!("Company {} of job {job_id} not found", job.company_id))?;
    Ok(JobDetail { job: job.clone(), company: company.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::builtin_catalogue;

    #[test]
    fn joins_company() {
        let detail = job_detail(&builtin_catalogue(), 9).unwrap();
        assert_eq!(detail.job.title, "Gameplay Programmer");
        assert_eq!(detail.company.name, "PixelForge Studios");
    }

    #[test]
    fn unknown_job_is_an_error() {
        let err = job_detail(&builtin_catalogue(), 404).unwrap_err();
        assert_eq!(err.to_string(), "Job 404 not found");
    }
}
