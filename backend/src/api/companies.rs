//! Company listing and featured jobs.

use anyhow::Context;
use common::job::{CompanyId, CompanyListing, Job};

use crate::mock_data::{JobCatalogue, load_catalogue};

pub async fn list_companies() -> anyhow::Result<Vec<CompanyListing>> {
    let catalogue = load_catalogue().await?;
    Ok(company_listings(catalogue))
}

pub async fn get_company(company_id: CompanyId) -> anyhow::Result<CompanyListing> {
    let catalogue = load_catalogue().await?;
    company_listing(catalogue, company_id)
}

pub async fn featured_jobs(limit: u64) -> anyhow::Result<Vec<Job>> {
    let catalogue = load_catalogue().await?;
    Ok(newest_jobs(catalogue, limit))
}

fn company_listings(catalogue: &JobCatalogue) -> Vec<CompanyListing> {
    let mut listings = catalogue
        .companies
        .iter()
        .map(|company| CompanyListing {
            company: company.clone(),
            open_jobs: catalogue.jobs.iter().filter(|j| j.company_id == company.id).count() as u64,
        })
        .collect::<Vec<_>>();
    listings.sort_by(|a, b| a.company.name.cmp(&b.company.name));
    listings
}

fn company_listing(catalogue: &JobCatalogue, company_id: CompanyId) -> anyhow::Result<CompanyListing> {
    let company = catalogue.company(company_id).with_context(|| format!("Company {} not found", company_id))?;
    Ok(CompanyListing {
        company: company.clone(),
        open_jobs: catalogue.jobs.iter().filter(|j| j.company_id == company_id).count() as u64,
    })
}

fn newest_jobs(catalogue: &JobCatalogue, limit: u64) -> Vec<Job> {
    let mut jobs = catalogue.jobs.clone();
    jobs.sort_by_key(|job| (job.posted_days_ago, job.id));
    jobs.truncate(limit as usize);
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::builtin_catalogue;

    #[test]
    fn listings_are_sorted_and_counted() {
        let listings = company_listings(&builtin_catalogue());
        assert_eq!(listings[0].company.name, "BrightPath Analytics");
        assert!(listings.iter().all(|l| l.open_jobs == 2));
    }

    #[test]
    fn single_company_lookup() {
        let catalogue = builtin_catalogue();
        let listing = company_listing(&catalogue, 1).unwrap();
        assert_eq!(listing.company.id, 1);
        assert_eq!(listing.open_jobs, 2);
        let err = company_listing(&catalogue, 404).unwrap_err();
        assert_eq!(err.to_string(), "Company 404 not found");
    }

    #[test]
    fn featured_jobs_are_newest() {
        let jobs = newest_jobs(&builtin_catalogue(), 3);
        assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![12, 3, 1]);
    }
}
