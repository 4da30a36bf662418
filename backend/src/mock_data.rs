//! Job catalogue: built-in mock data, or a JSON file named by the config.

use std::{collections::BTreeSet, path::Path};

use anyhow::Context;
use common::{
    job::{Company, CompanyId, Job, JobId},
    search_const::{EXPERIENCE_LEVELS, JOB_TYPES},
};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::BackendConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JobCatalogue {
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
}

impl JobCatalogue {
    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut company_ids = BTreeSet::new();
        for company in &self.companies {
            if !company_ids.insert(company.id) {
                anyhow::bail!("duplicate company id {}", company.id);
            }
        }
        let mut job_ids = BTreeSet::new();
        for job in &self.jobs {
            if !job_ids.insert(job.id) {
                anyhow::bail!("duplicate job id {}", job.id);
            }
            if !company_ids.contains(&job.company_id) {
                anyhow::bail!("job {} references unknown company {}", job.id, job.company_id);
            }
            if !JOB_TYPES.contains(&job.job_type.as_str()) {
                anyhow::bail!("job {} has unknown job type {:?}", job.id, job.job_type);
            }
            if !EXPERIENCE_LEVELS.contains(&job.experience_level.as_str()) {
                anyhow::bail!("job {} has unknown experience level {:?}", job.id, job.experience_level);
            }
            if job.salary_min > job.salary_max {
                anyhow::bail!("job {} has salary_min {} above salary_max {}", job.id, job.salary_min, job.salary_max);
            }
        }
        Ok(())
    }
}

static CATALOGUE: OnceCell<JobCatalogue> = OnceCell::const_new();

/// The process-wide catalogue, loaded once on first use. A failed load is not cached.
pub async fn load_catalogue() -> anyhow::Result<&'static JobCatalogue> {
    CATALOGUE.get_or_try_init(load_configured_catalogue).await
}

async fn load_configured_catalogue() -> anyhow::Result<JobCatalogue> {
    let config = BackendConfig::from_env()?;
    match &config.jobs_file {
        Some(path) => read_catalogue_file(path).await,
        None => Ok(builtin_catalogue()),
    }
}

pub async fn read_catalogue_file(path: &Path) -> anyhow::Result<JobCatalogue> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read job catalogue {}", path.display()))?;
    let catalogue = serde_json::from_str::<JobCatalogue>(&text)
        .with_context(|| format!("Failed to parse job catalogue {}", path.display()))?;
    catalogue.validate().with_context(|| format!("Invalid job catalogue {}", path.display()))?;
    info!("Loaded {} jobs from {}", catalogue.jobs.len(), path.display());
    Ok(catalogue)
}

fn company(id: CompanyId, name: &str, industry: &str, headquarters: &str, employee_count: u32, description: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        headquarters: headquarters.to_string(),
        description: description.to_string(),
        employee_count,
        website: format!("https://{}.example.com", name.to_lowercase().replace(' ', "")),
    }
}

struct JobSeed<'a> {
    title: &'a str,
    location: &'a str,
    job_type: &'a str,
    experience_level: &'a str,
    skills: &'a [&'a str],
    salary: (u32, u32),
    remote: bool,
    posted_days_ago: u32,
    description: &'a str,
    requirements: &'a [&'a str],
}

fn job(id: JobId, company: &Company, seed: JobSeed) -> Job {
    Job {
        id,
        company_id: company.id,
        company_name: company.name.clone(),
        title: seed.title.to_string(),
        location: seed.location.to_string(),
        job_type: seed.job_type.to_string(),
        experience_level: seed.experience_level.to_string(),
        industry: company.industry.clone(),
        skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        salary_min: seed.salary.0,
        salary_max: seed.salary.1,
        remote: seed.remote,
        description: seed.description.to_string(),
        requirements: seed.requirements.iter().map(|s| s.to_string()).collect(),
        posted_days_ago: seed.posted_days_ago,
    }
}

pub fn builtin_catalogue() -> JobCatalogue {
    let brightpath = company(1, "BrightPath Analytics", "Technology", "San Francisco, CA", 420,
        "Data platform helping retailers forecast demand.");
    let meridian = company(2, "Meridian Health", "Healthcare", "Austin, TX", 2300,
        "Digital care network connecting clinics and patients.");
    let ledgerly = company(3, "Ledgerly", "Finance", "New York, NY", 180,
        "Accounting automation for small businesses.");
    let greenloop = company(4, "GreenLoop Energy", "Energy", "Berlin, Germany", 650,
        "Grid software for renewable energy producers.");
    let pixelforge = company(5, "PixelForge Studios", "Media", "London, UK", 95,
        "Independent studio building games and interactive stories.");
    let campus = company(6, "Campus Bridge", "Education", "Remote", 60,
        "Online tutoring marketplace for university students.");

    let jobs = vec![
        job(1, &brightpath, JobSeed {
            title: "Senior Backend Engineer",
            location: "San Francisco, CA",
            job_type: "Full-time",
            experience_level: "Senior",
            skills: &["Rust", "PostgreSQL", "Kubernetes"],
            salary: (150_000, 190_000),
            remote: false,
            posted_days_ago: 2,
            description: "Own the ingestion services that process billions of retail events each day.",
            requirements: &["5+ years building backend services", "Experience operating distributed systems"],
        }),
        job(2, &brightpath, JobSeed {
            title: "Data Analyst",
            location: "Remote",
            job_type: "Full-time",
            experience_level: "Mid-level",
            skills: &["SQL", "Python", "Tableau"],
            salary: (85_000, 110_000),
            remote: true,
            posted_days_ago: 5,
            description: "Turn forecasting results into clear recommendations for our retail customers.",
            requirements: &["Strong SQL", "Comfortable presenting to customers"],
        }),
        job(3, &meridian, JobSeed {
            title: "Frontend Engineer",
            location: "Austin, TX",
            job_type: "Full-time",
            experience_level: "Mid-level",
            skills: &["TypeScript", "React", "Accessibility"],
            salary: (110_000, 140_000),
            remote: false,
            posted_days_ago: 1,
            description: "Build the patient scheduling experience used by hundreds of clinics.",
            requirements: &["3+ years of frontend development", "Care for accessible interfaces"],
        }),
        job(4, &meridian, JobSeed {
            title: "Clinical Data Intern",
            location: "Austin, TX",
            job_type: "Internship",
            experience_level: "Entry-level",
            skills: &["Python", "SQL"],
            salary: (30_000, 40_000),
            remote: false,
            posted_days_ago: 12,
            description: "Help the research team clean and analyse anonymised clinical datasets.",
            requirements: &["Currently enrolled in a quantitative degree"],
        }),
        job(5, &ledgerly, JobSeed {
            title: "Full Stack Engineer",
            location: "New York, NY",
            job_type: "Full-time",
            experience_level: "Senior",
            skills: &["TypeScript", "Go", "PostgreSQL"],
            salary: (140_000, 175_000),
            remote: true,
            posted_days_ago: 3,
            description: "Ship features across our invoicing product, from database schema to UI.",
            requirements: &["Experience with financial data", "Comfortable across the stack"],
        }),
        job(6, &ledgerly, JobSeed {
            title: "Financial Operations Contractor",
            location: "New York, NY",
            job_type: "Contract",
            experience_level: "Mid-level",
            skills: &["Excel", "Accounting"],
            salary: (70_000, 90_000),
            remote: false,
            posted_days_ago: 20,
            description: "Six month engagement reconciling accounts during our ledger migration.",
            requirements: &["CPA or equivalent experience"],
        }),
        job(7, &greenloop, JobSeed {
            title: "Embedded Software Engineer",
            location: "Berlin, Germany",
            job_type: "Full-time",
            experience_level: "Senior",
            skills: &["Rust", "C", "Embedded"],
            salary: (95_000, 130_000),
            remote: false,
            posted_days_ago: 7,
            description: "Write firmware for the controllers that balance our battery storage sites.",
            requirements: &["Embedded Linux or RTOS experience", "Rust or C in production"],
        }),
        job(8, &greenloop, JobSeed {
            title: "Site Reliability Engineer",
            location: "Remote",
            job_type: "Full-time",
            experience_level: "Lead",
            skills: &["Kubernetes", "Terraform", "Go"],
            salary: (130_000, 165_000),
            remote: true,
            posted_days_ago: 4,
            description: "Lead the team keeping our grid control plane available around the clock.",
            requirements: &["On-call leadership experience", "Infrastructure as code"],
        }),
        job(9, &pixelforge, JobSeed {
            title: "Gameplay Programmer",
            location: "London, UK",
            job_type: "Full-time",
            experience_level: "Mid-level",
            skills: &["C++", "Unreal Engine"],
            salary: (60_000, 85_000),
            remote: false,
            posted_days_ago: 9,
            description: "Prototype and polish mechanics for our next narrative adventure.",
            requirements: &["Shipped at least one game"],
        }),
        job(10, &pixelforge, JobSeed {
            title: "Part-time Community Manager",
            location: "London, UK",
            job_type: "Part-time",
            experience_level: "Entry-level",
            skills: &["Writing", "Social Media"],
            salary: (25_000, 32_000),
            remote: true,
            posted_days_ago: 15,
            description: "Be the voice of the studio across Discord and social channels.",
            requirements: &["Excellent written English"],
        }),
        job(11, &campus, JobSeed {
            title: "Product Designer",
            location: "Remote",
            job_type: "Contract",
            experience_level: "Senior",
            skills: &["Figma", "User Research"],
            salary: (90_000, 120_000),
            remote: true,
            posted_days_ago: 6,
            description: "Redesign how students find and book tutors on mobile.",
            requirements: &["Portfolio of shipped product work"],
        }),
        job(12, &campus, JobSeed {
            title: "Junior Rust Developer",
            location: "Remote",
            job_type: "Full-time",
            experience_level: "Entry-level",
            skills: &["Rust", "SQL"],
            salary: (65_000, 80_000),
            remote: true,
            posted_days_ago: 0,
            description: "Join the small team building our matching and scheduling services.",
            requirements: &["Some Rust experience, personal projects welcome"],
        }),
    ];

    JobCatalogue {
        companies: vec![brightpath, meridian, ledgerly, greenloop, pixelforge, campus],
        jobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue_is_consistent() {
        let catalogue = builtin_catalogue();
        catalogue.validate().unwrap();
        for job in &catalogue.jobs {
            let company = catalogue.company(job.company_id).unwrap();
            assert_eq!(job.company_name, company.name);
            assert_eq!(job.industry, company.industry);
        }
    }

    #[test]
    fn validate_rejects_dangling_company() {
        let mut catalogue = builtin_catalogue();
        catalogue.jobs[0].company_id = 999;
        let err = catalogue.validate().unwrap_err();
        assert!(err.to_string().contains("unknown company 999"));
    }

    #[test]
    fn validate_rejects_unknown_job_type() {
        let mut catalogue = builtin_catalogue();
        catalogue.jobs[1].job_type = "Gig".to_string();
        let err = catalogue.validate().unwrap_err();
        assert!(err.to_string().contains("unknown job type"));
    }

    #[tokio::test]
    async fn reads_catalogue_from_json_file() {
        let mut catalogue = builtin_catalogue();
        catalogue.jobs.truncate(2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, serde_json::to_string(&catalogue).unwrap()).unwrap();

        let loaded = read_catalogue_file(&path).await.unwrap();
        assert_eq!(loaded, catalogue);
    }

    #[tokio::test]
    async fn invalid_catalogue_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "{\"companies\": [], \"jobs\": 7}").unwrap();
        assert!(read_catalogue_file(&path).await.is_err());
    }

    #[tokio::test]
    async fn concurrent_first_loads_share_one_catalogue() {
        let (a, b) = tokio::join!(load_catalogue(), load_catalogue());
        assert!(std::ptr::eq(a.unwrap(), b.unwrap()));
    }
}
