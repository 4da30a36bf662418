//! Job and company models.

use serde::{Deserialize, Serialize};

use crate::filter_state::{FilterCategory, format_salary};

pub type JobId = u64;
pub type CompanyId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub headquarters: String,
    pub description: String,
    pub employee_count: u32,
    pub website: String,
}

impl Company {
    /// Up to two uppercase initials, used as a logo placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub company_id: CompanyId,
    pub company_name: String,
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub industry: String,
    pub skills: Vec<String>,
    pub salary_min: u32,
    pub salary_max: u32,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_days_ago: u32,
}

impl Job {
    /// The labels this job carries for a filter category.
    pub fn labels(&self, category: FilterCategory) -> Vec<&str> {
        match category {
            FilterCategory::JobTypes => vec![self.job_type.as_str()],
            FilterCategory::ExperienceLevel => vec![self.experience_level.as_str()],
            FilterCategory::Industries => vec![self.industry.as_str()],
            FilterCategory::Skills => self.skills.iter().map(|s| s.as_str()).collect(),
        }
    }

    pub fn salary_text(&self) -> String {
        format!("{} - {}", format_salary(self.salary_min), format_salary(self.salary_max))
    }

    pub fn posted_text(&self) -> String {
        match self.posted_days_ago {
            0 => "Posted today".to_string(),
            1 => "Posted yesterday".to_string(),
            n => format!("Posted {n} days ago"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub job: Job,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyListing {
    pub company: Company,
    pub open_jobs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let company = Company {
            id: 1,
            name: "northwind data labs".to_string(),
            industry: String::new(),
            headquarters: String::new(),
            description: String::new(),
            employee_count: 0,
            website: String::new(),
        };
        assert_eq!(company.initials(), "ND");
    }
}
