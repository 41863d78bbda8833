//! Table / JSON rendering for command results

use anyhow::Result;
use colored::Colorize;
use jobly_core::domain::{Company, Job, JobApplication};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct JobView {
    id: i64,
    title: String,
    salary: String,
    equity: String,
    company: String,
}

impl From<&Job> for JobView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            salary: job.salary.map_or_else(|| "-".to_string(), |s| s.to_string()),
            equity: job.equity.map_or_else(|| "-".to_string(), |e| e.to_string()),
            company: job.company_handle.clone(),
        }
    }
}

#[derive(Tabled)]
struct CompanyView {
    handle: String,
    name: String,
    employees: String,
    description: String,
}

impl From<&Company> for CompanyView {
    fn from(company: &Company) -> Self {
        Self {
            handle: company.handle.clone(),
            name: company.name.clone(),
            employees: company
                .num_employees
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            description: company.description.clone(),
        }
    }
}

/// Where command results go
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn print_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let mut body = serde_json::Map::new();
        body.insert(key.to_string(), serde_json::to_value(value)?);
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    }

    pub fn job(&self, headline: &str, job: &Job) -> Result<()> {
        if self.json {
            return self.print_json("job", job);
        }
        println!("{}", format!("✓ {}", headline).green().bold());
        println!();
        println!("{}", Table::new(vec![JobView::from(job)]));
        Ok(())
    }

    pub fn jobs(&self, jobs: &[Job]) -> Result<()> {
        if self.json {
            return self.print_json("jobs", jobs);
        }
        if jobs.is_empty() {
            println!("{}", "No jobs match".yellow());
            return Ok(());
        }
        println!("{}", Table::new(jobs.iter().map(JobView::from)));
        Ok(())
    }

    pub fn company(&self, company: &Company) -> Result<()> {
        if self.json {
            return self.print_json("company", company);
        }
        println!("{}", format!("✓ Company {} added", company.handle).green().bold());
        println!();
        println!("{}", Table::new(vec![CompanyView::from(company)]));
        Ok(())
    }

    pub fn companies(&self, companies: &[Company]) -> Result<()> {
        if self.json {
            return self.print_json("companies", companies);
        }
        if companies.is_empty() {
            println!("{}", "No companies".yellow());
            return Ok(());
        }
        println!("{}", Table::new(companies.iter().map(CompanyView::from)));
        Ok(())
    }

    pub fn deleted(&self, id: i64) -> Result<()> {
        if self.json {
            return self.print_json("deleted", &id);
        }
        println!("{}", format!("✓ Job {} deleted", id).green().bold());
        Ok(())
    }

    pub fn applied(&self, application: &JobApplication) -> Result<()> {
        if self.json {
            return self.print_json("applied", &application.job_id);
        }
        println!(
            "{}",
            format!(
                "✓ {} applied to job {}",
                application.username, application.job_id
            )
            .green()
            .bold()
        );
        Ok(())
    }

    pub fn applications(&self, username: &str, job_ids: &[i64]) -> Result<()> {
        if self.json {
            return self.print_json("jobs", job_ids);
        }
        if job_ids.is_empty() {
            println!("{}", format!("{} has no applications", username).yellow());
            return Ok(());
        }
        println!("{}", format!("Applications for {}:", username).cyan().bold());
        for id in job_ids {
            println!("  {} {}", "•".bold(), id);
        }
        Ok(())
    }
}
