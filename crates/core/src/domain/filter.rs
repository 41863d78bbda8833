// Job listing filter
//
// Applied in memory after the repository has fetched every job ordered by
// title. This keeps the query fixed at the cost of a full scan; fine for the
// record volumes this service targets.

use super::job::{Job, Salary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    #[serde(default)]
    pub title: Option<String>,
    /// Salary must be strictly greater than this
    #[serde(default)]
    pub min_salary: Option<Salary>,
    /// When true, only jobs with equity > 0
    #[serde(default)]
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_salary(mut self, min_salary: Salary) -> Self {
        self.min_salary = Some(min_salary);
        self
    }

    pub fn has_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = Some(has_equity);
        self
    }

    /// True when the filter passes every job
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().map_or(true, str::is_empty)
            && self.min_salary.is_none()
            && !self.has_equity.unwrap_or(false)
    }

    pub fn matches(&self, job: &Job) -> bool {
        let title_ok = match self.title.as_deref() {
            None | Some("") => true,
            Some(needle) => job
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        };

        let salary_ok = match self.min_salary {
            None => true,
            Some(min) => job.salary.is_some_and(|s| s > min),
        };

        let equity_ok = !self.has_equity.unwrap_or(false)
            || job.equity.is_some_and(|e| e.is_positive());

        title_ok && salary_ok && equity_ok
    }

    /// Keep the jobs that match, preserving input order
    pub fn apply(&self, jobs: Vec<Job>) -> Vec<Job> {
        if self.is_empty() {
            return jobs;
        }
        jobs.into_iter().filter(|job| self.matches(job)).collect()
    }
}
