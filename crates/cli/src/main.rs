//! Jobly CLI - Command-line front-end for the job board store
//!
//! Composition root: reads configuration, initializes logging, opens the
//! database and wires the SQLite adapters into the core services.

mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

use jobly_core::application::{ApplicationService, CompanyService, JobService};
use jobly_core::domain::{Company, Equity, JobFilter, JobId, JobUpdate, NewJob};
use jobly_core::error::AppError;
use jobly_core::port::time_provider::SystemTimeProvider;
use jobly_infra_sqlite::{
    create_pool, run_migrations, SqliteApplicationRepository, SqliteCompanyRepository,
    SqliteJobRepository,
};

use crate::logging::LogFormat;
use crate::output::Printer;

const DEFAULT_DB_PATH: &str = "~/.jobly/jobly.db";

#[derive(Parser)]
#[command(name = "jobly")]
#[command(about = "Jobly job board CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file (or `sqlite::memory:`)
    #[arg(long, global = true, env = "JOBLY_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log line format
    #[arg(long, global = true, env = "JOBLY_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage companies
    #[command(subcommand)]
    Company(CompanyCommand),

    /// Manage job postings
    #[command(subcommand)]
    Job(JobCommand),

    /// Record that a user applied to a job
    Apply {
        username: String,
        job_id: JobId,
    },

    /// List the jobs a user applied to
    Applications { username: String },
}

#[derive(Subcommand)]
enum CompanyCommand {
    /// Add a company
    Add {
        #[arg(long)]
        handle: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        employees: Option<i32>,

        #[arg(long)]
        logo_url: Option<String>,
    },

    /// List companies
    List,
}

#[derive(Subcommand)]
enum JobCommand {
    /// Create a job posting
    Create {
        #[arg(short, long)]
        title: String,

        /// Company handle
        #[arg(short, long)]
        company: String,

        #[arg(short, long)]
        salary: Option<i64>,

        /// Decimal fraction between 0 and 1
        #[arg(short, long)]
        equity: Option<Equity>,
    },

    /// List jobs ordered by title
    List(ListArgs),

    /// Show one job
    Get { id: JobId },

    /// Change some fields of a job
    Update(UpdateArgs),

    /// Delete a job
    Delete { id: JobId },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive title substring
    #[arg(short, long)]
    title: Option<String>,

    /// Only salaries strictly above this
    #[arg(long)]
    min_salary: Option<i64>,

    /// Only jobs with equity above zero
    #[arg(long)]
    has_equity: bool,
}

impl From<ListArgs> for JobFilter {
    fn from(args: ListArgs) -> Self {
        JobFilter {
            title: args.title,
            min_salary: args.min_salary,
            has_equity: args.has_equity.then_some(true),
        }
    }
}

#[derive(Args)]
struct UpdateArgs {
    id: JobId,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long, conflicts_with = "clear_salary")]
    salary: Option<i64>,

    /// Set salary to null
    #[arg(long)]
    clear_salary: bool,

    #[arg(short, long, conflicts_with = "clear_equity")]
    equity: Option<Equity>,

    /// Set equity to null
    #[arg(long)]
    clear_equity: bool,

    /// Move the job to another company
    #[arg(short, long)]
    company: Option<String>,
}

impl UpdateArgs {
    fn changes(&self) -> JobUpdate {
        JobUpdate {
            title: self.title.clone(),
            salary: if self.clear_salary {
                Some(None)
            } else {
                self.salary.map(Some)
            },
            equity: if self.clear_equity {
                Some(None)
            } else {
                self.equity.map(Some)
            },
            company_handle: self.company.clone(),
        }
    }
}

/// Core services wired to one SQLite pool
struct Services {
    companies: CompanyService,
    jobs: JobService,
    applications: ApplicationService,
}

async fn connect(db: &str) -> Result<Services> {
    let db_path = shellexpand::tilde(db).into_owned();

    if !db_path.contains(":memory:") {
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }
    }

    info!(db_path = %db_path, "Initializing database...");

    let pool = create_pool(&db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    Ok(Services {
        companies: CompanyService::new(Arc::new(SqliteCompanyRepository::new(pool.clone()))),
        jobs: JobService::new(Arc::new(SqliteJobRepository::new(pool.clone()))),
        applications: ApplicationService::new(
            Arc::new(SqliteApplicationRepository::new(pool)),
            time_provider,
        ),
    })
}

async fn run(cli: Cli) -> Result<()> {
    let services = connect(&cli.db).await?;
    let printer = Printer::new(cli.json);

    match cli.command {
        Commands::Company(CompanyCommand::Add {
            handle,
            name,
            description,
            employees,
            logo_url,
        }) => {
            let company = services
                .companies
                .create(Company {
                    handle,
                    name,
                    description,
                    num_employees: employees,
                    logo_url,
                })
                .await?;
            printer.company(&company)?;
        }

        Commands::Company(CompanyCommand::List) => {
            let companies = services.companies.list().await?;
            printer.companies(&companies)?;
        }

        Commands::Job(JobCommand::Create {
            title,
            company,
            salary,
            equity,
        }) => {
            let job = services
                .jobs
                .create(NewJob {
                    title,
                    salary,
                    equity,
                    company_handle: company,
                })
                .await?;
            printer.job(&format!("Job {} created", job.id), &job)?;
        }

        Commands::Job(JobCommand::List(args)) => {
            let filter = JobFilter::from(args);
            debug!(?filter, "Listing jobs");
            let jobs = services.jobs.list(&filter).await?;
            printer.jobs(&jobs)?;
        }

        Commands::Job(JobCommand::Get { id }) => {
            let job = services.jobs.get(id).await?;
            printer.job(&format!("Job {}", id), &job)?;
        }

        Commands::Job(JobCommand::Update(args)) => {
            let job = services.jobs.update(args.id, args.changes()).await?;
            printer.job(&format!("Job {} updated", job.id), &job)?;
        }

        Commands::Job(JobCommand::Delete { id }) => {
            services.jobs.remove(id).await?;
            printer.deleted(id)?;
        }

        Commands::Apply { username, job_id } => {
            let application = services.applications.apply(&username, job_id).await?;
            printer.applied(&application)?;
        }

        Commands::Applications { username } => {
            let job_ids = services.applications.jobs_for_user(&username).await?;
            printer.applications(&username, &job_ids)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_format, cli.verbose) {
        eprintln!("{} {:#}", "✗".red(), e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            // Caller mistakes get a distinct exit status from backend failures
            match e.downcast_ref::<AppError>() {
                Some(app_err) if app_err.is_client_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_flags_build_partial_update() {
        let cli = Cli::parse_from([
            "jobly",
            "job",
            "update",
            "7",
            "--title",
            "Lead",
            "--clear-equity",
        ]);
        let Commands::Job(JobCommand::Update(args)) = cli.command else {
            panic!("expected job update");
        };
        let changes = args.changes();
        assert_eq!(args.id, 7);
        assert_eq!(changes.title.as_deref(), Some("Lead"));
        assert_eq!(changes.salary, None);
        assert_eq!(changes.equity, Some(None));
        assert_eq!(changes.company_handle, None);
    }

    #[test]
    fn test_list_flags_build_filter() {
        let cli = Cli::parse_from([
            "jobly",
            "job",
            "list",
            "--title",
            "eng",
            "--min-salary",
            "100000",
            "--has-equity",
        ]);
        let Commands::Job(JobCommand::List(args)) = cli.command else {
            panic!("expected job list");
        };
        let filter = JobFilter::from(args);
        assert_eq!(
            filter,
            JobFilter::default().title("eng").min_salary(100_000).has_equity(true)
        );
    }

    #[test]
    fn test_equity_flag_is_validated() {
        let result = Cli::try_parse_from([
            "jobly", "job", "create", "--title", "T", "--company", "c1", "--equity", "1.5",
        ]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_against_memory_db() {
        let cli = Cli::parse_from(["jobly", "--db", "sqlite::memory:", "--json", "company", "list"]);
        run(cli).await.unwrap();
    }
}
