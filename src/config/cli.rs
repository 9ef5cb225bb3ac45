use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::job::JobConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rashi-mailer")]
#[command(about = "Deterministic daily horoscope generator and mailer")]
pub struct CliConfig {
    /// Path to the subscriber list (JSON array)
    #[arg(long, default_value = "users.json")]
    pub users: String,

    /// Directory for dry-run output
    #[arg(long, default_value = "./outbox")]
    pub outbox: String,

    /// Generate for a fixed date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Write rendered emails to the outbox instead of sending
    #[arg(long)]
    pub dry_run: bool,

    /// Optional TOML job file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Enable system monitoring
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Folds a job file into the CLI settings. The file drives the paths;
    /// `--date`, `--dry-run` and `--monitor` still win when given.
    pub fn apply_job(&mut self, job: &JobConfig) {
        self.users = job.users_path().to_string();
        self.outbox = job.outbox_path().to_string();
        if self.date.is_none() {
            self.date = job.target_date();
        }
        self.dry_run = self.dry_run || job.dry_run();
        self.monitor = self.monitor || job.monitoring_enabled();
    }
}

impl ConfigProvider for CliConfig {
    fn users_path(&self) -> &str {
        &self.users
    }

    fn outbox_path(&self) -> &str {
        &self.outbox
    }

    fn target_date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("users", &self.users)?;
        validate_path("outbox", &self.outbox)?;
        Ok(())
    }
}
