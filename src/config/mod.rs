pub mod file;
pub mod storage;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use self::file::FileConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "syntax-primer")]
#[command(about = "A guided tour of core language constructs")]
pub struct CliConfig {
    /// Directory the scratch file is created in
    #[arg(long, default_value = ".")]
    pub scratch_dir: String,

    /// TOML file overriding the built-in tour fixtures
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log resource usage per section")]
    pub monitor: bool,
}

/// Fully resolved tour settings: built-in defaults, overridden by the
/// optional config file. The defaults reproduce the canonical fixtures.
#[derive(Debug, Clone)]
pub struct TourSettings {
    pub subject_name: String,
    pub subject_age: u32,
    pub numbers: Vec<i64>,
    pub classify_samples: Vec<i64>,
    pub scratch_file: String,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            subject_name: "Alice".to_string(),
            subject_age: 25,
            numbers: vec![1, 2, 3, 4, 5],
            classify_samples: vec![10, -5, 0],
            scratch_file: "temp_example.txt".to_string(),
        }
    }
}

impl TourSettings {
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            let overrides = FileConfig::from_path(path)?;
            settings.apply(overrides);
        }
        Ok(settings)
    }

    pub fn apply(&mut self, overrides: FileConfig) {
        if let Some(subject) = overrides.subject {
            if let Some(name) = subject.name {
                self.subject_name = name;
            }
            if let Some(age) = subject.age {
                self.subject_age = age;
            }
        }
        if let Some(samples) = overrides.samples {
            if let Some(numbers) = samples.numbers {
                self.numbers = numbers;
            }
            if let Some(classify) = samples.classify {
                self.classify_samples = classify;
            }
        }
        if let Some(scratch) = overrides.scratch {
            if let Some(filename) = scratch.filename {
                self.scratch_file = filename;
            }
        }
    }
}

impl ConfigProvider for TourSettings {
    fn subject_name(&self) -> &str {
        &self.subject_name
    }

    fn subject_age(&self) -> u32 {
        self.subject_age
    }

    fn sample_numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn classify_samples(&self) -> &[i64] {
        &self.classify_samples
    }

    fn scratch_file(&self) -> &str {
        &self.scratch_file
    }
}

impl Validate for TourSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("subject.name", &self.subject_name)?;
        validation::validate_range("subject.age", self.subject_age, 0, 150)?;
        validation::validate_non_empty_list("samples.numbers", &self.numbers)?;
        validation::validate_non_empty_list("samples.classify", &self.classify_samples)?;
        validation::validate_bare_file_name("scratch.filename", &self.scratch_file)?;
        Ok(())
    }
}
