//! Configuration for the care gap pipeline.

use std::fmt;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::warn;

use crate::algorithm::care_gaps::GapAnalysisConfig;
use crate::algorithm::care_gaps::priority::ScoringPolicy;
use crate::error::{CareGapError, Result};
use crate::reader::DEFAULT_BATCH_SIZE;
use crate::utils::dates::DateFormatConfig;

/// Environment variable overriding the read batch size
pub const BATCH_SIZE_ENV: &str = "CARE_GAPS_BATCH_SIZE";

/// Environment variable overriding the reference date (`YYYY-MM-DD`)
pub const REFERENCE_DATE_ENV: &str = "CARE_GAPS_REFERENCE_DATE";

/// Default width of the text bar chart
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the four input tables
    pub data_dir: PathBuf,
    /// Directory the reports are written to
    pub output_dir: PathBuf,
    /// The "current date" the analysis runs as of
    pub reference_date: NaiveDate,
    /// Rows per record batch when reading
    pub batch_size: usize,
    /// Evaluate patients on the rayon pool
    pub parallel: bool,
    /// Worker threads for parallel mode
    pub num_threads: usize,
    /// How the age bonus contributes to priority scores
    pub scoring_policy: ScoringPolicy,
    /// Maximum bar length of the text chart
    pub chart_width: usize,
    /// Date formats accepted in input tables
    pub date_format_config: DateFormatConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            reference_date: Local::now().date_naive(),
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: false,
            num_threads: num_cpus::get(),
            scoring_policy: ScoringPolicy::default(),
            chart_width: DEFAULT_CHART_WIDTH,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration with environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `CARE_GAPS_BATCH_SIZE` and `CARE_GAPS_REFERENCE_DATE` if set
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(BATCH_SIZE_ENV) {
            match value.parse::<usize>() {
                Ok(batch_size) => self.batch_size = batch_size,
                Err(_) => warn!("Ignoring invalid {BATCH_SIZE_ENV}={value}"),
            }
        }
        if let Ok(value) = std::env::var(REFERENCE_DATE_ENV) {
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => self.reference_date = date,
                Err(_) => warn!("Ignoring invalid {REFERENCE_DATE_ENV}={value}"),
            }
        }
        self
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub const fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_scoring_policy(mut self, scoring_policy: ScoringPolicy) -> Self {
        self.scoring_policy = scoring_policy;
        self
    }

    /// Check values that would make the run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(CareGapError::InvalidConfig(
                "batch_size must be greater than zero".into(),
            ));
        }
        if self.chart_width == 0 {
            return Err(CareGapError::InvalidConfig(
                "chart_width must be greater than zero".into(),
            ));
        }
        if self.parallel && self.num_threads == 0 {
            return Err(CareGapError::InvalidConfig(
                "num_threads must be greater than zero in parallel mode".into(),
            ));
        }
        if self.date_format_config.date_formats.is_empty() {
            return Err(CareGapError::InvalidConfig(
                "at least one date format is required".into(),
            ));
        }
        Ok(())
    }

    /// The subset of settings the care gap engine needs
    #[must_use]
    pub fn gap_analysis(&self) -> GapAnalysisConfig {
        GapAnalysisConfig::new(self.reference_date).with_scoring_policy(self.scoring_policy)
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        writeln!(f, "  Batch Size: {}", self.batch_size)?;
        if self.parallel {
            writeln!(f, "  Parallel: yes ({} threads)", self.num_threads)?;
        } else {
            writeln!(f, "  Parallel: no")?;
        }
        writeln!(f, "  Scoring: {}", self.scoring_policy)?;
        write!(f, "  Chart Width: {}", self.chart_width)
    }
}
