//! Report configuration management.
//!
//! Settings are merged from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use sales_analyzer::{AnalysisOptions, DefaultRevenueStrategy, TieredBonusStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{Level, event};

/// The configuration of a report run
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ReportConfig {
    /// The bonus rates awarded by profit rank
    #[serde(default)]
    pub bonus: TieredBonusStrategy,

    /// How the report is written
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON reports
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ReportConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if one is given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `SALESREPORT_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export SALESREPORT_BONUS__FIRST=0.2
    /// export SALESREPORT_OUTPUT__PRETTY=false
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::layered(path, None)
    }

    /// The calculators a report is analyzed with: discounted-price revenue and
    /// the configured bonus tiers
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions::new()
            .with_revenue(DefaultRevenueStrategy)
            .with_bonus(self.bonus.clone())
    }

    // `env` replaces the process environment when given
    fn layered(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("SALESREPORT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let loaded: Self = config.build()?.try_deserialize()?;
        event!(Level::DEBUG, config = ?loaded, "loaded configuration");
        Ok(loaded)
    }
}
