//! The command-line interface: initialize a configuration directory and translate rule files
//! with it.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use tokio::fs;

use query_engine_models::models::{Rule, RuleFile};
use query_engine_spl::spl::backend::OutputKind;
use query_engine_translation::translation;
use query_engine_translation::translation::dashboard::Dashboard;
use sigma_spl_configuration as configuration;
use sigma_spl_configuration::values::BackendName;

/// The various commands supported by the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a default configuration and its JSON schema into the configuration directory.
    Initialize {
        /// The backend preset to start from.
        #[arg(long, value_enum, default_value_t = Backend::Splunk)]
        backend: Backend,
    },
    /// Translate rule files and print the result.
    Translate {
        /// Report failing rules and carry on with the others.
        #[arg(long)]
        continue_on_error: bool,
        /// JSON or YAML files holding one rule or a list of rules.
        #[arg(required = true)]
        rule_files: Vec<PathBuf>,
    },
}

/// Backend presets selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Splunk,
    SplunkDashboard,
}

impl From<Backend> for BackendName {
    fn from(value: Backend) -> Self {
        match value {
            Backend::Splunk => BackendName::Splunk,
            Backend::SplunkDashboard => BackendName::SplunkDashboard,
        }
    }
}

/// Run a command against a configuration directory, writing results to `output`.
pub async fn run(
    command: Command,
    context_path: &Path,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize { backend } => initialize(context_path, backend.into()).await,
        Command::Translate {
            continue_on_error,
            rule_files,
        } => translate(context_path, &rule_files, continue_on_error, output).await,
    }
}

async fn initialize(context_path: &Path, backend: BackendName) -> anyhow::Result<()> {
    let configuration_file = context_path.join(configuration::CONFIGURATION_FILENAME);
    if fs::try_exists(&configuration_file).await? {
        anyhow::bail!(
            "a configuration already exists at {}",
            configuration_file.display()
        );
    }
    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::initial(backend),
        context_path,
    )
    .await?;
    tracing::info!(path = %context_path.display(), %backend, "initialized configuration");
    Ok(())
}

async fn translate(
    context_path: &Path,
    rule_files: &[PathBuf],
    continue_on_error: bool,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let parsed = configuration::parse_configuration(context_path).await?;
    let configuration = configuration::make_runtime_configuration(parsed)?;

    let mut rules = Vec::new();
    for rule_file in rule_files {
        rules.extend(read_rules(rule_file).await?);
    }

    let backend = &configuration.backend;
    let mappings = &configuration.field_mappings;
    let mut dashboard = match backend.output {
        OutputKind::SingleQuery => None,
        OutputKind::Dashboard => Some(Dashboard::new(&configuration.dashboard)),
    };

    let mut failed = 0;
    for rule in &rules {
        let result = match dashboard.as_mut() {
            None => translation::query::translate(backend, rule, mappings).map(|query| {
                if let Some(query) = query {
                    writeln!(output, "{query}")?;
                }
                Ok::<(), std::io::Error>(())
            }),
            Some(dashboard) => {
                translation::query::translate_into_dashboard(backend, dashboard, rule, mappings)
                    .map(Ok)
            }
        };
        match result {
            Ok(written) => written?,
            Err(error) if continue_on_error => {
                failed += 1;
                tracing::error!(rule = %rule.title, %error, "skipping rule");
            }
            Err(error) => {
                return Err(error).with_context(|| format!("translating rule '{}'", rule.title));
            }
        }
    }

    if let Some(mut dashboard) = dashboard {
        writeln!(output, "{}", dashboard.finalize()?)?;
    }
    if failed > 0 {
        tracing::warn!(failed, total = rules.len(), "some rules could not be translated");
    }
    Ok(())
}

/// Read a rule file, as YAML when its extension says so and as JSON otherwise.
pub async fn read_rules(path: &Path) -> anyhow::Result<Vec<Rule>> {
    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|extension| extension.to_str()),
        Some("yml" | "yaml")
    );
    let rule_file: RuleFile = if is_yaml {
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
    };
    Ok(rule_file.into_rules())
}
