//! Command-line front end: loads cost tables and personas, prints estimates.

pub mod output;

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::{ConfigManager, EstimatorConfig},
    domain::UserInputs,
    engine::{ExpenseCalculator, NoPrepDays, ProvinceSource},
    errors::CostError,
    storage,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Cost(#[from] CostError),
}

pub const USAGE: &str = "\
Usage:
  court_costs_cli estimate --personas <file> --income <amount> --distance <band>
                           [--data <file>] [--province <code>] [--json]
  court_costs_cli validate [--data <file>]
  court_costs_cli version";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Estimate(EstimateArgs),
    Validate { data: Option<PathBuf> },
    Version,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateArgs {
    pub personas: PathBuf,
    pub income: f64,
    pub distance: String,
    pub data: Option<PathBuf>,
    pub province: Option<String>,
    pub json: bool,
}

/// Parses arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliError::Usage(USAGE.into()))?;

    let mut personas = None;
    let mut income = None;
    let mut distance = None;
    let mut data = None;
    let mut province = None;
    let mut json = false;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| CliError::Usage(format!("missing value for `{flag}`")))
        };
        match flag.as_str() {
            "--personas" => personas = Some(PathBuf::from(value()?)),
            "--income" => {
                let raw = value()?;
                let parsed = raw
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(format!("income `{raw}` is not a number")))?;
                income = Some(parsed);
            }
            "--distance" => distance = Some(value()?),
            "--data" => data = Some(PathBuf::from(value()?)),
            "--province" => province = Some(value()?.to_uppercase()),
            "--json" => json = true,
            other => return Err(CliError::Usage(format!("unknown option `{other}`"))),
        }
    }

    match command.as_str() {
        "estimate" => {
            let require = |name: &str| CliError::Usage(format!("`estimate` requires --{name}"));
            Ok(Command::Estimate(EstimateArgs {
                personas: personas.ok_or_else(|| require("personas"))?,
                income: income.ok_or_else(|| require("income"))?,
                distance: distance.ok_or_else(|| require("distance"))?,
                data,
                province,
                json,
            }))
        }
        "validate" => Ok(Command::Validate { data }),
        "version" => Ok(Command::Version),
        other => Err(CliError::Usage(format!("unknown command `{other}`\n{USAGE}"))),
    }
}

/// Parses and executes one command using the persisted configuration.
pub fn run<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let command = parse_args(args)?;
    let config = ConfigManager::new()?.load()?;
    execute(command, &config)
}

pub fn execute(command: Command, config: &EstimatorConfig) -> Result<(), CliError> {
    match command {
        Command::Estimate(args) => estimate(args, config),
        Command::Validate { data } => validate(data, config),
        Command::Version => {
            output::info(version_line());
            Ok(())
        }
    }
}

fn data_path(explicit: Option<PathBuf>, config: &EstimatorConfig) -> Result<PathBuf, CliError> {
    explicit.or_else(|| config.data_path.clone()).ok_or_else(|| {
        CliError::Usage("no province data file; pass --data or set data_path in config".into())
    })
}

fn estimate(args: EstimateArgs, config: &EstimatorConfig) -> Result<(), CliError> {
    let store = storage::load_province_store(&data_path(args.data, config)?)?;
    let personas = storage::load_personas(&args.personas)?;
    let province = args
        .province
        .unwrap_or_else(|| config.default_province.clone());

    let calculator = ExpenseCalculator::new(
        store,
        NoPrepDays,
        config.formatter(),
        UserInputs::new(args.income, args.distance),
    )
    .with_working_days(config.working_days_per_year);

    let mut results = Vec::with_capacity(personas.len());
    for persona in &personas {
        let result = calculator.calculate_out_of_pocket(persona, &province)?;
        results.push((persona, result));
    }

    if args.json {
        let payload: Vec<_> = results
            .iter()
            .map(|(persona, result)| {
                serde_json::json!({
                    "persona": persona.name,
                    "province": province,
                    "stage": persona.stage,
                    "costs": result,
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&payload).map_err(CostError::from)?;
        output::info(rendered);
        return Ok(());
    }

    for (persona, result) in &results {
        let label = if persona.name.is_empty() {
            "persona"
        } else {
            persona.name.as_str()
        };
        output::section(format!("{label} ({}, {province})", persona.stage));
        for row in output::aligned_rows(result.entries()) {
            output::info(row);
        }
    }
    Ok(())
}

fn validate(data: Option<PathBuf>, config: &EstimatorConfig) -> Result<(), CliError> {
    let store = storage::load_province_store(&data_path(data, config)?)?;
    let mut incomplete = 0;
    for province in store.provinces() {
        let Some(record) = store.lookup(province) else {
            continue;
        };
        let missing = record.missing_fields();
        if missing.is_empty() {
            output::info(format!("{province}: complete"));
        } else {
            incomplete += 1;
            output::warning(format!("{province}: missing {}", missing.join(", ")));
        }
    }
    if incomplete > 0 {
        return Err(CliError::Usage(format!(
            "{incomplete} province table(s) incomplete"
        )));
    }
    Ok(())
}

fn version_line() -> String {
    format!(
        "court_costs {} ({} {}, built {} for {} [{}], {})",
        env!("CARGO_PKG_VERSION"),
        env!("COURT_COSTS_BUILD_HASH"),
        env!("COURT_COSTS_BUILD_STATUS"),
        env!("COURT_COSTS_BUILD_TIMESTAMP"),
        env!("COURT_COSTS_BUILD_TARGET"),
        env!("COURT_COSTS_BUILD_PROFILE"),
        env!("COURT_COSTS_BUILD_RUSTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_estimate_flags_in_any_order() {
        let command = parse_args(args(&[
            "estimate",
            "--distance",
            "near",
            "--income",
            "48400",
            "--personas",
            "people.json",
            "--province",
            "on",
            "--json",
        ]))
        .unwrap();
        assert_eq!(
            command,
            Command::Estimate(EstimateArgs {
                personas: PathBuf::from("people.json"),
                income: 48_400.0,
                distance: "near".into(),
                data: None,
                province: Some("ON".into()),
                json: true,
            })
        );
    }

    #[test]
    fn estimate_requires_income() {
        let err = parse_args(args(&["estimate", "--personas", "p.json", "--distance", "far"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "`estimate` requires --income");
    }

    #[test]
    fn rejects_unknown_command_and_bad_numbers() {
        assert!(matches!(
            parse_args(args(&["launch"])),
            Err(CliError::Usage(_))
        ));
        let err = parse_args(args(&["estimate", "--income", "lots"])).unwrap_err();
        assert_eq!(err.to_string(), "income `lots` is not a number");
    }

    #[test]
    fn missing_data_path_is_a_usage_error() {
        let err = execute(
            Command::Validate { data: None },
            &EstimatorConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("--data"));
    }
}
