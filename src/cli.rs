//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::open_source;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::clients::parse_clients;
use crate::domain::config_validation::{validate_data_config, validate_report_config};
use crate::domain::engine::TransactionQueryEngine;
use crate::domain::error::TxlensError;
use crate::domain::record::{RecordFormat, TransactionRecord};
use crate::domain::summary::{AuditSummary, DatasetProfile};
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "txlens", about = "Transaction analytics and compliance lookups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every query and print a full audit summary
    Report {
        #[arg(short, long)]
        config: PathBuf,
        /// Override the data file from the config
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Data format (json or csv); inferred from the extension when absent
        #[arg(short, long)]
        format: Option<String>,
        /// Client(s) to report on, overriding the config client list
        #[arg(long)]
        client: Vec<String>,
        /// Also write the summary to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a single query against a data file
    Query {
        /// Which query to run
        operation: QueryOperation,
        /// Client name, required by sent-by and open-issues
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print the shape of a data file (record counts, duplicates, issue split)
    Info {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Validate a config file and echo the resolved settings
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperation {
    TotalAmount,
    SentBy,
    MaxAmount,
    UniqueClients,
    OpenIssues,
    ByBeneficiary,
    UnsolvedIssueIds,
    SolvedIssueMessages,
    Top3,
    TopSender,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report {
            config,
            data,
            format,
            client,
            output,
        } => run_report(
            &config,
            data.as_deref(),
            format.as_deref(),
            &client,
            output.as_deref(),
        ),
        Command::Query {
            operation,
            name,
            data,
            format,
        } => run_query(operation, name.as_deref(), &data, format.as_deref()),
        Command::Info { data, format } => run_info(&data, format.as_deref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TxlensError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolve the record format: an explicit flag wins over the config value;
/// when both are absent the adapter layer infers from the file extension.
pub fn resolve_format(
    flag: Option<&str>,
    config: Option<&dyn ConfigPort>,
) -> Result<Option<RecordFormat>, TxlensError> {
    if let Some(value) = flag {
        return RecordFormat::parse(value).map(Some);
    }
    match config.and_then(|c| c.get_string("data", "format")) {
        Some(value) => RecordFormat::parse(&value).map(Some),
        None => Ok(None),
    }
}

fn load_records(
    path: &Path,
    format: Option<RecordFormat>,
) -> Result<Vec<TransactionRecord>, TxlensError> {
    let port = open_source(path, format)?;
    port.fetch_records()
}

/// Resolve the client list: `--client` flags win; otherwise the config's
/// `[report] clients` value, if any.
pub fn resolve_clients(
    overrides: &[String],
    config: &dyn ConfigPort,
) -> Result<Vec<String>, TxlensError> {
    if !overrides.is_empty() {
        return Ok(overrides.to_vec());
    }
    match config.get_string("report", "clients") {
        Some(value) => parse_clients(&value).map_err(|e| TxlensError::ConfigInvalid {
            section: "report".to_string(),
            key: "clients".to_string(),
            reason: e.to_string(),
        }),
        None => Ok(vec![]),
    }
}

fn run_report(
    config_path: &Path,
    data_override: Option<&Path>,
    format_flag: Option<&str>,
    client_overrides: &[String],
    output_path: Option<&Path>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if data_override.is_none() {
        if let Err(e) = validate_data_config(&adapter) {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }
    if let Err(e) = validate_report_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve data path, format, and clients
    let data_path = match data_override {
        Some(p) => p.to_path_buf(),
        None => match adapter.get_string("data", "path") {
            Some(p) => PathBuf::from(p),
            None => {
                eprintln!("error: no data path configured");
                return ExitCode::from(2);
            }
        },
    };

    let format = match resolve_format(format_flag, Some(&adapter)) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let clients = match resolve_clients(client_overrides, &adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Load records
    eprintln!("Loading records from {}", data_path.display());
    let records = match load_records(&data_path, format) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} records", records.len());

    // Stage 4: Run the full query surface
    let engine = TransactionQueryEngine::new(records);
    let summary = match AuditSummary::compute(&engine, &clients) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!("{}", summary.render());

    // Stage 5: Optional file output
    if let Some(output) = output_path {
        if let Err(e) = TextReportAdapter.write(&summary, output) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Report written to: {}", output.display());
    }

    ExitCode::SUCCESS
}

fn run_query(
    operation: QueryOperation,
    name: Option<&str>,
    data_path: &Path,
    format_flag: Option<&str>,
) -> ExitCode {
    let format = match resolve_format(format_flag, None) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let records = match load_records(data_path, format) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let engine = TransactionQueryEngine::new(records);

    match operation {
        QueryOperation::TotalAmount => println!("{}", engine.total_amount()),
        QueryOperation::SentBy => {
            let name = match name {
                Some(n) => n,
                None => {
                    eprintln!("error: --name is required for sent-by");
                    return ExitCode::from(2);
                }
            };
            match engine.total_amount_sent_by(name) {
                Ok(total) => println!("{total}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        QueryOperation::MaxAmount => println!("{}", engine.max_amount()),
        QueryOperation::UniqueClients => println!("{}", engine.count_unique_clients()),
        QueryOperation::OpenIssues => {
            let name = match name {
                Some(n) => n,
                None => {
                    eprintln!("error: --name is required for open-issues");
                    return ExitCode::from(2);
                }
            };
            match engine.has_open_compliance_issue(name) {
                Ok(open) => println!("{open}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        QueryOperation::ByBeneficiary => {
            let map = engine.transactions_by_beneficiary();
            let mut names: Vec<&str> = map.keys().copied().collect();
            names.sort_unstable();
            for beneficiary in names {
                let record = map[beneficiary];
                println!("{}: {} {}", beneficiary, record.id, record.amount);
            }
        }
        QueryOperation::UnsolvedIssueIds => {
            let mut ids: Vec<i64> = engine.unsolved_issue_ids().into_iter().collect();
            ids.sort_unstable();
            for id in ids {
                println!("{id}");
            }
        }
        QueryOperation::SolvedIssueMessages => {
            for message in engine.solved_issue_messages() {
                println!("{message}");
            }
        }
        QueryOperation::Top3 => {
            for record in engine.top3_by_amount() {
                println!(
                    "{} {} -> {} {}",
                    record.id, record.sender_name, record.beneficiary_name, record.amount
                );
            }
        }
        QueryOperation::TopSender => {
            println!("{}", engine.top_sender().unwrap_or("no result"));
        }
    }

    ExitCode::SUCCESS
}

fn run_info(data_path: &Path, format_flag: Option<&str>) -> ExitCode {
    let format = match resolve_format(format_flag, None) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let records = match load_records(data_path, format) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let profile = DatasetProfile::compute(&records);
    print!("{}", profile.render());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_report_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let path = adapter.get_string("data", "path").unwrap_or_default();
    eprintln!("\nResolved settings:");
    eprintln!("  data path: {}", path);
    match adapter.get_string("data", "format") {
        Some(f) => eprintln!("  format:    {}", f),
        None => eprintln!("  format:    inferred from extension"),
    }
    match adapter.get_string("report", "clients") {
        Some(value) => match parse_clients(&value) {
            Ok(clients) => eprintln!("  clients:   {}", clients.join(", ")),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(2);
            }
        },
        None => eprintln!("  clients:   none"),
    }

    eprintln!("\nConfiguration is valid");
    ExitCode::SUCCESS
}
