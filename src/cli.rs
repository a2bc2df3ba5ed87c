//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvTradeAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::synthetic_adapter::SyntheticTradeAdapter;
use crate::adapters::text_report_adapter::{self, TextReportAdapter};
use crate::domain::aggregate::{filter_by_fund, group_by_symbol, summarize, TOP_TRADES_LEN};
use crate::domain::error::ArkflowError;
use crate::domain::fund::{Fund, FundFilter};
use crate::domain::trade::Trade;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "arkflow", about = "ARK ETF trade disclosure aggregator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize trades for a fund (or all funds)
    Summary {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long, default_value = "ALL")]
        fund: String,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        synthetic: bool,
    },
    /// Per-symbol grouping, ranked by absolute net value
    Grouped {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long, default_value = "ALL")]
        fund: String,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        synthetic: bool,
    },
    /// Largest trades by market value
    Top {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long, default_value = "ALL")]
        fund: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        synthetic: bool,
    },
    /// List the tracked funds
    Funds {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a disclosure CSV file
    Validate {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Summary {
            data,
            fund,
            json,
            config,
            synthetic,
        } => run_summary(data, &fund, json, config.as_ref(), synthetic),
        Command::Grouped {
            data,
            fund,
            json,
            config,
            synthetic,
        } => run_grouped(data, &fund, json, config.as_ref(), synthetic),
        Command::Top {
            data,
            fund,
            limit,
            config,
            synthetic,
        } => run_top(data, &fund, limit, config.as_ref(), synthetic),
        Command::Funds { data, config } => run_funds(data, config.as_ref()),
        Command::Validate { data, config } => run_validate(data, config.as_ref()),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ArkflowError> {
    FileConfigAdapter::from_file(path).map_err(|e| ArkflowError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Resolve the disclosure file path: `--data` wins, then `[data] path` from
/// the config file.
pub fn resolve_data_path(
    data: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<PathBuf, ArkflowError> {
    if let Some(path) = data {
        return Ok(path);
    }
    config
        .and_then(|c| c.get_string("data", "path"))
        .map(PathBuf::from)
        .ok_or_else(|| ArkflowError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        })
}

struct Inputs {
    trades: Vec<Trade>,
    label: String,
    config: Option<FileConfigAdapter>,
}

fn load_inputs(
    data: Option<PathBuf>,
    fund: &str,
    config_path: Option<&PathBuf>,
    synthetic: bool,
) -> Result<Inputs, ArkflowError> {
    let config = match config_path {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let filter: FundFilter = fund.parse()?;

    let path = resolve_data_path(data, config.as_ref())?;
    eprintln!("Loading trades from {}", path.display());

    let csv_port = CsvTradeAdapter::new(path);
    let use_synthetic = synthetic
        || config
            .as_ref()
            .map(|c| c.get_bool("data", "synthetic", false))
            .unwrap_or(false);

    let all_trades = if use_synthetic {
        eprintln!("Fabricating per-fund demo data (deterministic)");
        SyntheticTradeAdapter::new(csv_port).fetch_trades()?
    } else {
        csv_port.fetch_trades()?
    };

    let trades = filter_by_fund(&all_trades, filter);
    eprintln!("{} of {} trades match {}", trades.len(), all_trades.len(), filter);

    Ok(Inputs {
        trades,
        label: filter.to_string(),
        config,
    })
}

/// Display cap for `top`: `--limit` wins, then `[display] top_trades`.
/// Negative config values fall back to the default instead of wrapping.
fn resolve_top_limit(limit: Option<usize>, config: Option<&FileConfigAdapter>) -> usize {
    if let Some(limit) = limit {
        return limit;
    }
    config
        .map(|c| c.get_int("display", "top_trades", TOP_TRADES_LEN as i64))
        .filter(|&n| n >= 0)
        .map(|n| n as usize)
        .unwrap_or(TOP_TRADES_LEN)
}

fn report_failure(err: ArkflowError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

fn run_summary(
    data: Option<PathBuf>,
    fund: &str,
    json: bool,
    config_path: Option<&PathBuf>,
    synthetic: bool,
) -> ExitCode {
    let inputs = match load_inputs(data, fund, config_path, synthetic) {
        Ok(i) => i,
        Err(e) => return report_failure(e),
    };

    let summary = match summarize(&inputs.trades) {
        Ok(s) => s,
        Err(e) => return report_failure(e),
    };

    let report: &dyn ReportPort = if json {
        &JsonReportAdapter
    } else {
        &TextReportAdapter
    };
    match report.render_summary(&summary, &inputs.label) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(e),
    }
}

fn run_grouped(
    data: Option<PathBuf>,
    fund: &str,
    json: bool,
    config_path: Option<&PathBuf>,
    synthetic: bool,
) -> ExitCode {
    let inputs = match load_inputs(data, fund, config_path, synthetic) {
        Ok(i) => i,
        Err(e) => return report_failure(e),
    };

    let groups = match group_by_symbol(&inputs.trades) {
        Ok(g) => g,
        Err(e) => return report_failure(e),
    };

    let report: &dyn ReportPort = if json {
        &JsonReportAdapter
    } else {
        &TextReportAdapter
    };
    match report.render_grouped(&groups, &inputs.label) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(e),
    }
}

fn run_top(
    data: Option<PathBuf>,
    fund: &str,
    limit: Option<usize>,
    config_path: Option<&PathBuf>,
    synthetic: bool,
) -> ExitCode {
    let inputs = match load_inputs(data, fund, config_path, synthetic) {
        Ok(i) => i,
        Err(e) => return report_failure(e),
    };

    let summary = match summarize(&inputs.trades) {
        Ok(s) => s,
        Err(e) => return report_failure(e),
    };

    // Display cap only; summaries always carry up to ten top trades.
    let limit = resolve_top_limit(limit, inputs.config.as_ref());
    println!("{} largest trades", inputs.label);
    for trade in summary.trades.iter().take(limit) {
        println!(
            "  {:<8} {:<4} {:>10} {:>12} {}",
            trade.symbol,
            trade.direction.to_string(),
            text_report_adapter::millions(trade.market_value),
            trade.date.to_string(),
            trade.fund
        );
    }
    ExitCode::SUCCESS
}

fn run_funds(data: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(e) => return report_failure(e),
        },
        None => None,
    };

    // Without a data file, list the whole closed set.
    let funds: Vec<Fund> = match resolve_data_path(data, config.as_ref()) {
        Ok(path) => {
            eprintln!("Loading trades from {}", path.display());
            match CsvTradeAdapter::new(path).list_funds() {
                Ok(funds) => funds,
                Err(e) => return report_failure(e),
            }
        }
        Err(_) => Fund::ALL.to_vec(),
    };

    for fund in funds {
        println!("{:<6} {}", fund.ticker(), fund.full_name());
    }
    ExitCode::SUCCESS
}

fn run_validate(data: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(e) => return report_failure(e),
        },
        None => None,
    };

    let path = match resolve_data_path(data, config.as_ref()) {
        Ok(p) => p,
        Err(e) => return report_failure(e),
    };

    match CsvTradeAdapter::new(path).fetch_trades() {
        Ok(trades) => {
            println!("OK: {} trades", trades.len());
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(e),
    }
}
