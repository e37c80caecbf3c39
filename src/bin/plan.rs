//! `plan`: print the best-price order plan for a buy or sell.
//!
//! ```text
//! plan [--data-dir <DIR>] [--config <FILE>] <buy|sell> <amount>
//! ```
//!
//! Exit codes: 0 plan printed, 1 usage or invalid amount, 2 not enough
//! funds or liquidity, 3 configuration or exchange data failure.

use anyhow::Context;
use clap::Parser;
use crypto_order_planner::api::rest::OrderPlanResponse;
use crypto_order_planner::application::error::ApplicationError;
use crypto_order_planner::application::services::{NOT_ENOUGH_FUNDS, OrderPlanner};
use crypto_order_planner::domain::value_objects::OrderType;
use crypto_order_planner::infrastructure::config::Settings;
use crypto_order_planner::infrastructure::logging;
use crypto_order_planner::infrastructure::persistence::FileExchangeRepository;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const EXIT_USAGE: u8 = 1;
const EXIT_NOT_ENOUGH_FUNDS: u8 = 2;
const EXIT_DATA: u8 = 3;

/// Plan orders across exchanges at the best available prices
#[derive(Parser, Debug)]
#[command(name = "plan", version, allow_negative_numbers = true)]
struct Cli {
    /// Directory of exchange JSON snapshots (overrides data.directory)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: config/planner.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Order side: buy or sell
    side: OrderType,

    /// Crypto amount to buy or sell
    amount: Decimal,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let planner = match setup(&cli) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_DATA);
        }
    };

    match planner.plan(cli.amount) {
        Ok(plan) => match OrderPlanResponse::to_pretty_json(&plan) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(EXIT_DATA)
            }
        },
        Err(e) if e.is_insufficient_balance() => {
            println!("{NOT_ENOUGH_FUNDS}");
            ExitCode::from(EXIT_NOT_ENOUGH_FUNDS)
        }
        Err(ApplicationError::Domain(e)) if e.is_invalid_request() => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_DATA)
        }
    }
}

fn setup(cli: &Cli) -> anyhow::Result<OrderPlanner> {
    let settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;
    logging::init(&settings.logging).context("initialising logging")?;

    let directory = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| settings.data.directory.clone());
    let repository = FileExchangeRepository::open(&directory)
        .with_context(|| format!("loading exchanges from {}", directory.display()))?;

    Ok(OrderPlanner::new(cli.side, Arc::new(repository)))
}
