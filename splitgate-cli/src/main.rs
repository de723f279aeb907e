//! Splitgate command-line interface.
//!
//! # Usage
//!
//! ```bash
//! # Check whether a wallet clears the token gate
//! splitgate check-gate --node http://localhost:9334 \
//!     --price-url https://feed.example/price --mint <MINT> <WALLET>
//!
//! # Preview a fee split without touching the ledger
//! splitgate build-split --total 10 --market-making 50 --buyback 20 \
//!     --liquidity 20 --revenue 10 --from <WALLET> ... --dry-run
//!
//! # Query a wallet's native balance
//! splitgate balance --node http://localhost:9334 <WALLET>
//! ```

use std::collections::HashSet;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitgate_client::{
    BalanceSource, DistributionBuilder, GateConfig, LedgerClient, PriceFeedClient, TokenGate,
    DEFAULT_MIN_USD,
};
use splitgate_core::{Address, AllocationSet, DestinationSet};

/// Splitgate fee router CLI.
#[derive(Parser)]
#[command(name = "splitgate")]
#[command(about = "Fee distribution and token-gate tooling")]
#[command(version)]
struct Cli {
    /// Ledger node JSON-RPC URL.
    #[arg(long, global = true, default_value = "http://127.0.0.1:9334")]
    node: String,

    /// Price feed base URL.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080/price")]
    price_url: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a wallet clears the token gate.
    CheckGate {
        /// Wallet address to check.
        wallet: String,

        /// Designated token mint identifier.
        #[arg(long)]
        mint: String,

        /// Minimum USD value of holdings required.
        #[arg(long, default_value_t = DEFAULT_MIN_USD)]
        min_usd: f64,

        /// Comma-separated whitelist of exempt addresses.
        #[arg(long, value_delimiter = ',')]
        whitelist: Option<Vec<String>>,
    },

    /// Build an unsigned fee-split transaction.
    BuildSplit {
        /// Source wallet (also the fee payer).
        #[arg(long)]
        from: String,

        /// Total amount to split, in native units.
        #[arg(long)]
        total: f64,

        /// Market-making weight in percent.
        #[arg(long, default_value_t = 0.0)]
        market_making: f64,

        /// Buyback weight in percent.
        #[arg(long, default_value_t = 0.0)]
        buyback: f64,

        /// Liquidity weight in percent.
        #[arg(long, default_value_t = 0.0)]
        liquidity: f64,

        /// Revenue weight in percent.
        #[arg(long, default_value_t = 0.0)]
        revenue: f64,

        /// Market-making destination address.
        #[arg(long, default_value = "")]
        to_market_making: String,

        /// Buyback destination address.
        #[arg(long, default_value = "")]
        to_buyback: String,

        /// Liquidity destination address.
        #[arg(long, default_value = "")]
        to_liquidity: String,

        /// Revenue destination address.
        #[arg(long, default_value = "")]
        to_revenue: String,

        /// Only print the breakdown; skip the ledger entirely.
        #[arg(long)]
        dry_run: bool,
    },

    /// Query a wallet's native-currency balance.
    Balance {
        /// Wallet address to query.
        wallet: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    tracing::info!("splitgate v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::CheckGate {
            wallet,
            mint,
            min_usd,
            whitelist,
        } => cmd_check_gate(&cli.node, &cli.price_url, &wallet, mint, min_usd, whitelist).await,
        Commands::BuildSplit {
            from,
            total,
            market_making,
            buyback,
            liquidity,
            revenue,
            to_market_making,
            to_buyback,
            to_liquidity,
            to_revenue,
            dry_run,
        } => {
            let allocations = AllocationSet {
                market_making,
                buyback,
                liquidity,
                revenue,
            };
            let destinations = DestinationSet {
                market_making: to_market_making,
                buyback: to_buyback,
                liquidity: to_liquidity,
                revenue: to_revenue,
            };
            cmd_build_split(&cli.node, &from, &allocations, total, &destinations, dry_run).await
        }
        Commands::Balance { wallet } => cmd_balance(&cli.node, &wallet).await,
    }
}

async fn cmd_check_gate(
    node: &str,
    price_url: &str,
    wallet: &str,
    mint: String,
    min_usd: f64,
    whitelist: Option<Vec<String>>,
) -> anyhow::Result<()> {
    let mut exempt = HashSet::new();
    for entry in whitelist.unwrap_or_default() {
        let address: Address = entry
            .parse()
            .with_context(|| format!("invalid whitelist address: {:?}", entry))?;
        exempt.insert(address);
    }

    let config = GateConfig::new(mint)
        .with_min_usd(min_usd)
        .with_whitelist(exempt);
    let gate = TokenGate::new(config, LedgerClient::new(node), PriceFeedClient::new(price_url));

    let decision = gate.check(wallet).await;
    println!("{}", serde_json::to_string_pretty(&decision)?);

    if !decision.allowed {
        std::process::exit(1);
    }
    Ok(())
}

async fn cmd_build_split(
    node: &str,
    from: &str,
    allocations: &AllocationSet,
    total: f64,
    destinations: &DestinationSet,
    dry_run: bool,
) -> anyhow::Result<()> {
    let builder = DistributionBuilder::new(LedgerClient::new(node));

    if dry_run {
        let breakdown = builder.preview(total, allocations)?;
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let outcome = builder
        .build(from, allocations, total, destinations)
        .await
        .context("failed to build distribution")?;

    println!("Breakdown:");
    println!("{}", serde_json::to_string_pretty(&outcome.breakdown)?);
    println!("Unsigned transaction ({} bytes):", outcome.unsigned_tx.len());
    println!("{}", hex::encode(&outcome.unsigned_tx));
    Ok(())
}

async fn cmd_balance(node: &str, wallet: &str) -> anyhow::Result<()> {
    let client = LedgerClient::new(node);
    let balance = client
        .native_balance(wallet)
        .await
        .context("balance query failed")?;
    println!("{}", balance);
    Ok(())
}
