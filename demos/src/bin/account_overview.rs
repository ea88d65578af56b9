//! Demo: Exchange status and account overview
//!
//! Showcases: public and private REST calls, error inspection
//!
//! Run: cargo run --bin account_overview
//!
//! Set GMO_API_KEY and GMO_API_SECRET for the private section.
//! Set RUST_LOG=gmo_rest=debug to trace requests.

use colored::*;
use gmo_auth::Credentials;
use gmo_rest::{ClientConfig, GmoRestClient, RestError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  GMO COIN ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let mut config = ClientConfig::new().with_user_agent("gmo-demos/0.1.0");
    match Credentials::from_env() {
        Ok(credentials) => config = config.with_credentials(credentials),
        Err(e) => println!("{} {} (private section skipped)\n", "!".yellow(), e),
    }
    let client = GmoRestClient::with_config(config)?;

    // ========================================================================
    // PUBLIC ENDPOINTS - No authentication required
    // ========================================================================

    println!("{}", "--- Public ---".white().bold());

    match client.status().await {
        Ok(reply) => println!("  Exchange status: {:?}", reply.data().status),
        Err(e) => report(&e),
    }

    match client.ticker(Some("BTC")).await {
        Ok(reply) => {
            for ticker in reply.data() {
                println!(
                    "  {:<8} last {:>12}  bid {:>12}  ask {:>12}",
                    ticker.symbol, ticker.last, ticker.bid, ticker.ask
                );
            }
        }
        Err(e) => report(&e),
    }
    println!();

    if !client.has_credentials() {
        return Ok(());
    }

    // ========================================================================
    // PRIVATE ENDPOINTS - Signed requests
    // ========================================================================

    println!("{}", "--- Account ---".white().bold());

    match client.margin().await {
        Ok(reply) => {
            let margin = reply.data();
            println!("  Available:    {}", margin.available_amount);
            println!("  Margin:       {}", margin.margin);
            println!("  Margin ratio: {}%", margin.margin_ratio);
            println!("  Profit/loss:  {}", margin.profit_loss);
            println!("  Call status:  {:?}", margin.margin_call_status);
        }
        Err(e) => report(&e),
    }

    match client.assets().await {
        Ok(reply) => {
            for asset in reply.data() {
                println!(
                    "  {:<6} {:>16} (available {})",
                    asset.symbol, asset.amount, asset.available
                );
            }
        }
        Err(e) => report(&e),
    }

    Ok(())
}

fn report(error: &RestError) {
    println!("  {} {}", "✗".red(), error);
    if let Some(response) = error.response() {
        println!("    HTTP {}: {}", response.status, response.body_text());
    }
}
