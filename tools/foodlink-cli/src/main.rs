//! Foodlink CLI: command-line consumer of the donation store.
//!
//! Stands in for the role dashboards: lists the cached views, triggers
//! mutations, and feeds scanned QR text to the confirmation handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use foodlink_gateway::{AvailableFilter, GatewayClient, GatewayConfig};
use foodlink_store::{DonationStore, ListKind, Notifier, QrScanHandler, ScanContext, ScanOutcome};
use foodlink_types::{Donation, DonationId};

/// Foodlink donation coordination client
#[derive(Parser, Debug)]
#[command(name = "foodlink")]
#[command(about = "List donations and trigger donation lifecycle actions")]
struct Args {
    /// Base URL of the donation service API
    #[arg(long, default_value = "http://127.0.0.1:8080/api")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List donations available for pickup
    Available {
        /// Restrict to an area PIN code
        #[arg(long)]
        pin: Option<String>,
        /// Restrict to a food type
        #[arg(long)]
        food_type: Option<String>,
    },
    /// List your own donations
    Mine,
    /// List pickup tasks assigned to you
    Tasks,
    /// List expired donations awaiting recycling
    Expired,
    /// Accept a donation as an NGO
    Accept {
        id: String,
        /// Volunteer to assign for pickup
        #[arg(long)]
        volunteer: Option<String>,
    },
    /// Claim a pickup task as a volunteer
    VolunteerAccept { id: String },
    /// Delete one of your own donations
    Delete { id: String },
    /// Claim an expired donation for recycling
    Recycle { id: String },
    /// Confirm a pickup from scanned QR text ("<id>:<token>")
    Confirm {
        scan_text: String,
        /// Treat the scan as a recycling confirmation
        #[arg(long)]
        recycle: bool,
    },
}

/// Notifier that prints to the terminal.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("ok: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

fn print_donations(donations: &[Donation]) {
    if donations.is_empty() {
        println!("(no donations)");
        return;
    }
    println!(
        "{:<26} {:<24} {:<10} {:>8}  {}",
        "ID", "STATUS", "FOOD", "QTY", "LOCATION"
    );
    for d in donations {
        println!(
            "{:<26} {:<24} {:<10} {:>5} {:<2}  {}",
            d.id, d.status, d.food_type, d.quantity, d.unit, d.pickup_location
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOODLINK_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let client = GatewayClient::new(GatewayConfig::new(&args.api_url))
        .context("failed to create gateway client")?;
    let store = Arc::new(DonationStore::new(
        Arc::new(client),
        Arc::new(ConsoleNotifier),
    ));

    match args.command {
        Command::Available { pin, food_type } => {
            store
                .fetch_available(&AvailableFilter { pin, food_type })
                .await;
            print_donations(&store.available());
        }
        Command::Mine => {
            store.fetch_mine().await;
            print_donations(&store.mine());
        }
        Command::Tasks => {
            store.fetch_tasks().await;
            print_donations(&store.tasks());
        }
        Command::Expired => {
            store.fetch_expired().await;
            print_donations(&store.expired());
        }
        Command::Accept { id, volunteer } => {
            store
                .accept(&DonationId::new(id), volunteer.as_deref())
                .await;
            print_donations(&store.mine());
        }
        Command::VolunteerAccept { id } => {
            store.volunteer_accept(&DonationId::new(id)).await;
            print_donations(&store.tasks());
        }
        Command::Delete { id } => {
            store.delete(&DonationId::new(id)).await;
            print_donations(&store.mine());
        }
        Command::Recycle { id } => {
            store.accept_for_recycling(&DonationId::new(id)).await;
            print_donations(&store.expired());
        }
        Command::Confirm { scan_text, recycle } => {
            let context = if recycle {
                ScanContext::Recycle
            } else {
                ScanContext::Pickup
            };
            // The membership check needs the relevant list cached first.
            match context.relevant_list() {
                ListKind::ExpiredRecycling => store.fetch_expired().await,
                _ => store.fetch_tasks().await,
            }

            let handler = QrScanHandler::new(Arc::clone(&store));
            match handler.handle_scan(&scan_text, context).await {
                ScanOutcome::Confirmed => println!("confirmed"),
                ScanOutcome::Rejected | ScanOutcome::RejectedLocally(_) => {
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
