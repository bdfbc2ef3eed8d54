use anyhow::bail;
use clap::{Parser, Subcommand};

mod client;
mod error;
mod models;
mod planner;
mod report;
mod session;
mod stats;

use client::PortalClient;
use models::Selection;
use session::{LoginState, Session};

#[derive(Parser)]
#[command(name = "bunkmate")]
#[command(about = "Attendance dashboard and bunk planner for the college portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in through the scraper backend and print the attendance dashboard
    Dashboard {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Course index to include in the selected aggregate; repeat to build
        /// a subset, omit to include every course
        #[arg(long = "course")]
        courses: Vec<usize>,
    },
    /// Compute how many classes can be skipped next week
    Plan {
        /// Total classes held so far
        #[arg(long)]
        total: u32,
        /// Classes attended so far
        #[arg(long)]
        attended: u32,
        /// Target attendance percentage
        #[arg(long, default_value_t = 75.0)]
        desired: f64,
        /// Classes scheduled per week
        #[arg(long)]
        per_week: u32,
    },
    /// Check that the scraper backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let base_url = std::env::var("BUNKMATE_BACKEND_URL")
        .unwrap_or_else(|_| client::DEFAULT_BACKEND_URL.to_string());

    match cli.command {
        Commands::Dashboard {
            username,
            password,
            courses,
        } => {
            let portal = PortalClient::new(base_url);
            let mut session = Session::new();

            session.begin()?;
            match portal.scrape_attendance(&username, &password).await {
                Ok(snapshot) => session.complete(snapshot),
                Err(err) => session.fail(err.to_string()),
            }

            match session.state() {
                LoginState::Succeeded(snapshot) => {
                    let selection = if courses.is_empty() {
                        Selection::all(snapshot.courses.len())
                    } else {
                        Selection::from_indices(&courses, snapshot.courses.len())?
                    };
                    print!("{}", report::build_dashboard(snapshot, &selection));
                }
                LoginState::Failed(message) => bail!("{message}"),
                LoginState::Idle | LoginState::Pending => bail!("login did not complete"),
            }
        }
        Commands::Plan {
            total,
            attended,
            desired,
            per_week,
        } => {
            let input = planner::BunkInput {
                total_classes: total,
                attended_classes: attended,
                desired_percentage: desired,
                classes_per_week: per_week,
            };
            let verdict = planner::plan(&input)?;
            print!("{}", report::build_plan_summary(&input, verdict));
        }
        Commands::Health => {
            let portal = PortalClient::new(base_url);
            let health = portal.health().await?;
            println!(
                "Backend is {} (browser ready: {}).",
                health.status, health.browser_ready
            );
        }
    }

    Ok(())
}
