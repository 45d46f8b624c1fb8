//! `steward` -- operator console for the content governance API.
//!
//! Lists, searches and inspects content records for one tenant, and drives
//! governed lifecycle transitions through the backend. The backend decides
//! which transitions are legal; this console only offers what the server
//! reports as allowed and surfaces rejections verbatim.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description            |
//! |------------------------|----------|-------------------------|------------------------|
//! | `STEWARD_API_BASE_URL` | no       | `http://127.0.0.1:8001` | Backend endpoint       |
//! | `STEWARD_TENANT_SLUG`  | no       | `default`               | Tenant scope slug      |

mod render;

use clap::{Parser, Subcommand};

use steward_client::detail::load_detail;
use steward_client::transition::{TransitionController, TransitionPhase};
use steward_client::{ApiClient, ApiError, ClientConfig};
use steward_core::model::CreateContent;
use steward_core::query::{clamp_limit, clamp_offset, ListQuery, DEFAULT_SORT};
use steward_core::risk::clamp_risk_tier;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "steward", version, about = "Operator console for the content governance API")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List and search content
    List {
        #[arg(long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        q: Option<String>,
    },
    /// Show one item with its allowed transitions and audit trail
    Show { id: String },
    /// Apply a lifecycle transition
    Transition {
        id: String,
        /// Target state; defaults to the first server-allowed state
        #[arg(long)]
        to: Option<String>,
    },
    /// Create a content item
    Create {
        title: String,
        #[arg(long, default_value_t = 1)]
        risk_tier: i64,
    },
    /// Print the backend's workflow states
    States,
    /// Check backend health
    Health,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steward=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(ClientConfig::from_env());

    if let Err(err) = run(cli, &api).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, api: &ApiClient) -> Result<(), ApiError> {
    match cli.command {
        Commands::List {
            limit,
            offset,
            sort,
            q,
        } => {
            let query = ListQuery {
                limit: clamp_limit(limit),
                offset: clamp_offset(offset),
                sort: sort.unwrap_or_else(|| DEFAULT_SORT.to_string()),
                q: q.filter(|q| !q.is_empty()),
            };

            let page = api.list_content(&query).await?;
            if cli.json {
                print_json(&page);
            } else {
                print!("{}", render::page(&page, &query));
            }
        }

        Commands::Show { id } => {
            let view = load_detail(api, &id).await?;
            if cli.json {
                print_json(&view);
            } else {
                print!("{}", render::detail(&view));
            }
        }

        Commands::Transition { id, to } => {
            let allowed = api.get_allowed(&id).await?;
            let mut controller = TransitionController::new(&allowed);

            if !controller.has_options() {
                println!("No allowed transitions available.");
                return Ok(());
            }
            if let Some(to) = to {
                // Deliberately not validated against the allowed-set; the
                // backend is the sole authority and rejections surface below.
                controller.select(&to);
            }

            controller.submit(api).await;

            match controller.phase() {
                TransitionPhase::Succeeded(outcome) => {
                    if cli.json {
                        print_json(outcome);
                    } else {
                        print!("{}", render::outcome(outcome));

                        // The allowed-set and audit trail are stale now;
                        // re-fetch and show the updated record in one fan-out.
                        let view = load_detail(api, controller.content_id()).await?;
                        print!("\n{}", render::detail(&view));
                    }
                }
                TransitionPhase::Failed(detail) => {
                    eprintln!("error: {detail}");
                    std::process::exit(1);
                }
                phase => {
                    tracing::warn!(?phase, "Transition submission did not run");
                }
            }
        }

        Commands::Create { title, risk_tier } => {
            let request = CreateContent {
                title,
                risk_tier: clamp_risk_tier(risk_tier),
            };
            let created = api.create_content(&request).await?;
            if cli.json {
                print_json(&created);
            } else {
                println!("Created {} ({})", created.id, created.state);
            }
        }

        Commands::States => {
            let states = api.workflow_states().await?;
            if cli.json {
                print_json(&states);
            } else {
                for state in &states.states {
                    println!("{state}");
                }
            }
        }

        Commands::Health => {
            let health = api.health().await?;
            if cli.json {
                print_json(&health);
            } else {
                println!(
                    "{} (version {})",
                    if health.ok { "ok" } else { "degraded" },
                    health.version
                );
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("response types are always serialisable")
    );
}
