//! mensa CLI entry point.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mensa::auth::{AuthService, RegisterOutcome};
use mensa::cli::{format_output, Cli, Commands};
use mensa::{CachedDocumentStore, Config, Database, JsonBinClient, MenuService};
use mensa_core::account::UserUpdate;
use mensa_core::menu::MenuDocument;
use mensa_core::store::PrimaryDocument;
use mensa_core::ticket::NewTicket;

type PrimaryStore = CachedDocumentStore<PrimaryDocument, JsonBinClient>;
type MenuStore = CachedDocumentStore<MenuDocument, JsonBinClient>;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mensa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let remote = Arc::new(JsonBinClient::from_config(&config));

    match cli.command {
        Commands::Users(users_cmd) => {
            use mensa::cli::users::UsersAction;
            let store: Arc<PrimaryStore> = Arc::new(CachedDocumentStore::new(
                remote,
                config.primary_bin_id.clone(),
                config.cache_ttl(),
            ));
            let db = Database::new(store.clone());
            match users_cmd.action {
                UsersAction::List => {
                    let users = db.users.get_all().await?;
                    println!("{}", format_output(&users, cli.format));
                }
                UsersAction::Find { email } => match db.users.find_by_email(&email).await? {
                    Some(user) => println!("{}", format_output(&user, cli.format)),
                    None => bail!("No account with email {}", email),
                },
                UsersAction::Register {
                    email,
                    password,
                    name,
                } => {
                    let auth = AuthService::new(store, config.student_email_domain.clone());
                    match auth.register(&email, &password, &name).await? {
                        RegisterOutcome::Registered(profile) => {
                            println!("{}", format_output(&profile, cli.format));
                        }
                        RegisterOutcome::EmailTaken => bail!("Email {} already registered", email),
                    }
                }
                UsersAction::SetBalance { id, balance } => {
                    let update = UserUpdate {
                        balance: Some(balance),
                        ..Default::default()
                    };
                    match db.users.update(&id, update).await? {
                        Some(user) => println!("{}", format_output(&user, cli.format)),
                        None => bail!("No user with id {}", id),
                    }
                }
            }
        }
        Commands::Tickets(tickets_cmd) => {
            use mensa::cli::tickets::TicketsAction;
            let store: Arc<PrimaryStore> = Arc::new(CachedDocumentStore::new(
                remote,
                config.primary_bin_id.clone(),
                config.cache_ttl(),
            ));
            let db = Database::new(store);
            match tickets_cmd.action {
                TicketsAction::List => {
                    let tickets = db.tickets.get_all().await?;
                    println!("{}", format_output(&tickets, cli.format));
                }
                TicketsAction::ListUser { user_id } => {
                    let tickets = db.tickets.get_user_tickets(&user_id).await?;
                    println!("{}", format_output(&tickets, cli.format));
                }
                TicketsAction::Create { user_id, extra } => {
                    let extra = match extra {
                        Some(raw) => serde_json::from_str(&raw)
                            .context("--extra must be a JSON object")?,
                        None => serde_json::Map::new(),
                    };
                    let ticket = db.tickets.create(NewTicket { user_id, extra }).await?;
                    println!("{}", format_output(&ticket, cli.format));
                }
                TicketsAction::MarkUsed { id } => match db.tickets.mark_as_used(&id).await? {
                    Some(ticket) => println!("{}", format_output(&ticket, cli.format)),
                    None => bail!("No ticket with id {}", id),
                },
            }
        }
        Commands::Menu(menu_cmd) => {
            use mensa::cli::menu::MenuAction;
            let store: Arc<MenuStore> = Arc::new(CachedDocumentStore::new(
                remote,
                config.menu_bin_id.clone(),
                config.cache_ttl(),
            ));
            let menus = MenuService::new(store);
            match menu_cmd.action {
                MenuAction::Get { date } => match menus.get_for_date(&date).await? {
                    Some(menu) => println!("{}", format_output(&menu, cli.format)),
                    None => bail!("No override for {}", date),
                },
                MenuAction::Resolve { date } => {
                    match menus.get_for_date_with_fallback(&date).await? {
                        Some(menu) => println!("{}", format_output(&menu, cli.format)),
                        None => {
                            if !cli.quiet {
                                println!("No menu configured for {}", date);
                            }
                        }
                    }
                }
                MenuAction::Set { date, menu } => {
                    let menu = serde_json::from_str(&menu).context("menu must be valid JSON")?;
                    menus.save_for_date(&date, menu).await?;
                    if !cli.quiet {
                        println!("Saved override for {}", date);
                    }
                }
                MenuAction::Clear { date } => {
                    menus.clear_override(&date).await?;
                    if !cli.quiet {
                        println!("Cleared override for {}", date);
                    }
                }
                MenuAction::Weekly => {
                    let template = menus.get_weekly_template().await?;
                    println!("{}", format_output(&template, cli.format));
                }
                MenuAction::SetWeekly { template } => {
                    let template =
                        serde_json::from_str(&template).context("template must be valid JSON")?;
                    menus.save_weekly_template(template).await?;
                    if !cli.quiet {
                        println!("Weekly template replaced");
                    }
                }
            }
        }
    }

    Ok(())
}
