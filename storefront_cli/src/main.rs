mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_api::{Client, Error, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "storefront-admin")]
#[command(about = "Manage storefront content over the admin REST API")]
struct Cli {
    /// Backend base URL. Falls back to STOREFRONT_API_URL, then localhost.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Obtain an access token
    Login(commands::login::LoginArgs),
    /// Manage user accounts
    Users(commands::users::UsersArgs),
    /// Manage catalog products
    Products(commands::products::ProductsArgs),
    /// Manage product categories
    Categories(commands::categories::CategoriesArgs),
    /// Manage blog posts
    Blogs(commands::blogs::BlogsArgs),
    /// Review quote requests
    Quotes(commands::quotes::QuotesArgs),
    /// Review contact-form submissions
    Contacts(commands::contacts::ContactsArgs),
    /// Upload a file to the backend's static storage
    Upload(commands::upload::UploadArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli).await {
        match err.downcast_ref::<Error>() {
            Some(api_err) => eprintln!("Error: {}", describe(api_err)),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("STOREFRONT_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());

    let session = match std::env::var("STOREFRONT_TOKEN") {
        Ok(token) if !token.is_empty() => Session::with_token(token),
        _ => Session::new(),
    };
    let client = Client::with_session(&base_url, session)?;

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Login(args) => commands::login::run(args, &client).await?,
        Commands::Users(args) => commands::users::run(args, &client, &format).await?,
        Commands::Products(args) => commands::products::run(args, &client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Blogs(args) => commands::blogs::run(args, &client, &format).await?,
        Commands::Quotes(args) => commands::quotes::run(args, &client, &format).await?,
        Commands::Contacts(args) => commands::contacts::run(args, &client, &format).await?,
        Commands::Upload(args) => commands::upload::run(args, &client).await?,
    }

    Ok(())
}

/// Operator-facing copy for transport errors. Presentation only; the typed
/// variants carry the real classification.
fn describe(err: &Error) -> String {
    match err {
        Error::Network(_) => "network unreachable; is the backend running?".to_string(),
        Error::Unauthorized => {
            "unauthorized; run `storefront-admin login` and export STOREFRONT_TOKEN".to_string()
        }
        Error::NotFound => "no such record".to_string(),
        Error::Server { status, .. } => format!("server error (HTTP {status}), try again later"),
        other => other.to_string(),
    }
}
