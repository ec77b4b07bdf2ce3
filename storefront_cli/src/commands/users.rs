use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::types::User;
use storefront_api::{Client, PageQuery};

use crate::commands::read_payload;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List user accounts
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u64,
    },
    /// Fetch a single user
    Get { id: String },
    /// Create a user from a JSON file
    Create {
        /// Path to the JSON payload
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a user from a JSON file
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a user
    Delete { id: String },
}

pub async fn run(args: &UsersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        UsersAction::List { page, page_size } => {
            let result = client.list_users(&PageQuery::new(*page, *page_size)).await?;
            output::print_paging(&result, "users");
            match format {
                OutputFormat::Json => output::print_json(&result.items)?,
                OutputFormat::Table => output::print_users_table(&result.items),
            }
        }
        UsersAction::Get { id } => {
            let user = client.get_user(id).await?;
            output::print_json(&user)?;
        }
        UsersAction::Create { file } => {
            let payload: User = read_payload(file)?;
            let created = client.create_user(&payload).await?;
            eprintln!("Created user {}", created.key());
            output::print_json(&created)?;
        }
        UsersAction::Update { id, file } => {
            let payload: User = read_payload(file)?;
            let updated = client.update_user(id, &payload).await?;
            output::print_json(&updated)?;
        }
        UsersAction::Delete { id } => {
            client.delete_user(id).await?;
            eprintln!("Deleted user {id}");
        }
    }
    Ok(())
}
