use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::types::Blog;
use storefront_api::{Client, PageQuery};

use crate::commands::read_payload;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct BlogsArgs {
    #[command(subcommand)]
    pub action: BlogsAction,
}

#[derive(Subcommand)]
pub enum BlogsAction {
    /// List blog posts
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u64,
    },
    /// Fetch a single post
    Get { id: String },
    /// Create a post from a JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a post from a JSON file
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a post
    Delete { id: String },
}

pub async fn run(args: &BlogsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        BlogsAction::List { page, page_size } => {
            let result = client.list_blogs(&PageQuery::new(*page, *page_size)).await?;
            output::print_paging(&result, "blogs");
            match format {
                OutputFormat::Json => output::print_json(&result.items)?,
                OutputFormat::Table => output::print_blogs_table(&result.items),
            }
        }
        BlogsAction::Get { id } => {
            let blog = client.get_blog(id).await?;
            output::print_json(&blog)?;
        }
        BlogsAction::Create { file } => {
            let payload: Blog = read_payload(file)?;
            let created = client.create_blog(&payload).await?;
            eprintln!("Created blog {}", created.key());
            output::print_json(&created)?;
        }
        BlogsAction::Update { id, file } => {
            let payload: Blog = read_payload(file)?;
            let updated = client.update_blog(id, &payload).await?;
            output::print_json(&updated)?;
        }
        BlogsAction::Delete { id } => {
            client.delete_blog(id).await?;
            eprintln!("Deleted blog {id}");
        }
    }
    Ok(())
}
