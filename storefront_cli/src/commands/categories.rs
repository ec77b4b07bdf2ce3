use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::types::Category;
use storefront_api::{Client, PageQuery};

use crate::commands::read_payload;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoriesAction,
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories (paginated)
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u64,
    },
    /// Print the full parent/child tree
    Hierarchy,
    /// List top-level categories only
    Parents,
    /// Fetch a single category
    Get { id: String },
    /// Create a category from a JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a category from a JSON file
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a category
    Delete { id: String },
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        CategoriesAction::List { page, page_size } => {
            let result = client
                .list_categories(&PageQuery::new(*page, *page_size))
                .await?;
            output::print_paging(&result, "categories");
            match format {
                OutputFormat::Json => output::print_json(&result.items)?,
                OutputFormat::Table => output::print_categories_table(&result.items),
            }
        }
        CategoriesAction::Hierarchy => {
            let tree = client.category_hierarchy().await?;
            // The tree nests arbitrarily; JSON is the only faithful rendering.
            output::print_json(&tree)?;
        }
        CategoriesAction::Parents => {
            let parents = client.parent_categories().await?;
            match format {
                OutputFormat::Json => output::print_json(&parents)?,
                OutputFormat::Table => output::print_categories_table(&parents),
            }
        }
        CategoriesAction::Get { id } => {
            let category = client.get_category(id).await?;
            output::print_json(&category)?;
        }
        CategoriesAction::Create { file } => {
            let payload: Category = read_payload(file)?;
            let created = client.create_category(&payload).await?;
            eprintln!("Created category {}", created.key());
            output::print_json(&created)?;
        }
        CategoriesAction::Update { id, file } => {
            let payload: Category = read_payload(file)?;
            let updated = client.update_category(id, &payload).await?;
            output::print_json(&updated)?;
        }
        CategoriesAction::Delete { id } => {
            client.delete_category(id).await?;
            eprintln!("Deleted category {id}");
        }
    }
    Ok(())
}
