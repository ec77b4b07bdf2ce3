use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::types::Product;
use storefront_api::{Client, PageQuery};

use crate::commands::read_payload;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub action: ProductsAction,
}

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List catalog products
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u64,
    },
    /// Fetch a single product
    Get { id: String },
    /// Create a product from a JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a product from a JSON file
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a product
    Delete { id: String },
}

pub async fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        ProductsAction::List { page, page_size } => {
            let result = client
                .list_products(&PageQuery::new(*page, *page_size))
                .await?;
            output::print_paging(&result, "products");
            match format {
                OutputFormat::Json => output::print_json(&result.items)?,
                OutputFormat::Table => output::print_products_table(&result.items),
            }
        }
        ProductsAction::Get { id } => {
            let product = client.get_product(id).await?;
            output::print_json(&product)?;
        }
        ProductsAction::Create { file } => {
            let payload: Product = read_payload(file)?;
            let created = client.create_product(&payload).await?;
            eprintln!("Created product {}", created.key());
            output::print_json(&created)?;
        }
        ProductsAction::Update { id, file } => {
            let payload: Product = read_payload(file)?;
            let updated = client.update_product(id, &payload).await?;
            output::print_json(&updated)?;
        }
        ProductsAction::Delete { id } => {
            client.delete_product(id).await?;
            eprintln!("Deleted product {id}");
        }
    }
    Ok(())
}
