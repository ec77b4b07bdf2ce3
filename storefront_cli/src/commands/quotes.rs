use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::{Client, PageQuery};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct QuotesArgs {
    #[command(subcommand)]
    pub action: QuotesAction,
}

#[derive(Subcommand)]
pub enum QuotesAction {
    /// List quote requests
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u64,
    },
    /// Fetch a single quote request
    Get { id: String },
    /// Delete a quote request
    Delete { id: String },
}

pub async fn run(args: &QuotesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        QuotesAction::List { page, page_size } => {
            let result = client
                .list_quotes(&PageQuery::new(*page, *page_size))
                .await?;
            output::print_paging(&result, "quotes");
            match format {
                OutputFormat::Json => output::print_json(&result.items)?,
                OutputFormat::Table => output::print_quotes_table(&result.items),
            }
        }
        QuotesAction::Get { id } => {
            let quote = client.get_quote(id).await?;
            output::print_json(&quote)?;
        }
        QuotesAction::Delete { id } => {
            client.delete_quote(id).await?;
            eprintln!("Deleted quote {id}");
        }
    }
    Ok(())
}
