use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_api::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ContactsArgs {
    #[command(subcommand)]
    pub action: ContactsAction,
}

#[derive(Subcommand)]
pub enum ContactsAction {
    /// List contact-form submissions (unpaginated)
    List,
    /// Delete a submission
    Delete { id: String },
}

pub async fn run(args: &ContactsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        ContactsAction::List => {
            let contacts = client.list_contacts().await?;
            eprintln!("{} contacts", contacts.len());
            match format {
                OutputFormat::Json => output::print_json(&contacts)?,
                OutputFormat::Table => output::print_contacts_table(&contacts),
            }
        }
        ContactsAction::Delete { id } => {
            client.delete_contact(id).await?;
            eprintln!("Deleted contact {id}");
        }
    }
    Ok(())
}
