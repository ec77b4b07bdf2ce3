use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use storefront_api::{make_absolute, Client};

#[derive(Args)]
pub struct UploadArgs {
    /// File to upload
    pub path: PathBuf,

    /// Target folder under the backend's static root (e.g. blog, categories)
    #[arg(long, default_value = "uploads")]
    pub folder: String,
}

pub async fn run(args: &UploadArgs, client: &Client) -> Result<()> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let file_name = args
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    let stored = client.upload(&args.folder, &file_name, bytes).await?;

    // Relative path is what entity payloads should reference; the absolute
    // URL is for previewing in a browser.
    println!("{stored}");
    eprintln!("{}", make_absolute(client.base_url(), &stored));
    Ok(())
}
