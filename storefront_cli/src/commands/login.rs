use anyhow::Result;
use clap::Args;
use storefront_api::Client;

#[derive(Args)]
pub struct LoginArgs {
    /// Admin username
    #[arg(long)]
    pub username: String,

    /// Admin password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: &LoginArgs, client: &Client) -> Result<()> {
    let login = client.login(&args.username, &args.password).await?;
    eprintln!("Logged in. Export the token for subsequent commands:");
    println!("export STOREFRONT_TOKEN={}", login.access_token);
    Ok(())
}
