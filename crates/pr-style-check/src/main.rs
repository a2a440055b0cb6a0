use anyhow::Result;
use gh_client::{DryRunClient, GitHubClient, OctocrabClient};
use pr_style_check::{checker, logger, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Real environment variables take precedence over .env
    let dotenv = dotenvy::dotenv();

    logger::init();

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No .env file found"),
        Err(e) => log::warn!("Failed to load .env file: {}", e),
    }

    let config = Config::from_env()?;
    log::debug!("Configuration: {:?}", config);

    let client = OctocrabClient::from_token(config.token.clone(), config.api_url.as_deref())?;
    let client: Box<dyn GitHubClient> = if config.dry_run {
        log::info!("Dry run: review comments will be logged, not posted");
        Box::new(DryRunClient::new(client))
    } else {
        Box::new(client)
    };

    checker::run(client.as_ref(), &config).await?;

    log::info!(
        "Style check finished for {}#{}",
        config.repository,
        config.pr_number
    );
    Ok(())
}
