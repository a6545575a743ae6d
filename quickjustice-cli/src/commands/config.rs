//! `config` command: print the effective database settings

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use quickjustice_server::DatabaseConfig;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

const MASK: &str = "********";

/// Hide the password part of a connection URL.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_owned();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:{MASK}@{host}"),
        None => url.to_owned(),
    }
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let url = config.url.as_deref().map(redact_url);

    if args.json {
        let value = json!({
            "host": config.host,
            "port": config.port,
            "name": config.name,
            "user": config.user,
            "password": MASK,
            "url": url,
            "max_connections": config.max_connections,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("DB_HOST            = {}", config.host);
    println!("DB_PORT            = {}", config.port);
    println!("DB_NAME            = {}", config.name);
    println!("DB_USER            = {}", config.user);
    println!("DB_PASSWORD        = {MASK}");
    println!("DB_MAX_CONNECTIONS = {}", config.max_connections);
    if let Some(url) = url {
        println!("DATABASE_URL       = {url}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_password() {
        assert_eq!(
            redact_url("postgres://svc:secret@db:5432/caso3"),
            "postgres://svc:********@db:5432/caso3"
        );
    }

    #[test]
    fn leaves_urls_without_password() {
        assert_eq!(redact_url("postgres://db/caso3"), "postgres://db/caso3");
        assert_eq!(redact_url("postgres://svc@db/caso3"), "postgres://svc@db/caso3");
    }
}
