use super::TokenCommand;
use crate::services::api_token;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, command: TokenCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    match command {
        TokenCommand::New {
            user,
            name,
            expires,
        } => {
            let mut conn = db.get()?;
            let tx = conn.transaction()?;
            let user = api_token::ensure_user(&tx, &user)?;
            let (raw_token, token) =
                api_token::create_token(&tx, &user.id, &name, expires.as_deref())?;
            tx.commit()?;

            println!("Token '{}' for user '{}' (shown once):", token.name, user.username);
            println!("{}", raw_token);
        }
        TokenCommand::List => {
            let tokens = api_token::list_tokens(&db)?;
            if tokens.is_empty() {
                println!("No tokens");
                return Ok(());
            }
            for token in tokens {
                println!(
                    "{}\t{}\t{}\tlast used: {}",
                    token.id,
                    token.prefix,
                    token.name,
                    token.last_used_at.as_deref().unwrap_or("never"),
                );
            }
        }
        TokenCommand::Revoke { id } => {
            let conn = db.get()?;
            if api_token::revoke_token(&conn, id)? {
                println!("Token {} revoked", id);
            } else {
                println!("No token with id {}", id);
            }
        }
    }

    Ok(())
}
