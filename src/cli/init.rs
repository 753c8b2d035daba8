use crate::services::api_token;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"[site]
title = "My Site"
description = "A personal blog and portfolio"
url = "http://localhost:4201"

[server]
host = "127.0.0.1"
port = 4201

[database]
path = "data/atelier.db"

[content]
default_page_size = 10
max_page_size = 100

[storage]
upload_dir = "uploads"
public_base_url = "http://localhost:4201/uploads"

[cors]
allowed_origins = []
"#;

pub fn run(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    let config_path = path.join("atelier.toml");

    if config_path.exists() {
        anyhow::bail!("'{}' already exists", config_path.display());
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    let config = Config::load(&config_path)?;
    let db = Database::open(&path.join(&config.database.path).to_string_lossy())?;
    db.migrate()?;

    let mut conn = db.get()?;
    let tx = conn.transaction()?;
    let user = api_token::ensure_user(&tx, "admin")?;
    let (raw_token, _) = api_token::create_token(&tx, &user.id, "initial", None)?;
    tx.commit()?;

    println!("Site scaffolded at {}", path.display());
    println!("Admin API token (shown once): {}", raw_token);
    println!("Start the server with: atelier serve");

    Ok(())
}
