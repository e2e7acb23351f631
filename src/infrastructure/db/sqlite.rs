use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use std::{path::Path, str::FromStr, time::Duration};

const MAX_CONNECTIONS: u32 = 5;

/// Opens the SQLite database, creating the file and its directory when missing.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true);

    ensure_parent_dir(options.get_filename())?;

    let max_retries = 3;
    let mut retry_count = 0;
    let mut wait_millis = 200;

    loop {
        match SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => {
                info!("Database connection established ({}).", options.get_filename().display());
                return Ok(pool);
            }
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to open database (attempt {}/{}): {}. Retrying in {}ms...",
                    retry_count, max_retries, e, wait_millis);

                tokio::time::sleep(Duration::from_millis(wait_millis)).await;

                wait_millis *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

fn ensure_parent_dir(filename: &Path) -> Result<(), sqlx::Error> {
    match filename.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            std::fs::create_dir_all(dir).map_err(sqlx::Error::Io)
        }
        _ => Ok(()),
    }
}
