use crate::config::Config;
use crate::logi;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

fn required_dirs(config: &Config) -> [PathBuf; 3] {
    [
        config.output_dir.clone(),
        config.scripts_dir(),
        config.thumbnails_dir(),
    ]
}

pub async fn ensure_directories(config: &Config) -> Result<()> {
    for dir in required_dirs(config) {
        if fs::metadata(&dir).await.is_err() {
            fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("Failed to create dir {}", dir.display()))?;
            logi(format!("Created directory: {}", dir.display()));
        }
    }
    Ok(())
}
