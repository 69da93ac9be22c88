use std::time::Duration;

use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::config;

/// `career ping` - GET /api/health on a running server
pub async fn ping(url: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let base = url.unwrap_or_else(|| {
        format!("http://127.0.0.1:{}", config::config().server.port)
    });
    let target = health_url(&base);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    match client.get(&target).send().await {
        Ok(response) if response.status().is_success() => {
            let body = response.text().await?;
            output_success(
                output_format,
                &format!("{} is up", base),
                Some(json!({ "url": target, "body": body })),
            )
        }
        Ok(response) => {
            output_error(output_format, &format!("{} answered {}", target, response.status()))?;
            anyhow::bail!("health check failed")
        }
        Err(e) => {
            output_error(output_format, &format!("{} unreachable: {}", target, e))?;
            anyhow::bail!("health check failed")
        }
    }
}

fn health_url(base: &str) -> String {
    format!("{}/api/health", base.trim_end_matches('/'))
}
