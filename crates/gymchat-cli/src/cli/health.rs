//! Backend health check: `gymchat health`.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Query `GET /health` and report whether the backend is running.
pub async fn health(state: &AppState, json: bool) -> Result<()> {
    let transport = state.transport()?;
    let result = transport.health().await;

    if json {
        let value = match &result {
            Ok(status) => serde_json::json!({
                "backend": state.config.backend_url,
                "reachable": true,
                "status": status.status,
                "service": status.service,
            }),
            Err(e) => serde_json::json!({
                "backend": state.config.backend_url,
                "reachable": false,
                "error": e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!();
        match &result {
            Ok(status) if status.is_running() => println!(
                "  {} {} is running at {}",
                style("✓").green().bold(),
                status.service.as_deref().unwrap_or("Backend"),
                style(&state.config.backend_url).cyan(),
            ),
            Ok(status) => println!(
                "  {} Backend at {} reports status '{}'",
                style("!").yellow().bold(),
                style(&state.config.backend_url).cyan(),
                status.status,
            ),
            Err(e) => println!(
                "  {} Could not reach {}: {e}",
                style("✗").red().bold(),
                style(&state.config.backend_url).cyan(),
            ),
        }
        println!();
    }

    result?;
    Ok(())
}
