//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: u16, cors_origins: Vec<String>) -> Result<()> {
    println!("🚀 Starting BudgetPilot API server...");
    println!("   Listening: http://{}:{}", host, port);
    if cors_origins.is_empty() {
        println!("   CORS: permissive (local use)");
    } else {
        println!("   CORS origins: {}", cors_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = budgetpilot_server::ServerConfig {
        allowed_origins: cors_origins,
    };
    budgetpilot_server::serve(host, port, config).await?;

    Ok(())
}
