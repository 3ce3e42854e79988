//! Basic logger usage example
//!
//! Ships a few records to a local collector and reports delivery stats.
//! Point it at any HTTP endpoint accepting JSON POSTs; with the collector
//! down, the records park in the retry queue instead.
//!
//! Run with: cargo run --example basic_usage

use relay_logger::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Relay Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .endpoint("http://localhost:4000/logs")
        .app_name("shortener")
        .environment("development")
        .flush_interval_ms(2000)
        .build()?;

    logger.info("UI", "shortener", "link created", None);
    logger.warn(
        "UI",
        "redirect",
        "unknown short code",
        Some(RecordMeta::new().with_field("code", "ab3xZ")),
    );
    logger.error("UI", "storage", "quota exceeded", None);

    // give the detached deliveries (or the first retry pass) time to run
    tokio::time::sleep(Duration::from_secs(3)).await;

    let stats = logger.stats();
    println!("\ndelivered: {}", stats.delivered_count());
    println!("queued for retry: {}", stats.queued_count());
    println!("flush passes: {}", stats.flush_pass_count());

    println!("\n=== Example completed ===");

    Ok(())
}
