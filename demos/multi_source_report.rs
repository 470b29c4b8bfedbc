//! Example demonstrating a multi-source topology with report observers.
//!
//! This example shows how to:
//! 1. Assemble a topology fluently over a fixed set of sinks
//! 2. Fan two sources (one of which fails) out to both sinks
//! 3. Watch per-job outcomes through a report observer
//!
//! Run with: cargo run --example multi_source_report

use async_trait::async_trait;
use conveyor_etl::components::{ComponentError, Report, Sink, Source};
use conveyor_etl::job::JobResult;
use conveyor_etl::processor::{Pipeline, ProcessorBuilder};
use futures::future::join_all;
use std::sync::Arc;

struct InventorySource;

#[async_trait]
impl Source<Vec<String>> for InventorySource {
    fn id(&self) -> &str {
        "inventory"
    }

    async fn extract(&self) -> Result<Vec<String>, ComponentError> {
        Ok(vec!["bolts".to_string(), "nuts".to_string()])
    }
}

/// Source standing in for an unreachable upstream system
struct OfflineSource;

#[async_trait]
impl Source<Vec<String>> for OfflineSource {
    fn id(&self) -> &str {
        "legacy-erp"
    }

    async fn extract(&self) -> Result<Vec<String>, ComponentError> {
        Err("connection timed out".into())
    }
}

struct ConsoleSink {
    name: String,
}

#[async_trait]
impl Sink<Vec<String>> for ConsoleSink {
    fn id(&self) -> &str {
        &self.name
    }

    async fn load(&self, data: Vec<String>) -> Result<(), ComponentError> {
        println!("[{}] received {:?}", self.name, data);
        Ok(())
    }
}

/// Prints one line per completed job
struct OutcomePrinter;

impl Report for OutcomePrinter {
    fn on_result(&self, result: &JobResult) {
        if result.completed_without_errors() {
            println!(
                "report: {} -> {} completed",
                result.source_id(),
                result.sink_id()
            );
        } else {
            println!(
                "report: {} -> {} failed: {}",
                result.source_id(),
                result.sink_id(),
                result.errors()[0]
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut topology = ProcessorBuilder::with_sinks(vec![
        Arc::new(ConsoleSink {
            name: "warehouse".to_string(),
        }) as Arc<dyn Sink<Vec<String>>>,
        Arc::new(ConsoleSink {
            name: "audit".to_string(),
        }) as Arc<dyn Sink<Vec<String>>>,
    ])
    .add_source_unchanged(
        "inventory",
        Arc::new(InventorySource) as Arc<dyn Source<Vec<String>>>,
    )
    .add_source_unchanged(
        "legacy",
        Arc::new(OfflineSource) as Arc<dyn Source<Vec<String>>>,
    )
    .add_report(Arc::new(OutcomePrinter))
    .build();

    let outcomes = join_all(topology.run()).await;

    let failed = outcomes
        .into_iter()
        .map(|joined| joined.expect("job task panicked"))
        .filter(|result| !result.completed_without_errors())
        .count();
    println!("{failed} job(s) failed");

    topology.close().await?;
    Ok(())
}
