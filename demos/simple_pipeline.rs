//! Minimal pipeline demonstrating the conveyor-etl engine.
//!
//! Extracts the numbers 1-20, squares them, and loads them by printing to
//! stdout, then inspects the job outcome.
//!
//! Run with: cargo run --example simple_pipeline

use async_trait::async_trait;
use conveyor_etl::components::{ComponentError, Sink, Source, Transform};
use conveyor_etl::processor::{Pipeline, Processor};
use std::sync::Arc;

/// Produces a fixed range of numbers
struct NumberSource {
    upper: i32,
}

#[async_trait]
impl Source<Vec<i32>> for NumberSource {
    fn id(&self) -> &str {
        "numbers"
    }

    async fn extract(&self) -> Result<Vec<i32>, ComponentError> {
        Ok((1..=self.upper).collect())
    }
}

/// Squares every number in the batch
struct SquareTransform;

#[async_trait]
impl Transform<Vec<i32>, Vec<i32>> for SquareTransform {
    fn id(&self) -> &str {
        "square"
    }

    async fn apply(&self, input: Vec<i32>) -> Result<Vec<i32>, ComponentError> {
        Ok(input.into_iter().map(|n| n * n).collect())
    }
}

/// Prints the batch to stdout
struct ConsoleSink;

#[async_trait]
impl Sink<Vec<i32>> for ConsoleSink {
    fn id(&self) -> &str {
        "console"
    }

    async fn load(&self, data: Vec<i32>) -> Result<(), ComponentError> {
        println!("loaded batch of {} items:", data.len());
        for item in data {
            println!("  {item}");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing for logs
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut pipeline = Processor::single(
        "squares",
        Arc::new(NumberSource { upper: 20 }) as Arc<dyn Source<Vec<i32>>>,
        Arc::new(SquareTransform) as Arc<dyn Transform<Vec<i32>, Vec<i32>>>,
        Arc::new(ConsoleSink) as Arc<dyn Sink<Vec<i32>>>,
    );

    for handle in pipeline.run() {
        let result = handle.await?;
        println!(
            "{} -> {} via {}: ok={}",
            result.source_id(),
            result.sink_id(),
            result.transform_id(),
            result.completed_without_errors()
        );
    }

    pipeline.close().await?;
    Ok(())
}
