use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::components::{ComponentError, Report};

use super::pipeline::{JobHandle, Pipeline};

/// A composite of processors sharing one reporting surface.
///
/// The collection is the single source of truth for report observers: right
/// before each child runs, its observer set is overwritten (not merged) with
/// the collection's current set. Children keep their insertion order;
/// collections nest, since a child is anything implementing [`Pipeline`].
pub struct ProcessorCollection {
    id: String,
    processors: Vec<Box<dyn Pipeline>>,
    reports: Vec<Arc<dyn Report>>,
}

impl ProcessorCollection {
    pub fn new(id: impl Into<String>) -> Self {
        ProcessorCollection {
            id: id.into(),
            processors: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn add_processor(&mut self, processor: Box<dyn Pipeline>) {
        self.processors.push(processor);
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

#[async_trait]
impl Pipeline for ProcessorCollection {
    fn id(&self) -> &str {
        &self.id
    }

    fn run(&mut self) -> Vec<JobHandle> {
        debug!(collection = %self.id, processors = self.processors.len(), "running collection");

        let mut handles = Vec::new();
        for processor in &mut self.processors {
            processor.set_reports(self.reports.clone());
            handles.extend(processor.run());
        }
        handles
    }

    fn add_report(&mut self, report: Arc<dyn Report>) {
        self.reports.push(report);
    }

    fn set_reports(&mut self, reports: Vec<Arc<dyn Report>>) {
        self.reports = reports;
    }

    async fn close(&mut self) -> Result<(), ComponentError> {
        for processor in &mut self.processors {
            processor.close().await?;
        }
        Ok(())
    }
}
