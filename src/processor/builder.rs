use std::sync::Arc;

use crate::components::{Passthrough, Report, Sink, Source, Transform};
use crate::job::shared::Shared;

use super::collection::ProcessorCollection;
use super::pipeline::Pipeline;
use super::processor::Processor;

/// Fluent assembly of a [`ProcessorCollection`] over a fixed sink set.
///
/// Every source added with [`add_source`](Self::add_source) fans out to the
/// full sink set given at construction; the same sink instances back every
/// processor, each behind one serialization gate. `build` hands back the
/// runnable topology.
pub struct ProcessorBuilder<U> {
    sinks: Vec<Shared<dyn Sink<U>>>,
    model: ProcessorCollection,
}

impl<U> ProcessorBuilder<U>
where
    U: Send + 'static,
{
    /// Starts a builder over exactly one sink.
    pub fn new(sink: Arc<dyn Sink<U>>) -> Self {
        Self::with_sinks(vec![sink])
    }

    /// Starts a builder over an ordered set of sinks.
    pub fn with_sinks(sinks: Vec<Arc<dyn Sink<U>>>) -> Self {
        ProcessorBuilder {
            sinks: sinks.into_iter().map(Shared::new).collect(),
            model: ProcessorCollection::new("processor-collection"),
        }
    }

    /// Adds a processor feeding the fixed sink set from `source` through
    /// `transform`.
    pub fn add_source<T>(
        mut self,
        id: impl Into<String>,
        source: Arc<dyn Source<T>>,
        transform: Arc<dyn Transform<T, U>>,
    ) -> Self
    where
        T: Send + 'static,
    {
        let processor = Processor::from_shared(
            id,
            Shared::new(source),
            Shared::new(transform),
            self.sinks.clone(),
        );
        self.model.add_processor(Box::new(processor));
        self
    }

    /// Adds a source whose data already has the destination type; a
    /// [`Passthrough`] transform is wired in.
    pub fn add_source_unchanged(self, id: impl Into<String>, source: Arc<dyn Source<U>>) -> Self {
        self.add_source(id, source, Arc::new(Passthrough::default()))
    }

    /// Adds a processor over exactly the given sink, isolated from the fixed
    /// sink set.
    pub fn add_independent_job<T>(
        mut self,
        id: impl Into<String>,
        source: Arc<dyn Source<T>>,
        transform: Arc<dyn Transform<T, U>>,
        sink: Arc<dyn Sink<U>>,
    ) -> Self
    where
        T: Send + 'static,
    {
        let processor = Processor::single(id, source, transform, sink);
        self.model.add_processor(Box::new(processor));
        self
    }

    /// Isolated single-sink job without a conversion step.
    pub fn add_independent_job_unchanged(
        self,
        id: impl Into<String>,
        source: Arc<dyn Source<U>>,
        sink: Arc<dyn Sink<U>>,
    ) -> Self {
        self.add_independent_job(
            id,
            source,
            Arc::new(Passthrough::default()) as Arc<dyn Transform<U, U>>,
            sink,
        )
    }

    /// Appends a report observer on the topology being built.
    pub fn add_report(mut self, report: Arc<dyn Report>) -> Self {
        self.model.add_report(report);
        self
    }

    /// Replaces the topology's observer set wholesale.
    pub fn set_reports(mut self, reports: Vec<Arc<dyn Report>>) -> Self {
        self.model.set_reports(reports);
        self
    }

    /// Hands back the assembled runnable topology.
    pub fn build(self) -> ProcessorCollection {
        self.model
    }
}
