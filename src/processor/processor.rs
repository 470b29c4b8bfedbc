use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

use crate::components::{ComponentError, Report, Sink, Source, Transform};
use crate::job::shared::Shared;
use crate::job::unit::Job;
use crate::job::JobResult;

use super::pipeline::{JobHandle, Pipeline};

/// One source/transform pair fanned out to N sinks via N jobs.
///
/// All jobs share the source and transform instances; the engine serializes
/// calls into each shared instance, so the fan-out is safe for stateful
/// components. Resources are released only through an explicit
/// [`Pipeline::close`].
pub struct Processor<T, U> {
    id: String,
    source: Shared<dyn Source<T>>,
    transform: Shared<dyn Transform<T, U>>,
    sinks: Vec<Shared<dyn Sink<U>>>,
    jobs: Vec<Job<T, U>>,
    reports: Vec<Arc<dyn Report>>,
}

impl<T, U> Processor<T, U>
where
    T: Send + 'static,
    U: Send + 'static,
{
    /// Creates a processor with one job per sink. An empty sink list is
    /// allowed and yields a processor that runs nothing but still closes its
    /// source and transform on disposal.
    pub fn new(
        id: impl Into<String>,
        source: Arc<dyn Source<T>>,
        transform: Arc<dyn Transform<T, U>>,
        sinks: Vec<Arc<dyn Sink<U>>>,
    ) -> Self {
        Self::from_shared(
            id,
            Shared::new(source),
            Shared::new(transform),
            sinks.into_iter().map(Shared::new).collect(),
        )
    }

    /// Convenience constructor for the single-sink case.
    pub fn single(
        id: impl Into<String>,
        source: Arc<dyn Source<T>>,
        transform: Arc<dyn Transform<T, U>>,
        sink: Arc<dyn Sink<U>>,
    ) -> Self {
        Self::new(id, source, transform, vec![sink])
    }

    /// Builds over pre-wrapped sink handles so a sink instance reused across
    /// processors keeps one serialization gate.
    pub(crate) fn from_shared(
        id: impl Into<String>,
        source: Shared<dyn Source<T>>,
        transform: Shared<dyn Transform<T, U>>,
        sinks: Vec<Shared<dyn Sink<U>>>,
    ) -> Self {
        let jobs = sinks
            .iter()
            .map(|sink| Job::new(source.clone(), transform.clone(), sink.clone()))
            .collect();

        Processor {
            id: id.into(),
            source,
            transform,
            sinks,
            jobs,
            reports: Vec::new(),
        }
    }

    /// Wraps a prepared job so every report observer sees its result before
    /// the handle resolves. With no observers the work is passed through
    /// untouched.
    fn with_reports(
        &self,
        work: impl Future<Output = JobResult> + Send + 'static,
    ) -> BoxFuture<'static, JobResult> {
        if self.reports.is_empty() {
            return work.boxed();
        }

        let reports = self.reports.clone();
        async move {
            let result = work.await;
            for report in &reports {
                report.on_result(&result);
            }
            result
        }
        .boxed()
    }
}

#[async_trait]
impl<T, U> Pipeline for Processor<T, U>
where
    T: Send + 'static,
    U: Send + 'static,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn run(&mut self) -> Vec<JobHandle> {
        // Every job is prepared cold before the first one starts.
        let prepared: Vec<BoxFuture<'static, JobResult>> = self
            .jobs
            .iter()
            .map(|job| self.with_reports(job.prepare()))
            .collect();

        debug!(processor = %self.id, jobs = prepared.len(), "starting jobs");
        prepared.into_iter().map(tokio::spawn).collect()
    }

    fn add_report(&mut self, report: Arc<dyn Report>) {
        self.reports.push(report);
    }

    fn set_reports(&mut self, reports: Vec<Arc<dyn Report>>) {
        self.reports = reports;
    }

    async fn close(&mut self) -> Result<(), ComponentError> {
        debug!(processor = %self.id, "closing components");

        if let Some(disposable) = self.source.get().as_disposable() {
            disposable.close().await?;
        }
        if let Some(disposable) = self.transform.get().as_disposable() {
            disposable.close().await?;
        }
        for sink in &self.sinks {
            if let Some(disposable) = sink.get().as_disposable() {
                disposable.close().await?;
            }
        }

        Ok(())
    }
}
