use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::components::{ComponentError, Report};
use crate::job::JobResult;

/// Handle to a started job. Awaiting it yields the job's [`JobResult`]; the
/// result itself never carries a transport error, though a panicking report
/// observer surfaces here as a [`tokio::task::JoinError`].
pub type JobHandle = JoinHandle<JobResult>;

/// A runnable topology: a [`super::Processor`] or a whole
/// [`super::ProcessorCollection`] (collections nest, so a topology is a
/// composite over this trait).
#[async_trait]
pub trait Pipeline: Send {
    fn id(&self) -> &str;

    /// Starts every job of this topology and returns their handles without
    /// waiting for any of them. Jobs run concurrently with no ordering
    /// guarantee between them; waiting on the handles is the caller's
    /// decision.
    ///
    /// Must be called from within a tokio runtime.
    fn run(&mut self) -> Vec<JobHandle>;

    /// Appends a report observer. Takes effect on the next `run`.
    fn add_report(&mut self, report: Arc<dyn Report>);

    /// Replaces the whole observer set. Takes effect on the next `run`.
    fn set_reports(&mut self, reports: Vec<Arc<dyn Report>>);

    /// Closes every owned component that opted into [`crate::components::Disposable`].
    ///
    /// Not idempotent: a second call closes each component again. Errors are
    /// handed straight back to the caller; remaining components are not
    /// closed once one of them fails.
    async fn close(&mut self) -> Result<(), ComponentError>;
}
