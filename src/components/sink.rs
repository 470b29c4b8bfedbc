use async_trait::async_trait;

use super::disposable::Disposable;
use super::ComponentError;

/// Persists or forwards the final data of a pipeline.
///
/// Within one processor every sink owns its job exclusively; a sink reused
/// across several processors (the builder composes all of its processors over
/// the same sink set) is still called serially, one job at a time.
///
/// An error return surfaces as a loading-phase [`crate::job::JobError`].
#[async_trait]
pub trait Sink<U>: Send + Sync {
    /// Identity reported in job results and error attribution.
    fn id(&self) -> &str;

    /// Writes one batch of destination data.
    async fn load(&self, data: U) -> Result<(), ComponentError>;

    /// Opt-in resource cleanup, probed at disposal time.
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}
