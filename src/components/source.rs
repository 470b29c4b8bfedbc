use async_trait::async_trait;

use super::disposable::Disposable;
use super::ComponentError;

/// Produces the raw input of a pipeline.
///
/// One source instance is shared by every job of its processor. The engine
/// serializes calls into a shared instance, so implementations may keep
/// unsynchronized internal state; they must still be `Send + Sync` because
/// jobs run on a multi-threaded runtime.
///
/// An error return surfaces as an extraction-phase [`crate::job::JobError`]
/// in the job's result; it never aborts sibling jobs.
#[async_trait]
pub trait Source<T>: Send + Sync {
    /// Identity reported in job results and error attribution.
    fn id(&self) -> &str;

    /// Produces one batch of source data.
    async fn extract(&self) -> Result<T, ComponentError>;

    /// Opt-in resource cleanup, probed at disposal time.
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}
