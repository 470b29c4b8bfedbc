use crate::job::JobResult;

/// Side-channel consumer of completed job outcomes.
///
/// `on_result` is invoked exactly once per completed job, synchronously,
/// before the job's handle resolves. Jobs complete concurrently, so a report
/// may be called from several runtime threads at once; it must be stateless
/// or synchronize internally. Panics here are not caught by the engine and
/// surface through the job's handle.
pub trait Report: Send + Sync {
    fn on_result(&self, result: &JobResult);
}
