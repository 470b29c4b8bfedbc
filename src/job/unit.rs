use std::future::Future;

use tracing::warn;

use crate::components::{Sink, Source, Transform};

use super::result::JobResult;
use super::shared::Shared;
use super::types::{JobError, Phase};

/// One source→transform→sink chain, the smallest schedulable piece of work.
///
/// A job shares its source and transform with sibling jobs of the same
/// processor and owns its sink exclusively. It is stateless between runs:
/// every call to [`Job::prepare`] yields a fresh unit of work.
pub(crate) struct Job<T, U> {
    source: Shared<dyn Source<T>>,
    transform: Shared<dyn Transform<T, U>>,
    sink: Shared<dyn Sink<U>>,
}

impl<T, U> Job<T, U>
where
    T: Send + 'static,
    U: Send + 'static,
{
    pub(crate) fn new(
        source: Shared<dyn Source<T>>,
        transform: Shared<dyn Transform<T, U>>,
        sink: Shared<dyn Sink<U>>,
    ) -> Self {
        Job {
            source,
            transform,
            sink,
        }
    }

    /// Builds the job's unit of work as a cold future; nothing executes
    /// until the caller spawns or polls it.
    ///
    /// Each phase runs under its component's instance gate. A phase failure
    /// is converted into the returned [`JobResult`] and every later phase is
    /// skipped; awaiting the work therefore never yields an error.
    pub(crate) fn prepare(&self) -> impl Future<Output = JobResult> + Send + 'static {
        let source = self.source.clone();
        let transform = self.transform.clone();
        let sink = self.sink.clone();

        async move {
            let source_id = source.get().id().to_string();
            let transform_id = transform.get().id().to_string();
            let sink_id = sink.get().id().to_string();

            let extracted = {
                let _serial = source.serialized().await;
                source.get().extract().await
            };
            let data = match extracted {
                Ok(data) => data,
                Err(cause) => {
                    warn!(component = %source_id, phase = %Phase::Extraction, "job phase failed");
                    let error = JobError::new(Phase::Extraction, source_id.clone(), cause);
                    return JobResult::failed(source_id, transform_id, sink_id, error);
                }
            };

            let applied = {
                let _serial = transform.serialized().await;
                transform.get().apply(data).await
            };
            let converted = match applied {
                Ok(converted) => converted,
                Err(cause) => {
                    warn!(component = %transform_id, phase = %Phase::Transformation, "job phase failed");
                    let error = JobError::new(Phase::Transformation, transform_id.clone(), cause);
                    return JobResult::failed(source_id, transform_id, sink_id, error);
                }
            };

            let loaded = {
                let _serial = sink.serialized().await;
                sink.get().load(converted).await
            };
            if let Err(cause) = loaded {
                warn!(component = %sink_id, phase = %Phase::Loading, "job phase failed");
                let error = JobError::new(Phase::Loading, sink_id.clone(), cause);
                return JobResult::failed(source_id, transform_id, sink_id, error);
            }

            JobResult::completed(source_id, transform_id, sink_id)
        }
    }
}
