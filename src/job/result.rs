use super::types::JobError;

/// Outcome of one source→transform→sink job.
///
/// Holds zero errors on success or exactly one: a job stops at the first
/// failing phase and never accumulates further errors.
#[derive(Debug)]
pub struct JobResult {
    source_id: String,
    transform_id: String,
    sink_id: String,
    errors: Vec<JobError>,
}

impl JobResult {
    pub fn completed(
        source_id: impl Into<String>,
        transform_id: impl Into<String>,
        sink_id: impl Into<String>,
    ) -> Self {
        JobResult {
            source_id: source_id.into(),
            transform_id: transform_id.into(),
            sink_id: sink_id.into(),
            errors: Vec::new(),
        }
    }

    pub fn failed(
        source_id: impl Into<String>,
        transform_id: impl Into<String>,
        sink_id: impl Into<String>,
        error: JobError,
    ) -> Self {
        JobResult {
            source_id: source_id.into(),
            transform_id: transform_id.into(),
            sink_id: sink_id.into(),
            errors: vec![error],
        }
    }

    pub fn completed_without_errors(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[JobError] {
        &self.errors
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn transform_id(&self) -> &str {
        &self.transform_id
    }

    pub fn sink_id(&self) -> &str {
        &self.sink_id
    }
}
