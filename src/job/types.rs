use std::fmt;

use thiserror::Error;

use crate::components::ComponentError;

/// The three ordered stages of a job. A failure at one phase prevents every
/// later phase of that job; no phase is ever revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Extraction,
    Transformation,
    Loading,
}

impl Phase {
    /// Kind of component that executes this phase.
    pub fn component_kind(&self) -> &'static str {
        match self {
            Phase::Extraction => "source",
            Phase::Transformation => "transform",
            Phase::Loading => "sink",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Extraction => "extraction",
            Phase::Transformation => "transformation",
            Phase::Loading => "loading",
        };
        f.write_str(name)
    }
}

/// A phase-tagged failure of exactly one component.
///
/// Immutable once built; `component_id` always names the instance whose
/// capability call failed, and the original error is preserved as the source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct JobError {
    message: String,
    component_id: String,
    phase: Phase,
    #[source]
    cause: ComponentError,
}

impl JobError {
    pub fn new(phase: Phase, component_id: impl Into<String>, cause: ComponentError) -> Self {
        let component_id = component_id.into();
        let message = format!(
            "{} '{}' failed during {}",
            phase.component_kind(),
            component_id,
            phase
        );
        JobError {
            message,
            component_id,
            phase,
            cause,
        }
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The underlying error returned by the component.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}
