use async_trait::async_trait;

use super::disposable::Disposable;
use super::ComponentError;

/// Converts source output into sink input.
///
/// Like a [`super::Source`], one transform instance is shared by every job of
/// its processor and the engine serializes calls into it; implementations may
/// keep unsynchronized internal state.
///
/// An error return surfaces as a transformation-phase
/// [`crate::job::JobError`]; the job's sink is never invoked in that case.
#[async_trait]
pub trait Transform<T, U>: Send + Sync {
    /// Identity reported in job results and error attribution.
    fn id(&self) -> &str;

    /// Converts one extracted value.
    async fn apply(&self, input: T) -> Result<U, ComponentError>;

    /// Opt-in resource cleanup, probed at disposal time.
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}

/// Transform that hands its input through unchanged.
///
/// Used by the builder when source and destination types coincide and no
/// conversion is wanted.
pub struct Passthrough {
    id: String,
}

impl Passthrough {
    pub fn new(id: impl Into<String>) -> Self {
        Passthrough { id: id.into() }
    }
}

impl Default for Passthrough {
    fn default() -> Self {
        Passthrough::new("passthrough")
    }
}

#[async_trait]
impl<T> Transform<T, T> for Passthrough
where
    T: Send + 'static,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn apply(&self, input: T) -> Result<T, ComponentError> {
        Ok(input)
    }
}
