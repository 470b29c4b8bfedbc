pub mod disposable;
pub mod report;
pub mod sink;
pub mod source;
pub mod transform;

pub use disposable::Disposable;
pub use report::Report;
pub use sink::Sink;
pub use source::Source;
pub use transform::{Passthrough, Transform};

/// Error type components hand back across the capability boundary.
///
/// The engine never inspects it; it is carried verbatim as the cause of a
/// [`crate::job::JobError`].
pub type ComponentError = Box<dyn std::error::Error + Send + Sync>;
