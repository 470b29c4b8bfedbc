use async_trait::async_trait;

use super::ComponentError;

/// Release hook for components that hold external resources.
///
/// Disposability is opt-in: a source, transform or sink advertises it by
/// overriding `as_disposable` on its capability trait. The engine closes each
/// opted-in component exactly once per [`crate::processor::Pipeline::close`]
/// call and does not catch errors raised here.
#[async_trait]
pub trait Disposable: Send + Sync {
    async fn close(&self) -> Result<(), ComponentError>;
}
