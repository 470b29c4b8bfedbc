pub mod result;
pub mod types;

pub(crate) mod shared;
pub(crate) mod unit;

pub use result::JobResult;
pub use types::{JobError, Phase};
