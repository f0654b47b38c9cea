pub mod coerce;
pub mod error;
pub mod types;

#[cfg(feature = "text_metrics")]
pub mod text_metrics;

#[cfg(feature = "password")]
pub mod password;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "charts")]
pub mod charts;

#[cfg(feature = "page")]
pub mod page;

pub use error::PageToolsError;
pub use types::*;

/// Standard result type for all pagetools operations
pub type PageToolsResult<T> = Result<T, PageToolsError>;
