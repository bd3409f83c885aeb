/// Type alias for Result with anyhow::Error as the error type.
/// Ports, adapters and the use case all return this; typed failures travel
/// inside it as [`SbomError`](crate::shared::error::SbomError).
pub type Result<T> = std::result::Result<T, anyhow::Error>;
