/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_revision_resolver;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_revision_resolver::MockRevisionResolver;
