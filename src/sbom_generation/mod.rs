/// Domain layer - dependency records and the pure services that produce them
///
/// Nothing in this module touches the file system, processes or the console.
pub mod domain;
pub mod services;
