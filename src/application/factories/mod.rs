/// Factories for creating adapters based on application needs
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
