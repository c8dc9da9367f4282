pub mod api;
pub mod config;
pub mod error;
pub mod migrator;
pub mod report;
pub mod statements;

pub use error::FixError;
pub use migrator::Migrator;
pub use report::MigrationReport;
