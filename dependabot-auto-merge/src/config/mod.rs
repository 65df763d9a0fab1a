//! Run configuration.
//!
//! The set of repositories comes from the runtime context (the repository
//! whose workflow triggered the run) and may be extended by an optional
//! TOML file, which also carries concurrency ceilings and the merge method.

mod concurrency;
mod error;
mod file;
mod organizations;

pub use concurrency::ConcurrencyLimits;
pub use error::ConfigError;
pub use file::ConfigFile;
pub use organizations::OrganizationRepoMap;
