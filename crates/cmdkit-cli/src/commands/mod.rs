//! CLI command implementations

pub mod build;
pub mod install;
pub mod list;

pub use build::run_build;
pub use install::run_install;
pub use list::run_list;
