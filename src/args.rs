pub mod database;
pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent or a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    Args::parse().into_clean_args()
}
