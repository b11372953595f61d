use clap::Parser;

pub mod database;
pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, DatabaseType, PostgresSource};

/// Parse and validate the command line (with env fallbacks).
///
/// # Errors
///
/// Will return `Err` if the database settings are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let mut xx = Args::parse();
    xx.validate()?;
    Ok(CleanArgs::new(xx))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            db_type: args.db_type,
            db_name: args.resolved_db_name(),
            postgres: args.postgres_source(),
            bind: args.bind,
            default_course: args.default_course,
        }
    }
}
