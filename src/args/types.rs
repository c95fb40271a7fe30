use clap::Parser;

use crate::model::PickupPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sqlite database file (or sqlite URI).
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with `;`.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT")]
    pub db_startup_script: Option<String>,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0:8081")]
    pub bind_address: String,
    /// Strokes over par recorded for a pickup ("X").
    #[arg(
        long,
        value_name = "STROKES",
        default_value_t = 3,
        value_parser = clap::value_parser!(i32).range(0..=10)
    )]
    pub pickup_strokes_over_par: i32,
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub combined_sql_script: String,
    pub bind_address: String,
    pub pickup_policy: PickupPolicy,
    pub verbose: bool,
}
