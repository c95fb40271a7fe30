use super::types::{Args, CleanArgs};
use super::validation::read_startup_scripts;
use crate::model::PickupPolicy;

impl Args {
    /// Validate the database settings and read the startup scripts.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database name is blank or a startup script cannot be read
    pub fn into_clean_args(self) -> Result<CleanArgs, String> {
        if self.db_name.trim().is_empty() {
            return Err("Database name is required".to_string());
        }

        let combined_sql_script = match &self.db_startup_script {
            Some(scripts) => read_startup_scripts(scripts)?,
            None => String::new(),
        };

        Ok(CleanArgs {
            db_name: self.db_name,
            db_startup_script: self.db_startup_script,
            combined_sql_script,
            bind_address: self.bind_address,
            pickup_policy: PickupPolicy {
                strokes_over_par: self.pickup_strokes_over_par,
            },
            verbose: self.verbose,
        })
    }
}
