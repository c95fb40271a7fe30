use std::fs;

/// Reads every `;`-separated sql file, in order, into one script.
///
/// # Errors
///
/// Will return `Err` naming the first file that cannot be read
pub fn read_startup_scripts(scripts: &str) -> Result<String, String> {
    let mut combined = String::new();
    for file in scripts.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        let contents = fs::read_to_string(file)
            .map_err(|e| format!("The sql startup script '{file}' is not readable: {e}"))?;
        combined.push_str(&contents);
        combined.push('\n');
    }
    Ok(combined)
}
