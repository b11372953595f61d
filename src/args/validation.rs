use std::fs;
use std::path::Path;

/// Mounted secret locations whose contents replace a password naming them.
pub const SECRETS_LOCATIONS: [&str; 2] = ["/secrets/db_password", "/run/secrets/db_password"];

/// # Errors
///
/// Will return `Err` if the value is blank
pub fn check_not_blank(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Postgres {name} is required"));
    }
    Ok(())
}

/// If `password` names a secrets file, return the file's trimmed contents.
///
/// # Errors
///
/// Will return `Err` if the secrets file exists in the list but cannot be read
pub fn resolve_secret(password: &str) -> Result<String, String> {
    if !SECRETS_LOCATIONS.contains(&password) {
        return Ok(password.to_string());
    }
    read_secret_file(Path::new(password))
}

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn read_secret_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path)
        .map(|contents| contents.trim().to_string())
        .map_err(|e| format!("The secrets file '{}' is not readable: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_password_passes_through() {
        assert_eq!(resolve_secret("hunter2").unwrap(), "hunter2");
    }

    #[test]
    fn secret_file_contents_are_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  s3cret  ").unwrap();
        assert_eq!(read_secret_file(file.path()).unwrap(), "s3cret");
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(check_not_blank("host", "  ").is_err());
        assert!(check_not_blank("host", "db").is_ok());
    }
}
