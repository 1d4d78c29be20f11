use crate::error::MissingCredentialError;

/// Checks that every named value is present and non-blank.
///
/// Runs once before the poll loop starts. The error names every missing value,
/// in the order given.
pub fn verify_credentials(
    credentials: &[(&'static str, Option<&str>)],
) -> Result<(), MissingCredentialError> {
    let missing: Vec<&'static str> = credentials
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingCredentialError { missing })
    }
}
