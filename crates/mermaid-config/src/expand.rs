//! `${VAR}` and `${VAR:-default}` substitution in config strings.

use std::env::VarError;

use crate::ConfigError;

/// Substitute environment variables in `value` in place.
///
/// A reference without a default fails when the variable is unset or not
/// unicode; a set but empty variable leaves the reference as written.
pub(crate) fn expand_in_place(field: &str, value: &mut String) -> Result<(), ConfigError> {
    if !value.contains('$') {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), lookup).map_err(|e| {
        ConfigError::EnvVar {
            field: field.to_owned(),
            var: e.var_name,
            cause: e.cause,
        }
    })?;
    *value = expanded.into_owned();
    Ok(())
}

fn lookup(var: &str) -> Result<Option<String>, VarError> {
    std::env::var(var).map(Some)
}
