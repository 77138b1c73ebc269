//! Field rules for site content submitted by administrators and visitors.

use crate::error::CoreError;

/// Column width of the short text fields (`VARCHAR(255)`).
pub const MAX_SHORT_TEXT: usize = 255;

/// Upper bound on a contact-form message body.
pub const MAX_MESSAGE_LEN: usize = 5000;

fn require_short_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_SHORT_TEXT {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_SHORT_TEXT} characters"
        )));
    }
    Ok(())
}

/// Series names are the natural key of a series: non-empty and bounded.
pub fn validate_series_name(name: &str) -> Result<(), CoreError> {
    require_short_text("name", name)
}

/// Every event needs a place.
pub fn validate_event_location(location: &str) -> Result<(), CoreError> {
    require_short_text("location", location)
}

/// Optional ticket/map links must be absolute http(s) URLs.
pub fn validate_link(field: &str, url: Option<&str>) -> Result<(), CoreError> {
    let Some(url) = url else {
        return Ok(());
    };
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !url.contains(char::is_whitespace) => {}
        _ => {
            return Err(CoreError::Validation(format!(
                "{field} must be an absolute http(s) URL"
            )))
        }
    }
    if url.len() > MAX_SHORT_TEXT {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_SHORT_TEXT} characters"
        )));
    }
    Ok(())
}

/// Contact-form submission: a name, a plausible reply address and a message.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), CoreError> {
    require_short_text("name", name)?;
    require_short_text("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(CoreError::Validation("email is not a valid address".into())),
    }
    if message.trim().is_empty() {
        return Err(CoreError::Validation("message must not be empty".into()));
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(CoreError::Validation(format!(
            "message must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}
