//! Shape validation for API responses

use serde_json::Value;

use crate::error::MalformedKind;
use crate::Result;

/// Validate the shape of a homework-statuses response.
///
/// Checks run in a fixed order so the reported defect is deterministic:
/// top-level object, then the homeworks key, then the current_date key,
/// then the homeworks type. An empty homeworks list is valid and only
/// noted at debug level.
pub fn check_response(response: &Value) -> Result<()> {
    let object = response.as_object().ok_or(MalformedKind::NotAnObject)?;

    if !object.contains_key("homeworks") {
        return Err(MalformedKind::MissingHomeworks.into());
    }
    if !object.contains_key("current_date") {
        return Err(MalformedKind::MissingCurrentDate.into());
    }

    let homeworks = object["homeworks"]
        .as_array()
        .ok_or(MalformedKind::HomeworksNotAnArray)?;

    if homeworks.is_empty() {
        tracing::debug!("Homework status has not changed");
    }

    Ok(())
}
