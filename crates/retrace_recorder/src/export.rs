//! Interchange text for recorded paths.
//!
//! A path is written as a JSON array of `{"x": .., "y": ..}` records in
//! capture order. Moving the text anywhere (clipboard, file) is up to the
//! host.

use crate::capture::PathBuffer;
use crate::error::Result;

/// Serialize a path buffer to interchange text.
pub fn to_json(buffer: &PathBuffer) -> Result<String> {
    Ok(serde_json::to_string(buffer)?)
}

/// Serialize a path buffer to indented interchange text.
pub fn to_json_pretty(buffer: &PathBuffer) -> Result<String> {
    Ok(serde_json::to_string_pretty(buffer)?)
}

/// Parse interchange text back into a path buffer.
pub fn from_json(text: &str) -> Result<PathBuffer> {
    Ok(serde_json::from_str(text)?)
}
