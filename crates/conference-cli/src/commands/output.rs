use anyhow::Result;
use serde::Serialize;

/// Prints `value` as pretty JSON, or each line of `text` otherwise.
pub fn emit<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Vec<String>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        for line in text() {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
