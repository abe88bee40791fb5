/// Number of mebibytes in a gibibyte, and of kibibytes in a mebibyte.
const BINARY_STEP: f64 = 1024.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid quantity for {0}: {1}")]
    InvalidQuantity(String, String),
}

/// returns cpu in cores
///
/// Accepts a plain number of cores (`"2"`, `"2.5"`) or millicores (`"250m"`).
/// Negative and non-finite values are rejected.
pub fn parse_cpu(cpu: &str) -> Result<f64, Error> {
    let trimmed = cpu.trim();
    let invalid = || Error::InvalidQuantity("cpu".to_string(), cpu.to_string());

    let (number, divisor) = match trimmed.strip_suffix('m') {
        Some(millis) => (millis, 1000.0),
        None => (trimmed, 1.0),
    };

    let value = number.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    // abs() only drops the sign of "-0"
    Ok(value.abs() / divisor)
}

/// returns memory in mebibytes
///
/// Never fails: an empty, absent or unreadable quantity is 0.
pub fn parse_memory(memory: Option<&str>) -> f64 {
    let memory = match memory.map(str::trim) {
        None | Some("") => return 0.0,
        Some(memory) => memory,
    };

    let (number, suffix) = split_number(memory);
    if number.is_empty() {
        return 0.0;
    }
    let value = match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return 0.0,
    };

    let suffix = suffix.to_lowercase();
    // order matters: two-letter binary units must win over the bare letters they contain
    if suffix.contains("ki") {
        value / BINARY_STEP
    } else if suffix.contains("mi") {
        value
    } else if suffix.contains("gi") {
        value * BINARY_STEP
    } else if suffix.contains("ti") {
        value * BINARY_STEP * BINARY_STEP
    } else if suffix.contains('k') {
        // decimal kilo approximated as kibi
        value / BINARY_STEP
    } else if suffix.contains('m') {
        value
    } else if suffix.contains('g') {
        value * BINARY_STEP
    } else {
        value / (BINARY_STEP * BINARY_STEP)
    }
}

/// Splits a quantity into its leading run of digits (with at most one `.`)
/// and whatever follows.
fn split_number(quantity: &str) -> (&str, &str) {
    let mut seen_dot = false;
    let end = quantity
        .char_indices()
        .find(|(_, c)| match c {
            '0'..='9' => false,
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            _ => true,
        })
        .map(|(i, _)| i)
        .unwrap_or(quantity.len());
    quantity.split_at(end)
}
