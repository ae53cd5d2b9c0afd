/// Parses an integer literal as accepted on the command line.
///
/// Supports an optional leading `-` and the `0x`, `0o` and `0b` radix
/// prefixes. Underscores may be used as digit separators.
pub fn parse_int(input: &str) -> Result<i128, String> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits),
    };

    let digits = digits.replace('_', "");
    let value = u128::from_str_radix(&digits, radix)
        .ok()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| format!("'{input}' is not a valid integer"))?;

    Ok(if negative { -value } else { value })
}
