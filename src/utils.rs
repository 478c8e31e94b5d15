/// Shared utility functions for the post-processing tools
///
/// Extract the first run of digits found anywhere in a header line
///
/// The solver writes the gauge count into free text whose wording is not fixed,
/// e.g. "number of gauges: 12" or "12 wave gauges". The first integer token
/// found on the line is taken as the count.
///
/// # Examples
///
/// ```
/// use reef3d_post::utils::extract_first_integer;
///
/// assert_eq!(extract_first_integer("number of gauges: 12").unwrap(), 12);
/// assert_eq!(extract_first_integer("3 gauges").unwrap(), 3);
/// assert!(extract_first_integer("gauges").is_err());
/// ```
pub fn extract_first_integer(value: &str) -> Result<usize, &'static str> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Err("No integer found in header line");
    }

    digits
        .parse::<usize>()
        .map_err(|_| "Integer in header line is out of range")
}

/// Convert a shell wildcard (`*`, `?`) into an anchored regex pattern
///
/// Every other character is matched literally.
///
/// # Examples
///
/// ```
/// use reef3d_post::utils::wildcard_to_regex;
///
/// assert_eq!(wildcard_to_regex("*.dat"), r"^.*\.dat$");
/// assert_eq!(wildcard_to_regex("*wsfline*.dat"), r"^.*wsfline.*\.dat$");
/// ```
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }
    out.push('$');
    out
}

/// Parse one whitespace-separated row of numbers
///
/// Returns the first token that is not a finite number as the error.
/// `NaN` and `inf` are rejected so they never reach the extrema.
///
/// # Examples
///
/// ```
/// use reef3d_post::utils::parse_numeric_row;
///
/// assert_eq!(parse_numeric_row(" 0.1  2 -3e-2 ").unwrap(), vec![0.1, 2.0, -0.03]);
/// assert_eq!(parse_numeric_row("0.1 nan? 3").unwrap_err(), "nan?");
/// assert_eq!(parse_numeric_row("0.1 NaN 3").unwrap_err(), "NaN");
/// ```
pub fn parse_numeric_row(line: &str) -> Result<Vec<f64>, String> {
    line.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(token.to_string()),
        })
        .collect()
}

/// Blank lines and `#` comment lines carry no data
pub fn is_skippable_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_extract_first_integer_plain() {
        assert_eq!(extract_first_integer("12").unwrap(), 12);
    }

    #[test]
    fn test_extract_first_integer_trailing_text() {
        assert_eq!(extract_first_integer("4 wave gauges").unwrap(), 4);
    }

    #[test]
    fn test_extract_first_integer_leading_text() {
        assert_eq!(extract_first_integer("number of gauges:   7").unwrap(), 7);
    }

    #[test]
    fn test_extract_first_integer_takes_first_run() {
        assert_eq!(extract_first_integer("gauges 10 of 20").unwrap(), 10);
    }

    #[test]
    fn test_extract_first_integer_zero() {
        assert_eq!(extract_first_integer("gauges: 0").unwrap(), 0);
    }

    #[test]
    fn test_extract_first_integer_no_digits() {
        assert!(extract_first_integer("number of gauges").is_err());
    }

    #[test]
    fn test_extract_first_integer_empty() {
        assert!(extract_first_integer("").is_err());
    }

    #[test]
    fn test_parse_numeric_row_rejects_non_finite() {
        assert_eq!(parse_numeric_row("1.0 nan").unwrap_err(), "nan");
        assert_eq!(parse_numeric_row("1.0 inf 2").unwrap_err(), "inf");
        assert_eq!(parse_numeric_row("-infinity").unwrap_err(), "-infinity");
        assert_eq!(parse_numeric_row("1e400").unwrap_err(), "1e400");
    }

    #[test]
    fn test_wildcard_matches_dat_files() {
        let re = Regex::new(&wildcard_to_regex("*.dat")).unwrap();
        assert!(re.is_match("REEF3D-CFD-sedline-00010.dat"));
        assert!(!re.is_match("notes.txt"));
        assert!(!re.is_match("file.dat.bak"));
    }

    #[test]
    fn test_wildcard_escapes_regex_metacharacters() {
        let re = Regex::new(&wildcard_to_regex("a+b?.dat")).unwrap();
        assert!(re.is_match("a+b1.dat"));
        assert!(!re.is_match("aab1.dat"));
    }

    #[test]
    fn test_wildcard_infix_pattern() {
        let re = Regex::new(&wildcard_to_regex("*wsfline*.dat")).unwrap();
        assert!(re.is_match("REEF3D-CFD-wsfline-000120.dat"));
        assert!(!re.is_match("REEF3D-CFD-sedline-000120.dat"));
    }
}
