//! Line-oriented parsing with line numbers in the error message

use aoc_solver::ParseError;

/// Parse every non-empty line of `input` with `parse_line`.
///
/// The first failure is reported as `ParseError::InvalidFormat` prefixed
/// with its 1-based line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim())
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_skips_blank_lines() {
        let parsed = parse_lines("1\n\n  2 \n", |l| Ok(l.parse::<u8>()?)).unwrap();
        assert_eq!(parsed, vec![1, 2]);
    }

    #[test]
    fn test_error_names_line() {
        let err = parse_lines("ok\nok\nbad", |l| {
            if l == "bad" {
                Err(anyhow!("unexpected token"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: (line 3) unexpected token");
    }
}
