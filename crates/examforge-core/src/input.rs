//! Prompt helpers: bounded integers, free text, and yes/no.

use std::ops::RangeInclusive;

use anyhow::Result;

use crate::error::InputError;
use crate::traits::Console;

/// Parse `raw` as an integer inside `range`.
///
/// Surrounding whitespace is ignored. Negative and overflowing values are
/// reported as out of range or unparseable respectively; the accepted value
/// is returned unchanged.
pub fn parse_bounded(raw: &str, range: &RangeInclusive<u32>) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::Unparseable(trimmed.to_string()))?;

    u32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
}

/// Show `message` and read until a line parses into `range`.
///
/// Rejected lines are silently re-prompted. Fails only when the input ends.
pub fn prompt_int(
    console: &mut dyn Console,
    message: &str,
    range: RangeInclusive<u32>,
) -> Result<u32> {
    loop {
        console.print(message)?;
        let line = read_required(console)?;
        match parse_bounded(&line, &range) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() => tracing::debug!("re-prompting: {e}"),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Show `message` and read one line of free text.
pub fn prompt_line(console: &mut dyn Console, message: &str) -> Result<String> {
    console.print(message)?;
    read_required(console)
}

/// Read a yes/no answer. Only `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn read_confirmation(console: &mut dyn Console) -> Result<bool> {
    let line = read_required(console)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn read_required(console: &mut dyn Console) -> Result<String> {
    let line = console.read_line()?.ok_or(InputError::EndOfInput)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedConsole;

    #[test]
    fn parse_accepts_bounds_inclusive() {
        assert_eq!(parse_bounded("1", &(1..=3)), Ok(1));
        assert_eq!(parse_bounded("3", &(1..=3)), Ok(3));
        assert_eq!(parse_bounded("  2 ", &(1..=3)), Ok(2));
        assert_eq!(parse_bounded("+2", &(1..=3)), Ok(2));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            parse_bounded("0", &(1..=3)),
            Err(InputError::OutOfRange {
                value: 0,
                min: 1,
                max: 3
            })
        );
        assert!(matches!(
            parse_bounded("-7", &(1..=3)),
            Err(InputError::OutOfRange { value: -7, .. })
        ));
        assert!(matches!(
            parse_bounded("301", &(1..=300)),
            Err(InputError::OutOfRange { value: 301, .. })
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_bounded("two", &(1..=3)),
            Err(InputError::Unparseable(_))
        ));
        assert!(matches!(
            parse_bounded("", &(1..=3)),
            Err(InputError::Unparseable(_))
        ));
        assert!(matches!(
            parse_bounded("1.5", &(1..=3)),
            Err(InputError::Unparseable(_))
        ));
        assert!(matches!(
            parse_bounded("99999999999999999999", &(1..=3)),
            Err(InputError::Unparseable(_))
        ));
    }

    #[test]
    fn prompt_returns_first_valid_value() {
        let mut console = ScriptedConsole::new(["abc", "0", "11", "", "7", "8"]);
        let value = prompt_int(&mut console, "Mark: ", 1..=10).unwrap();
        assert_eq!(value, 7);
        assert_eq!(console.reads(), 5);
        assert_eq!(console.remaining(), 1);
        // One prompt per attempt, and no error text.
        assert_eq!(console.output(), "Mark: ".repeat(5));
    }

    #[test]
    fn prompt_fails_when_input_ends() {
        let mut console = ScriptedConsole::new(["nope"]);
        let err = prompt_int(&mut console, "Pick: ", 1..=2).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::EndOfInput)
        );
    }

    #[test]
    fn prompt_line_keeps_text() {
        let mut console = ScriptedConsole::new(["  Linear Algebra "]);
        let name = prompt_line(&mut console, "Enter Subject Name: ").unwrap();
        assert_eq!(name, "  Linear Algebra ");
        assert_eq!(console.output(), "Enter Subject Name: ");
    }

    #[test]
    fn confirmation_accepts_only_y() {
        let cases = [
            ("y", true),
            ("Y", true),
            (" y ", true),
            ("yes", false),
            ("n", false),
            ("", false),
        ];
        for (line, expected) in cases {
            let mut console = ScriptedConsole::new([line]);
            assert_eq!(
                read_confirmation(&mut console).unwrap(),
                expected,
                "{line:?}"
            );
        }
    }
}
