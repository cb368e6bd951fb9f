use crate::{
    error::ParseError,
    interpreter::{evaluator::function::fact::FACTORIAL, parser::ParseResult},
};

/// Rewrites every postfix `!` in `text` into an explicit factorial call.
///
/// The text is scanned from left to right. At each `!` the operand directly to
/// its left in the already rewritten text is wrapped as `fact(operand)`:
/// - after a `)`, the operand is the parenthesized group ending there, together
///   with the function name in front of it, if any;
/// - otherwise the operand is the run of letters, digits, `.` and `_` ending
///   right before the `!`.
///
/// The parser folds factorials itself; this is the same transformation at the
/// text level, for display and tooling.
///
/// # Errors
/// `InvalidFactorialPosition` when nothing precedes a `!` that could be its
/// operand, including an unmatched `)`.
///
/// # Example
/// ```
/// use sandcalc::interpreter::rewrite::rewrite;
///
/// assert_eq!(rewrite("5!").unwrap(), "fact(5)");
/// assert_eq!(rewrite("(3!)!").unwrap(), "fact((fact(3)))");
/// assert_eq!(rewrite("3!!").unwrap(), "fact(fact(3))");
/// assert_eq!(rewrite("2*x!+1").unwrap(), "2*fact(x)+1");
/// assert!(rewrite("!").is_err());
/// ```
pub fn rewrite(text: &str) -> ParseResult<String> {
    let mut out = Vec::with_capacity(text.len());

    for (position, c) in text.char_indices() {
        if c != '!' {
            out.push(c);
            continue;
        }

        let start =
            operand_start(&out).ok_or(ParseError::InvalidFactorialPosition { position })?;
        let operand = out.split_off(start);

        out.extend(FACTORIAL.chars());
        out.push('(');
        out.extend(operand);
        out.push(')');
    }

    Ok(out.into_iter().collect())
}

/// Characters that make up a number or a name.
const fn is_operand_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Finds where the operand ending at the end of `text` begins.
fn operand_start(text: &[char]) -> Option<usize> {
    let end = text.len();

    if text.last() == Some(&')') {
        let mut depth = 0usize;
        let mut open = None;
        for (i, c) in text.iter().enumerate().rev() {
            match c {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        open = Some(i);
                        break;
                    }
                },
                _ => {},
            }
        }

        let mut start = open?;
        while start > 0 && is_operand_char(text[start - 1]) {
            start -= 1;
        }
        return Some(start);
    }

    let start = text.iter()
                    .rposition(|c| !is_operand_char(*c))
                    .map_or(0, |i| i + 1);
    (start < end).then_some(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_names_and_calls() {
        assert_eq!(rewrite("n!").unwrap(), "fact(n)");
        assert_eq!(rewrite("sqrt(16)!").unwrap(), "fact(sqrt(16))");
        assert_eq!(rewrite("2**3!").unwrap(), "2**fact(3)");
    }

    #[test]
    fn leaves_text_without_bang_alone() {
        assert_eq!(rewrite("1 + 2 * (3 - 4)").unwrap(), "1 + 2 * (3 - 4)");
    }

    #[test]
    fn unmatched_paren_is_rejected() {
        assert!(matches!(rewrite("3)!"),
                         Err(ParseError::InvalidFactorialPosition { position: 2 })));
    }

    #[test]
    fn whitespace_before_bang_is_rejected() {
        assert!(matches!(rewrite("3 !"),
                         Err(ParseError::InvalidFactorialPosition { position: 2 })));
    }

    #[test]
    fn operator_before_bang_is_rejected() {
        assert!(rewrite("2+!3").is_err());
    }
}
