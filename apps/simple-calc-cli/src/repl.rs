//! Line-oriented shell: each input line is one trigger.
//!
//! A line reads `<first> <op> <second>`. Missing operands are left empty,
//! so `+ 5` adds 5 to an empty (zero) first operand.

use std::io::{BufRead, Write};

use anyhow::Result;
use simple_calc::Adapter;
use simple_calc_sdk::{COMPUTATION_ERROR_KEY, Form, Operator};

use crate::form::TerminalForm;

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Tokens of one line, split into the two operand texts and the operator text.
#[derive(Debug, PartialEq, Eq)]
struct Trigger<'l> {
    first: &'l str,
    operator: &'l str,
    second: &'l str,
}

fn split_line(line: &str) -> Option<Trigger<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match *tokens.as_slice() {
        [operator] => Some(Trigger {
            first: "",
            operator,
            second: "",
        }),
        [a, b] if a.parse::<Operator>().is_ok() => Some(Trigger {
            first: "",
            operator: a,
            second: b,
        }),
        [a, b] => Some(Trigger {
            first: a,
            operator: b,
            second: "",
        }),
        [first, operator, second] => Some(Trigger {
            first,
            operator,
            second,
        }),
        _ => None,
    }
}

/// Run the shell until EOF or a quit command. Returns the number of
/// triggers that ended in an error.
///
/// # Errors
/// Returns an error only on I/O failure.
pub fn run<R: BufRead, W: Write>(
    adapter: &Adapter,
    form: &mut TerminalForm<'_>,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut failures = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&line) {
            break;
        }

        if let Some(trigger) = split_line(line) {
            form.set_operands(trigger.first, trigger.second);
            if adapter.compute_named(form, trigger.operator).is_err() {
                failures += 1;
            }
            writeln!(output, "{}", form.result())?;
        } else {
            tracing::warn!(line, "expected '<first> <op> <second>'");
            failures += 1;
            writeln!(output, "{}", form.lookup_string(COMPUTATION_ERROR_KEY))?;
        }
    }

    output.flush()?;
    Ok(failures)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use simple_calc::SimpleCalcConfig;

    fn session(script: &str) -> (String, usize) {
        let strings = SimpleCalcConfig::default();
        let mut form = TerminalForm::new(&strings);
        let mut out = Vec::new();
        let failures = run(&Adapter::default(), &mut form, script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), failures)
    }

    #[test]
    fn test_split_line_shapes() {
        assert_eq!(
            split_line("1 + 2"),
            Some(Trigger {
                first: "1",
                operator: "+",
                second: "2"
            })
        );
        assert_eq!(
            split_line("div 4"),
            Some(Trigger {
                first: "",
                operator: "div",
                second: "4"
            })
        );
        assert_eq!(
            split_line("4 mul"),
            Some(Trigger {
                first: "4",
                operator: "mul",
                second: ""
            })
        );
        assert_eq!(split_line("1 + 2 + 3"), None);
    }

    #[test]
    fn test_session_outputs_one_line_per_trigger() {
        let (out, failures) = session("1 + 1\n1 - 17\n\n32 * 2\n32 / 0\nquit\n5 + 5\n");
        assert_eq!(out, "2.0\n-16.0\n64.0\nInfinity\n");
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let (out, failures) = session("abc + 1\n1 % 2\n1 + 2 + 3\n2 * 3\n");
        assert_eq!(out, "Error\nError\nError\n6.0\n");
        assert_eq!(failures, 3);
    }

    #[test]
    fn test_missing_operand_is_zero() {
        let (out, _) = session("- 5\n");
        assert_eq!(out, "-5.0\n");
    }
}
