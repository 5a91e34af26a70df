//! Bracket balance scanning for script files.
//!
//! # Responsibility
//! - Scan text for balanced `()`, `{}`, `[]` nesting with a LIFO stack.
//! - Report file-level balance results, tolerating unreadable files.
//!
//! # Invariants
//! - Scanning short-circuits on the first violation.
//! - Balance is necessary but not sufficient for syntactic validity:
//!   bracket characters inside string or comment literals are not excluded.

use crate::report::{ReportEvent, Reporter};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// One bracket balance violation with its 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceViolation {
    /// A closing bracket arrived while the stack was empty or topped by a
    /// different opener. Position is where the closer was read.
    UnbalancedClosing {
        bracket: char,
        line: usize,
        column: usize,
    },
    /// An opener was never closed by the end of input. Position is where it
    /// was opened.
    UnclosedOpening {
        bracket: char,
        line: usize,
        column: usize,
    },
}

impl BalanceViolation {
    /// The offending bracket character.
    pub fn bracket(&self) -> char {
        match *self {
            Self::UnbalancedClosing { bracket, .. } | Self::UnclosedOpening { bracket, .. } => {
                bracket
            }
        }
    }
}

impl Display for BalanceViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedClosing {
                bracket,
                line,
                column,
            } => write!(f, "Unbalanced '{bracket}' at line {line}, column {column}"),
            Self::UnclosedOpening {
                bracket,
                line,
                column,
            } => write!(
                f,
                "Unclosed '{bracket}' opened at line {line}, column {column}"
            ),
        }
    }
}

impl Error for BalanceViolation {}

/// Scans text for balanced bracket nesting.
///
/// Maintains a stack of opened `(`, `{`, `[` characters. A closing bracket
/// must match the most recently opened, still-open bracket; the scan stops
/// at the first violation. Leftover openers at end of input surface the
/// innermost one.
pub fn scan_brackets(content: &str) -> Result<(), BalanceViolation> {
    let mut stack: Vec<(char, usize, usize)> = Vec::new();
    let mut line = 1usize;
    let mut column = 0usize;

    for ch in content.chars() {
        if ch == '\n' {
            line += 1;
            column = 0;
            continue;
        }
        column += 1;
        match ch {
            '(' | '{' | '[' => stack.push((ch, line, column)),
            ')' | '}' | ']' => {
                let expected = match ch {
                    ')' => '(',
                    '}' => '{',
                    _ => '[',
                };
                match stack.pop() {
                    Some((opener, _, _)) if opener == expected => {}
                    _ => {
                        return Err(BalanceViolation::UnbalancedClosing {
                            bracket: ch,
                            line,
                            column,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(&(bracket, line, column)) = stack.last() {
        return Err(BalanceViolation::UnclosedOpening {
            bracket,
            line,
            column,
        });
    }
    Ok(())
}

/// Checks one file's bracket balance and reports the outcome.
///
/// # Contract
/// - Read failures (I/O or invalid UTF-8) emit an `Unreadable` warning line
///   and count as a check failure without aborting the run.
/// - A clean scan emits `SyntaxOk`; a violation emits `SyntaxError`.
pub fn check_file_balance<R: Reporter>(reporter: &mut R, root: &Path, display_path: &str) -> bool {
    let content = match fs::read_to_string(root.join(display_path)) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "event=balance_scan module=check status=error path={} error_kind={:?} error={}",
                display_path,
                err.kind(),
                err
            );
            reporter.report(ReportEvent::Unreadable {
                path: display_path.to_string(),
                message: err.to_string(),
            });
            return false;
        }
    };

    match scan_brackets(&content) {
        Ok(()) => {
            debug!(
                "event=balance_scan module=check status=ok path={} bytes={}",
                display_path,
                content.len()
            );
            reporter.report(ReportEvent::SyntaxOk {
                path: display_path.to_string(),
            });
            true
        }
        Err(violation) => {
            warn!(
                "event=balance_scan module=check status=fail path={} violation={}",
                display_path, violation
            );
            reporter.report(ReportEvent::SyntaxError {
                path: display_path.to_string(),
                violation,
            });
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{scan_brackets, BalanceViolation};

    #[test]
    fn accepts_balanced_nestings() {
        for content in [
            "",
            "()",
            "({[]})",
            "a(b{c}d)e[f]",
            "function(){ if(x){} }",
            "text with no brackets at all",
        ] {
            assert_eq!(scan_brackets(content), Ok(()), "content: {content:?}");
        }
    }

    #[test]
    fn accepts_deep_nesting() {
        let mut content = String::new();
        for _ in 0..64 {
            content.push_str("([{");
        }
        for _ in 0..64 {
            content.push_str("}])");
        }
        assert_eq!(scan_brackets(&content), Ok(()));
    }

    #[test]
    fn lone_closer_is_unbalanced() {
        for closer in [')', '}', ']'] {
            let err = scan_brackets(&closer.to_string()).expect_err("lone closer must fail");
            assert_eq!(
                err,
                BalanceViolation::UnbalancedClosing {
                    bracket: closer,
                    line: 1,
                    column: 1,
                }
            );
        }
    }

    #[test]
    fn mismatched_closer_reports_the_closer() {
        let err = scan_brackets("(]").expect_err("mismatched pair must fail");
        assert_eq!(
            err,
            BalanceViolation::UnbalancedClosing {
                bracket: ']',
                line: 1,
                column: 2,
            }
        );
    }

    #[test]
    fn leftover_openers_report_the_innermost() {
        let err = scan_brackets("({").expect_err("unclosed openers must fail");
        assert_eq!(
            err,
            BalanceViolation::UnclosedOpening {
                bracket: '{',
                line: 1,
                column: 2,
            }
        );
    }

    #[test]
    fn scan_stops_at_first_violation() {
        // The stray ']' comes before the unclosed '(' is detectable.
        let err = scan_brackets("]su(nk").expect_err("stray closer must fail first");
        assert_eq!(
            err,
            BalanceViolation::UnbalancedClosing {
                bracket: ']',
                line: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let err = scan_brackets("ab\ncd)").expect_err("stray closer must fail");
        assert_eq!(
            err,
            BalanceViolation::UnbalancedClosing {
                bracket: ')',
                line: 2,
                column: 3,
            }
        );

        let err = scan_brackets("()\n\n  {x\n").expect_err("unclosed brace must fail");
        assert_eq!(
            err,
            BalanceViolation::UnclosedOpening {
                bracket: '{',
                line: 3,
                column: 3,
            }
        );
    }

    #[test]
    fn inserting_any_single_closer_breaks_a_balanced_string() {
        let balanced = "({[]})";
        for index in 0..=balanced.len() {
            for closer in [')', '}', ']'] {
                let mut mutated = String::with_capacity(balanced.len() + 1);
                mutated.push_str(&balanced[..index]);
                mutated.push(closer);
                mutated.push_str(&balanced[index..]);
                assert!(
                    scan_brackets(&mutated).is_err(),
                    "inserting {closer:?} at {index} should unbalance {mutated:?}"
                );
            }
        }
    }

    #[test]
    fn scan_is_deterministic_for_same_input() {
        let content = "function(){ if(x){} }";
        assert_eq!(scan_brackets(content), scan_brackets(content));

        let broken = "function(){";
        assert_eq!(scan_brackets(broken), scan_brackets(broken));
    }

    #[test]
    fn string_literals_are_not_excluded_from_the_scan() {
        // Known approximation: a bracket inside a string literal still counts.
        let err = scan_brackets(r#"reply = ":)";"#).expect_err("smiley closer still counts");
        assert!(matches!(
            err,
            BalanceViolation::UnbalancedClosing { bracket: ')', .. }
        ));
    }
}
