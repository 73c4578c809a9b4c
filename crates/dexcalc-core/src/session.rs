//! # Calculator Session
//!
//! The keypad state machine: digit entry, operator chaining, compute,
//! clear and delete-last. A [`CalculatorSession`] is an owned value; a
//! front end keeps one per user and feeds it [`Key`]s. Each keystroke
//! returns a [`Screen`] snapshot describing what to render: the entry text,
//! which identifier to show, and whether a cry should be played.
//!
//! ## Rules
//!
//! - After a result or an operator the next digit starts a fresh entry;
//!   `.` starts it as `0.`.
//! - A second `.` in one entry is ignored. A lone `0` is replaced by the
//!   next digit.
//! - Pressing an operator while another is pending and a new operand has
//!   been typed computes the pending operation first.
//! - Division by zero puts the entry in an error state and drops the
//!   pending operation. Other evaluation failures leave the state as is.
//! - Delete-last is ignored right after a result.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog;
use crate::error::{EvalError, ValidationError};
use crate::evaluate::evaluate;
use crate::identifier::{normalize, Identifier};
use crate::operation::Operation;
use crate::raw::RawValue;

/// A keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// `0`-`9` or `.`.
    Digit(char),
    /// A binary operator.
    Operator(Operation),
    /// `=`
    Equals,
    /// `C`
    Clear,
    /// `<` (backspace)
    Delete,
}

impl Key {
    /// Map a single character to a key.
    ///
    /// `0-9 .` digits, `+ - * / × ÷ −` operators, `=` equals, `C`/`c`
    /// clear, `<` delete.
    pub fn from_char(c: char) -> Result<Self, ValidationError> {
        match c {
            '0'..='9' | '.' => Ok(Self::Digit(c)),
            '=' => Ok(Self::Equals),
            'C' | 'c' => Ok(Self::Clear),
            '<' => Ok(Self::Delete),
            _ => {
                let mut buf = [0u8; 4];
                Operation::from_symbol(c.encode_utf8(&mut buf))
                    .map(Self::Operator)
                    .ok_or(ValidationError::UnknownKey(c))
            }
        }
    }

    /// Parse a key sequence such as `"12+3="`. Whitespace is skipped.
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>, ValidationError> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_char)
            .collect()
    }
}

/// The current entry: typed or computed text, or an error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// Text as it appears on the display.
    Value(String),
    /// The last compute failed.
    Error(EvalError),
}

impl Entry {
    fn zero() -> Self {
        Self::Value("0".to_string())
    }

    /// The entry as an operand. An error entry never coerces to a number.
    pub fn as_raw(&self) -> RawValue {
        match self {
            Self::Value(s) => RawValue::from(s),
            Self::Error(_) => RawValue::Number(f64::NAN),
        }
    }

    /// Display text for a value entry.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Value(s) => Some(s.as_str()),
            Self::Error(_) => None,
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(s) => f.write_str(s),
            Self::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// Snapshot returned after every keystroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    /// What the display shows.
    pub entry: Entry,
    /// Operator waiting for its right-hand operand.
    pub pending: Option<Operation>,
    /// Identifier to show, or `None` for the invalid placeholder.
    pub identifier: Option<Identifier>,
    /// Catalog name for `identifier`.
    pub name: Option<&'static str>,
    /// Set when this keystroke produced a result whose cry should play.
    pub cry: Option<Identifier>,
}

/// One user's calculator state.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    current: Entry,
    previous: Option<Entry>,
    operator: Option<Operation>,
    reset_on_input: bool,
    shown: Option<Identifier>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Fresh session showing `0` and identifier 1.
    pub fn new() -> Self {
        Self {
            current: Entry::zero(),
            previous: None,
            operator: None,
            reset_on_input: false,
            shown: normalize(Identifier::MIN),
        }
    }

    /// The current entry.
    pub fn entry(&self) -> &Entry {
        &self.current
    }

    /// The pending operator, if any.
    pub fn pending(&self) -> Option<Operation> {
        self.operator
    }

    /// Current snapshot without pressing anything.
    pub fn screen(&self) -> Screen {
        self.snapshot(None)
    }

    /// Dispatch a key.
    pub fn press(&mut self, key: Key) -> Screen {
        trace!(?key, "key press");
        match key {
            Key::Digit(c) => self.press_digit(c),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.compute(),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last(),
        }
    }

    /// Append a digit or decimal point. Other characters are ignored.
    pub fn press_digit(&mut self, c: char) -> Screen {
        if !(c.is_ascii_digit() || c == '.') {
            return self.screen();
        }

        if self.reset_on_input {
            self.current = Entry::Value(if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            });
            self.reset_on_input = false;
        } else if let Entry::Value(text) = &mut self.current {
            if c == '.' {
                if text.contains('.') {
                    return self.screen();
                }
                text.push(c);
            } else if text.as_str() == "0" {
                *text = c.to_string();
            } else {
                text.push(c);
            }
        } else {
            self.current = Entry::Value(c.to_string());
        }

        self.shown = normalize(self.current.as_raw());
        self.screen()
    }

    /// Select an operator, computing a pending one first when chaining.
    pub fn press_operator(&mut self, op: Operation) -> Screen {
        let mut cry = None;
        if self.operator.is_some() && !self.reset_on_input {
            cry = self.compute().cry;
        }

        self.previous = Some(self.current.clone());
        self.operator = Some(op);
        self.reset_on_input = true;
        self.snapshot(cry)
    }

    /// Evaluate the pending operation.
    pub fn compute(&mut self) -> Screen {
        let (Some(op), Some(previous)) = (self.operator, self.previous.as_ref()) else {
            return self.screen();
        };

        match evaluate(previous.as_raw(), self.current.as_raw(), op) {
            Ok(value) => {
                debug!(%op, value, "computed result");
                self.current = Entry::Value(format_number(value));
                self.finish();
                self.shown = normalize(value);
                self.snapshot(self.shown)
            }
            Err(EvalError::DivideByZero) => {
                debug!(%op, "division by zero");
                self.current = Entry::Error(EvalError::DivideByZero);
                self.finish();
                self.shown = None;
                self.screen()
            }
            Err(err) => {
                debug!(%op, error = err.kind(), "evaluation rejected; state unchanged");
                self.screen()
            }
        }
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> Screen {
        *self = Self::new();
        self.screen()
    }

    /// Drop the last typed character.
    pub fn delete_last(&mut self) -> Screen {
        if self.reset_on_input {
            return self.screen();
        }
        if let Entry::Value(text) = &mut self.current {
            text.pop();
            if text.is_empty() {
                text.push('0');
            }
        }
        self.shown = normalize(self.current.as_raw());
        self.screen()
    }

    fn finish(&mut self) {
        self.operator = None;
        self.previous = None;
        self.reset_on_input = true;
    }

    fn snapshot(&self, cry: Option<Identifier>) -> Screen {
        Screen {
            entry: self.current.clone(),
            pending: self.operator,
            identifier: self.shown,
            name: self.shown.map(catalog::name_for),
            cry,
        }
    }
}

/// Render a result the way the display shows it: no trailing `.0`,
/// exponent notation outside `1e-6..1e21`, `Infinity` spelled out.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut CalculatorSession, keys: &str) -> Screen {
        let mut screen = session.screen();
        for key in Key::parse_sequence(keys).unwrap() {
            screen = session.press(key);
        }
        screen
    }

    fn text(screen: &Screen) -> &str {
        screen.entry.text().unwrap_or("<error>")
    }

    #[test]
    fn initial_state() {
        let session = CalculatorSession::new();
        let screen = session.screen();
        assert_eq!(text(&screen), "0");
        assert_eq!(screen.identifier.map(|id| id.get()), Some(1));
        assert_eq!(screen.name, Some("Bisasam"));
        assert_eq!(screen.cry, None);
    }

    #[test]
    fn digit_entry() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "025");
        assert_eq!(text(&screen), "25");
        assert_eq!(screen.name, Some("Pikachu"));
        assert_eq!(screen.cry, None);
    }

    #[test]
    fn single_decimal_point() {
        let mut s = CalculatorSession::new();
        assert_eq!(text(&run(&mut s, "1.5.2")), "1.52");
    }

    #[test]
    fn decimal_after_reset_starts_with_zero() {
        let mut s = CalculatorSession::new();
        assert_eq!(text(&run(&mut s, "3+.5")), "0.5");
        assert_eq!(text(&run(&mut s, "=")), "3.5");
    }

    #[test]
    fn simple_compute_requests_cry() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "1+2=");
        assert_eq!(text(&screen), "3");
        assert_eq!(screen.pending, None);
        assert_eq!(screen.name, Some("Bisaflor"));
        assert_eq!(screen.cry.map(|id| id.get()), Some(3));
    }

    #[test]
    fn operators_chain() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "1+2-");
        assert_eq!(text(&screen), "3");
        assert_eq!(screen.pending, Some(Operation::Subtract));
        assert_eq!(screen.cry.map(|id| id.get()), Some(3));
        assert_eq!(text(&run(&mut s, "4=")), "-1");
    }

    #[test]
    fn repeated_operator_does_not_compute() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "6+*");
        assert_eq!(text(&screen), "6");
        assert_eq!(screen.pending, Some(Operation::Multiply));
        assert_eq!(text(&run(&mut s, "5=")), "30");
    }

    #[test]
    fn equals_without_operator_is_noop() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "42=");
        assert_eq!(text(&screen), "42");
        assert_eq!(screen.cry, None);
    }

    #[test]
    fn divide_by_zero_enters_error_state() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "5/0=");
        assert_eq!(screen.entry, Entry::Error(EvalError::DivideByZero));
        assert_eq!(screen.identifier, None);
        assert_eq!(screen.pending, None);

        // Next digit starts over.
        assert_eq!(text(&run(&mut s, "7")), "7");
    }

    #[test]
    fn operator_after_error_is_harmless() {
        let mut s = CalculatorSession::new();
        run(&mut s, "5/0=");
        let screen = run(&mut s, "+2=");
        // The error entry is not a number, so the compute is rejected.
        assert_eq!(text(&screen), "2");
        assert_eq!(screen.pending, Some(Operation::Add));
    }

    #[test]
    fn chained_divide_by_zero_keeps_new_operator() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "5/0+");
        assert_eq!(screen.entry, Entry::Error(EvalError::DivideByZero));
        assert_eq!(screen.pending, Some(Operation::Add));
        assert_eq!(screen.identifier, None);
        assert_eq!(screen.cry, None);

        let screen = run(&mut s, "2*3=");
        assert_eq!(text(&screen), "6");
        assert_eq!(screen.pending, None);
        assert_eq!(screen.cry.map(|id| id.get()), Some(6));
    }

    #[test]
    fn float_noise_suppressed_in_display() {
        let mut s = CalculatorSession::new();
        assert_eq!(text(&run(&mut s, ".1+.2=")), "0.3");
    }

    #[test]
    fn result_outside_range_shows_invalid() {
        let mut s = CalculatorSession::new();
        let screen = run(&mut s, "50*50=");
        assert_eq!(text(&screen), "2500");
        assert_eq!(screen.identifier, None);
        assert_eq!(screen.cry, None);
    }

    #[test]
    fn delete_last() {
        let mut s = CalculatorSession::new();
        assert_eq!(text(&run(&mut s, "151<")), "15");
        assert_eq!(text(&run(&mut s, "<<")), "0");
        assert_eq!(text(&run(&mut s, "<")), "0");
    }

    #[test]
    fn delete_ignored_after_result() {
        let mut s = CalculatorSession::new();
        assert_eq!(text(&run(&mut s, "12+3=<")), "15");
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = CalculatorSession::new();
        run(&mut s, "9*9");
        let screen = run(&mut s, "C");
        assert_eq!(screen, CalculatorSession::new().screen());
        assert_eq!(s, CalculatorSession::new());
    }

    #[test]
    fn key_parsing() {
        assert_eq!(
            Key::parse_sequence("1 + ÷ = c <").unwrap(),
            vec![
                Key::Digit('1'),
                Key::Operator(Operation::Add),
                Key::Operator(Operation::Divide),
                Key::Equals,
                Key::Clear,
                Key::Delete,
            ]
        );
        assert_eq!(
            Key::parse_sequence("1%"),
            Err(ValidationError::UnknownKey('%'))
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
