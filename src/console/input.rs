use std::collections::VecDeque;
use std::io::{
    BufRead,
    Write
};

use crate::math::interval::Interval;
use crate::quadratureerror::QuadratureError;

pub const LOWER_PROMPT: &str = "Lower bound (a): ";
pub const UPPER_PROMPT: &str = "Upper bound (b): ";
const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";
const INVALID_ORDER_MESSAGE: &str = "Upper bound must be greater than lower bound. Please enter it again.";

pub fn parse_number(text: &str) -> Result<f64, QuadratureError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QuadratureError::InvalidNumber(trimmed.to_owned()))
    }
}

/// Whitespace-separated tokens over a line reader, so `0 1` on one line
/// answers two prompts.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>
}

impl <R> TokenReader<R> where
    R: BufRead {
    pub fn new(input: R) -> TokenReader<R> {
        TokenReader { input, pending: VecDeque::new() }
    }

    /// Blank lines are skipped; EOF gives `InputClosed`.
    pub fn next_token(&mut self) -> Result<String, QuadratureError> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(QuadratureError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drops what is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Prompts until a token parses as a finite real number. A bad token throws
/// away the rest of its line.
pub fn read_number<R, W>(tokens: &mut TokenReader<R>, output: &mut W, prompt: &str) -> Result<f64, QuadratureError> where
    R: BufRead,
    W: Write {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let token = tokens.next_token()?;
        match parse_number(&token) {
            Ok(value) => return Ok(value),
            Err(_) => {
                tokens.discard_line();
                writeln!(output, "{}", INVALID_NUMBER_MESSAGE)?;
            }
        }
    }
}

/// Reads `a`, then re-reads `b` until `b > a`.
pub fn read_interval<R, W>(input: R, output: &mut W) -> Result<Interval, QuadratureError> where
    R: BufRead,
    W: Write {
    let mut tokens = TokenReader::new(input);
    let lower = read_number(&mut tokens, output, LOWER_PROMPT)?;
    let mut upper = read_number(&mut tokens, output, UPPER_PROMPT)?;
    while upper <= lower {
        writeln!(output, "{}", INVALID_ORDER_MESSAGE)?;
        upper = read_number(&mut tokens, output, UPPER_PROMPT)?;
    }
    Interval::new(lower, upper)
}
