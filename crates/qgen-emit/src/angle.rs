//! Angle expressions for dialects that only accept decimal literals.
//!
//! An angle is either a plain number, passed through untouched, or a product
//! and quotient of integers and `pi`:
//!
//! ```text
//! expr := atom (('*' | '/') atom)*
//! atom := INT | pi
//! ```
//!
//! `pi` is matched case-insensitively, whitespace is ignored, and operators
//! associate to the left. Evaluated values are printed with three decimals.

use logos::Logos;
use std::f64::consts::PI;

use crate::error::{EmitError, EmitResult};

/// Tokens of a symbolic angle.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum Token {
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Int(f64),

    #[token("pi", ignore(ascii_case))]
    Pi,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,
}

/// Check whether `angle` is a finite decimal literal.
pub fn is_plain_number(angle: &str) -> bool {
    angle
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite())
}

/// Render `angle` as a decimal literal.
///
/// Plain numbers are returned verbatim. Symbolic expressions are evaluated
/// and formatted to three decimal places.
pub fn normalize(angle: &str) -> EmitResult<String> {
    if is_plain_number(angle) {
        return Ok(angle.to_string());
    }
    let value = evaluate(angle)?;
    Ok(format!("{value:.3}"))
}

/// Evaluate a symbolic angle expression.
pub fn evaluate(expression: &str) -> EmitResult<f64> {
    let tokens = tokenize(expression)?;
    let mut tokens = tokens.into_iter();

    let mut value = atom(expression, tokens.next())?;
    while let Some(op) = tokens.next() {
        match op {
            Token::Star => value *= atom(expression, tokens.next())?,
            Token::Slash => {
                let divisor = atom(expression, tokens.next())?;
                if divisor == 0.0 {
                    return Err(EmitError::math(expression, "division by zero"));
                }
                value /= divisor;
            }
            Token::Int(_) | Token::Pi => {
                return Err(EmitError::math(expression, "expected '*' or '/' between terms"));
            }
        }
    }

    if !value.is_finite() {
        return Err(EmitError::math(expression, "value is not finite"));
    }
    Ok(value)
}

fn tokenize(expression: &str) -> EmitResult<Vec<Token>> {
    let mut lexer = Token::lexer(expression);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let span = lexer.span();
                let found = expression
                    .get(span.clone())
                    .and_then(|s| s.chars().next())
                    .unwrap_or_default();
                return Err(EmitError::math(
                    expression,
                    format!("unsupported character '{found}' at position {}", span.start),
                ));
            }
        }
    }

    Ok(tokens)
}

fn atom(expression: &str, token: Option<Token>) -> EmitResult<f64> {
    match token {
        Some(Token::Int(value)) => Ok(value),
        Some(Token::Pi) => Ok(PI),
        Some(Token::Star | Token::Slash) => {
            Err(EmitError::math(expression, "expected a number or 'pi'"))
        }
        None => Err(EmitError::math(expression, "unexpected end of expression")),
    }
}
