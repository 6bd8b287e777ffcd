//! Member builders: refinements of an existing schema.
//!
//! Every member takes the receiver by value and returns the refined copy,
//! leaving the caller's schema untouched.

use serde_json::Value;

use super::{Args, BuildError};
use crate::schema::{KindTag, Schema};
use crate::term::Term;
use crate::validators::{
    email, exact_length, exact_size, integer, less_than, lowercase, matches, max, max_length,
    max_size, min, min_length, min_size, more_than, uppercase, url,
};

// ============================================================================
// PRESENCE
// ============================================================================

pub fn required(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.required(args.message(0)?).into())
}

pub fn optional(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(0)?;
    Ok(schema.optional().into())
}

pub fn nullable(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.nullable(args.flag(0, true)?).into())
}

pub fn label(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    let text = if args.is_empty() { String::new() } else { args.string(0)? };
    Ok(schema.label(text).into())
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Splits `oneOf`-style arguments into values and an optional message.
fn membership(args: &Args) -> Result<(Vec<crate::schema::Allowed>, Option<String>), BuildError> {
    match args.get(0) {
        None => Err(args.invalid(0, "a list of values")),
        Some(Term::List(_)) => {
            args.at_most(2)?;
            Ok((args.allowed(0)?, args.message(1)?))
        }
        // `[ref, ..., "message"]`: a reference-led spread keeps its trailing
        // string as the message.
        Some(Term::Reference(_)) if args.len() > 1 && trailing_message(args) => {
            let last = args.len() - 1;
            Ok((args.allowed_until(0, last)?, args.message(last)?))
        }
        Some(_) => Ok((args.allowed(0)?, None)),
    }
}

fn trailing_message(args: &Args) -> bool {
    matches!(args.get(args.len() - 1), Some(Term::Literal(Value::String(_))))
}

pub fn one_of(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    let (values, message) = membership(args)?;
    Ok(schema.one_of(values, message).into())
}

pub fn not_one_of(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    let (values, message) = membership(args)?;
    Ok(schema.not_one_of(values, message).into())
}

// ============================================================================
// BOUNDS
// ============================================================================

/// `min(n, [message])`: numeric bound, char length or element count.
pub fn min_bound(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let message = args.message(1)?;
    let schema = match schema.tag() {
        KindTag::Number => schema.rule_with_message(min(args.number_or(0, 0.0)?), message),
        KindTag::String => schema.rule_with_message(min_length(args.count_or(0, 0)?), message),
        _ => schema.rule_with_message(min_size(args.count_or(0, 0)?), message),
    };
    Ok(schema.into())
}

/// `max(n, [message])`
pub fn max_bound(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let message = args.message(1)?;
    let schema = match schema.tag() {
        KindTag::Number => schema.rule_with_message(max(args.number_or(0, 0.0)?), message),
        KindTag::String => schema.rule_with_message(max_length(args.count_or(0, 0)?), message),
        _ => schema.rule_with_message(max_size(args.count_or(0, 0)?), message),
    };
    Ok(schema.into())
}

/// `length(n, [message])`: exact char length or element count.
pub fn length(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let message = args.message(1)?;
    let schema = match schema.tag() {
        KindTag::String => schema.rule_with_message(exact_length(args.count_or(0, 0)?), message),
        _ => schema.rule_with_message(exact_size(args.count_or(0, 0)?), message),
    };
    Ok(schema.into())
}

pub fn more_than_bound(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let bound = args.number_or(0, 0.0)?;
    Ok(schema.rule_with_message(more_than(bound), args.message(1)?).into())
}

pub fn less_than_bound(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let bound = args.number_or(0, 0.0)?;
    Ok(schema.rule_with_message(less_than(bound), args.message(1)?).into())
}

pub fn positive(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(more_than(0.0), args.message(0)?).into())
}

pub fn negative(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(less_than(0.0), args.message(0)?).into())
}

pub fn integer_rule(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(integer(), args.message(0)?).into())
}

// ============================================================================
// STRING CONTENT
// ============================================================================

pub fn matches_pattern(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(2)?;
    let pattern = args.regex(0)?;
    Ok(schema.rule_with_message(matches(pattern), args.message(1)?).into())
}

pub fn email_format(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(email(), args.message(0)?).into())
}

pub fn url_format(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(url(), args.message(0)?).into())
}

pub fn lowercase_rule(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(lowercase(), args.message(0)?).into())
}

pub fn uppercase_rule(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.rule_with_message(uppercase(), args.message(0)?).into())
}

// ============================================================================
// STRUCTURE
// ============================================================================

pub fn shape(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.shape(args.shape(0)?).into())
}

pub fn of(schema: Schema, args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    Ok(schema.of(args.schema(0)?).into())
}
