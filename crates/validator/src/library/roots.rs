//! Root builders: the entry points of every chain.

use super::{Args, BuildError};
use crate::schema::Schema;
use crate::term::{Reference, Term};

/// `mixed()`: accepts any value type.
pub fn mixed(args: &Args) -> Result<Term, BuildError> {
    args.at_most(0)?;
    Ok(Schema::mixed().into())
}

/// `string()`
pub fn string(args: &Args) -> Result<Term, BuildError> {
    args.at_most(0)?;
    Ok(Schema::string().into())
}

/// `number()`
pub fn number(args: &Args) -> Result<Term, BuildError> {
    args.at_most(0)?;
    Ok(Schema::number().into())
}

/// `boolean()`
pub fn boolean(args: &Args) -> Result<Term, BuildError> {
    args.at_most(0)?;
    Ok(Schema::boolean().into())
}

/// `object([shape])`: an object, optionally with its fields attached.
pub fn object(args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    let schema = Schema::object();
    if args.is_empty() {
        return Ok(schema.into());
    }
    Ok(schema.shape(args.shape(0)?).into())
}

/// `array([element])`
pub fn array(args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    let schema = Schema::array();
    if args.is_empty() {
        return Ok(schema.into());
    }
    Ok(schema.of(args.schema(0)?).into())
}

/// `ref(path)`: a reference to a sibling field.
pub fn reference(args: &Args) -> Result<Term, BuildError> {
    args.at_most(1)?;
    let path = args.string(0)?;
    if path.is_empty() {
        return Err(args.invalid(0, "a non-empty field path"));
    }
    Ok(Reference::new(path).into())
}
