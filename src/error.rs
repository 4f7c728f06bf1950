// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;

/// The ways in which parenthesization can go wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// A `(` that was never closed.
    UnclosedGroup,
    /// A `)` that doesn't close anything.
    UnopenedGroup,
}

/// A structural error in the regular expression. `pos` is the char offset of the offending
/// parenthesis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    pub pos: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(pos: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError { pos, kind }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnclosedGroup => write!(f, "unclosed group opened at {}", self.pos),
            SyntaxErrorKind::UnopenedGroup => write!(f, "unopened group closed at {}", self.pos),
        }
    }
}

impl error::Error for SyntaxError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Syntax(SyntaxError),
    UnsupportedSymbol { pos: usize, ch: char },
    TooManyStates,
}

use crate::error::Error::*;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Syntax(ref e) => write!(f, "Regex syntax error: {}", e),
            UnsupportedSymbol { pos, ch } => write!(f, "Unsupported symbol {:?} at {}", ch, pos),
            TooManyStates => write!(f, "State overflow"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Syntax(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Error {
        Syntax(e)
    }
}
