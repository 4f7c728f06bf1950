// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::ast::SyntaxTree;
use crate::automaton::{Alphabet, Automaton};
use crate::determinize::determinize;
use crate::dfa::Dfa;
use crate::error::Error;
use crate::parser;
use crate::token::{is_symbol, preprocess};
use log::debug;

/// What to do about parentheses that don't match up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Parens {
    /// An unclosed `(` or an unopened `)` is an `Error::Syntax`.
    Strict,
    /// A missing `)` is silently supplied at the end of the group. Parsing stops at an unopened
    /// `)`, and everything after it is ignored.
    Permissive,
}

/// What to do about characters that are neither symbols (ASCII letters and digits) nor
/// operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unsupported {
    /// Drop them, as if they weren't there. `a b` means the same as `ab`.
    Ignore,
    /// Fail with `Error::UnsupportedSymbol`.
    Reject,
}

/// Converts regular expressions into DFAs, with some knobs to tweak.
///
/// ```rust
/// use followpos_dfa::{Builder, Parens};
///
/// let dfa = Builder::new().parens(Parens::Permissive).build("(a|b)*abb").unwrap();
/// assert!(dfa.accepts("babb"));
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    max_states: usize,
    parens: Parens,
    unsupported: Unsupported,
}

impl Default for Builder {
    fn default() -> Builder {
        Builder {
            max_states: usize::MAX,
            parens: Parens::Strict,
            unsupported: Unsupported::Ignore,
        }
    }
}

fn is_operator(ch: char) -> bool {
    match ch {
        '(' | ')' | '|' | '*' => true,
        _ => false,
    }
}

impl Builder {
    /// A builder with no limit on the number of states, strict parentheses, and unsupported
    /// characters ignored.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Fails with `Error::TooManyStates` rather than build a DFA with more than `n` states.
    pub fn max_states(mut self, n: usize) -> Builder {
        self.max_states = n;
        self
    }

    pub fn parens(mut self, parens: Parens) -> Builder {
        self.parens = parens;
        self
    }

    pub fn unsupported(mut self, unsupported: Unsupported) -> Builder {
        self.unsupported = unsupported;
        self
    }

    fn check_symbols(&self, re: &str) -> crate::Result<()> {
        if self.unsupported == Unsupported::Reject {
            let bad = re.chars().enumerate().find(|&(_, ch)| !is_symbol(ch) && !is_operator(ch));
            if let Some((pos, ch)) = bad {
                return Err(Error::UnsupportedSymbol { pos, ch });
            }
        }
        Ok(())
    }

    /// Parses `re` into an annotated syntax tree, without building the DFA.
    pub fn parse(&self, re: &str) -> crate::Result<SyntaxTree> {
        self.check_symbols(re)?;
        let tokens = preprocess(re);
        debug!("preprocessed {:?} into {} tokens", re, tokens.len());
        Ok(parser::parse(&tokens, self.parens)?)
    }

    /// Builds the DFA for `re` and writes it into `dfa`, returning the alphabet that its
    /// transitions are over.
    ///
    /// Nothing is written unless the whole conversion succeeds.
    pub fn build_into<A: Automaton>(&self, re: &str, dfa: &mut A) -> crate::Result<Alphabet> {
        let tree = self.parse(re)?;
        let alphabet = Alphabet::from_regex(re);
        let table = determinize(&tree, &alphabet, self.max_states)?;
        table.write_into(dfa);
        Ok(alphabet)
    }

    /// Builds the DFA for `re`.
    pub fn build(&self, re: &str) -> crate::Result<Dfa> {
        let mut dfa = Dfa::new(Alphabet::from_regex(re));
        self.build_into(re, &mut dfa)?;
        Ok(dfa)
    }
}
