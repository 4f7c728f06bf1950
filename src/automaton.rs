// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::token::is_symbol;
use std::slice;

/// The set of symbols that a regular expression mentions, in ascending order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Collects the distinct symbols of `re`. Operators and unsupported characters are not
    /// symbols.
    pub fn from_regex(re: &str) -> Alphabet {
        let mut symbols: Vec<char> = re.chars().filter(|&c| is_symbol(c)).collect();
        symbols.sort();
        symbols.dedup();
        Alphabet { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.symbols.binary_search(&ch).is_ok()
    }

    pub fn iter(&self) -> slice::Iter<char> {
        self.symbols.iter()
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a char;
    type IntoIter = slice::Iter<'a, char>;
    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Something that a DFA can be written into.
///
/// States are referred to by name. The names handed out by this crate are derived from the
/// contents of the state, so the same name always means the same state.
pub trait Automaton {
    type State;

    /// Adds a state called `name`. If `is_initial` is true, it also becomes the initial state.
    fn create_state(&mut self, name: &str, is_initial: bool) -> Self::State;

    fn set_initial(&mut self, name: &str);

    /// Adds a transition from `from` to `to` that consumes `symbol`.
    ///
    /// Both states must already have been created.
    fn set_trans(&mut self, from: &str, symbol: char, to: &str);

    /// Marks the state `name` as accepting.
    fn make_final(&mut self, name: &str);
}
