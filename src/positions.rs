// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bit_set::BitSet;
use std::collections::BTreeMap;

/// The identity of one leaf of the expression tree.
///
/// Two leaves carrying the same character (like the two `a`s in `a*a`) have different ids. Ids
/// are handed out densely starting from zero, so they can be used to index `Vec`s and `BitSet`s.
pub type LeafId = usize;

/// All the per-leaf data for one conversion: the character at each leaf, the followpos table and
/// the reverse index from characters to the leaves that carry them.
///
/// Everything that needs to be numbered is numbered here, so each conversion gets a fresh
/// numbering. Once a `SyntaxTree` has been built, its `Positions` can only be read:
///
/// ```compile_fail
/// let mut tree = followpos_dfa::Builder::new().parse("ab").unwrap();
/// tree.positions.add_leaf('c');
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Positions {
    chars: Vec<char>,
    followpos: Vec<BitSet>,
    by_symbol: BTreeMap<char, BitSet>,
}

impl Positions {
    pub fn new() -> Positions {
        Positions::default()
    }

    /// Allocates a new leaf carrying `ch`. Its followpos starts out empty.
    pub(crate) fn add_leaf(&mut self, ch: char) -> LeafId {
        let id = self.chars.len();
        self.chars.push(ch);
        self.followpos.push(BitSet::new());
        self.by_symbol.entry(ch).or_insert_with(BitSet::new).insert(id);
        id
    }

    pub fn num_leaves(&self) -> usize {
        self.chars.len()
    }

    /// The character carried by the leaf `id`.
    pub fn symbol(&self, id: LeafId) -> char {
        self.chars[id]
    }

    pub fn followpos(&self, id: LeafId) -> &BitSet {
        &self.followpos[id]
    }

    /// The leaves that carry `ch`, if there are any.
    pub fn positions_of(&self, ch: char) -> Option<&BitSet> {
        self.by_symbol.get(&ch)
    }

    /// Records that everything in `to` can follow each leaf in `from`.
    pub(crate) fn add_followpos(&mut self, from: &BitSet, to: &BitSet) {
        for p in from {
            debug_assert!(p < self.followpos.len(), "bug: followpos for unknown leaf {}", p);
            self.followpos[p].union_with(to);
        }
    }
}
