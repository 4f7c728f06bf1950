// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bit_set::BitSet;
use crate::ast::SyntaxTree;
use crate::automaton::{Alphabet, Automaton};
use crate::error::Error;
use crate::positions::LeafId;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::HashMap;

/// How we represent a DFA state: the set of leaves it stands for, as a sorted `Vec`.
///
/// The sorting makes this canonical, so two states are the same if and only if their
/// `StateSet`s are equal, and we can look them up in a `HashMap`. (But be careful to keep it
/// sorted!)
pub type StateSet = Vec<LeafId>;

/// The printable name of a state, e.g. `{0,2,5}`.
pub fn state_name(s: &StateSet) -> String {
    format!("{{{}}}", s.iter().join(","))
}

/// The result of exploring the followpos graph. State 0 is the initial state and the other
/// states are numbered in the order in which they were discovered.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable {
    pub states: Vec<StateSet>,
    pub accepting: Vec<bool>,
    /// Transitions `(from, symbol, to)`, in the order in which they were found.
    pub transitions: Vec<(usize, char, usize)>,
}

impl StateTable {
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Registers every state and transition with `dfa`.
    pub fn write_into<A: Automaton>(&self, dfa: &mut A) {
        let names: Vec<String> = self.states.iter().map(state_name).collect();

        for (idx, name) in names.iter().enumerate() {
            dfa.create_state(name, idx == 0);
        }
        if let Some(init) = names.first() {
            dfa.set_initial(init);
        }
        for &(from, ch, to) in &self.transitions {
            dfa.set_trans(&names[from], ch, &names[to]);
        }
        for (name, &acc) in names.iter().zip(self.accepting.iter()) {
            if acc {
                dfa.make_final(name);
            }
        }
    }
}

// The intermediate data that we need while exploring.
struct Determinizer<'a> {
    tree: &'a SyntaxTree,
    alphabet: &'a Alphabet,
    state_map: HashMap<StateSet, usize>,
    table: StateTable,
    max_states: usize,
}

impl<'a> Determinizer<'a> {
    fn new(tree: &'a SyntaxTree, alphabet: &'a Alphabet, max_states: usize) -> Determinizer<'a> {
        Determinizer {
            tree,
            alphabet,
            state_map: HashMap::new(),
            table: StateTable {
                states: Vec::new(),
                accepting: Vec::new(),
                transitions: Vec::new(),
            },
            max_states,
        }
    }

    // Tries to add a new state.
    //
    // If the state already exists, returns the index of the old one. If there are too many states,
    // returns an error.
    fn add_state(&mut self, s: StateSet) -> crate::Result<usize> {
        if let Some(&idx) = self.state_map.get(&s) {
            return Ok(idx);
        }
        if self.table.num_states() >= self.max_states {
            return Err(Error::TooManyStates);
        }

        let idx = self.table.num_states();
        debug_assert!(s.iter().all(|&p| p < self.tree.num_leaves()), "bug: stray leaf in {:?}", s);
        self.table.accepting.push(s.binary_search(&self.tree.end_marker).is_ok());
        self.table.states.push(s.clone());
        self.state_map.insert(s, idx);
        Ok(idx)
    }

    // The union of followpos(p) over all the leaves p in `state` that carry `ch`.
    fn next_state(&self, state: &StateSet, ch: char) -> StateSet {
        let mut ret = BitSet::new();
        if let Some(leaves) = self.tree.positions.positions_of(ch) {
            for &p in state.iter().filter(|&&p| leaves.contains(p)) {
                ret.union_with(self.tree.followpos(p));
            }
        }
        ret.iter().collect()
    }

    fn run(&mut self) -> crate::Result<()> {
        let init: StateSet = self.tree.firstpos().iter().collect();
        self.add_state(init)?;

        // States are processed in the order they were discovered; everything before `next` has
        // been processed.
        let alphabet = self.alphabet;
        let mut next = 0;
        while next < self.table.num_states() {
            let state = self.table.states[next].clone();
            trace!("exploring state {} = {}", next, state_name(&state));

            for &ch in alphabet {
                let target = self.next_state(&state, ch);
                if target.is_empty() {
                    continue;
                }
                let target_idx = self.add_state(target)?;
                self.table.transitions.push((next, ch, target_idx));
            }
            next += 1;
        }
        Ok(())
    }
}

/// Builds the states and transitions of the DFA for an annotated tree.
///
/// Fails if the DFA needs more than `max_states` states.
pub fn determinize(tree: &SyntaxTree, alphabet: &Alphabet, max_states: usize)
-> crate::Result<StateTable>
{
    let mut det = Determinizer::new(tree, alphabet, max_states);
    det.run()?;
    debug!("found {} states and {} transitions",
           det.table.num_states(), det.table.transitions.len());
    Ok(det.table)
}
