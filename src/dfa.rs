// Copyright 2015 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::automaton::{Alphabet, Automaton};
use crate::builder::Builder;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug, Formatter};

pub type StateIdx = usize;

#[derive(Clone, PartialEq, Debug)]
pub struct DfaState {
    pub name: String,
    pub transitions: BTreeMap<char, StateIdx>,
    pub accept: bool,
}

impl DfaState {
    pub fn new(name: &str) -> DfaState {
        DfaState {
            name: name.to_owned(),
            transitions: BTreeMap::new(),
            accept: false,
        }
    }
}

/// A deterministic finite automaton over the symbols of some `Alphabet`.
///
/// States are numbered in the order they were created, and they can also be looked up by name.
/// A missing transition means that the input is rejected.
#[derive(Clone, PartialEq)]
pub struct Dfa {
    alphabet: Alphabet,
    states: Vec<DfaState>,
    names: HashMap<String, StateIdx>,
    initial: Option<StateIdx>,
}

impl Dfa {
    /// Returns a `Dfa` with no states.
    pub fn new(alphabet: Alphabet) -> Dfa {
        Dfa {
            alphabet,
            states: Vec::new(),
            names: HashMap::new(),
            initial: None,
        }
    }

    /// Builds the `Dfa` for a regular expression, using the default settings of `Builder`.
    pub fn from_regex(re: &str) -> crate::Result<Dfa> {
        Builder::new().build(re)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_transitions(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    pub fn initial(&self) -> Option<StateIdx> {
        self.initial
    }

    pub fn state(&self, idx: StateIdx) -> &DfaState {
        &self.states[idx]
    }

    /// Looks up a state by name.
    pub fn find(&self, name: &str) -> Option<StateIdx> {
        self.names.get(name).cloned()
    }

    pub fn is_final(&self, idx: StateIdx) -> bool {
        self.states[idx].accept
    }

    /// The state we move to from `idx` on reading `ch`, if there is one.
    pub fn next(&self, idx: StateIdx, ch: char) -> Option<StateIdx> {
        self.states[idx].transitions.get(&ch).cloned()
    }

    /// Checks whether the whole of `s` is accepted, starting from the initial state.
    pub fn accepts(&self, s: &str) -> bool {
        let mut state = match self.initial {
            Some(init) => init,
            None => return false,
        };
        for ch in s.chars() {
            match self.next(state, ch) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// Renders this automaton in Graphviz's dot format.
    pub fn dot(&self) -> String {
        let mut ret = String::from("digraph G {\n    rankdir=LR;\n    empty [label=\"\" shape=plaintext];\n");
        for (idx, st) in self.states.iter().enumerate() {
            let shape = if st.accept { "doublecircle" } else { "circle" };
            ret.push_str(&format!("    s{} [label=\"{}\" shape={}];\n", idx, st.name, shape));
        }
        if let Some(init) = self.initial {
            ret.push_str(&format!("    empty -> s{};\n", init));
        }
        for (idx, st) in self.states.iter().enumerate() {
            for (ch, target) in &st.transitions {
                ret.push_str(&format!("    s{} -> s{} [label=\"{}\"];\n", idx, target, ch));
            }
        }
        ret.push_str("}\n");
        ret
    }

    // Panics if there is no such state: that means the caller didn't create it first.
    fn idx(&self, name: &str) -> StateIdx {
        match self.names.get(name) {
            Some(&idx) => idx,
            None => panic!("no state named {:?}", name),
        }
    }
}

impl Automaton for Dfa {
    type State = StateIdx;

    /// Creating a state that already exists just returns the old one.
    fn create_state(&mut self, name: &str, is_initial: bool) -> StateIdx {
        let existing = self.names.get(name).cloned();
        let idx = match existing {
            Some(idx) => idx,
            None => {
                self.states.push(DfaState::new(name));
                self.names.insert(name.to_owned(), self.states.len() - 1);
                self.states.len() - 1
            },
        };
        if is_initial {
            self.initial = Some(idx);
        }
        idx
    }

    fn set_initial(&mut self, name: &str) {
        self.initial = Some(self.idx(name));
    }

    fn set_trans(&mut self, from: &str, symbol: char, to: &str) {
        let (from, to) = (self.idx(from), self.idx(to));
        self.states[from].transitions.insert(symbol, to);
    }

    fn make_final(&mut self, name: &str) {
        let idx = self.idx(name);
        self.states[idx].accept = true;
    }
}

impl Debug for Dfa {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Dfa ({} states):", self.states.len())?;
        writeln!(f, "Alphabet: {:?}", self.alphabet.iter().collect::<String>())?;
        writeln!(f, "Initial: {:?}", self.initial)?;

        for (st_idx, st) in self.states.iter().enumerate() {
            writeln!(f, "\tState {} {} (accepting: {:?}):", st_idx, st.name, st.accept)?;

            if !st.transitions.is_empty() {
                f.write_str("\t\tTransitions:\n")?;
                for (ch, target) in &st.transitions {
                    writeln!(f, "\t\t\t{} => {}", ch, target)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::automaton::{Alphabet, Automaton};
    use super::Dfa;

    // Returns an automaton that accepts strings with an even number of 'b's.
    fn even_bs_dfa() -> Dfa {
        let mut ret = Dfa::new(Alphabet::from_regex("ab"));
        ret.create_state("even", true);
        ret.create_state("odd", false);
        ret.set_trans("even", 'a', "even");
        ret.set_trans("even", 'b', "odd");
        ret.set_trans("odd", 'a', "odd");
        ret.set_trans("odd", 'b', "even");
        ret.make_final("even");
        ret
    }

    fn dfa(re: &str) -> Dfa {
        Dfa::from_regex(re).unwrap()
    }

    #[test]
    fn test_container() {
        let dfa = even_bs_dfa();
        assert_eq!(dfa.num_states(), 2);
        assert_eq!(dfa.num_transitions(), 4);
        assert_eq!(dfa.initial(), Some(0));
        assert_eq!(dfa.find("odd"), Some(1));
        assert_eq!(dfa.find("none"), None);
        assert_eq!(dfa.next(0, 'b'), Some(1));
        assert_eq!(dfa.next(0, 'c'), None);
        assert!(dfa.is_final(0));
        assert!(!dfa.is_final(1));

        assert!(dfa.accepts(""));
        assert!(dfa.accepts("abab"));
        assert!(!dfa.accepts("ab"));
        assert!(!dfa.accepts("abc"));
    }

    #[test]
    fn test_create_existing_state() {
        let mut dfa = even_bs_dfa();
        assert_eq!(dfa.create_state("odd", false), 1);
        assert_eq!(dfa.num_states(), 2);
        dfa.set_initial("odd");
        assert_eq!(dfa.initial(), Some(1));
        assert!(dfa.accepts("b"));
    }

    #[test]
    #[should_panic]
    fn test_unknown_state() {
        let mut dfa = even_bs_dfa();
        dfa.set_trans("even", 'a', "nowhere");
    }

    #[test]
    fn test_no_initial_state() {
        let dfa = Dfa::new(Alphabet::from_regex("a"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("a"));
    }

    #[test]
    fn test_single_symbol() {
        let dfa = dfa("a");
        assert_eq!(dfa.num_states(), 2);
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("aa"));
        assert!(!dfa.accepts("b"));
    }

    #[test]
    fn test_or() {
        let dfa = dfa("a|b");
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("b"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn test_concat() {
        let dfa = dfa("ab");
        assert!(dfa.accepts("ab"));
        assert!(!dfa.accepts("a"));
        assert!(!dfa.accepts("ba"));
        assert!(!dfa.accepts("abb"));
    }

    #[test]
    fn test_star() {
        let dfa = dfa("a*");
        let init = dfa.initial().unwrap();
        assert!(dfa.is_final(init));
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("aaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn test_textbook() {
        let dfa = dfa("(a|b)*abb");
        assert_eq!(dfa.num_states(), 4);
        for s in &["abb", "aabb", "babb", "abbabb", "bbbabb"] {
            assert!(dfa.accepts(s), "{}", s);
        }
        for s in &["", "ab", "abbb", "abba", "abc"] {
            assert!(!dfa.accepts(s), "{}", s);
        }
        assert_eq!(dfa.find("{0,1,2}"), dfa.initial());
        assert!(dfa.is_final(dfa.find("{0,1,2,5}").unwrap()));
    }

    #[test]
    fn test_empty_group() {
        let dfa = dfa("()");
        assert_eq!(dfa.num_states(), 1);
        assert!(dfa.accepts(""));
        assert!(!dfa.accepts("a"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(dfa("(a|b)*a(a|b)(a|b)"), dfa("(a|b)*a(a|b)(a|b)"));
    }

    #[test]
    fn test_redundant_or() {
        let one = dfa("a");
        let two = dfa("a|a");
        for s in &["", "a", "aa", "b"] {
            assert_eq!(one.accepts(s), two.accepts(s));
        }
    }

    #[test]
    fn test_dot() {
        let dot = dfa("a").dot();
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("s0 [label=\"{0}\" shape=circle];"));
        assert!(dot.contains("s1 [label=\"{1}\" shape=doublecircle];"));
        assert!(dot.contains("empty -> s0;"));
        assert!(dot.contains("s0 -> s1 [label=\"a\"];"));
        assert_eq!(dot, "digraph G {\n    rankdir=LR;\n    empty [label=\"\" shape=plaintext];\n\
                         \x20   s0 [label=\"{0}\" shape=circle];\n\
                         \x20   s1 [label=\"{1}\" shape=doublecircle];\n\
                         \x20   empty -> s0;\n\
                         \x20   s0 -> s1 [label=\"a\"];\n}\n");
    }

    #[test]
    fn test_debug() {
        let s = format!("{:?}", dfa("ab"));
        assert!(s.starts_with("Dfa (3 states):\n"));
        assert!(s.contains("Alphabet: \"ab\""));
        assert!(s.contains("\tState 2 {2} (accepting: true):"));
    }
}
