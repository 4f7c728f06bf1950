// Copyright 2015 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
This crate turns regular expressions directly into deterministic finite automata (DFAs),
without going through a non-deterministic automaton first.

The regular expressions are the classical ones: symbols are ASCII letters and digits,
concatenation is implicit, and there are `|`, `*` and parentheses. The construction is the
"followpos" one: the expression `re` is augmented to `(re)#`, every occurrence of a symbol in it
(a *position*, or *leaf*) gets its own id, and each DFA state is the set of positions that
could match the next input symbol. A state accepts if it contains the position of `#`.

The resulting DFA is correct but not necessarily minimal.

# Example

```rust
use followpos_dfa::Dfa;
let dfa = Dfa::from_regex("(a|b)*abb").unwrap();
assert_eq!(dfa.num_states(), 4);
assert!(dfa.accepts("aababb"));
assert!(!dfa.accepts("abba"));
```

# Writing into another automaton

The DFA can be written into anything that implements `Automaton`. Its states are named after the
sets of positions they represent, e.g. `{0,1,2}`.

```rust
use followpos_dfa::{Alphabet, Builder, Dfa};
let mut dfa = Dfa::new(Alphabet::from_regex("ab*"));
Builder::new().max_states(10).build_into("ab*", &mut dfa).unwrap();
assert_eq!(dfa.find("{0}"), dfa.initial());
```
*/

mod ast;
mod automaton;
mod builder;
mod determinize;
mod dfa;
mod error;
mod parser;
mod positions;
mod token;

pub use crate::ast::{Expr, Node, SyntaxTree};
pub use crate::automaton::{Alphabet, Automaton};
pub use crate::builder::{Builder, Parens, Unsupported};
pub use crate::determinize::{state_name, StateSet};
pub use crate::dfa::{Dfa, DfaState, StateIdx};
pub use crate::error::{Error, SyntaxError, SyntaxErrorKind};
pub use crate::positions::{LeafId, Positions};
pub use crate::token::END_MARKER;

pub type Result<T> = std::result::Result<T, Error>;
