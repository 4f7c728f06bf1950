// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bit_set::BitSet;
use crate::positions::{LeafId, Positions};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// One position of the expression. The end marker is also a leaf.
    Leaf { ch: char, id: LeafId },
    /// Matches only the empty string.
    Empty,
    Or(Box<Node>, Box<Node>),
    Concat(Box<Node>, Box<Node>),
    Star(Box<Node>),
}

/// A node of the expression tree, together with its `nullable`, `firstpos` and `lastpos`.
///
/// Nodes are annotated when they are constructed, and since a node is always constructed after
/// its children, the whole tree ends up annotated bottom-up. Constructing a `Concat` or a `Star`
/// also writes into the followpos table, which is why those constructors take the `Positions`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub expr: Expr,
    pub nullable: bool,
    pub firstpos: BitSet,
    pub lastpos: BitSet,
}

fn single(id: LeafId) -> BitSet {
    let mut ret = BitSet::with_capacity(id + 1);
    ret.insert(id);
    ret
}

fn union(a: &BitSet, b: &BitSet) -> BitSet {
    let mut ret = a.clone();
    ret.union_with(b);
    ret
}

impl Node {
    pub fn leaf(ch: char, id: LeafId) -> Node {
        Node {
            expr: Expr::Leaf { ch, id },
            nullable: false,
            firstpos: single(id),
            lastpos: single(id),
        }
    }

    pub fn empty() -> Node {
        Node {
            expr: Expr::Empty,
            nullable: true,
            firstpos: BitSet::new(),
            lastpos: BitSet::new(),
        }
    }

    pub fn or(left: Node, right: Node) -> Node {
        Node {
            nullable: left.nullable || right.nullable,
            firstpos: union(&left.firstpos, &right.firstpos),
            lastpos: union(&left.lastpos, &right.lastpos),
            expr: Expr::Or(Box::new(left), Box::new(right)),
        }
    }

    pub(crate) fn concat(left: Node, right: Node, positions: &mut Positions) -> Node {
        positions.add_followpos(&left.lastpos, &right.firstpos);

        let firstpos = if left.nullable {
            union(&left.firstpos, &right.firstpos)
        } else {
            left.firstpos.clone()
        };
        let lastpos = if right.nullable {
            union(&left.lastpos, &right.lastpos)
        } else {
            right.lastpos.clone()
        };

        Node {
            nullable: left.nullable && right.nullable,
            firstpos,
            lastpos,
            expr: Expr::Concat(Box::new(left), Box::new(right)),
        }
    }

    pub(crate) fn star(child: Node, positions: &mut Positions) -> Node {
        positions.add_followpos(&child.lastpos, &child.firstpos);

        Node {
            nullable: true,
            firstpos: child.firstpos.clone(),
            lastpos: child.lastpos.clone(),
            expr: Expr::Star(Box::new(child)),
        }
    }

    /// The id of this node, if it is a leaf.
    pub fn leaf_id(&self) -> Option<LeafId> {
        match self.expr {
            Expr::Leaf { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// An annotated expression tree: the augmented expression `(re)#`, its leaves and their
/// followpos sets.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxTree {
    pub root: Node,
    pub positions: Positions,
    /// The leaf holding the end marker. A DFA state accepts if and only if it contains this.
    pub end_marker: LeafId,
}

impl SyntaxTree {
    pub fn firstpos(&self) -> &BitSet {
        &self.root.firstpos
    }

    pub fn followpos(&self, id: LeafId) -> &BitSet {
        self.positions.followpos(id)
    }

    pub fn num_leaves(&self) -> usize {
        self.positions.num_leaves()
    }
}
