// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::ast::{Node, SyntaxTree};
use crate::builder::Parens;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::positions::Positions;
use crate::token::{Token, TokenKind, END_MARKER};
use log::{debug, warn};

// A recursive-descent parser over the output of `token::preprocess`. The grammar, loosest-binding
// first, is
//
//     Or      := Concat ('|' Concat)*
//     Concat  := Repeat ('.' Repeat)*
//     Repeat  := Primary ('*')*
//     Primary := '(' Or ')' | Symbol | <empty>
//
// Every node is annotated as soon as it is built, so the parser is also where the followpos
// table gets filled in.
struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    parens: Parens,
    positions: Positions,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], parens: Parens) -> Parser<'a> {
        Parser {
            tokens,
            cursor: 0,
            parens,
            positions: Positions::new(),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).cloned()
    }

    fn next_is(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |t| t.kind == kind)
    }

    fn parse_or(&mut self) -> Result<Node, SyntaxError> {
        let mut ret = self.parse_concat()?;
        while self.next_is(TokenKind::Or) {
            self.cursor += 1;
            let right = self.parse_concat()?;
            ret = Node::or(ret, right);
        }
        Ok(ret)
    }

    fn parse_concat(&mut self) -> Result<Node, SyntaxError> {
        let mut ret = self.parse_repeat()?;
        while self.next_is(TokenKind::Concat) {
            self.cursor += 1;
            let right = self.parse_repeat()?;
            ret = Node::concat(ret, right, &mut self.positions);
        }
        Ok(ret)
    }

    fn parse_repeat(&mut self) -> Result<Node, SyntaxError> {
        let mut ret = self.parse_primary()?;
        while self.next_is(TokenKind::Star) {
            self.cursor += 1;
            ret = Node::star(ret, &mut self.positions);
        }
        Ok(ret)
    }

    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let tok = match self.peek() {
            Some(tok) => tok,
            None => return Ok(Node::empty()),
        };

        match tok.kind {
            TokenKind::LParen => {
                self.cursor += 1;
                let ret = self.parse_or()?;
                if self.next_is(TokenKind::RParen) {
                    self.cursor += 1;
                } else if self.parens == Parens::Strict {
                    return Err(SyntaxError::new(tok.pos, SyntaxErrorKind::UnclosedGroup));
                }
                Ok(ret)
            },
            TokenKind::Symbol => {
                self.cursor += 1;
                let id = self.positions.add_leaf(tok.ch);
                Ok(Node::leaf(tok.ch, id))
            },
            // Anything else means there is nothing here, and the operator (or the end marker)
            // is left for someone further up.
            _ => Ok(Node::empty()),
        }
    }

    // Everything in the token stream after the top-level expression. After a successful
    // `parse_or`, the only thing that can be left over (apart from the end marker) is a `)`
    // with no matching `(`.
    fn finish(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::RParen => {
                if self.parens == Parens::Strict {
                    return Err(SyntaxError::new(tok.pos, SyntaxErrorKind::UnopenedGroup));
                }
                let skipped = self.tokens.len() - self.cursor - 1;
                warn!("unmatched ')' at {}: ignoring {} trailing tokens", tok.pos, skipped);
            },
            Some(tok) => {
                debug_assert!(tok.kind == TokenKind::EndMarker, "bug: parser stopped at {:?}", tok);
            },
            None => {},
        }
        Ok(())
    }
}

/// Parses and annotates a token sequence.
///
/// The returned tree is the augmented expression: whatever the tokens describe, followed by a
/// leaf for the end marker.
pub fn parse(tokens: &[Token], parens: Parens) -> Result<SyntaxTree, SyntaxError> {
    let mut parser = Parser::new(tokens, parens);
    let expr = parser.parse_or()?;
    parser.finish()?;

    let mut positions = parser.positions;
    let end_marker = positions.add_leaf(END_MARKER);
    let root = Node::concat(expr, Node::leaf(END_MARKER, end_marker), &mut positions);
    debug!("parsed {} tokens into a tree with {} leaves", tokens.len(), positions.num_leaves());

    Ok(SyntaxTree {
        root,
        positions,
        end_marker,
    })
}

#[cfg(test)]
mod tests {
    use bit_set::BitSet;
    use crate::ast::{Expr, Node, SyntaxTree};
    use crate::builder::Parens;
    use crate::error::{SyntaxError, SyntaxErrorKind};
    use crate::token::preprocess;
    use super::parse;

    fn tree(re: &str) -> SyntaxTree {
        parse(&preprocess(re), Parens::Strict).unwrap()
    }

    fn ids(set: &BitSet) -> Vec<usize> {
        set.iter().collect()
    }

    // Strips the annotations, leaving something that's easy to compare.
    fn shape(node: &Node) -> String {
        match node.expr {
            Expr::Leaf { ch, id } => format!("{}{}", ch, id),
            Expr::Empty => "()".to_owned(),
            Expr::Or(ref l, ref r) => format!("({}|{})", shape(l), shape(r)),
            Expr::Concat(ref l, ref r) => format!("({}.{})", shape(l), shape(r)),
            Expr::Star(ref c) => format!("{}*", shape(c)),
        }
    }

    fn tree_shape(re: &str) -> String {
        shape(&tree(re).root)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(tree_shape("ab|c"), "(((a0.b1)|c2).#3)");
        assert_eq!(tree_shape("a|bc"), "((a0|(b1.c2)).#3)");
        assert_eq!(tree_shape("ab*"), "((a0.b1*).#2)");
        assert_eq!(tree_shape("(ab)*"), "((a0.b1)*.#2)");
    }

    #[test]
    fn test_left_assoc() {
        assert_eq!(tree_shape("abc"), "(((a0.b1).c2).#3)");
        assert_eq!(tree_shape("a|b|c"), "(((a0|b1)|c2).#3)");
    }

    #[test]
    fn test_repeated_star() {
        assert_eq!(tree_shape("a**"), "(a0**.#1)");
    }

    #[test]
    fn test_empty_subexpressions() {
        assert_eq!(tree_shape(""), "(().#0)");
        assert_eq!(tree_shape("()"), "(().#0)");
        assert_eq!(tree_shape("a|"), "((a0|()).#1)");
        assert_eq!(tree_shape("|a"), "((()|a0).#1)");
        assert_eq!(tree_shape("*"), "(()*.#0)");
    }

    #[test]
    fn test_end_marker() {
        let t = tree("a*a");
        assert_eq!(t.end_marker, 2);
        assert_eq!(t.positions.symbol(t.end_marker), '#');
        assert_eq!(t.num_leaves(), 3);
    }

    #[test]
    fn test_textbook_followpos() {
        // Leaves: a0 b1 a2 b3 b4 #5.
        let t = tree("(a|b)*abb");
        assert!(!t.root.nullable);
        assert_eq!(ids(t.firstpos()), vec![0, 1, 2]);
        assert_eq!(ids(&t.root.lastpos), vec![5]);

        assert_eq!(ids(t.followpos(0)), vec![0, 1, 2]);
        assert_eq!(ids(t.followpos(1)), vec![0, 1, 2]);
        assert_eq!(ids(t.followpos(2)), vec![3]);
        assert_eq!(ids(t.followpos(3)), vec![4]);
        assert_eq!(ids(t.followpos(4)), vec![5]);
        assert!(t.followpos(5).is_empty());
    }

    #[test]
    fn test_same_symbol_different_positions() {
        let t = tree("a*a");
        assert_eq!(ids(t.firstpos()), vec![0, 1]);
        assert_eq!(ids(t.followpos(0)), vec![0, 1]);
        assert_eq!(ids(t.followpos(1)), vec![2]);
        assert_eq!(ids(t.positions.positions_of('a').unwrap()), vec![0, 1]);
    }

    #[test]
    fn test_nullable_root_reaches_end_marker() {
        let t = tree("a*|b");
        assert_eq!(ids(t.firstpos()), vec![0, 1, 2]);
    }

    #[test]
    fn test_strict_parens() {
        let err = |re: &str| parse(&preprocess(re), Parens::Strict).unwrap_err();

        assert_eq!(err("(a"), SyntaxError::new(0, SyntaxErrorKind::UnclosedGroup));
        assert_eq!(err("a((b)"), SyntaxError::new(1, SyntaxErrorKind::UnclosedGroup));
        assert_eq!(err("a)"), SyntaxError::new(1, SyntaxErrorKind::UnopenedGroup));
        assert_eq!(err("(a))b"), SyntaxError::new(3, SyntaxErrorKind::UnopenedGroup));
        assert_eq!(err(")"), SyntaxError::new(0, SyntaxErrorKind::UnopenedGroup));
    }

    #[test]
    fn test_permissive_parens() {
        let shape_of = |re: &str| shape(&parse(&preprocess(re), Parens::Permissive).unwrap().root);

        assert_eq!(shape_of("(a"), "(a0.#1)");
        assert_eq!(shape_of("a(b"), "((a0.b1).#2)");
        // Everything after the stray ')' is dropped.
        assert_eq!(shape_of("a)b"), "(a0.#1)");
    }
}
