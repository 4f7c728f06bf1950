// Copyright 2015-2016 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// The character carried by the end-of-input leaf. It can never collide with a symbol, since
/// symbols are alphanumeric.
pub const END_MARKER: char = '#';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Symbol,
    EndMarker,
    LParen,
    RParen,
    Concat,
    Or,
    Star,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    /// Char offset in the source expression. Inserted `Concat`s take the offset of the token
    /// that follows them, and the end marker takes the length of the source.
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, ch: char, pos: usize) -> Token {
        Token { kind, ch, pos }
    }

    fn ends_expr(&self) -> bool {
        match self.kind {
            TokenKind::Symbol | TokenKind::RParen | TokenKind::Star => true,
            _ => false,
        }
    }

    fn starts_expr(&self) -> bool {
        match self.kind {
            TokenKind::Symbol | TokenKind::LParen => true,
            _ => false,
        }
    }
}

/// Returns true if `ch` can appear as a symbol of the alphabet.
pub fn is_symbol(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Returns the token for `ch`, or `None` if `ch` is not part of the regex syntax.
fn classify(ch: char, pos: usize) -> Option<Token> {
    let kind = match ch {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '|' => TokenKind::Or,
        '*' => TokenKind::Star,
        c if is_symbol(c) => TokenKind::Symbol,
        _ => return None,
    };
    Some(Token::new(kind, ch, pos))
}

/// Turns a regular expression into a token sequence that the parser can consume.
///
/// Concatenation is implicit in the source (`ab`), so we make it explicit (`a.b`). Characters
/// that are not symbols or operators are dropped; the decision about where to insert `Concat`s
/// is made on what remains, so `a b` is the same as `ab`. The sequence always ends with exactly
/// one `EndMarker`.
pub fn preprocess(re: &str) -> Vec<Token> {
    let mut ret: Vec<Token> = Vec::with_capacity(re.len() * 2 + 1);
    let mut len = 0;

    for (pos, ch) in re.chars().enumerate() {
        len = pos + 1;
        let tok = match classify(ch, pos) {
            Some(tok) => tok,
            None => continue,
        };
        if tok.starts_expr() && ret.last().map_or(false, Token::ends_expr) {
            ret.push(Token::new(TokenKind::Concat, '.', pos));
        }
        ret.push(tok);
    }

    ret.push(Token::new(TokenKind::EndMarker, END_MARKER, len));
    ret
}
