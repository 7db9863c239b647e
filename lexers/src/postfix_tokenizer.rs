#![deny(warnings)]

use crate::scanner::Scanner;
use std::str::Chars;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    Operator,
    Function,
    Invalid,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PostfixToken {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl PostfixToken {
    pub fn new<S: Into<String>>(lexeme: S) -> Self {
        let lexeme = lexeme.into();
        let kind = classify(&lexeme);
        PostfixToken { lexeme, kind }
    }
}

// a scan only counts if it consumed the whole lexeme
fn spans<'a, F>(lexeme: &'a str, scan: F) -> bool
where
    F: FnOnce(&mut Scanner<Chars<'a>>) -> Option<String>,
{
    let mut src = Scanner::new(lexeme.chars());
    scan(&mut src).is_some() && src.exhausted()
}

/// Classify a single whitespace-free lexeme.
/// Categories are tried in order Number, Function, Operator; the first full
/// match wins and anything left over is Invalid.
pub fn classify(lexeme: &str) -> TokenKind {
    if spans(lexeme, |s| s.scan_postfix_number()) {
        TokenKind::Number
    } else if spans(lexeme, |s| s.scan_function_name()) {
        TokenKind::Function
    } else if spans(lexeme, |s| s.scan_arith_op()) {
        TokenKind::Operator
    } else {
        TokenKind::Invalid
    }
}

// Splits the source on whitespace and classifies each lexeme
pub struct PostfixTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> PostfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PostfixTokenizer { src: Scanner::new(source) }
    }
}

impl<'a> PostfixTokenizer<Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for PostfixTokenizer<I> {
    type Item = PostfixToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.skip_whitespace();
        self.src.scan_lexeme().map(PostfixToken::new)
    }
}

///////////////////////////////////////////////////////////////////////////////
