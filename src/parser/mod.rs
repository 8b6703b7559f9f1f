//! Expression parser
//!
//! This module transforms one input into a parse tree:
//! - [`stream`]: character cursor (input text → chars, one-step pushback)
//! - [`lexer`]: tokenization (chars → tokens)
//! - [`parse`]: recursive descent (tokens → tree + trace)
//! - [`tree`]: parse tree node definitions and the tree dump
//!
//! # Token set
//!
//! The scanner recognises a full C-flavoured token set (keywords, braces,
//! comparison operators, …) even though the sum grammar itself only consumes
//! integer literals, `+` and parentheses. Out-of-grammar tokens scan fine
//! and are then rejected by whichever rule meets them, with an accurate
//! location.
//!
//! # Parser implementation
//!
//! Hand-written recursive descent, one method per nonterminal, single token
//! of lookahead. No parser generator dependencies.

pub mod lexer;
pub mod parse;
pub mod stream;
pub mod tree;
