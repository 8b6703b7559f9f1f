//! parsum: tracing recursive-descent parser for sums with parentheses
//!
//! parsum tokenises and parses a miniature arithmetic language (sums of
//! integer literals with parentheses) while narrating every grammar rule it
//! applies. The same scanner also powers a token classifier and a character
//! frequency reporter over arbitrary text.
//!
//! # Pipeline
//!
//! ```text
//! Input line
//!     |
//!     v
//! CharStream (one-step pushback)
//!     |
//!     v
//! Lexer (maximal munch)
//!     |
//!     v
//! Parser (one method per nonterminal)
//!     |
//!     +--> NodeArena (parse tree nodes)
//!     +--> TraceLog  (rule applications, live)
//! ```
//!
//! # Modules
//!
//! - [`parser::stream`]: character cursor with one-step pushback and
//!   line/column tracking
//! - [`parser::lexer`]: maximal-munch scanner over a C-flavoured token set
//! - [`parser::parse`]: recursive-descent parse session, one method per
//!   nonterminal, with configurable node and nesting limits
//! - [`parser::tree`]: parse tree nodes and the post-hoc tree dump
//! - [`arena`]: append-only node table; exhaustion is an error value, not
//!   a panic
//! - [`trace`]: collected rule-application lines from a parse
//! - [`freq`]: character frequency reports over the same input stream
//!
//! # Grammar
//!
//! ```text
//! S  -> E S'
//! S' -> + S
//! S' -> ε
//! E  -> INTEGER_LITERAL
//! E  -> ( S )
//! ```

pub mod arena;
pub mod freq;
pub mod parser;
pub mod trace;
