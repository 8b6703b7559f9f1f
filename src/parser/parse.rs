//! Recursive-descent parser for the sum grammar
//!
//! ```text
//! S  -> E S'
//! S' -> + S | ε
//! E  -> INTEGER_LITERAL | ( S )
//! ```
//!
//! One method per nonterminal, one token of lookahead, one trace line per
//! rule application. The parser is a session object: it owns the scanner,
//! the lookahead, the node arena the tree is built in, and the trace, so a
//! parse needs no state outside `self`. Errors are fail-fast: the first
//! fatal condition unwinds the whole parse and no partial tree is returned,
//! though the partial trace stays readable.

use super::lexer::{Lexer, Token, TokenKind};
use super::stream::{CharStream, SourceLocation};
use super::tree::{GrammarSymbol, NodeId, TreeNode};
use crate::arena::{NodeArena, OutOfMemory};
use crate::trace::TraceLog;
use std::fmt;

/// Longest accepted input, in characters.
pub const MAX_EXPR_LEN: usize = 999;

/// Default node arena capacity. Any input within [`MAX_EXPR_LEN`] fits with
/// room to spare: a maximal `1+1+…` line needs just under 2500 nodes.
pub const DEFAULT_NODE_CAPACITY: usize = 4096;

/// Default ceiling on rule nesting. Legal inputs stay beneath it; it exists
/// so that hand-configured sessions fail with an error value instead of
/// exhausting the call stack, since recursion depth grows with nesting.
pub const DEFAULT_MAX_NESTING: usize = 1024;

/// Everything that can abort a parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lookahead matched none of the current rule's alternatives.
    UnexpectedToken {
        expected: &'static [TokenKind],
        found: Token,
    },
    /// A `(` group reached the end of its expression without a matching `)`.
    UnterminatedGroup {
        open: SourceLocation,
        found: Token,
    },
    /// The node arena filled up mid-parse.
    OutOfMemory { used: usize, capacity: usize },
    /// Rule nesting hit the configured ceiling.
    NestingLimitExceeded { limit: usize },
    /// The input is longer than [`MAX_EXPR_LEN`].
    InputTooLong { len: usize, limit: usize },
}

impl ParseError {
    /// The source location the error points at, when it has one.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found.location()),
            ParseError::UnterminatedGroup { open, .. } => Some(*open),
            ParseError::OutOfMemory { .. }
            | ParseError::NestingLimitExceeded { .. }
            | ParseError::InputTooLong { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                let loc = found.location();
                write!(
                    f,
                    "Expected {}, found {} at line {}, column {}",
                    expected_list(expected),
                    found,
                    loc.line,
                    loc.column
                )
            }
            ParseError::UnterminatedGroup { open, found } => write!(
                f,
                "Unterminated group: '(' at line {}, column {} has no matching ')' (found {})",
                open.line, open.column, found
            ),
            ParseError::OutOfMemory { used, capacity } => write!(
                f,
                "Out of memory: {} nodes in use, capacity is {}",
                used, capacity
            ),
            ParseError::NestingLimitExceeded { limit } => {
                write!(f, "Nesting limit exceeded: depth would pass {}", limit)
            }
            ParseError::InputTooLong { len, limit } => {
                write!(f, "Input too long: {} characters, limit is {}", len, limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<OutOfMemory> for ParseError {
    fn from(e: OutOfMemory) -> Self {
        ParseError::OutOfMemory {
            used: e.used,
            capacity: e.capacity,
        }
    }
}

fn expected_list(kinds: &[TokenKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    names.join(" or ")
}

/// A completed parse: the root node plus, when the grammar finished before
/// the input did, the first unconsumed token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub root: NodeId,
    pub trailing: Option<Token>,
}

/// One parse session over one input.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    lookahead: Token,
    arena: NodeArena,
    trace: TraceLog,
    depth: usize,
    max_nesting: usize,
}

impl Parser {
    /// Builds a session with the default limits. Fails up front if the input
    /// is longer than [`MAX_EXPR_LEN`].
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Self::with_limits(input, DEFAULT_NODE_CAPACITY, DEFAULT_MAX_NESTING)
    }

    /// Builds a session with an explicit arena capacity and nesting ceiling.
    pub fn with_limits(
        input: &str,
        node_capacity: usize,
        max_nesting: usize,
    ) -> Result<Self, ParseError> {
        let len = input.chars().count();
        if len > MAX_EXPR_LEN {
            return Err(ParseError::InputTooLong {
                len,
                limit: MAX_EXPR_LEN,
            });
        }
        let mut lexer = Lexer::new(CharStream::new(input));
        let lookahead = lexer.next_token();
        Ok(Parser {
            lexer,
            lookahead,
            arena: NodeArena::with_capacity(node_capacity),
            trace: TraceLog::new(),
            depth: 0,
            max_nesting,
        })
    }

    /// Runs the grammar from `S` over the whole input.
    ///
    /// A leftover lookahead after `S` completes is not an error: the finished
    /// tree is returned together with the first unconsumed token so the
    /// caller can report partial consumption.
    pub fn parse(&mut self) -> Result<ParseOutcome, ParseError> {
        let root = self.parse_s()?;
        let trailing = match self.lookahead {
            Token::End(_) => None,
            _ => Some(self.lookahead.clone()),
        };
        Ok(ParseOutcome { root, trailing })
    }

    /// The live trace recorded so far. Also meaningful after a failed parse:
    /// every rule applied before the failure is present.
    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    /// The arena holding this session's tree.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    // S -> E S'
    fn parse_s(&mut self) -> Result<NodeId, ParseError> {
        match self.lookahead {
            Token::IntLiteral(..) | Token::LParen(_) => {
                self.rule("S -> E S'");
                self.descend()?;
                let e = self.parse_e()?;
                let s_prime = self.parse_s_prime()?;
                self.ascend();
                self.sequence(GrammarSymbol::S, vec![e, s_prime])
            }
            _ => Err(self.unexpected(&[TokenKind::IntLiteral, TokenKind::LParen])),
        }
    }

    // S' -> + S | ε
    fn parse_s_prime(&mut self) -> Result<NodeId, ParseError> {
        match self.lookahead {
            Token::Plus(_) => {
                self.rule("S' -> + S");
                self.advance();
                let plus = self.terminal("+")?;
                self.descend()?;
                let s = self.parse_s()?;
                self.ascend();
                self.sequence(GrammarSymbol::SPrime, vec![plus, s])
            }
            // Follow set of S': ')' closes a group, End closes the input.
            // ε applies without consuming anything.
            Token::RParen(_) | Token::End(_) => {
                self.rule("S' -> ε");
                self.sequence(GrammarSymbol::SPrime, Vec::new())
            }
            _ => Err(self.unexpected(&[TokenKind::Plus, TokenKind::RParen, TokenKind::End])),
        }
    }

    // E -> INTEGER_LITERAL | ( S )
    fn parse_e(&mut self) -> Result<NodeId, ParseError> {
        match &self.lookahead {
            Token::IntLiteral(text, _) => {
                let text = text.clone();
                self.rule(&format!("E -> {}", text));
                self.advance();
                let lit = self.terminal(&text)?;
                self.sequence(GrammarSymbol::E, vec![lit])
            }
            Token::LParen(loc) => {
                let open = *loc;
                self.rule("E -> ( S )");
                self.advance();
                let lparen = self.terminal("(")?;
                self.descend()?;
                let inner = self.parse_s()?;
                self.ascend();
                if !matches!(self.lookahead, Token::RParen(_)) {
                    return Err(ParseError::UnterminatedGroup {
                        open,
                        found: self.lookahead.clone(),
                    });
                }
                self.advance();
                let rparen = self.terminal(")")?;
                self.sequence(GrammarSymbol::E, vec![lparen, inner, rparen])
            }
            _ => Err(self.unexpected(&[TokenKind::IntLiteral, TokenKind::LParen])),
        }
    }

    /// Swaps the lookahead for the next scanner token and returns the
    /// consumed one.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.lookahead, next)
    }

    fn unexpected(&self, expected: &'static [TokenKind]) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.lookahead.clone(),
        }
    }

    fn rule(&mut self, production: &str) {
        self.trace.rule(self.depth, production);
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_nesting {
            return Err(ParseError::NestingLimitExceeded {
                limit: self.max_nesting,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn terminal(&mut self, text: &str) -> Result<NodeId, ParseError> {
        Ok(self.arena.alloc(TreeNode::Terminal {
            text: text.to_string(),
        })?)
    }

    fn sequence(
        &mut self,
        symbol: GrammarSymbol,
        children: Vec<NodeId>,
    ) -> Result<NodeId, ParseError> {
        Ok(self.arena.alloc(TreeNode::Sequence { symbol, children })?)
    }
}
