use logos::Logos;

/// Represents a lexical token in an expression.
///
/// A token is either an operand in one of the two notations or one of the
/// four operator symbols. Anything else in the input, apart from plain
/// spaces, fails to lex; the parser treats that as a non-matching expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Arabic operand tokens: exactly `1` through `9`, or `10`. Longer digit
    /// runs lex as multiple tokens and are rejected by the parser.
    #[regex(r"10|[1-9]", |lex| lex.slice().to_string())]
    Arabic(String),
    /// Roman operand tokens: the canonical numerals `I` through `X`.
    /// Longest-match keeps `VIII` and `IX` single tokens.
    #[regex(r"I|II|III|IV|V|VI|VII|VIII|IX|X", |lex| lex.slice().to_string())]
    Roman(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// Plain spaces between tokens. Only `' '` is skippable; tabs, newlines
    /// and other whitespace are lexing errors.
    #[regex(r" +", logos::skip)]
    Ignored,
}
