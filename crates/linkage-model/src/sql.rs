//! Column-name standardization for SQL fragments.
//!
//! Null-level conditions are usually generated, so their raw SQL reads better
//! on a chart than a generic label, provided column references are tidied up
//! first. This is a lexical rewrite: it never parses the statement.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::SqlDialect;
use crate::dialect::{identifier_quote, quote_with};

const LEFT_ALIAS: &str = "l";
const RIGHT_ALIAS: &str = "r";

/// Normalizes column references in `sql` for the given dialect.
///
/// - quoted identifiers that are plain names lose their quotes
/// - `l.col` / `r.col` become `col_l` / `col_r`
/// - single-quoted literals and unterminated quoted names are copied verbatim
/// - whitespace runs outside literals collapse to one space
pub fn standardise_colnames_in_sql(sql: &str, dialect: Option<&SqlDialect>) -> String {
    let quote = identifier_quote(dialect);
    let mut lexer = Lexer {
        sql,
        chars: sql.char_indices().peekable(),
        quote,
    };
    let mut out = String::with_capacity(sql.len());

    while let Some(token) = lexer.next_token() {
        match token {
            Token::Whitespace => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            Token::Literal(text) | Token::Other(text) => out.push_str(text),
            Token::Identifier(ident) => {
                if let Some(suffix) = table_suffix(&ident)
                    && let Some(column) = lexer.qualified_column()
                {
                    let suffixed = format!("{}_{suffix}", column.value);
                    out.push_str(&render_identifier(&suffixed, quote));
                } else if ident.quoted {
                    out.push_str(&render_identifier(&ident.value, quote));
                } else {
                    out.push_str(&ident.value);
                }
            }
        }
    }

    out.truncate(out.trim_end().len());
    out
}

fn table_suffix(ident: &Identifier) -> Option<&'static str> {
    if ident.value.eq_ignore_ascii_case(LEFT_ALIAS) {
        Some(LEFT_ALIAS)
    } else if ident.value.eq_ignore_ascii_case(RIGHT_ALIAS) {
        Some(RIGHT_ALIAS)
    } else {
        None
    }
}

fn is_plain_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn render_identifier(value: &str, quote: char) -> String {
    if is_plain_name(value) {
        value.to_string()
    } else {
        quote_with(quote, value)
    }
}

#[derive(Debug)]
struct Identifier {
    value: String,
    quoted: bool,
}

#[derive(Debug)]
enum Token<'a> {
    Whitespace,
    Literal(&'a str),
    Identifier(Identifier),
    Other(&'a str),
}

struct Lexer<'a> {
    sql: &'a str,
    chars: Peekable<CharIndices<'a>>,
    quote: char,
}

impl<'a> Lexer<'a> {
    fn next_token(&mut self) -> Option<Token<'a>> {
        let sql = self.sql;
        let &(start, ch) = self.chars.peek()?;

        if ch.is_whitespace() {
            while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
            return Some(Token::Whitespace);
        }
        if ch == '\'' {
            self.skip_delimited('\'');
            return Some(Token::Literal(&sql[start..self.offset()]));
        }
        if ch == self.quote || ch.is_ascii_alphabetic() || ch == '_' {
            return Some(match self.identifier() {
                Some(ident) => Token::Identifier(ident),
                // Unterminated quoted name, kept as written.
                None => Token::Other(&sql[start..self.offset()]),
            });
        }
        if ch == '"' {
            // Double quotes delimit strings where identifiers use backticks.
            self.skip_delimited('"');
            return Some(Token::Literal(&sql[start..self.offset()]));
        }
        if ch.is_ascii_digit() {
            while self
                .chars
                .next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
                .is_some()
            {}
            let end = self.offset();
            return Some(Token::Other(&sql[start..end]));
        }

        self.chars.next();
        let end = self.offset();
        Some(Token::Other(&sql[start..end]))
    }

    /// Reads a bare or quoted identifier at the current position.
    ///
    /// Returns `None` for an unterminated quoted name, which is consumed.
    fn identifier(&mut self) -> Option<Identifier> {
        let sql = self.sql;
        let &(start, ch) = self.chars.peek()?;
        if ch == self.quote {
            if !self.skip_delimited(self.quote) {
                return None;
            }
            let raw = &sql[start..self.offset()];
            let doubled = format!("{0}{0}", self.quote);
            let inner = raw
                .strip_prefix(self.quote)
                .map(|rest| rest.strip_suffix(self.quote).unwrap_or(rest))
                .unwrap_or(raw);
            return Some(Identifier {
                value: inner.replace(&doubled, &self.quote.to_string()),
                quoted: true,
            });
        }
        if ch.is_ascii_alphabetic() || ch == '_' {
            while self
                .chars
                .next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
                .is_some()
            {}
            return Some(Identifier {
                value: sql[start..self.offset()].to_string(),
                quoted: false,
            });
        }
        None
    }

    /// Consumes `.column` after a table alias, if one follows.
    fn qualified_column(&mut self) -> Option<Identifier> {
        let &(dot, ch) = self.chars.peek()?;
        if ch != '.' {
            return None;
        }
        let next = self.sql[dot + 1..].chars().next()?;
        if next != self.quote && !(next.is_ascii_alphabetic() || next == '_') {
            return None;
        }
        let resume = self.chars.clone();
        self.chars.next();
        let column = self.identifier();
        if column.is_none() {
            self.chars = resume;
        }
        column
    }

    /// Skips a run delimited by `delim`, honouring doubled delimiters.
    /// Returns whether the closing delimiter was found.
    fn skip_delimited(&mut self, delim: char) -> bool {
        self.chars.next();
        while let Some((_, c)) = self.chars.next() {
            if c == delim && self.chars.next_if(|(_, n)| *n == delim).is_none() {
                return true;
            }
        }
        false
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.sql.len(), |(idx, _)| *idx)
    }
}
