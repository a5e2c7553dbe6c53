use std::fmt;

use crate::CompileError;

/// A lexical token of the expression language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Ident(name) => f.write_str(name),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Caret => f.write_str("^"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// A token and the byte offset where it starts in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

/// Splits source text into tokens.
///
/// Identifiers are whole words (`[A-Za-z_][A-Za-z0-9_]*`), so `exp`, `e` and
/// `x` are always distinct tokens. `**` is read as `^`.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, CompileError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let pos = i;

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let single = match c {
            b'+' => Some(Token::Plus),
            b'-' => Some(Token::Minus),
            b'/' => Some(Token::Slash),
            b'^' => Some(Token::Caret),
            b'(' => Some(Token::LParen),
            b')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(token) = single {
            tokens.push(Spanned { token, pos });
            i += 1;
            continue;
        }

        if c == b'*' {
            if bytes.get(i + 1) == Some(&b'*') {
                tokens.push(Spanned { token: Token::Caret, pos });
                i += 2;
            } else {
                tokens.push(Spanned { token: Token::Star, pos });
                i += 1;
            }
            continue;
        }

        if c.is_ascii_digit() || c == b'.' {
            i = scan_number(bytes, i);
            let text = &source[pos..i];
            let value = text.parse::<f64>().map_err(|_| CompileError::InvalidNumber {
                text: text.to_string(),
                pos,
            })?;
            tokens.push(Spanned { token: Token::Number(value), pos });
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let name = source[pos..i].to_string();
            tokens.push(Spanned { token: Token::Ident(name), pos });
            continue;
        }

        // Non-ASCII input lands here as well; report the full character.
        let ch = source[pos..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(CompileError::UnexpectedChar { ch, pos });
    }

    Ok(tokens)
}

/// Returns the end offset of the number literal starting at `start`.
///
/// An exponent is only consumed when digits follow it, so a trailing `e`
/// stays available as the constant.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = digits(start);
    if bytes.get(i) == Some(&b'.') {
        i = digits(i + 1);
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            i = digits(j);
        }
    }

    i
}
