// src/tokenizer.rs
//
// 分数リテラルのトークナイザー
//
// 入力を「連続する ASCII 数字」と「それ以外の 1 文字」に分割する。
// 空白も 1 文字の記号として残す（帯分数 "123 1/2" の区切りに使う）。

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// 連続する数字
    Digits(&'a str),
    /// 数字以外の 1 文字
    Symbol(char),
}

impl<'a> Token<'a> {
    pub fn digits(&self) -> Option<&'a str> {
        match *self {
            Token::Digits(s) => Some(s),
            Token::Symbol(_) => None,
        }
    }

    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Token::Symbol(s) if *s == c)
    }
}

/// 数字の連続は 1 トークンにまとめ、それ以外は 1 文字ずつトークンにする
pub fn tokenize(input: &str) -> SmallVec<[Token<'_>; 8]> {
    let mut tokens = SmallVec::new();
    let mut run_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_ascii_digit() {
            if run_start.is_none() {
                run_start = Some(i);
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            tokens.push(Token::Digits(&input[start..i]));
        }
        tokens.push(Token::Symbol(c));
    }
    if let Some(start) = run_start {
        tokens.push(Token::Digits(&input[start..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_integer() {
        let tokens = tokenize("1234");
        assert_eq!(tokens.as_slice(), &[Token::Digits("1234")]);
    }

    #[test]
    fn test_tokenize_repeating_decimal() {
        let tokens = tokenize("-12.3'45'");
        assert_eq!(tokens.as_slice(), &[
            Token::Symbol('-'),
            Token::Digits("12"),
            Token::Symbol('.'),
            Token::Digits("3"),
            Token::Symbol('\''),
            Token::Digits("45"),
            Token::Symbol('\''),
        ]);
    }

    #[test]
    fn test_tokenize_mixed_number_keeps_space() {
        let tokens = tokenize("123 1/2");
        assert_eq!(tokens.as_slice(), &[
            Token::Digits("123"),
            Token::Symbol(' '),
            Token::Digits("1"),
            Token::Symbol('/'),
            Token::Digits("2"),
        ]);
    }

    #[test]
    fn test_tokenize_non_ascii_is_symbol() {
        let tokens = tokenize("1½");
        assert_eq!(tokens.as_slice(), &[Token::Digits("1"), Token::Symbol('½')]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }
}
