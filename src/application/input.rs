use crate::common::{DomainError, DomainResult};
use std::str::FromStr;

/// Whitespace-separated token reader over one puzzle's input text.
pub struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { inner: input.split_whitespace(), consumed: 0 }
    }

    /// Next raw token; `what` names the expected field in the error.
    pub fn word(&mut self, what: &str) -> DomainResult<&'a str> {
        let token = self.inner.next().ok_or_else(|| {
            DomainError::invalid_input(format!("expected {} after {} tokens, input ended", what, self.consumed))
        })?;
        self.consumed += 1;
        Ok(token)
    }

    pub fn next<T: FromStr>(&mut self, what: &str) -> DomainResult<T> {
        let token = self.word(what)?;
        token
            .parse()
            .map_err(|_| DomainError::invalid_input(format!("expected {}, found '{}'", what, token)))
    }

    pub fn take<T: FromStr>(&mut self, count: usize, what: &str) -> DomainResult<Vec<T>> {
        (0..count).map(|_| self.next(what)).collect()
    }

    pub fn pairs<A: FromStr, B: FromStr>(&mut self, count: usize, what: &str) -> DomainResult<Vec<(A, B)>> {
        (0..count)
            .map(|_| -> DomainResult<(A, B)> { Ok((self.next(what)?, self.next(what)?)) })
            .collect()
    }

    pub fn words(&mut self, count: usize, what: &str) -> DomainResult<Vec<&'a str>> {
        (0..count).map(|_| self.word(what)).collect()
    }
}
