//! Test helpers for asserting rule outcomes.
use super::{Cursor, Parsed};
use crate::errors::GrammarError;

pub(crate) fn rule_ok<'a, T, F>(input: &'a str, rule: F) -> (T, usize)
where
    F: FnOnce(Cursor<'a>) -> Parsed<'a, T>,
{
    match rule(Cursor::new(input)) {
        Ok((value, next)) => (value, next.position()),
        Err(err) => panic!("rule should match {input:?}: {err}"),
    }
}

pub(crate) fn rule_err<'a, T, F>(input: &'a str, rule: F) -> GrammarError
where
    F: FnOnce(Cursor<'a>) -> Parsed<'a, T>,
{
    match rule(Cursor::new(input)) {
        Ok(_) => panic!("rule should reject {input:?}"),
        Err(err) => err,
    }
}
