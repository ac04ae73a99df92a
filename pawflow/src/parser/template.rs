use chumsky::prelude::*;

use crate::model::{Delimiters, Segment};

pub type Error<'a> = extra::Err<Rich<'a, char>>;

/// A run of placeholders and literal text. Literal text may contain the close delimiter but never
/// the open delimiter, which always starts a placeholder.
pub fn parser<'a>(delimiters: Delimiters) -> impl Parser<'a, &'a str, Vec<Segment>, Error<'a>> {
    let Delimiters { open, close } = delimiters;
    let variable = any()
        .filter(move |c: &char| *c != open && *c != close)
        .repeated()
        .at_least(1)
        .slice()
        .delimited_by(just(open), just(close))
        .map(|name: &str| Segment::Variable(name.to_string()));
    let literal = any()
        .filter(move |c: &char| *c != open)
        .repeated()
        .at_least(1)
        .slice()
        .map(|text: &str| Segment::Literal(text.to_string()));
    choice((variable, literal))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}
