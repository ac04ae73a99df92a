use chumsky::Parser;
use itertools::Itertools;

pub use error::TemplateError;

use crate::model::{Delimiters, Segment};

mod error;
mod template;

/// Parses a URL component template such as `/pets/{petId}` into its literal and placeholder
/// [Segment]s.
pub fn parse_template(data: &str, delimiters: Delimiters) -> Result<Vec<Segment>, TemplateError> {
    template::parser(delimiters)
        .parse(data)
        .into_result()
        .map_err(|errs| TemplateError::Invalid {
            template: data.to_string(),
            reason: errs.iter().map(|e| e.to_string()).join("; "),
        })
}
