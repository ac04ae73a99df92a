pub use host::Host;
pub use model::Api;
pub use serializer::{Paw, Serializer};

pub mod host;
pub mod model;
pub mod parser;
pub mod serializer;

#[cfg(test)]
mod test_util;
