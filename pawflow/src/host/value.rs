use serde::Serialize;

use crate::host::{RequestVariableId, VariableId};

/// A host value that is computed rather than literal.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DynamicValue {
    /// A JSON document stored as its string form.
    Json { json: String },
    BasicAuth { username: String, password: String },
    /// A set of choices of which any subset can be enabled, joined by `separator`.
    MultiSelector {
        choices: Vec<RecordParameter>,
        separator: String,
    },
    EnvironmentVariable { variable: VariableId },
    RequestVariable { variable: RequestVariableId },
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct RecordParameter {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(untagged)]
pub enum Piece {
    Literal(String),
    Value(DynamicValue),
}

/// A sequence of literal strings and [DynamicValue]s rendered as one string by the host.
///
/// Pieces are kept separate so the host can edit them independently. Empty literals are dropped.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct DynamicString {
    pieces: Vec<Piece>,
}

impl DynamicString {
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut ds = Self::default();
        for piece in pieces {
            ds.push(piece);
        }
        ds
    }

    pub fn push(&mut self, piece: Piece) {
        match &piece {
            Piece::Literal(text) if text.is_empty() => {}
            _ => self.pieces.push(piece),
        }
    }

    /// Appends all pieces of `other` after the pieces of `self`.
    pub fn concat(mut self, other: DynamicString) -> Self {
        self.pieces.extend(other.pieces);
        self
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl From<&str> for Piece {
    fn from(value: &str) -> Self {
        Piece::Literal(value.to_string())
    }
}

impl From<String> for Piece {
    fn from(value: String) -> Self {
        Piece::Literal(value)
    }
}

impl From<DynamicValue> for Piece {
    fn from(value: DynamicValue) -> Self {
        Piece::Value(value)
    }
}

macro_rules! from_piece {
    ($ty: ty) => {
        impl From<$ty> for DynamicString {
            fn from(value: $ty) -> Self {
                Self::new([Piece::from(value)])
            }
        }
    };
}

from_piece!(&str);
from_piece!(String);
from_piece!(DynamicValue);
