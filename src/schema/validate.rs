//! Index schema validation.
//!
//! The underlying inverted index is an external collaborator; this crate
//! only checks, at startup, that the two fields it depends on were
//! configured the way the payload encoding requires. A mismatch is a fatal
//! `SCHEMA_ERROR`, checked fail-fast before any query runs.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// The host-reported attributes of one indexed field, as needed to verify
/// the requirements this crate depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub tokenizer: String,
    pub omit_positions: bool,
    pub store_offsets_with_positions: bool,
}

const WHITESPACE_TOKENIZER: &str = "whitespace";

/// Validates the annotations field (whitespace tokenizer, positions kept)
/// and the annotated text field (positions and offsets both kept).
pub fn validate(annotations_field: &FieldSchema, text_field: &FieldSchema) -> Result<()> {
    if annotations_field.tokenizer != WHITESPACE_TOKENIZER {
        return Err(Error::schema(format!(
            "annotations field '{}' must use the whitespace tokenizer, got '{}'",
            annotations_field.name, annotations_field.tokenizer
        )));
    }
    if annotations_field.omit_positions {
        return Err(Error::schema(format!(
            "annotations field '{}' must not omit positions",
            annotations_field.name
        )));
    }
    if text_field.omit_positions {
        return Err(Error::schema(format!("text field '{}' must not omit positions", text_field.name)));
    }
    if !text_field.store_offsets_with_positions {
        return Err(Error::schema(format!(
            "text field '{}' must store offsets with positions",
            text_field.name
        )));
    }
    Ok(())
}
