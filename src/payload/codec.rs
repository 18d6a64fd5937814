//! Per-position payload codec.
//!
//! Encodes the annotation metadata the indexer attaches to every
//! token/annotation position so the constraint engine can recover spans and
//! ids without touching the index's own storage format:
//!
//! ```text
//! <lowercased-label> PAYLOAD_SEP <startOffset> ID_SEP <endOffset> ID_SEP <annotId> ID_SEP <parentId>
//! ```
//!
//! `PAYLOAD_SEP` and `ID_SEP` are fixed single bytes chosen from the ASCII
//! control range (never produced by normal tokenized text), so the label can
//! itself contain spaces or punctuation without ambiguity.

use crate::core::error::{Error, Result};

/// Separates the label from the numeric fields.
pub const PAYLOAD_SEP: u8 = 0x1F; // ASCII Unit Separator
/// Separates the four numeric fields from each other.
pub const ID_SEP: u8 = 0x1E; // ASCII Record Separator

/// Hard bound on an encoded payload, matching `EngineConfig::max_payload_len`
/// by default; callers with a different config should check
/// `bytes.len() <= config.max_payload_len` before calling [`decode`].
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    pub label: String,
    pub start_offset: u32,
    pub end_offset: u32,
    pub annot_id: u64,
    pub parent_id: u64,
}

/// Encodes one position's payload. `label` is lowercased; for plain tokens
/// pass `annot_id = 0, parent_id = 0`.
pub fn encode(
    label: &str,
    start_offset: u32,
    end_offset: u32,
    annot_id: u64,
    parent_id: u64,
    max_len: usize,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(label.len() + 32);
    out.extend(label.to_lowercase().as_bytes());
    out.push(PAYLOAD_SEP);
    out.extend(start_offset.to_string().as_bytes());
    out.push(ID_SEP);
    out.extend(end_offset.to_string().as_bytes());
    out.push(ID_SEP);
    out.extend(annot_id.to_string().as_bytes());
    out.push(ID_SEP);
    out.extend(parent_id.to_string().as_bytes());

    if out.len() > max_len {
        return Err(Error::corrupt_payload(format!(
            "encoded payload is {} bytes, exceeds bound of {}",
            out.len(),
            max_len
        )));
    }
    Ok(out)
}

/// Decodes a payload produced by [`encode`]. A malformed payload (wrong
/// field count, non-numeric field, or over the length bound) is a fatal
/// `CorruptPayload` error — there is no partial/best-effort decode.
pub fn decode(bytes: &[u8], max_len: usize) -> Result<DecodedPayload> {
    if bytes.len() > max_len {
        return Err(Error::corrupt_payload(format!(
            "payload is {} bytes, exceeds bound of {}",
            bytes.len(),
            max_len
        )));
    }

    let sep_pos = bytes
        .iter()
        .position(|&b| b == PAYLOAD_SEP)
        .ok_or_else(|| Error::corrupt_payload("missing PAYLOAD_SEP"))?;

    let label = std::str::from_utf8(&bytes[..sep_pos])
        .map_err(|_| Error::corrupt_payload("label is not valid UTF-8"))?
        .to_string();

    let rest = &bytes[sep_pos + 1..];
    let fields: Vec<&[u8]> = rest.split(|&b| b == ID_SEP).collect();
    if fields.len() != 4 {
        return Err(Error::corrupt_payload(format!(
            "expected 4 numeric fields after PAYLOAD_SEP, got {}",
            fields.len()
        )));
    }

    let parse_u32 = |field: &[u8]| -> Result<u32> {
        std::str::from_utf8(field)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| Error::corrupt_payload("non-numeric offset field"))
    };
    let parse_u64 = |field: &[u8]| -> Result<u64> {
        std::str::from_utf8(field)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| Error::corrupt_payload("non-numeric id field"))
    };

    let start_offset = parse_u32(fields[0])?;
    let end_offset = parse_u32(fields[1])?;
    let annot_id = parse_u64(fields[2])?;
    let parent_id = parse_u64(fields[3])?;

    if start_offset > end_offset {
        return Err(Error::corrupt_payload(format!(
            "startOffset {} > endOffset {}",
            start_offset, end_offset
        )));
    }

    Ok(DecodedPayload { label, start_offset, end_offset, annot_id, parent_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_annotation() {
        let encoded = encode("NP", 10, 20, 5, 1, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        let decoded = decode(&encoded, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        assert_eq!(decoded.label, "np");
        assert_eq!(decoded.start_offset, 10);
        assert_eq!(decoded.end_offset, 20);
        assert_eq!(decoded.annot_id, 5);
        assert_eq!(decoded.parent_id, 1);
    }

    #[test]
    fn round_trip_plain_token() {
        let encoded = encode("cat", 4, 7, 0, 0, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        let decoded = decode(&encoded, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        assert_eq!(decoded, DecodedPayload {
            label: "cat".to_string(),
            start_offset: 4,
            end_offset: 7,
            annot_id: 0,
            parent_id: 0,
        });
    }

    #[test]
    fn label_is_lowercased() {
        let encoded = encode("SENT", 0, 1, 1, 0, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        let decoded = decode(&encoded, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        assert_eq!(decoded.label, "sent");
    }

    #[test]
    fn oversized_payload_is_rejected_at_encode() {
        let huge_label = "x".repeat(2000);
        let err = encode(&huge_label, 0, 1, 0, 0, DEFAULT_MAX_PAYLOAD_LEN).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::CorruptPayload);
    }

    #[test]
    fn oversized_payload_is_rejected_at_decode() {
        let huge = vec![b'a'; DEFAULT_MAX_PAYLOAD_LEN + 1];
        let err = decode(&huge, DEFAULT_MAX_PAYLOAD_LEN).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::CorruptPayload);
    }

    #[test]
    fn missing_separator_is_corrupt() {
        let err = decode(b"nopseparatorhere", DEFAULT_MAX_PAYLOAD_LEN).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::CorruptPayload);
    }

    #[test]
    fn wrong_field_count_is_corrupt() {
        let mut bytes = b"np".to_vec();
        bytes.push(PAYLOAD_SEP);
        bytes.extend(b"10");
        bytes.push(ID_SEP);
        bytes.extend(b"20");
        // Missing annot_id and parent_id fields.
        let err = decode(&bytes, DEFAULT_MAX_PAYLOAD_LEN).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::CorruptPayload);
    }

    #[test]
    fn non_numeric_field_is_corrupt() {
        let mut bytes = b"np".to_vec();
        bytes.push(PAYLOAD_SEP);
        bytes.extend(b"ten");
        bytes.push(ID_SEP);
        bytes.extend(b"20");
        bytes.push(ID_SEP);
        bytes.extend(b"5");
        bytes.push(ID_SEP);
        bytes.extend(b"1");
        let err = decode(&bytes, DEFAULT_MAX_PAYLOAD_LEN).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::CorruptPayload);
    }
}
