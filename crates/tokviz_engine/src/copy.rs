use tokviz_core::{CopyKind, TokenId, TokenSequence};

/// Compact JSON array of ids, e.g. `[0,1,2]`.
pub fn format_ids(ids: &[TokenId]) -> Result<String, serde_json::Error> {
    serde_json::to_string(ids)
}

/// Clipboard text for a copy action.
pub fn copy_payload(kind: CopyKind, tokens: &TokenSequence) -> Result<String, serde_json::Error> {
    match kind {
        CopyKind::Text => Ok(tokens.joined_text()),
        CopyKind::Ids => format_ids(&tokens.ids()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokviz_core::segment;

    #[test]
    fn text_payload_reproduces_input() {
        let tokens = segment("Hello,\n  world!");
        assert_eq!(
            copy_payload(CopyKind::Text, &tokens).unwrap(),
            "Hello,\n  world!"
        );
    }

    #[test]
    fn ids_payload_is_compact_json() {
        let tokens = segment("a, b");
        assert_eq!(copy_payload(CopyKind::Ids, &tokens).unwrap(), "[0,1,2,3]");
    }

    #[test]
    fn empty_ids_format_as_empty_array() {
        assert_eq!(format_ids(&[]).unwrap(), "[]");
    }
}
