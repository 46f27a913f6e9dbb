use serde::Serialize;

/// Metadata for a model advertised by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub name: &'static str,
    pub id: &'static str,
    pub size: &'static str,
    pub modified: &'static str,
}

/// The only model this server pretends to have.
pub const DEFAULT_MODEL: ModelDescriptor = ModelDescriptor {
    name: "llama3:8b",
    id: "365c0bd3c000",
    size: "4.7 GB",
    modified: "2 months ago",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(DEFAULT_MODEL).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "llama3:8b",
                "id": "365c0bd3c000",
                "size": "4.7 GB",
                "modified": "2 months ago"
            })
        );
    }
}
