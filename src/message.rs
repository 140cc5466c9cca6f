//! Panel Messages
//!
//! Inbound message shapes posted by the webview script over the host
//! message channel.

use serde::Deserialize;

/// Message posted from the rendered document
///
/// Discriminated by the `type` field. Unrecognized `type` values
/// deserialize to [`PanelMessage::Unknown`] and are silently dropped by
/// the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum PanelMessage {
    /// Append a new entry to the list
    #[serde(rename = "addTodo")]
    AddTodo {
        /// Entry text; an absent field is treated as the empty string
        #[serde(default)]
        text: String,
    },
    /// Re-render the document and push it to the view
    #[serde(rename = "update")]
    Update,
    /// Anything else; ignored
    #[serde(other)]
    Unknown,
}

impl PanelMessage {
    /// Parse a raw message body as delivered over the host channel
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_todo() {
        let msg = PanelMessage::from_json(r#"{"type":"addTodo","text":"buy milk"}"#).unwrap();
        assert_eq!(msg, PanelMessage::AddTodo { text: "buy milk".into() });
    }

    #[test]
    fn parses_add_todo_without_text_as_empty() {
        let msg = PanelMessage::from_json(r#"{"type":"addTodo"}"#).unwrap();
        assert_eq!(msg, PanelMessage::AddTodo { text: String::new() });
    }

    #[test]
    fn parses_update() {
        let msg = PanelMessage::from_json(r#"{"type":"update"}"#).unwrap();
        assert_eq!(msg, PanelMessage::Update);
    }

    #[test]
    fn unrecognized_type_maps_to_unknown() {
        let msg = PanelMessage::from_json(r#"{"type":"deleteTodo","text":"x"}"#).unwrap();
        assert_eq!(msg, PanelMessage::Unknown);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(PanelMessage::from_json("not json").is_err());
    }
}
