//! Human-readable validation messages with named placeholders.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// One validation error: a template such as `"%field" cannot be empty.`
/// plus the named values substituted for its `%name` placeholders.
///
/// Rendering is lazy. Two messages are equal when they render to the same
/// text, regardless of how template and parameters were split.
#[derive(Debug, Clone)]
pub struct Message {
    template: String,
    params: Vec<(String, String)>,
}

impl Message {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            params: Vec::new(),
        }
    }

    /// Bind `%name` to `value`. A later binding of the same name wins.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// The raw, unrendered template.
    pub fn text(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Substitute every bound `%name` placeholder. Placeholder names run to
    /// the first character that is not alphanumeric or `_`; unbound
    /// placeholders are left as written.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let name_len = after
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_len];

            match self.param(name) {
                Some(value) if !name.is_empty() => out.push_str(value),
                _ => {
                    out.push('%');
                    out.push_str(name);
                }
            }
            rest = &after[name_len..];
        }

        out.push_str(rest);
        out
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for Message {}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params: BTreeMap<&str, &str> = self
            .params
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();

        let mut state = serializer.serialize_struct("Message", 3)?;
        state.serialize_field("template", &self.template)?;
        state.serialize_field("params", &params)?;
        state.serialize_field("text", &self.render())?;
        state.end()
    }
}

/// Accepted wire shapes: a bare template string, or an object with a
/// template and an optional parameter map. A `text` key is ignored.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMessage {
    Template(String),
    Full {
        template: String,
        #[serde(default)]
        params: BTreeMap<String, String>,
    },
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawMessage::deserialize(deserializer)? {
            RawMessage::Template(template) => Message::new(template),
            RawMessage::Full { template, params } => Message {
                template,
                params: params.into_iter().collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_is_the_raw_template() {
        let msg = Message::new("\"%field\" cannot be empty.").with_param("field", "sku");
        assert_eq!(msg.text(), "\"%field\" cannot be empty.");
    }

    #[test]
    fn render_substitutes_named_params() {
        let msg = Message::new("\"%field\" can not contain whitespaces.").with_param("field", "sku");
        assert_eq!(msg.render(), "\"sku\" can not contain whitespaces.");
        assert_eq!(msg.to_string(), msg.render());
    }

    #[test]
    fn unbound_placeholder_stays_literal() {
        let msg = Message::new("%field is %state");
        assert_eq!(msg.render(), "%field is %state");
    }

    #[test]
    fn lone_percent_is_kept() {
        let msg = Message::new("100% done").with_param("field", "x");
        assert_eq!(msg.render(), "100% done");
    }

    #[test]
    fn longer_name_is_not_shadowed_by_prefix() {
        let msg = Message::new("%field/%field_code")
            .with_param("field", "a")
            .with_param("field_code", "b");
        assert_eq!(msg.render(), "a/b");
    }

    #[test]
    fn rebinding_replaces_value() {
        let msg = Message::new("%field")
            .with_param("field", "sku")
            .with_param("field", "source_code");
        assert_eq!(msg.params().len(), 1);
        assert_eq!(msg.render(), "source_code");
    }

    #[test]
    fn equality_is_by_rendered_text() {
        let templated = Message::new("\"%field\" cannot be empty.").with_param("field", "sku");
        let literal = Message::new("\"sku\" cannot be empty.");
        assert_eq!(templated, literal);
        assert_ne!(templated, Message::new("\"%field\" cannot be empty."));
    }

    #[test]
    fn serializes_template_params_and_text() {
        let msg = Message::new("\"%field\" cannot be empty.").with_param("field", "sku");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "template": "\"%field\" cannot be empty.",
                "params": { "field": "sku" },
                "text": "\"sku\" cannot be empty.",
            })
        );
    }

    #[test]
    fn deserializes_bare_string() {
        let msg: Message = serde_json::from_value(json!("plain error")).unwrap();
        assert_eq!(msg.text(), "plain error");
        assert!(msg.params().is_empty());
    }

    #[test]
    fn deserializes_object_form() {
        let msg: Message =
            serde_json::from_value(json!({ "template": "%field bad", "params": { "field": "sku" } }))
                .unwrap();
        assert_eq!(msg.render(), "sku bad");
    }
}
