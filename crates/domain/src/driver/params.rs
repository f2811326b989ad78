//! Mass-assignment allow-list for driver writes.
//!
//! [`DriverParams`] is the only shape a caller can hand to a create or update.
//! Keys outside `id`, `name`, `vin`, `available` never reach a field; only
//! their names are kept, so a parameter bag holding nothing but unknown keys
//! still counts as supplied.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::DriverDraft;

/// Permitted driver fields, each optional.
///
/// `None` means "not supplied". For `name` and `vin` an explicit `null` is
/// kept as an empty string so it reaches validation instead of being
/// mistaken for an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DriverParams {
    /// Accepted for compatibility; identity is always store-assigned.
    #[serde(default)]
    pub id: Option<IgnoredAny>,
    #[serde(default, deserialize_with = "blank_if_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_if_null")]
    pub vin: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
    /// Names of supplied keys outside the allow-list. Values are discarded.
    #[serde(flatten)]
    pub unpermitted: BTreeMap<String, IgnoredAny>,
}

fn blank_if_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|value| Some(value.unwrap_or_default()))
}

impl DriverParams {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Mark the `id` key as supplied. Its value is never read.
    #[must_use]
    pub fn with_id(mut self) -> Self {
        self.id = Some(IgnoredAny);
        self
    }

    /// Record a supplied key that is not on the allow-list.
    #[must_use]
    pub fn unpermitted(mut self, key: impl Into<String>) -> Self {
        self.unpermitted.insert(key.into(), IgnoredAny);
        self
    }

    /// No key was supplied at all, permitted or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.vin.is_none()
            && self.available.is_none()
            && self.unpermitted.is_empty()
    }

    /// Names of the dropped keys, in sorted order.
    pub fn unpermitted_keys(&self) -> impl Iterator<Item = &str> {
        self.unpermitted.keys().map(String::as_str)
    }

    /// Overlay the supplied fields on `base`, keeping raw input so a
    /// rejected form can be shown back to the user unchanged.
    #[must_use]
    pub fn draft_over(&self, base: &DriverDraft) -> DriverDraft {
        DriverDraft {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            vin: self.vin.clone().unwrap_or_else(|| base.vin.clone()),
            available: self.available.unwrap_or(base.available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_unknown_keys_when_deserializing() {
        let params: DriverParams = serde_json::from_str(
            r#"{"name":"Ada","vin":"ABCDEFGHIJKLMNOPQ","admin":true,"rating":5}"#,
        )
        .unwrap();
        assert_eq!(params.name.as_deref(), Some("Ada"));
        assert_eq!(params.vin.as_deref(), Some("ABCDEFGHIJKLMNOPQ"));
        assert_eq!(params.unpermitted_keys().collect::<Vec<_>>(), ["admin", "rating"]);
    }

    #[test]
    fn should_not_report_empty_when_only_unknown_keys_supplied() {
        let params: DriverParams = serde_json::from_str(r#"{"admin":true}"#).unwrap();
        assert!(params.name.is_none());
        assert!(!params.is_empty());
        assert_eq!(params, DriverParams::default().unpermitted("admin"));
    }

    #[test]
    fn should_keep_explicit_null_as_blank_value() {
        let params: DriverParams = serde_json::from_str(r#"{"vin":null}"#).unwrap();
        assert_eq!(params.vin.as_deref(), Some(""));
        assert!(params.name.is_none());
    }

    #[test]
    fn should_accept_any_id_shape() {
        let numeric: DriverParams = serde_json::from_str(r#"{"id":12}"#).unwrap();
        let textual: DriverParams = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert!(numeric.id.is_some());
        assert!(textual.id.is_some());
    }

    #[test]
    fn should_report_empty_when_nothing_supplied() {
        let params: DriverParams = serde_json::from_str("{}").unwrap();
        assert!(params.is_empty());
        assert!(!DriverParams::default().with_id().is_empty());
    }

    #[test]
    fn should_overlay_supplied_fields_on_draft() {
        let base = DriverDraft {
            name: "Old".to_string(),
            vin: "ABCDEFGHIJKLMNOPQ".to_string(),
            available: true,
        };
        let draft = DriverParams::default().vin("48765").draft_over(&base);
        assert_eq!(draft.name, "Old");
        assert_eq!(draft.vin, "48765");
        assert!(draft.available);
    }
}
