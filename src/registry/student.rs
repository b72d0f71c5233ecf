//! Student record and payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RegistryError;

/// A student held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Registry-assigned identifier, never reused within a process.
    pub id: u64,
    /// Display name, stored trimmed.
    pub name: String,
    /// Group label. May be empty; not unique.
    pub group: String,
}

/// A validated create/update payload.
///
/// Only obtainable through [`StudentPayload::new`] or
/// [`StudentPayload::from_value`], so a value of this type always satisfies
/// the validation rule: `name` is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPayload {
    name: String,
    group: String,
}

impl StudentPayload {
    /// Validates a name/group pair.
    ///
    /// The name is trimmed; the group is kept as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the trimmed name is empty.
    pub fn new(name: &str, group: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation("name must not be empty".into()));
        }
        Ok(Self { name: name.to_string(), group: group.into() })
    }

    /// Validates an arbitrary JSON body.
    ///
    /// The body must be an object with a string `name` and a string `group`.
    /// Extra fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] describing the first rule that fails.
    pub fn from_value(body: &Value) -> Result<Self, RegistryError> {
        let Some(object) = body.as_object() else {
            return Err(RegistryError::Validation("body must be a JSON object".into()));
        };
        let name = match object.get("name") {
            Some(Value::String(name)) => name,
            Some(_) => return Err(RegistryError::Validation("name must be a string".into())),
            None => return Err(RegistryError::Validation("name is required".into())),
        };
        let group = match object.get("group") {
            Some(Value::String(group)) => group,
            Some(_) => return Err(RegistryError::Validation("group must be a string".into())),
            None => return Err(RegistryError::Validation("group is required".into())),
        };
        Self::new(name, group.as_str())
    }

    /// The trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group label.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    pub(super) fn into_student(self, id: u64) -> Student {
        Student { id, name: self.name, group: self.group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_name_and_keeps_group() {
        let payload = StudentPayload::from_value(&json!({"name": "  Ana  ", "group": " G1 "}))
            .unwrap();
        assert_eq!(payload.name(), "Ana");
        assert_eq!(payload.group(), " G1 ");
    }

    #[test]
    fn empty_group_is_allowed() {
        let payload = StudentPayload::from_value(&json!({"name": "Ana", "group": ""})).unwrap();
        assert_eq!(payload.group(), "");
    }

    #[test]
    fn rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = StudentPayload::from_value(&json!({"name": name, "group": "G1"})).unwrap_err();
            assert!(matches!(err, RegistryError::Validation(_)), "name {name:?} should fail");
        }
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        let bodies = [
            json!({"group": "G1"}),
            json!({"name": "Ana"}),
            json!({"name": 7, "group": "G1"}),
            json!({"name": "Ana", "group": null}),
            json!({"name": "Ana", "group": 1}),
            json!(["Ana", "G1"]),
            json!("Ana"),
            Value::Null,
        ];
        for body in bodies {
            assert!(StudentPayload::from_value(&body).is_err(), "{body} should fail");
        }
    }

    #[test]
    fn ignores_extra_fields() {
        let payload =
            StudentPayload::from_value(&json!({"name": "Ana", "group": "G1", "id": 99})).unwrap();
        assert_eq!(payload.into_student(1), Student { id: 1, name: "Ana".into(), group: "G1".into() });
    }

    #[test]
    fn student_serializes_with_flat_shape() {
        let student = Student { id: 3, name: "Luis".into(), group: "G2".into() };
        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({"id": 3, "name": "Luis", "group": "G2"})
        );
    }
}
