//! Wire types shared with the roster API

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A managed intern record as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    /// Server-assigned identifier. Absent until the record is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full name
    pub name: String,
    /// Email address (unique server side)
    pub email: String,
    /// Assigned department
    pub department: String,
}

/// The in-progress working copy of an intern being created or edited.
///
/// Shares the shape of [`Intern`]; `id == None` signals create mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl InternDraft {
    /// Seed a draft from an existing record.
    ///
    /// Explicit field-by-field copy: `Intern` is flat today, and this keeps
    /// the copy semantics visible if nested fields are ever added.
    #[must_use]
    pub fn from_intern(intern: &Intern) -> Self {
        Self {
            id: intern.id,
            name: intern.name.clone(),
            email: intern.email.clone(),
            department: intern.department.clone(),
        }
    }
}

/// Per-field validation messages returned by the API on a rejected write.
///
/// Only the three known fields are represented. Any other key in the
/// rejection body (the backend also emits `general`) is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl FieldErrors {
    /// Map a rejection body into field errors, keeping known keys only.
    #[must_use]
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            name: map.get("name").cloned(),
            email: map.get("email").cloned(),
            department: map.get("department").cloned(),
        }
    }

    /// True when no field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.department.is_none()
    }

    /// Drop all messages.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_intern() -> Intern {
        Intern {
            id: Some(7),
            name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            department: "Marketing".to_string(),
        }
    }

    #[test]
    fn draft_from_intern_copies_every_field() {
        let intern = sample_intern();
        let draft = InternDraft::from_intern(&intern);
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.name, intern.name);
        assert_eq!(draft.email, intern.email);
        assert_eq!(draft.department, intern.department);
    }

    #[test]
    fn default_draft_is_create_mode() {
        let draft = InternDraft::default();
        assert_eq!(draft.id, None);
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.department.is_empty());
    }

    #[test]
    fn create_draft_serializes_without_id() {
        let draft = InternDraft {
            name: "Kim".to_string(),
            ..InternDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Kim");
    }

    #[test]
    fn field_errors_keep_known_keys_only() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), "Name is required".to_string());
        map.insert("general".to_string(), "boom".to_string());
        map.insert("salary".to_string(), "n/a".to_string());

        let errors = FieldErrors::from_map(&map);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.department, None);
    }

    #[test]
    fn field_errors_clear_resets_everything() {
        let mut errors = FieldErrors {
            email: Some("Email already exists".to_string()),
            ..FieldErrors::default()
        };
        assert!(!errors.is_empty());
        errors.clear();
        assert!(errors.is_empty());
    }
}
