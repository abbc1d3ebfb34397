use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::naming;

/// Name variants handed to every template.
///
/// Built once from the raw user input; every field is derived from the
/// sanitised `Name`, so the record cannot drift out of sync with itself.
/// Serialises with the field names templates refer to (`{{ StructName }}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateData {
    name: String,
    struct_name: String,
    func_name: String,
    model_name: String,
    table: String,
}

impl TemplateData {
    /// Normalise `raw` and derive the remaining variants.
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        let name = naming::sanitize(raw);

        if name.is_empty() {
            return Err(DomainError::InvalidName {
                raw: raw.to_string(),
                reason: "name is empty",
            });
        }
        if name.contains(['/', '\\']) {
            return Err(DomainError::InvalidName {
                raw: raw.to_string(),
                reason: "name must not contain path separators",
            });
        }
        if name.chars().all(|c| c == '.') {
            return Err(DomainError::InvalidName {
                raw: raw.to_string(),
                reason: "name must not be a relative path component",
            });
        }

        let struct_name = naming::to_pascal(&name);
        if struct_name.is_empty() {
            return Err(DomainError::InvalidName {
                raw: raw.to_string(),
                reason: "name has no letters or digits",
            });
        }

        Ok(Self {
            func_name: naming::to_lower_first(&format!("{struct_name}Controller")),
            model_name: struct_name.clone(),
            table: naming::to_snake(&name),
            struct_name,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    pub fn func_name(&self) -> &str {
        &self.func_name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_variants() {
        let data = TemplateData::from_raw("User-Profile").unwrap();
        assert_eq!(data.name(), "user_profile");
        assert_eq!(data.struct_name(), "UserProfile");
        assert_eq!(data.model_name(), "UserProfile");
        assert_eq!(data.func_name(), "userProfileController");
        assert_eq!(data.table(), "user_profile");
    }

    #[test]
    fn rejects_empty_names() {
        for raw in ["", "   ", "\t"] {
            assert!(matches!(
                TemplateData::from_raw(raw),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn rejects_separator_only_names() {
        assert!(TemplateData::from_raw("--").is_err());
        assert!(TemplateData::from_raw("__").is_err());
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(TemplateData::from_raw("../user").is_err());
        assert!(TemplateData::from_raw("a\\b").is_err());
        assert!(TemplateData::from_raw("..").is_err());
    }

    #[test]
    fn serialises_with_template_field_names() {
        let data = TemplateData::from_raw("order").unwrap();
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["Name"], "order");
        assert_eq!(value["StructName"], "Order");
        assert_eq!(value["FuncName"], "orderController");
        assert_eq!(value["ModelName"], "Order");
        assert_eq!(value["Table"], "order");
    }
}
