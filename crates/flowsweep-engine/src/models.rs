//! Wire-format records returned by the engine REST API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended bag of link metadata attached to a process instance.
pub type LinkData = Map<String, Value>;

/// A single running execution of a workflow definition.
///
/// Matches the engine's camelCase wire shape. Everything except `id` is
/// nullable or absent depending on engine version and tenancy setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    /// Unique instance identifier.
    pub id: String,
    /// Identifier of the process definition this instance executes.
    #[serde(default)]
    pub definition_id: Option<String>,
    /// Caller-assigned business key.
    #[serde(default)]
    pub business_key: Option<String>,
    /// Associated case instance, if any.
    #[serde(default)]
    pub case_instance_id: Option<String>,
    /// Whether the instance has already ended.
    #[serde(default)]
    pub ended: bool,
    /// Whether the instance is suspended.
    #[serde(default)]
    pub suspended: bool,
    /// Owning tenant, when the engine runs multi-tenant.
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Link objects whose shape is engine-defined.
    #[serde(default)]
    pub links: Vec<LinkData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_a_full_record_verbatim() {
        let raw = r#"{
            "links": [{"method": "GET", "href": "http://localhost:8080/engine-rest/process-instance/42", "rel": "self"}],
            "id": "42",
            "definitionId": "invoice:1:9f2d8c",
            "businessKey": "INV-2024-0001",
            "caseInstanceId": null,
            "ended": false,
            "suspended": true,
            "tenantId": "accounting"
        }"#;

        let instance: ProcessInstance = serde_json::from_str(raw).unwrap();

        assert_eq!(instance.id, "42");
        assert_eq!(instance.definition_id.as_deref(), Some("invoice:1:9f2d8c"));
        assert_eq!(instance.business_key.as_deref(), Some("INV-2024-0001"));
        assert_eq!(instance.case_instance_id, None);
        assert!(!instance.ended);
        assert!(instance.suspended);
        assert_eq!(instance.tenant_id.as_deref(), Some("accounting"));
        assert_eq!(instance.links.len(), 1);
        assert_eq!(
            instance.links[0].get("rel"),
            Some(&Value::from("self"))
        );
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let instance: ProcessInstance = serde_json::from_str(r#"{"id": "minimal"}"#).unwrap();

        assert_eq!(instance.id, "minimal");
        assert_eq!(instance.definition_id, None);
        assert!(!instance.ended);
        assert!(!instance.suspended);
        assert!(instance.links.is_empty());
    }

    #[test]
    fn tolerates_unknown_fields() {
        let raw = r#"{"id": "x", "someFutureField": {"nested": true}}"#;
        let instance: ProcessInstance = serde_json::from_str(raw).unwrap();
        assert_eq!(instance.id, "x");
    }
}
