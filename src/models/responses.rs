use super::ids::ResponseId;
use crate::database::models::response_item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored idea-analysis report, as served by the explore feed.
///
/// The analysis document is flattened into the record, so its fields
/// (`title`, `desc`, `tech_stack`, `pros`) appear at the top level the
/// way the browser client reads them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResponseRecord {
    pub id: ResponseId,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "devName")]
    pub dev_name: Option<String>,
    #[serde(flatten)]
    pub analysis: Analysis,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The canonical structured form of an analysis document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Analysis {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tech_stack: Vec<TechStackEntry>,
    #[serde(default)]
    pub pros: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TechStackEntry {
    pub name: String,
}

impl Analysis {
    /// Normalizes a submitted analysis into the structured form.
    ///
    /// Historically these documents were stored either as a JSON object
    /// or as a string containing serialized JSON, and readers had to
    /// branch on the shape. Both shapes are accepted here; only the
    /// object form is ever stored or served.
    pub fn from_submission(value: Value) -> Result<Analysis, serde_json::Error> {
        match value {
            Value::String(raw) => serde_json::from_str(&raw),
            other => serde_json::from_value(other),
        }
    }

    /// Whether the analysis names `tech` in its tech stack (exact match).
    pub fn uses_tech(&self, tech: &str) -> bool {
        self.tech_stack.iter().any(|entry| entry.name == tech)
    }
}

impl From<response_item::Response> for ResponseRecord {
    fn from(data: response_item::Response) -> Self {
        ResponseRecord {
            id: data.id.into(),
            user_id: data.user_id,
            dev_name: data.dev_name,
            analysis: data.analysis.0,
            created_at: data.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Analysis;
    use serde_json::json;

    #[test]
    fn normalizes_object_submissions() {
        let analysis = Analysis::from_submission(json!({
            "title": "GetYourStack",
            "desc": "Stack recommendations",
            "tech_stack": [{ "name": "Rust" }, { "name": "Next.js" }],
            "pros": ["fast"],
        }))
        .unwrap();

        assert_eq!(analysis.title, "GetYourStack");
        assert!(analysis.uses_tech("Rust"));
        assert!(!analysis.uses_tech("rust"));
    }

    #[test]
    fn normalizes_string_submissions() {
        let raw = r#"{"title":"GetYourStack","desc":"d","tech_stack":[{"name":"Rust"}],"pros":[]}"#;
        let analysis = Analysis::from_submission(json!(raw)).unwrap();

        assert_eq!(analysis.title, "GetYourStack");
        assert_eq!(analysis.tech_stack.len(), 1);
    }

    #[test]
    fn missing_optional_sections_default() {
        let analysis = Analysis::from_submission(json!({ "title": "t" })).unwrap();

        assert_eq!(analysis.desc, "");
        assert!(analysis.tech_stack.is_empty());
        assert!(analysis.pros.is_empty());
    }

    #[test]
    fn rejects_documents_without_a_title() {
        assert!(Analysis::from_submission(serde_json::json!({ "desc": "d" })).is_err());
        assert!(Analysis::from_submission(serde_json::json!("not json at all")).is_err());
    }
}
