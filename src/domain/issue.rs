use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub key: String,
    pub description: String,
}

/// Selects which work items a reformat run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    pub project: String,
    pub issue_type: String,
    pub start_key: String,
    pub excluded_keys: Vec<String>,
}

impl CandidateFilter {
    pub fn jql(&self) -> String {
        let mut clauses = vec![
            format!("project = {}", self.project.trim()),
            format!("issuetype = {}", self.issue_type.trim()),
            format!("key >= {}", self.start_key.trim()),
        ];
        clauses.extend(
            self.excluded_keys
                .iter()
                .map(|key| key.trim())
                .filter(|key| !key.is_empty())
                .map(|key| format!("key != {key}")),
        );
        clauses.join(" AND ")
    }
}

/// The two shapes a search response comes back in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Bare(Vec<serde_json::Value>),
    Wrapped {
        #[serde(default)]
        issues: Vec<serde_json::Value>,
    },
}

impl SearchResponse {
    fn into_keys(self) -> Vec<String> {
        let entries = match self {
            SearchResponse::Bare(entries) => entries,
            SearchResponse::Wrapped { issues } => issues,
        };
        entries
            .iter()
            .filter_map(|entry| entry.get("key").and_then(|key| key.as_str()))
            .map(str::to_string)
            .collect()
    }
}

pub fn parse_search_keys(raw: &str) -> AppResult<Vec<String>> {
    let response: SearchResponse = serde_json::from_str(raw).map_err(|err| {
        AppError::IssueTracker(format!("unexpected search response shape: {err}"))
    })?;
    Ok(response.into_keys())
}

#[derive(Debug, Default, Deserialize)]
struct WorkItem {
    #[serde(default)]
    fields: WorkItemFields,
}

#[derive(Debug, Default, Deserialize)]
struct WorkItemFields {
    #[serde(default)]
    description: Option<Description>,
}

/// Only a document tree carries text; any other description value reads as empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Description {
    Doc(DocNode),
    Other(serde_json::Value),
}

impl Description {
    fn text(&self) -> String {
        match self {
            Description::Doc(doc) => doc.paragraph_text(),
            Description::Other(_) => String::new(),
        }
    }
}

/// A node of the tracker's rich-text document tree.
#[derive(Debug, Default, Deserialize)]
struct DocNode {
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Vec<DocNode>,
}

impl DocNode {
    fn paragraph_text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.node_type == "paragraph")
            .flat_map(|block| block.content.iter())
            .filter(|run| run.node_type == "text")
            .filter_map(|run| run.text.as_deref())
            .collect()
    }
}

/// Flattens the paragraph text runs of a work item's description.
///
/// An empty detail response (`null`, `{}`, `[]`, `""`) means the item could
/// not be fetched and is an error, unlike a present item without a description.
pub fn parse_description(raw: &str) -> AppResult<String> {
    let json: serde_json::Value = serde_json::from_str(raw)?;
    if is_empty_response(&json) {
        return Err(AppError::IssueTracker(
            "work item response is empty".to_string(),
        ));
    }

    let item: WorkItem = serde_json::from_value(json)?;
    Ok(item
        .fields
        .description
        .map(|description| description.text())
        .unwrap_or_default())
}

fn is_empty_response(json: &serde_json::Value) -> bool {
    match json {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(text) => text.is_empty(),
        _ => false,
    }
}
