//! Target document types
//!
//! These structures describe the Postman import format produced by the
//! mapper. Field order follows the order Postman itself exports, and every
//! type derives `Deserialize` so generated files can be read back.

use serde::{Deserialize, Serialize};

/// Header entries are always plain text in the target format
pub const HEADER_TYPE_TEXT: &str = "text";

/// The only body encoding produced by the mapper
pub const BODY_MODE_RAW: &str = "raw";

/// A Postman collection, one per source collection entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    /// Collection metadata
    pub info: CollectionInfo,

    /// Requests and folders, in source order
    pub item: Vec<Item>,
}

/// Collection metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Generated identifier
    #[serde(rename = "_postman_id")]
    pub postman_id: String,

    /// Collection name
    pub name: String,

    /// Target schema URL
    pub schema: String,
}

/// An entry of a collection's `item` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// A single request
    Request(RequestItem),

    /// A named group of further items
    Folder(FolderItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Request(request) => &request.name,
            Item::Folder(folder) => &folder.name,
        }
    }
}

/// A named request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
}

/// A named folder of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderItem {
    pub name: String,
    pub item: Vec<Item>,
}

/// The request part of a request item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method name, e.g. `GET`
    pub method: String,

    /// Request headers
    pub headers: Vec<Header>,

    /// Request payload, only present for methods that carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,

    /// Decomposed request URL
    pub url: Url,
}

/// A request header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A raw request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

impl Body {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            mode: BODY_MODE_RAW.to_string(),
            raw: text.into(),
        }
    }
}

/// A URL split into the parts Postman stores separately
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Url {
    /// Scheme name without `://`
    pub protocol: String,

    /// Host labels, e.g. `["api", "example", "com"]`
    pub host: Vec<String>,

    /// Path segments without the leading slash
    pub path: Vec<String>,

    /// Query parameters
    pub query: Vec<QueryParam>,
}

/// A query string parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// A Postman environment, one per source environment entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDocument {
    /// Generated identifier
    pub id: String,

    /// Environment name
    pub name: String,

    /// Variables with a non-empty name
    pub values: Vec<EnvironmentValue>,

    #[serde(rename = "_postman_variable_scope")]
    pub variable_scope: String,

    /// UTC time of the run, `%Y-%m-%dT%H:%M:%SZ`
    #[serde(rename = "_postman_exported_at")]
    pub exported_at: String,

    #[serde(rename = "_postman_exported_using")]
    pub exported_using: String,
}

/// One environment variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get_request(body: Option<Body>) -> Request {
        Request {
            method: "GET".to_string(),
            headers: vec![],
            body,
            url: Url::default(),
        }
    }

    #[test]
    fn test_absent_body_is_not_serialized() {
        let value = serde_json::to_value(get_request(None)).unwrap();
        assert!(value.get("body").is_none());

        let value = serde_json::to_value(get_request(Some(Body::raw("x")))).unwrap();
        assert_eq!(value["body"], json!({"mode": "raw", "raw": "x"}));
    }

    #[test]
    fn test_renamed_fields() {
        let info = CollectionInfo {
            postman_id: "id".to_string(),
            name: "Demo".to_string(),
            schema: "s".to_string(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["_postman_id"], "id");

        let header = Header {
            key: "Accept".to_string(),
            value: "*/*".to_string(),
            kind: HEADER_TYPE_TEXT.to_string(),
        };
        assert_eq!(serde_json::to_value(&header).unwrap()["type"], "text");
    }

    #[test]
    fn test_untagged_items_read_back() {
        let folder: Item = serde_json::from_value(json!({
            "name": "Users",
            "item": [{
                "name": "List",
                "request": {
                    "method": "GET",
                    "headers": [],
                    "url": {"protocol": "https", "host": [], "path": [], "query": []}
                }
            }]
        }))
        .unwrap();

        match folder {
            Item::Folder(folder) => {
                assert_eq!(folder.name, "Users");
                assert_eq!(folder.item[0].name(), "List");
                assert!(matches!(folder.item[0], Item::Request(_)));
            }
            Item::Request(_) => panic!("expected a folder"),
        }
    }
}
