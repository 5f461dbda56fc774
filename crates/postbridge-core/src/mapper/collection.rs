//! Collection mapping

use super::DocumentMapper;
use crate::accessor::ValueExt;
use crate::types::{
    Body, CollectionDocument, CollectionInfo, FolderItem, Header, Item, QueryParam, Request,
    RequestItem, Url, HEADER_TYPE_TEXT,
};
use serde_json::Value;
use tracing::debug;

const FOLDER_TYPE_SERVICE: &str = "Service";
const FOLDER_TYPE_SCENARIO: &str = "Scenario";

impl DocumentMapper {
    /// Map a source collection entity to a Postman collection
    pub fn map_collection(&self, entity: &Value) -> CollectionDocument {
        let name = entity.text_at("entity.name");
        let item = self.map_children(entity);

        debug!(collection = name, items = item.len(), "mapped collection");

        CollectionDocument {
            info: CollectionInfo {
                postman_id: self.fresh_id(),
                name: name.to_string(),
                schema: self.config.schema_url.clone(),
            },
            item,
        }
    }

    fn map_children(&self, node: &Value) -> Vec<Item> {
        node.sequence_at("children")
            .iter()
            .map(|child| self.map_item(child))
            .collect()
    }

    /// Map one child of a collection.
    ///
    /// Services and scenarios become folders; anything else is treated as a
    /// request, whether or not it carries `children`.
    pub fn map_item(&self, child: &Value) -> Item {
        if is_folder(child) {
            return Item::Folder(FolderItem {
                name: child.text_at("entity.name").to_string(),
                item: self.map_children(child),
            });
        }

        let method = child.text_at("entity.method.name");
        Item::Request(RequestItem {
            name: child.text_at("entity.name").to_string(),
            request: Request {
                method: method.to_string(),
                headers: map_headers(child),
                body: map_body(child, method),
                url: map_url(child),
            },
        })
    }
}

fn is_folder(child: &Value) -> bool {
    matches!(
        child.at("entity.type").and_then(Value::as_str),
        Some(FOLDER_TYPE_SERVICE | FOLDER_TYPE_SCENARIO)
    )
}

fn map_headers(child: &Value) -> Vec<Header> {
    child
        .sequence_at("entity.headers")
        .iter()
        .map(|header| Header {
            key: header.text_at("name").to_string(),
            value: header.text_at("value").to_string(),
            kind: HEADER_TYPE_TEXT.to_string(),
        })
        .collect()
}

/// Only `POST` requests carry a body; every other method maps to no body field.
fn map_body(child: &Value, method: &str) -> Option<Body> {
    match method {
        "POST" => Some(Body::raw(child.text_at("entity.body.textBody"))),
        _ => None,
    }
}

fn map_url(child: &Value) -> Url {
    let path = child.text_at("entity.uri.path");
    let path = path.strip_prefix('/').unwrap_or(path);

    Url {
        protocol: child.text_at("entity.uri.scheme.name").to_string(),
        host: split_nonempty(child.text_at("entity.uri.host"), '.'),
        path: split_nonempty(path, '/'),
        query: child
            .sequence_at("entity.uri.query.items")
            .iter()
            .map(|query| QueryParam {
                key: query.text_at("name").to_string(),
                value: query.text_at("value").to_string(),
            })
            .collect(),
    }
}

/// Split `text` on `separator`; the empty string yields no parts.
pub(crate) fn split_nonempty(text: &str, separator: char) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(separator).map(str::to_string).collect()
}
