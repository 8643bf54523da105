//! User-curated list DTOs.
//!
//! The list endpoints predate the backend's camelCase convention: records
//! use snake_case wire fields (`tmdb_id`, `list_id`), except the
//! `addItems`/`removeItems` keys of an update.

use serde::{Deserialize, Serialize};

/// A media reference inside a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListItem {
    pub tmdb_id: String,
}

/// A stored list entry with its row and owning-list ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListItemResponse {
    pub id: String,
    pub list_id: String,
    pub tmdb_id: String,
}

/// A user-curated list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub list_items: Vec<ListItemResponse>,
}

/// Response of `GET /users/{userId}/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetListsResponse {
    pub lists: Vec<List>,
}

/// List creation request (`POST /users/{userId}/list`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateListRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

/// Response of a list creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateListResponse {
    pub list: List,
    pub message: String,
}

/// List update request (`PATCH /users/{userId}/list`). The target list is
/// named in the body, not the path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateListRequest {
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "addItems", skip_serializing_if = "Option::is_none")]
    pub add_items: Option<Vec<ListItem>>,
    #[serde(rename = "removeItems", skip_serializing_if = "Option::is_none")]
    pub remove_items: Option<Vec<ListItem>>,
}

/// Response of a list update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateListResponse {
    pub list: List,
    pub message: String,
}

/// Response of `DELETE /users/{userId}/lists/{listId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteListResponse {
    pub id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_mixes_snake_case_fields_with_camel_case_item_keys() {
        let request = UpdateListRequest {
            list_id: "l1".to_string(),
            name: Some("Watch later".to_string()),
            description: None,
            add_items: Some(vec![ListItem {
                tmdb_id: "603".to_string(),
            }]),
            remove_items: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["list_id"], "l1");
        assert_eq!(value["addItems"][0]["tmdb_id"], "603");
        assert!(value.get("description").is_none());
        assert!(value.get("removeItems").is_none());
    }
}
