//! The backend's JSON response envelope and paginator wrapper.

use serde::{Deserialize, Serialize};

/// Every backend endpoint answers with this envelope. `data` is absent on
/// failures and on endpoints that only acknowledge an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// The payload, if the server reported success and attached one.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Server-side page of a larger listing. Pagination itself happens on the
/// backend; the client only filters within the page it was given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Paginated {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            total: 0,
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_data() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Invalid credentials");
        assert!(envelope.data.is_none());
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn test_failed_envelope_never_yields_data() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"nope","data":7}"#).unwrap();
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn test_sparse_page_counts_from_one() {
        let page: Paginated<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert!(!page.has_prev());
        assert!(!page.has_next());
        // Same page numbering as the in-memory default.
        assert_eq!(page.current_page, Paginated::<u32>::default().current_page);
    }

    #[test]
    fn test_paginator_shape() {
        let page: Paginated<u32> = serde_json::from_str(
            r#"{"data":[1,2,3],"current_page":2,"last_page":5,"total":42}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert!(page.has_next());
        assert!(page.has_prev());
    }
}
