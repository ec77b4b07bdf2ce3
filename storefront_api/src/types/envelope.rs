use serde::{Deserialize, Serialize};

/// Standard wrapper around every backend JSON response.
///
/// Some endpoints skip it and put the payload at the top level; the client
/// unwraps tolerantly rather than requiring it.
#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<String>,
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub result: T,
}

/// The canonical page shape every list caller consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// Records in server-provided order.
    pub items: Vec<T>,
    /// Total matching records server-side, not just this page.
    pub total: u64,
    /// 1-based current page.
    pub page: u64,
    /// Page size actually used; may differ from the requested size.
    pub size: u64,
    /// Total page count. 0 for an empty result.
    pub pages: u64,
}

impl<T> PaginatedResult<T> {
    /// The empty page, echoing the requested `page` and `size`.
    pub fn empty(page: u64, size: u64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            size,
            pages: 0,
        }
    }
}

/// Record identifier. The backend mixes Mongo string ids and numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{n}"),
            EntityId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Str(s.to_string())
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Int(n)
    }
}

/// Successful `POST /api/login` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// `POST /api/upload` result: either `{url: "..."}` or a bare path string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UploadResult {
    Located { url: String },
    Path(String),
}

impl UploadResult {
    /// The reported location, whichever shape carried it.
    pub fn into_path(self) -> String {
        match self {
            UploadResult::Located { url } => url,
            UploadResult::Path(path) => path,
        }
    }
}
