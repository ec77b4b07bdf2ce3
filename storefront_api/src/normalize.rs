//! Normalization of the backend's inconsistent list-response shapes.
//!
//! List endpoints answer with a bare array, a paginated object, a
//! `data`/`pagination` pair, or an empty object, with or without the standard
//! `result` envelope around it. Everything funnels through [`normalize`] so
//! callers only ever see [`PaginatedResult`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::PaginatedResult;
use crate::Error;

/// The shapes a list response's `result` can take, resolved once up front.
pub enum ResultShape<'a> {
    /// `{items: [...], total, page, size, pages}` (aliases `page_size`,
    /// `total_pages` accepted).
    Paginated(&'a Map<String, Value>),
    /// `{data: [...], pagination: {page, limit, total, pages}}`.
    DataPagination {
        data: &'a [Value],
        pagination: &'a Map<String, Value>,
    },
    /// A bare, unpaginated array of records.
    Array(&'a [Value]),
    /// `{}` or `null`: no results, not an error.
    Empty,
    /// Anything else. Degrades to an empty page, loudly.
    Unrecognized(&'a Value),
}

/// Classifies an already-unwrapped `result` value.
pub fn classify(result: &Value) -> ResultShape<'_> {
    match result {
        Value::Object(map) => {
            if map.get("items").is_some_and(Value::is_array) {
                ResultShape::Paginated(map)
            } else if let (Some(data), Some(Value::Object(pagination))) =
                (map.get("data").and_then(Value::as_array), map.get("pagination"))
            {
                ResultShape::DataPagination { data, pagination }
            } else if map.is_empty() {
                ResultShape::Empty
            } else {
                ResultShape::Unrecognized(result)
            }
        }
        Value::Array(items) => ResultShape::Array(items),
        Value::Null => ResultShape::Empty,
        _ => ResultShape::Unrecognized(result),
    }
}

/// Normalizes a raw response body into a page of untyped items.
///
/// `page` and `size` are the values the caller requested; they fill in
/// whatever the server omits. Never fails: malformed-but-parseable bodies
/// degrade to the empty page. Transport errors must be handled before the
/// body ever reaches this function.
pub fn normalize_value(body: &Value, page: u64, size: u64) -> PaginatedResult<Value> {
    // One level of envelope unwrapping; a missing `result` key means the
    // shape sits at the top level.
    let result = body.get("result").unwrap_or(body);

    let mut out = match classify(result) {
        ResultShape::Paginated(map) => {
            let items = map
                .get("items")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let total = map
                .get("total")
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            let page = positive(map.get("page")).unwrap_or(page);
            let size = positive(map.get("size"))
                .or_else(|| positive(map.get("page_size")))
                .unwrap_or(size);
            let pages = positive(map.get("pages"))
                .or_else(|| positive(map.get("total_pages")))
                .unwrap_or_else(|| pages_for(total, size));
            PaginatedResult {
                items,
                total,
                page,
                size,
                pages,
            }
        }
        ResultShape::DataPagination { data, pagination } => {
            let items = data.to_vec();
            let total = pagination
                .get("total")
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            PaginatedResult {
                items,
                total,
                page: positive(pagination.get("page")).unwrap_or(page),
                size: positive(pagination.get("limit")).unwrap_or(size),
                pages: positive(pagination.get("pages")).unwrap_or(1),
            }
        }
        ResultShape::Array(items) => {
            // Legacy unpaginated shape: the one batch is the whole page.
            // `total` only reflects what came back; additional server-side
            // records are undetectable on this path.
            let items = items.to_vec();
            let len = items.len() as u64;
            PaginatedResult {
                items,
                total: len,
                page: 1,
                size: len,
                pages: 1,
            }
        }
        ResultShape::Empty => {
            tracing::warn!("list response was empty, returning empty page");
            PaginatedResult::empty(page, size)
        }
        ResultShape::Unrecognized(value) => {
            tracing::error!(shape = %shape_name(value), "unrecognized list response shape");
            PaginatedResult::empty(page, size)
        }
    };

    for item in &mut out.items {
        mirror_identifier(item);
    }
    out
}

/// Normalizes a raw response body into a typed page.
///
/// Shape problems degrade to the empty page exactly like [`normalize_value`];
/// an item that does not decode as `T` is a real [`Error::Decode`].
pub fn normalize<T: DeserializeOwned>(
    body: &Value,
    page: u64,
    size: u64,
) -> Result<PaginatedResult<T>, Error> {
    let raw = normalize_value(body, page, size);
    let mut items = Vec::with_capacity(raw.items.len());
    for item in raw.items {
        items.push(
            serde_json::from_value(item).map_err(|e| Error::Decode(format!("list item: {e}")))?,
        );
    }
    Ok(PaginatedResult {
        items,
        total: raw.total,
        page: raw.page,
        size: raw.size,
        pages: raw.pages,
    })
}

/// Mirrors `_id` into `id` (and the reverse) so downstream lookups work with
/// either spelling. `_id` wins when both are present; neither is removed.
fn mirror_identifier(item: &mut Value) {
    let Value::Object(map) = item else { return };
    if let Some(mongo_id) = map.get("_id").cloned() {
        map.insert("id".to_string(), mongo_id);
    } else if let Some(id) = map.get("id").cloned() {
        map.insert("_id".to_string(), id);
    }
}

fn positive(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_u64).filter(|v| *v > 0)
}

fn pages_for(total: u64, size: u64) -> u64 {
    if size == 0 {
        0
    } else {
        total.div_euclid(size) + u64::from(total % size != 0)
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{normalize, normalize_value};
    use crate::types::User;

    #[test]
    fn empty_object_yields_empty_page() {
        for body in [json!({}), json!({"result": {}})] {
            let page = normalize_value(&body, 3, 20);
            assert!(page.items.is_empty());
            assert_eq!(page.total, 0);
            assert_eq!(page.pages, 0);
            assert_eq!(page.page, 3);
            assert_eq!(page.size, 20);
        }
    }

    #[test]
    fn null_and_scalars_degrade_to_empty() {
        for body in [Value::Null, json!(42), json!("nope"), json!({"result": null})] {
            let page = normalize_value(&body, 1, 10);
            assert!(page.items.is_empty());
            assert_eq!(page.total, 0);
            assert_eq!(page.pages, 0);
        }
    }

    #[test]
    fn bare_array_collapses_to_single_page() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let page = normalize_value(&body, 5, 10);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 3);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn paginated_object_passes_through() {
        let body = json!({"result": {
            "items": [{"id": "a"}, {"id": "b"}],
            "total": 57, "page": 3, "size": 2, "pages": 29
        }});
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 57);
        assert_eq!(page.page, 3);
        assert_eq!(page.size, 2);
        assert_eq!(page.pages, 29);
    }

    #[test]
    fn pages_computed_when_absent() {
        let body = json!({"result": {"items": [{}, {}, {}], "total": 25}});
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.pages, 3);
        assert_eq!(page.size, 10);
    }

    #[test]
    fn page_size_and_total_pages_aliases_accepted() {
        let body = json!({"result": {
            "items": [{}], "total": 12, "page": 2, "page_size": 4, "total_pages": 3
        }});
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.size, 4);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn data_pagination_shape() {
        let body = json!({"result": {
            "data": [{"id": "x"}],
            "pagination": {"page": 2, "limit": 5, "total": 11, "pages": 3}
        }});
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 11);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 5);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn mongo_id_is_mirrored_into_id() {
        let body = json!([{"_id": "abc", "name": "Foo"}]);
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.items[0]["_id"], "abc");
        assert_eq!(page.items[0]["id"], "abc");
    }

    #[test]
    fn plain_id_is_mirrored_into_mongo_id() {
        let body = json!([{"id": 7}]);
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.items[0]["_id"], 7);
    }

    #[test]
    fn mongo_id_wins_when_both_present() {
        let body = json!([{"_id": "abc", "id": "stale"}]);
        let page = normalize_value(&body, 1, 10);
        assert_eq!(page.items[0]["id"], "abc");
        assert_eq!(page.items[0]["_id"], "abc");
    }

    #[test]
    fn zero_size_never_divides_by_zero() {
        let body = json!({"result": {"items": [], "total": 0, "size": 0}});
        let page = normalize_value(&body, 1, 0);
        assert_eq!(page.pages, 0);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn typed_normalization_decodes_items() {
        let body = json!({"result": {"items": [
            {"_id": "u1", "user_name": "amal", "role": "admin"}
        ], "total": 1}});
        let page = normalize::<User>(&body, 1, 10).unwrap();
        assert_eq!(page.items[0].user_name, "amal");
        assert_eq!(page.items[0].key(), "u1");
    }

    #[test]
    fn typed_normalization_rejects_bad_items() {
        let body = json!({"result": {"items": [{"user_name": 12}], "total": 1}});
        assert!(normalize::<User>(&body, 1, 10).is_err());
    }
}
