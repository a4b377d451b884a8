//! Payload normalization.
//!
//! The catalog API does not keep a stable envelope across endpoints: lists
//! arrive under `data` or under an endpoint-specific key, ids under one of
//! several field names, prices as strings or numbers. Every function here is
//! total. Unexpected shapes degrade to an empty list or `None`.

use serde_json::{Map, Value};

use super::model::{
    Category, DEFAULT_PLANT_CATEGORY, ItemId, PLACEHOLDER_IMAGE_URL, Plant, PlantDetail,
    UNKNOWN_PLANT_NAME,
};

/// Id fields in precedence order.
const ID_FIELDS: [&str; 5] = ["id", "plant_id", "category_id", "_id", "plantId"];
/// Category records never carry plant id aliases.
const CATEGORY_ID_FIELDS: [&str; 3] = ["id", "category_id", "_id"];

const CATEGORY_LIST_KEYS: [&str; 2] = ["data", "categories"];
const PLANT_LIST_KEYS: [&str; 2] = ["data", "plants"];
const PLANT_DETAIL_KEYS: [&str; 2] = ["data", "plant"];

/// Extracts the category list from a `/categories` payload.
pub fn extract_categories(payload: &Value) -> Vec<Category> {
    records(payload, &CATEGORY_LIST_KEYS)
        .map(|record| {
            let id = first_id(record, &CATEGORY_ID_FIELDS);
            let display_name = first_text(record, &["category_name", "name"]).unwrap_or_else(|| {
                match &id {
                    Some(id) => format!("Category {}", id),
                    None => "Category".to_string(),
                }
            });
            Category { id, display_name }
        })
        .collect()
}

/// Extracts the plant list from a `/plants` or `/category/{id}` payload.
pub fn extract_plants(payload: &Value) -> Vec<Plant> {
    records(payload, &PLANT_LIST_KEYS)
        .map(|record| Plant {
            id: resolve_id(record),
            name: first_text(record, &["plant_name", "name"])
                .unwrap_or_else(|| UNKNOWN_PLANT_NAME.to_string()),
            image_url: first_text(record, &["image"])
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            category: first_text(record, &["category"])
                .unwrap_or_else(|| DEFAULT_PLANT_CATEGORY.to_string()),
            price: coerce_price(record.get("price")),
            short_description: first_text(record, &["short_description", "description"])
                .unwrap_or_default(),
        })
        .collect()
}

/// Extracts a single plant from a `/plant/{id}` payload.
///
/// The record may sit directly under the envelope key or inside a list, in
/// which case the first element is taken.
pub fn extract_plant_detail(payload: &Value) -> Option<PlantDetail> {
    let resolved = PLANT_DETAIL_KEYS
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| is_truthy(value))?;

    let record = match resolved {
        Value::Array(items) => items.first()?.as_object()?,
        Value::Object(record) => record,
        _ => return None,
    };

    Some(PlantDetail {
        id: resolve_id(record),
        name: first_text(record, &["plant_name", "name"]),
        image_url: first_text(record, &["image"]),
        category: first_text(record, &["category"]),
        price: record
            .get("price")
            .filter(|price| !price.is_null())
            .map(|price| coerce_price(Some(price))),
        short_description: first_text(record, &["short_description"]),
        description: first_text(record, &["description", "short_description"]),
    })
}

/// Resolves the identifier of a record across every known id alias.
/// Category lists use the narrower `id`, `category_id`, `_id` set.
///
/// The first present, non-falsy string or number wins. `null`, `false`, `""`
/// and `0` are skipped.
pub fn resolve_id(record: &Map<String, Value>) -> Option<ItemId> {
    first_id(record, &ID_FIELDS)
}

fn first_id(record: &Map<String, Value>, fields: &[&str]) -> Option<ItemId> {
    fields.iter().find_map(|field| match record.get(*field)? {
        Value::String(s) if !s.is_empty() => Some(ItemId::new(s.clone())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(ItemId::new(n.to_string())),
        _ => None,
    })
}

/// Coerces a price field into a finite number, defaulting to `0`.
///
/// Strings are trimmed before parsing and an empty string counts as `0`.
/// `true` counts as `1`. Anything non-finite becomes `0`.
pub fn coerce_price(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Iterates the object records of the first list found under `keys`.
fn records<'a>(
    payload: &'a Value,
    keys: &[&str],
) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
    let list = keys
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array));

    if list.is_none() {
        tracing::debug!(?keys, "payload carries no list under the expected keys");
    }

    list.into_iter().flatten().filter_map(Value::as_object)
}

/// Returns the first field holding a non-empty string or a number, as text.
fn first_text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match record.get(*field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
