use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use catalog_core::ItemId;

/// Category reported for items without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A catalog record.
///
/// Stored and posted documents are not validated, so every known field is
/// kept as raw JSON and read through the typed accessors ([`Item::id`],
/// [`Item::name_or_empty`], [`Item::category_key`], [`Item::price_value`]).
/// A field that is absent stays absent and an explicit `null` stays `null`.
/// Any other fields are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A key that is present maps to `Some`, including `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id: Some(Value::from(id.get())),
            name: Some(Value::String(name.into())),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Value::String(category.into()));
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(Value::from(price));
        self
    }

    /// The id when it is an integral number; anything else never matches a lookup.
    pub fn id(&self) -> Option<ItemId> {
        let Some(Value::Number(n)) = &self.id else {
            return None;
        };
        match n.as_i64() {
            Some(v) => Some(ItemId::new(v)),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| ItemId::new(f as i64)),
        }
    }

    /// Name used for filtering; a missing or non-string name matches like an
    /// empty string.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or("")
    }

    /// Grouping key for statistics.
    ///
    /// Falsy values (absent, `null`, `false`, `0`, `""`) fall back to
    /// [`UNCATEGORIZED`]. Numbers and `true` use their textual form, arrays
    /// and objects their compact JSON.
    pub fn category_key(&self) -> Cow<'_, str> {
        match self.category.as_ref() {
            Some(Value::String(s)) if !s.is_empty() => Cow::Borrowed(s),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) if f != 0.0 && f.is_finite() => Cow::Owned(number_text(n, f)),
                _ => Cow::Borrowed(UNCATEGORIZED),
            },
            Some(Value::Bool(true)) => Cow::Borrowed("true"),
            Some(v @ (Value::Array(_) | Value::Object(_))) => Cow::Owned(v.to_string()),
            _ => Cow::Borrowed(UNCATEGORIZED),
        }
    }

    /// Price coerced to a number; absent or non-numeric prices count as 0.
    pub fn price_value(&self) -> f64 {
        self.price.as_ref().map_or(0.0, coerce_number)
    }
}

/// `5` and `5.0` both read as "5".
fn number_text(n: &serde_json::Number, f: f64) -> String {
    if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Numeric coercion for loosely-typed JSON values.
///
/// Numbers pass through, numeric strings are parsed after trimming (an empty
/// string is 0), booleans are 1/0. Everything else, and any non-finite
/// result, is 0.
fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Creation payload: any JSON object.
///
/// No field is required or type-checked; an `id` supplied by the client is
/// discarded because ids are always assigned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewItem {
    pub fields: Map<String, Value>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.into()));
        Self { fields }
    }

    pub fn into_item(self, id: ItemId) -> Item {
        let mut fields = self.fields;
        fields.remove("id");
        Item {
            id: Some(Value::from(id.get())),
            name: fields.remove("name"),
            category: fields.remove("category"),
            price: fields.remove("price"),
            extra: fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_with_price(price: Value) -> Item {
        let mut item = Item::new(ItemId::new(1), "x");
        item.price = Some(price);
        item
    }

    #[test]
    fn price_coercion_follows_numeric_rules() {
        assert_eq!(item_with_price(json!(12.5)).price_value(), 12.5);
        assert_eq!(item_with_price(json!(" 7.25 ")).price_value(), 7.25);
        assert_eq!(item_with_price(json!("")).price_value(), 0.0);
        assert_eq!(item_with_price(json!("abc")).price_value(), 0.0);
        assert_eq!(item_with_price(json!(true)).price_value(), 1.0);
        assert_eq!(item_with_price(json!(null)).price_value(), 0.0);
        assert_eq!(item_with_price(json!([3])).price_value(), 0.0);
        assert_eq!(item_with_price(json!("NaN")).price_value(), 0.0);
        assert_eq!(Item::new(ItemId::new(2), "y").price_value(), 0.0);
    }

    #[test]
    fn category_key_defaults_to_uncategorized() {
        let item = Item::new(ItemId::new(1), "x");
        assert_eq!(item.category_key(), UNCATEGORIZED);
        assert_eq!(item.clone().with_category("").category_key(), UNCATEGORIZED);
        assert_eq!(item.with_category("Tools").category_key(), "Tools");
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "id": 3,
            "name": "Lamp",
            "category": "Home",
            "price": 20,
            "stock": 4,
            "tags": ["desk"]
        });
        let item: Item = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.extra.get("stock"), Some(&json!(4)));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn new_item_drops_client_supplied_id() {
        let payload: NewItem =
            serde_json::from_value(json!({ "id": 999, "name": "Desk", "color": "oak" })).unwrap();
        let item = payload.into_item(ItemId::new(12));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], json!(12));
        assert_eq!(value["name"], json!("Desk"));
        assert_eq!(value["color"], json!("oak"));
    }

    #[test]
    fn payload_fields_are_not_type_checked() {
        let payload: NewItem =
            serde_json::from_value(json!({ "name": 42, "category": ["a"], "price": "9" })).unwrap();
        let item = payload.into_item(ItemId::new(3));
        assert_eq!(item.name, Some(json!(42)));
        assert_eq!(item.name_or_empty(), "");
        assert_eq!(item.price_value(), 9.0);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(serde_json::from_value::<NewItem>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<NewItem>(json!("Desk")).is_err());
    }

    #[test]
    fn explicit_nulls_survive_a_round_trip() {
        let raw = json!({ "id": 1, "name": "A", "category": null, "price": null });
        let item: Item = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.category, Some(Value::Null));
        assert_eq!(item.category_key(), UNCATEGORIZED);
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn loosely_typed_documents_decode() {
        let items: Vec<Item> = serde_json::from_value(json!([
            { "id": 1, "name": "A", "category": 5, "price": 2 },
            { "name": "no id" },
            { "id": "7", "name": true }
        ]))
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].category_key(), "5");
        assert_eq!(items[1].id(), None);
        assert_eq!(items[2].id(), None);
        assert_eq!(items[2].name_or_empty(), "");
    }

    #[test]
    fn id_accepts_integral_numbers_only() {
        let mut item = Item::new(ItemId::new(4), "x");
        assert_eq!(item.id(), Some(ItemId::new(4)));
        item.id = Some(json!(4.0));
        assert_eq!(item.id(), Some(ItemId::new(4)));
        item.id = Some(json!(4.5));
        assert_eq!(item.id(), None);
    }

    #[test]
    fn category_key_follows_truthiness() {
        let mut item = Item::new(ItemId::new(1), "x");
        for (raw, key) in [
            (json!(0), UNCATEGORIZED),
            (json!(false), UNCATEGORIZED),
            (json!(null), UNCATEGORIZED),
            (json!(3), "3"),
            (json!(2.0), "2"),
            (json!(2.5), "2.5"),
            (json!(true), "true"),
        ] {
            item.category = Some(raw);
            assert_eq!(item.category_key(), key);
        }
    }

    #[test]
    fn empty_payload_is_accepted() {
        let payload: NewItem = serde_json::from_value(json!({})).unwrap();
        let item = payload.into_item(ItemId::new(1));
        assert_eq!(item.name, None);
        assert_eq!(item.name_or_empty(), "");
    }
}
