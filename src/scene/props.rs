use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered property bag of a component node. Keys are unique; insertion order is kept so generated
/// markup lists attributes the way they were authored.
pub type PropMap = IndexMap<String, PropValue>;

/// Reference to an icon in an icon pack (e.g. `lucide` / `Search`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef {
    /// Icon pack name.
    pub pack: String,
    /// Icon name inside the pack.
    pub icon: String,
}

impl IconRef {
    /// Icon from the default `lucide` pack.
    pub fn lucide(icon: impl Into<String>) -> Self {
        Self {
            pack: "lucide".to_string(),
            icon: icon.into(),
        }
    }
}

/// Dynamically typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Explicitly cleared value.
    Null,
    /// Boolean flag (`true` renders as a bare attribute, `false` is omitted).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
    /// Opaque icon token.
    Icon(IconRef),
}

impl PropValue {
    /// Return the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return `true` for [`PropValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<IconRef> for PropValue {
    fn from(v: IconRef) -> Self {
        Self::Icon(v)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Build a [`PropMap`] from `(key, value)` pairs, keeping their order.
///
/// ```
/// use workshop::scene::props::{props, PropValue};
/// let p = props([("variant", PropValue::from("primary")), ("fullWidth", false.into())]);
/// assert_eq!(p.len(), 2);
/// ```
pub fn props<K, I>(pairs: I) -> PropMap
where
    K: Into<String>,
    I: IntoIterator<Item = (K, PropValue)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
