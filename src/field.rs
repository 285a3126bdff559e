use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Codec, Config};

thread_local! {
    static FIELD_CODEC: RefCell<Option<Codec>> = RefCell::new(None);
}

fn with_codec<R>(f: impl FnOnce(&Codec) -> R) -> R {
    FIELD_CODEC.with(|cell| {
        let mut cell = cell.borrow_mut();
        let codec =
            cell.get_or_insert_with(|| Codec::new(&Config::global().unwrap_or_default()));
        f(codec)
    })
}

pub trait TypeMarker: std::fmt::Debug {
    fn name() -> &'static str;
}

/// A generic type-safe object ID field (a wrapped u64).
///
/// When serialized with Serde, the number is automatically encoded into a
/// short printable string. Deserialization validates and decodes the string
/// back to an integer. The string has an object type specific prefix defined
/// in the type marker's `fn name()`, so IDs of different object types cannot
/// be mixed up.
///
/// # Examples
///
/// ```
/// use serde::{Serialize, Deserialize};
/// use serde_json;
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct ExampleIdMarker;
/// impl idte_rs::TypeMarker for ExampleIdMarker {
///     fn name() -> &'static str { "example" }
/// }
///
/// type ExampleId = idte_rs::Field<ExampleIdMarker>;
///
/// #[derive(serde::Serialize)]
/// struct Example {
///     pub id: ExampleId,
/// }
///
/// let obj = Example { id: ExampleId::from(12345) };
/// let obj_str = serde_json::to_string(&obj).unwrap();
/// assert_eq!(obj_str, "{\"id\":\"example_30V\"}");
/// ```
#[derive(Debug)]
pub struct Field<T: TypeMarker> {
    id: u64,
    _marker: std::marker::PhantomData<T>,
}

// Manual impls avoid the implicit `T: Clone`/`T: Copy` bounds a derive adds.
impl<T: TypeMarker> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TypeMarker> Copy for Field<T> {}

impl<T: TypeMarker> From<Field<T>> for u64 {
    /// Returns the raw `u64` value.
    fn from(field: Field<T>) -> Self {
        field.id
    }
}

impl<T: TypeMarker> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Field {{ id: {}, marker: {} }}", self.id, T::name())
    }
}

impl<T: TypeMarker> Field<T> {
    /// Creates a `Field<T>` value from a `u64`.
    ///
    /// This method converts a `u64` into a `Field<T>`, effectively changing
    /// its type.
    pub fn from(id: u64) -> Self {
        Field {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Encodes the ID into its prefixed string form.
    pub fn encode(self) -> String {
        with_codec(|codec| format!("{}_{}", T::name(), codec.encode(self.id)))
    }
}

impl<T: TypeMarker> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de, T: TypeMarker> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let prefix = format!("{}_", T::name());
        let tail = encoded.strip_prefix(&prefix).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid identifier prefix, expected {:?}",
                prefix
            ))
        })?;
        let id = with_codec(|codec| codec.decode(tail)).map_err(serde::de::Error::custom)?;
        Ok(Field::from(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    struct WidgetIdMarker;
    impl TypeMarker for WidgetIdMarker {
        fn name() -> &'static str {
            "widget"
        }
    }

    type WidgetId = Field<WidgetIdMarker>;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Widget {
        id: WidgetId,
    }

    #[test]
    fn test_serialize() {
        let widget = Widget {
            id: WidgetId::from(12345),
        };
        assert_eq!(
            serde_json::to_string(&widget).unwrap(),
            "{\"id\":\"widget_30V\"}"
        );
    }

    #[test]
    fn test_deserialize() {
        let widget: Widget = serde_json::from_str("{\"id\":\"widget_30V\"}").unwrap();
        assert_eq!(u64::from(widget.id), 12345);
    }

    #[test]
    fn test_roundtrip() {
        for id in [0, 1, 63, 64, 0xFE21B3A4D9C8E712, u64::MAX] {
            let widget = Widget {
                id: WidgetId::from(id),
            };
            let json = serde_json::to_string(&widget).unwrap();
            let back: Widget = serde_json::from_str(&json).unwrap();
            assert_eq!(u64::from(back.id), id);
        }
    }

    #[test]
    fn test_wrong_prefix() {
        for bad in [
            "{\"id\":\"30V\"}",
            "{\"id\":\"gadget_30V\"}",
            "{\"id\":\"_30V\"}",
        ] {
            assert!(serde_json::from_str::<Widget>(bad).is_err(), "input {}", bad);
        }
    }

    #[test]
    fn test_invalid_tail() {
        // Non-canonical and malformed tails are rejected by the codec.
        for bad in [
            "{\"id\":\"widget_030V\"}",
            "{\"id\":\"widget_\"}",
            "{\"id\":\"widget_!!\"}",
            "{\"id\":\"widget_$$$$$$$$$$$\"}",
        ] {
            assert!(serde_json::from_str::<Widget>(bad).is_err(), "input {}", bad);
        }
    }

    #[test]
    fn test_display() {
        let id = WidgetId::from(7);
        assert_eq!(id.to_string(), "Field { id: 7, marker: widget }");
    }
}
