//! Binding of a parameter store onto typed options structs.
//!
//! The binder walks an options type's member table, pulls each member's
//! value span out of a [`Parameters`] store, coerces it to the declared
//! kind and assembles a `serde_json` object that is then deserialized onto
//! the target type. Members are matched by name; missing optional members
//! keep the struct's defaults, missing or malformed required members fail
//! the bind as an `Err`, never a panic.

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::params::{parse_bool, parse_datetime, Parameters};

/// Declared type of a bindable member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Bool,
    DateTime,
    /// The whole value span as a list of strings
    Strings,
}

/// One entry in an options type's member table.
#[derive(Debug, Clone, Copy)]
pub struct Member {
    /// Parameter name the member is looked up by
    pub name: &'static str,

    /// Declared kind used for coercion
    pub kind: ValueKind,

    /// Whether binding fails when the member cannot be resolved
    pub required: bool,
}

impl Member {
    /// A member that must be present and coercible for the bind to succeed.
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A member that falls back to the struct default when missing or
    /// malformed.
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// An options type the binder can populate from a [`Parameters`] store.
///
/// Implementors declare their settable members in a static table; the
/// struct itself should derive `Deserialize` with `#[serde(default)]` so
/// unbound members keep their defaults.
pub trait Bindable: DeserializeOwned + Default {
    /// The member table matched against parameter names.
    fn members() -> &'static [Member];
}

/// Bind a parameter store onto an options type.
///
/// Each member of `T` is looked up by name in the store. Present members
/// are coerced to their declared kind with the same lenient rules as the
/// store's typed accessors; absent or uncoercible optional members fall
/// back to the struct default. The bind fails only when a required member
/// is absent or fails coercion.
pub fn bind<T: Bindable>(params: &Parameters) -> Result<T> {
    let mut obj = Map::new();

    for member in T::members() {
        if !params.contains(member.name) {
            if member.required {
                return Err(Error::MissingParameter(member.name.to_string()));
            }
            continue;
        }

        let values = params.as_strings(member.name, &[]);

        match coerce(member, &values) {
            Ok(Some(value)) => {
                obj.insert(member.name.to_string(), value);
            }
            Ok(None) => {
                // Present but without a usable value; required members
                // cannot resolve from that.
                if member.required {
                    return Err(Error::MissingParameter(member.name.to_string()));
                }
            }
            Err(err) => {
                if member.required {
                    return Err(err);
                }
            }
        }
    }

    serde_json::from_value(Value::Object(obj)).map_err(|e| Error::Bind(e.to_string()))
}

/// Coerce a member's collected values to its declared kind.
///
/// `Ok(None)` means no value was available for a kind that needs one.
fn coerce(member: &Member, values: &[String]) -> Result<Option<Value>> {
    // A bare flag has a presence but no value span
    if values.is_empty() {
        return match member.kind {
            ValueKind::Bool => Ok(Some(json!(true))),
            ValueKind::Strings => Ok(Some(json!([]))),
            _ => Ok(None),
        };
    }

    let first = &values[0];

    match member.kind {
        ValueKind::Strings => Ok(Some(json!(values))),

        ValueKind::String => Ok(Some(json!(first))),

        ValueKind::Integer => match first.parse::<i64>() {
            Ok(n) => Ok(Some(json!(n))),
            Err(_) => Err(Error::InvalidValue(
                member.name.to_string(),
                format!("Expected integer, got: {}", first),
            )),
        },

        ValueKind::Float => match first.parse::<f64>() {
            Ok(n) => Ok(Some(json!(n))),
            Err(_) => Err(Error::InvalidValue(
                member.name.to_string(),
                format!("Expected number, got: {}", first),
            )),
        },

        ValueKind::Bool => match parse_bool(first) {
            Some(b) => Ok(Some(json!(b))),
            None => Err(Error::InvalidValue(
                member.name.to_string(),
                format!("Expected boolean, got: {}", first),
            )),
        },

        ValueKind::DateTime => match parse_datetime(first) {
            Some(dt) => Ok(Some(json!(dt.to_rfc3339()))),
            None => Err(Error::InvalidValue(
                member.name.to_string(),
                format!("Expected date/time, got: {}", first),
            )),
        },
    }
}
