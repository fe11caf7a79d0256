// SPDX-License-Identifier: Apache-2.0

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Null,
    True,
    False,
    Number,
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Tag::Null => "null",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Number => "number",
        })
    }
}

/// A parsed JSON root value.
///
/// Only literals and numbers are represented. A failed parse never yields a
/// `Value`; the in-place [`crate::parse_into`] leaves `Value::Null` behind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// `null`, also the state of a value after a failed parse.
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A number, always finite.
    Number(f64),
}

impl Value {
    /// Returns the tag of this value.
    pub fn get_type(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::True => Tag::True,
            Value::False => Tag::False,
            Value::Number(_) => Tag::Number,
        }
    }

    /// Returns the stored number.
    ///
    /// The caller must check that [`get_type`](Self::get_type) is
    /// [`Tag::Number`] first. Debug builds assert this; release builds
    /// return `NaN` for any other tag.
    pub fn get_number(&self) -> f64 {
        debug_assert_eq!(self.get_type(), Tag::Number, "get_number on a non-number");
        self.as_number().unwrap_or(f64::NAN)
    }

    /// The number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is `True` or `False`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}
