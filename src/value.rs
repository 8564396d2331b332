use chrono::NaiveDateTime;

/// Wire format for `timestamp` columns and parameters.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A decoded cell or statement parameter value.
///
/// Variants mirror the column types rqlite declares per result column;
/// a cell that arrives as JSON `null` decodes to [`Value::Null`] no matter
/// what type its column declares.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    /// `text` columns.
    Text(String),
    /// `integer` and `numeric` columns.
    Integer(i64),
    /// `int` columns.
    Int(i32),
    /// `real` columns.
    Real(f64),
    /// `timestamp` columns.
    Timestamp(NaiveDateTime),
    /// `bool` columns, carried as 0/1 integers on the wire.
    Bool(bool),
}

impl Value {
    /// Returns the value as a 64-bit integer.
    ///
    /// `int` columns widen losslessly; other variants return `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Int(value) => Some(i64::from(*value)),
            _ => None,
        }
    }

    /// Returns the value as a 32-bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the value as a timestamp.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}
