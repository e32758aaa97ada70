use std::fmt;

use super::schema::ColumnType;

/// A single cell
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Missing value. Never ranked, never flagged.
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl Value {
    /// Numeric view of the cell, used when ranking a column
    ///
    /// `None` for missing, `NaN` and non-numeric cells.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(i) => Some(i as f64),
            Value::Float(x) if !x.is_nan() => Some(x),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(*self, Value::Null)
    }

    /// The narrowest column type that can hold this value, `None` for `Null`
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::Integer(_) => Some(ColumnType::Integer),
            Value::Float(_) => Some(ColumnType::Float),
            Value::Boolean(_) => Some(ColumnType::Boolean),
            Value::Text(_) => Some(ColumnType::Text),
        }
    }
}

/// The default string representation, shared by the console diagnostics and the outlier file.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => format_float(*x, f),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// Integral floats keep a trailing `.0` so they read back as floats.
fn format_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        Ok(())
    } else if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Value {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test]
    fn display() {
        assert_eq!(Value::Integer(1000).to_string(), "1000");
        assert_eq!(Value::Integer(-999).to_string(), "-999");
        assert_eq!(Value::Float(1000.).to_string(), "1000.0");
        assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Float(f64::NAN).to_string(), "");
        assert_eq!(Value::Boolean(true).to_string(), "True");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("a,b").to_string(), "a,b");
    }

    #[test]
    fn numeric_view() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Float(f64::NAN).as_f64(), None);
        assert_eq!(Value::Boolean(true).as_f64(), None);
        assert_eq!(Value::Null.as_f64(), None);
        assert_eq!(Value::from("1").as_f64(), None);
    }

    #[test]
    fn from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(2.5)), Value::Float(2.5));
    }
}
