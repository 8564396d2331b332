use crate::Value;

/// One bound statement parameter.
///
/// A statement's parameter list must be homogeneous: all positional
/// (`?` placeholders) or all named (`:name` placeholders). The encoder
/// rejects mixed lists.
#[derive(Clone, Debug, PartialEq)]
pub enum Parameter {
    /// Bound by argument order to a `?` placeholder.
    Positional(Value),
    /// Bound by name to a `:name` placeholder.
    Named { name: String, value: Value },
}

impl Parameter {
    /// Builds a positional parameter.
    pub fn positional(value: impl Into<Value>) -> Self {
        Self::Positional(value.into())
    }

    /// Builds a named parameter.
    ///
    /// The name is sent without placeholder prefix; a leading `:`, `@` or
    /// `$` is stripped.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let name = name.trim_start_matches([':', '@', '$']).to_owned();
        Self::Named {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Parameter, Value};

    #[test]
    fn positional_builder() {
        assert_eq!(
            Parameter::positional(5i64),
            Parameter::Positional(Value::Integer(5))
        );
    }

    #[test]
    fn named_builder_strips_placeholder_prefix() {
        let param = Parameter::named(":name", "kit");
        match param {
            Parameter::Named { name, value } => {
                assert_eq!(name, "name");
                assert_eq!(value, Value::Text("kit".to_owned()));
            }
            Parameter::Positional(_) => panic!("expected named parameter"),
        }
    }
}
