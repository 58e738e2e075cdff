use serde_json::Value;

/// Operation argument container.
///
/// Arguments are forwarded verbatim to the resolved operation; the
/// wrapper never interprets them.
#[derive(Clone, Debug, PartialEq)]
pub enum Params {
    /// Positional arguments, in call order.
    Positional(Vec<Value>),
    /// Named arguments.
    Named(Vec<(String, Value)>),
}

impl Params {
    /// Builds positional arguments.
    pub fn positional(values: impl Into<Vec<Value>>) -> Self {
        Self::Positional(values.into())
    }

    /// Builds named arguments.
    pub fn named<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Returns true when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(values) => values.is_empty(),
            Self::Named(pairs) => pairs.is_empty(),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl<const N: usize> From<[Value; N]> for Params {
    fn from(values: [Value; N]) -> Self {
        Self::Positional(values.into())
    }
}

impl From<Vec<(String, Value)>> for Params {
    fn from(values: Vec<(String, Value)>) -> Self {
        Self::Named(values)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Params;

    #[test]
    fn positional_from_array() {
        let params: Params = [json!(1), json!("maintenance")].into();
        match params {
            Params::Positional(values) => assert_eq!(values.len(), 2),
            _ => panic!("expected positional"),
        }
    }

    #[test]
    fn named_builder() {
        let params = Params::named([("state", json!("active"))]);
        match params {
            Params::Named(pairs) => {
                assert_eq!(pairs.len(), 1);
                assert_eq!(pairs[0].0, "state");
            }
            _ => panic!("expected named"),
        }
    }

    #[test]
    fn unit_converts_to_empty() {
        let params: Params = ().into();
        assert!(params.is_empty());
    }
}
