use std::str::FromStr;

use serde_json::Value;

/// One literal replacement rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

/// Ordered set of substitution rules with unique patterns.
///
/// Iteration order is insertion order. Re-inserting a known pattern swaps its
/// replacement but keeps its position, matching how a JSON object with a
/// duplicated key behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    rules: Vec<Substitution>,
}

/// Errors produced while decoding a substitution map from JSON.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SubstitutionError {
    #[error("The provided substitution map is not valid JSON")]
    #[diagnostic(
        code(message_shorthand::malformed_input),
        help("pass a JSON object such as '{{\"WIP\": \"Work in progress\"}}'")
    )]
    MalformedInput(#[source] serde_json::Error),
    #[error("Substitutions do not map from string to string")]
    #[diagnostic(
        code(message_shorthand::invalid_mapping),
        help("every key and every value of the substitution object must be a string")
    )]
    InvalidMapping(#[source] MappingViolation),
}

/// What made well-formed JSON unusable as a substitution map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingViolation {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("value for key `{key}` is {found}, expected a string")]
    NonStringValue { key: String, found: &'static str },
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a JSON object of string-to-string pairs.
    ///
    /// Syntax errors yield [`SubstitutionError::MalformedInput`]; valid JSON
    /// of the wrong shape yields [`SubstitutionError::InvalidMapping`]. Either
    /// the whole map is returned or nothing is.
    pub fn from_json(text: &str) -> Result<Self, SubstitutionError> {
        let value: Value = serde_json::from_str(text).map_err(SubstitutionError::MalformedInput)?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(SubstitutionError::InvalidMapping(
                    MappingViolation::NotAnObject(json_kind(&other)),
                ))
            }
        };

        let mut map = Self::new();
        for (key, value) in object {
            match value {
                Value::String(replacement) => map.insert(key, replacement),
                other => {
                    return Err(SubstitutionError::InvalidMapping(
                        MappingViolation::NonStringValue {
                            key,
                            found: json_kind(&other),
                        },
                    ))
                }
            }
        }
        Ok(map)
    }

    /// Add a rule at the end, or update the replacement of an existing pattern in place.
    pub fn insert(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        let pattern = pattern.into();
        let replacement = replacement.into();
        match self.rules.iter_mut().find(|r| r.pattern == pattern) {
            Some(existing) => existing.replacement = replacement,
            None => self.rules.push(Substitution {
                pattern,
                replacement,
            }),
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.pattern == pattern)
            .map(|r| r.replacement.as_str())
    }

    /// Keep only the rules for which `keep` returns true, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Substitution) -> bool) {
        self.rules.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `message` in order. See [`super::substitute`].
    pub fn apply(&self, message: &str) -> String {
        super::substitute(message, self)
    }
}

impl FromStr for SubstitutionMap {
    type Err = SubstitutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SubstitutionMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (pattern, replacement) in iter {
            self.insert(pattern, replacement);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a SubstitutionMap {
    type Item = &'a Substitution;
    type IntoIter = std::slice::Iter<'a, Substitution>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
