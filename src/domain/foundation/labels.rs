//! Label set value object for matrix rows and columns.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::ValidationError;

/// Ordered display labels for the items of a pairwise matrix.
///
/// Labels are positional: label `i` names row `i` and column `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Prefix used for generated criteria labels (`C1`, `C2`, ...).
    pub const CRITERIA_PREFIX: &'static str = "C";

    /// Prefix used for generated alternative labels (`A1`, `A2`, ...).
    pub const ALTERNATIVE_PREFIX: &'static str = "A";

    /// Generates `count` labels of the form `{prefix}{1-based index}`.
    pub fn generated(prefix: &str, count: usize) -> Self {
        Self((1..=count).map(|i| format!("{}{}", prefix, i)).collect())
    }

    /// Builds a label set from caller-supplied names.
    ///
    /// Names are trimmed; the count must equal `expected` and none may be blank.
    pub fn try_new(
        field: &str,
        names: Vec<impl Into<String>>,
        expected: usize,
    ) -> Result<Self, ValidationError> {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.into().trim().to_string())
            .collect();

        if names.len() != expected {
            return Err(ValidationError::count_mismatch(field, expected, names.len()));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(ValidationError::empty_field(field));
        }

        Ok(Self(names))
    }

    /// Uses the supplied names when present, otherwise generates labels.
    pub fn or_generated(
        field: &str,
        names: Option<Vec<String>>,
        prefix: &str,
        count: usize,
    ) -> Result<Self, ValidationError> {
        match names {
            Some(names) => Self::try_new(field, names, count),
            None => Ok(Self::generated(prefix, count)),
        }
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the label at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterates over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for LabelSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_labels_are_one_based() {
        let labels = LabelSet::generated(LabelSet::CRITERIA_PREFIX, 3);
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn try_new_trims_names() {
        let labels = LabelSet::try_new("labels", vec![" Cost ", "Quality"], 2).unwrap();
        assert_eq!(&labels[0], "Cost");
        assert_eq!(labels.get(1), Some("Quality"));
    }

    #[test]
    fn try_new_rejects_wrong_count() {
        let result = LabelSet::try_new("alternative_labels", vec!["A", "B"], 3);
        assert_eq!(
            result,
            Err(ValidationError::count_mismatch("alternative_labels", 3, 2))
        );
    }

    #[test]
    fn try_new_rejects_blank_label() {
        let result = LabelSet::try_new("criteria_labels", vec!["Cost", "  "], 2);
        assert_eq!(result, Err(ValidationError::empty_field("criteria_labels")));
    }

    #[test]
    fn or_generated_falls_back_to_prefix() {
        let labels = LabelSet::or_generated("labels", None, LabelSet::ALTERNATIVE_PREFIX, 2).unwrap();
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["A1", "A2"]);
    }

    #[test]
    fn label_set_serializes_as_array() {
        let labels = LabelSet::generated("C", 2);
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"["C1","C2"]"#);
    }
}
