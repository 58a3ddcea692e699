//! Identifying field collections.
//!
//! A [`FieldSet`] carries the caller-supplied identifying attributes for one
//! subject (for example `fname`, `lname`, `dob`). Keys are case-sensitive.
//! The set is backed by a `BTreeMap` so iteration always follows the
//! lexicographic key order - this is what makes the hash input canonical and
//! independent of the order in which a front-end inserted the fields.

use crate::constants::DOB_FIELD;
use crate::{GidError, GidResult};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from field name to field value for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeMap<String, String>);

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning the previous value if the key was present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a field, returning its value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Looks up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field values in canonical (lexicographic key) order.
    pub fn values_in_canonical_order(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Returns the required keys absent from this set, in sorted order.
    pub fn missing_from(&self, required: &BTreeSet<String>) -> Vec<String> {
        required
            .iter()
            .filter(|key| !self.0.contains_key(*key))
            .cloned()
            .collect()
    }

    /// Extracts the year of birth from the `dob` field.
    ///
    /// The date of birth must be formatted `MMDDYYYY`; the value is checked
    /// to be a real calendar date before the year is sliced off. A missing
    /// `dob` fails with [`GidError::IncompleteRequest`].
    pub fn birth_year(&self) -> GidResult<String> {
        let dob = self.get(DOB_FIELD).ok_or_else(|| GidError::IncompleteRequest {
            missing: vec![DOB_FIELD.to_string()],
        })?;

        let well_formed = dob.len() == 8 && dob.bytes().all(|b| b.is_ascii_digit());
        if !well_formed || NaiveDate::parse_from_str(dob, "%m%d%Y").is_err() {
            return Err(GidError::InvalidFieldValue {
                field: DOB_FIELD.to_string(),
                expected: "a calendar date formatted MMDDYYYY".to_string(),
            });
        }

        Ok(dob[4..].to_string())
    }
}

impl FromIterator<(String, String)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
