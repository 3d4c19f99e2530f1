//! Ordered sort specification and its string form.
//!
//! The string form is used to persist the last used sort of a view as an
//! opaque value: `field.direction` pairs joined by `---`, for example
//! `name.asc---created_at.desc`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between a field name and its direction.
pub const SORT_FIELD_DIRECTION_SEPARATOR: &str = ".";

/// Separator between successive field/direction pairs.
///
/// Must not appear in any field name.
pub const SORT_FIELDS_SEPARATOR: &str = "---";

/// Pair separator of the superseded string format.
pub const LEGACY_SORT_FIELDS_SEPARATOR: &str = "&";

/// Sort direction of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDirection {
    /// Strict normalization: only the exact tokens `asc` and `desc` are
    /// recognized, anything else becomes [`SortDirection::None`].
    pub fn normalize(direction: &str) -> Self {
        match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => SortDirection::None,
        }
    }

    /// Lenient normalization used when parsing stored strings: the token is
    /// trimmed and lower-cased before [`SortDirection::normalize`].
    pub fn parse_lenient(direction: &str) -> Self {
        Self::normalize(&direction.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
            SortDirection::None => "none",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordered list of sort fields; the first entry is the primary sort key.
///
/// Field names are unique. Adding an existing field overwrites its direction
/// in place, so insertion order is kept stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the current `field.dir---field.dir` format.
    ///
    /// Segments that do not split into exactly two parts are dropped.
    pub fn from_sort_string(sort: &str) -> Self {
        Self::parse_with_separator(sort, SORT_FIELDS_SEPARATOR)
    }

    /// Parse the superseded `field.dir&field.dir` format.
    pub fn from_legacy_string(sort: &str) -> Self {
        Self::parse_with_separator(sort, LEGACY_SORT_FIELDS_SEPARATOR)
    }

    fn parse_with_separator(sort: &str, separator: &str) -> Self {
        let mut spec = Self::new();

        for segment in sort.split(separator) {
            let parts: Vec<&str> = segment.split(SORT_FIELD_DIRECTION_SEPARATOR).collect();
            if let [field, direction] = parts.as_slice() {
                spec.insert(field.trim(), SortDirection::parse_lenient(direction));
            }
        }

        spec
    }

    /// Insert or overwrite `field`; the direction is normalized strictly.
    pub fn add(&mut self, field: &str, direction: &str) -> &mut Self {
        self.insert(field, SortDirection::normalize(direction));
        self
    }

    /// Insert or overwrite `field` with an already typed direction.
    pub fn insert(&mut self, field: &str, direction: SortDirection) -> &mut Self {
        match self.entries.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.direction = direction,
            None => self.entries.push(SortEntry {
                field: field.to_string(),
                direction,
            }),
        }
        self
    }

    /// Rename `old_field` to `new_field` in place and replace its direction.
    ///
    /// Unknown `old_field` leaves the specification unchanged. When
    /// `new_field` already exists elsewhere, that other entry is dropped so
    /// field names stay unique.
    pub fn update(&mut self, old_field: &str, new_field: &str, new_direction: &str) -> &mut Self {
        let Some(position) = self.position(old_field) else {
            return self;
        };

        if old_field != new_field {
            self.entries.retain(|entry| entry.field != new_field);
        }

        // the retain above may have shifted the renamed entry
        let position = self.position(old_field).unwrap_or(position);
        let entry = &mut self.entries[position];
        entry.field = new_field.to_string();
        entry.direction = SortDirection::normalize(new_direction);

        self
    }

    /// Remove `field` if present.
    pub fn remove(&mut self, field: &str) -> &mut Self {
        self.entries.retain(|entry| entry.field != field);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Direction of `field`, if it is part of the specification.
    pub fn direction(&self, field: &str) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.direction)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortEntry> {
        self.entries.iter()
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.field == field)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(SORT_FIELDS_SEPARATOR)?;
            }
            write!(
                f,
                "{}{}{}",
                entry.field, SORT_FIELD_DIRECTION_SEPARATOR, entry.direction
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortEntry;
    type IntoIter = std::slice::Iter<'a, SortEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> FromIterator<(&'a str, SortDirection)> for SortSpec {
    fn from_iter<I: IntoIterator<Item = (&'a str, SortDirection)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (field, direction) in iter {
            spec.insert(field, direction);
        }
        spec
    }
}
