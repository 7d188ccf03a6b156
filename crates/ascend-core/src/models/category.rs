// ABOUTME: Dotted hierarchical category key shared by metric definitions and samples
// ABOUTME: Parses and compares paths such as `physical.strength` without owning the tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dotted category key, e.g. `physical.strength`
///
/// The category tree itself lives in the application shell; the engine only
/// needs to compare keys, e.g. to scope a history query to a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryPath(String);

impl CategoryPath {
    /// Parse a dotted path
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for an empty path or an empty segment.
    pub fn parse(path: &str) -> Result<Self, AppError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("Category path cannot be empty"));
        }
        if trimmed.split('.').any(str::is_empty) {
            return Err(AppError::invalid_input(format!(
                "Category path '{trimmed}' contains an empty segment"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The dotted string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments from root to leaf
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Top-level segment (the domain, e.g. `physical`)
    #[must_use]
    pub fn root(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Parent path, `None` at the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| Self(parent.to_owned()))
    }

    /// Whether `self` equals `other` or is one of its ancestors
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.0 == self.0
            || other
                .0
                .strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CategoryPath {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CategoryPath> for String {
    fn from(path: CategoryPath) -> Self {
        path.0
    }
}
