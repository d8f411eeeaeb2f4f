// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shift catalog: every shift definition a workbook knows about.

use crate::quantity::Hours;
use crate::types::{ShiftCode, ShiftDefinition, ShiftKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shift definitions keyed by code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ShiftDefinition>", into = "Vec<ShiftDefinition>")]
pub struct ShiftCatalog {
    shifts: BTreeMap<ShiftCode, ShiftDefinition>,
}

impl ShiftCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shifts: BTreeMap::new(),
        }
    }

    /// Creates the catalog a new workbook starts with.
    ///
    /// Three eight-hour working shifts, a rest day, and a zero-hour on-call
    /// shift whose time is recorded as premium hours.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog: Self = Self::new();
        for (code, label, color, hours, kind) in [
            ("morning", "Morning", "#22c55e", 8, ShiftKind::Work),
            ("afternoon", "Afternoon", "#60a5fa", 8, ShiftKind::Work),
            ("night", "Night", "#a78bfa", 8, ShiftKind::Work),
            ("off", "Off", "#94a3b8", 0, ShiftKind::Off),
            ("oncall", "On call", "#f59e0b", 0, ShiftKind::OnCall),
        ] {
            catalog.upsert(ShiftDefinition::new(
                ShiftCode::new(code),
                label,
                color,
                Hours::whole(hours),
                kind,
            ));
        }
        catalog
    }

    /// Looks up a shift by code. The empty code never matches.
    #[must_use]
    pub fn get(&self, code: &ShiftCode) -> Option<&ShiftDefinition> {
        if code.is_empty() {
            return None;
        }
        self.shifts.get(code)
    }

    /// Returns true if the catalog defines `code`.
    #[must_use]
    pub fn contains(&self, code: &ShiftCode) -> bool {
        self.get(code).is_some()
    }

    /// Inserts or replaces a definition, returning the previous one.
    pub fn upsert(&mut self, definition: ShiftDefinition) -> Option<ShiftDefinition> {
        self.shifts.insert(definition.code.clone(), definition)
    }

    /// Removes a definition. References to it elsewhere are left dangling.
    pub fn remove(&mut self, code: &ShiftCode) -> Option<ShiftDefinition> {
        self.shifts.remove(code)
    }

    /// Iterates definitions in code order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftDefinition> {
        self.shifts.values()
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the catalog has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl FromIterator<ShiftDefinition> for ShiftCatalog {
    fn from_iter<T: IntoIterator<Item = ShiftDefinition>>(iter: T) -> Self {
        let mut catalog: Self = Self::new();
        for definition in iter {
            catalog.upsert(definition);
        }
        catalog
    }
}

impl From<Vec<ShiftDefinition>> for ShiftCatalog {
    fn from(definitions: Vec<ShiftDefinition>) -> Self {
        definitions.into_iter().collect()
    }
}

impl From<ShiftCatalog> for Vec<ShiftDefinition> {
    fn from(catalog: ShiftCatalog) -> Self {
        catalog.shifts.into_values().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog: ShiftCatalog = ShiftCatalog::standard();
        assert_eq!(catalog.len(), 5);
        let morning: &ShiftDefinition = catalog.get(&ShiftCode::new("morning")).unwrap();
        assert_eq!(morning.base_hours, Hours::whole(8));
        assert_eq!(morning.kind, ShiftKind::Work);
        let off: &ShiftDefinition = catalog.get(&ShiftCode::new("off")).unwrap();
        assert!(off.base_hours.is_zero());
        assert_eq!(off.kind, ShiftKind::Off);
    }

    #[test]
    fn test_empty_code_never_matches() {
        let mut catalog: ShiftCatalog = ShiftCatalog::new();
        catalog.upsert(ShiftDefinition::new(
            ShiftCode::new(""),
            "Blank",
            "#000",
            Hours::whole(4),
            ShiftKind::Work,
        ));
        assert!(catalog.get(&ShiftCode::new("")).is_none());
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut catalog: ShiftCatalog = ShiftCatalog::standard();
        let previous: Option<ShiftDefinition> = catalog.upsert(ShiftDefinition::new(
            ShiftCode::new("morning"),
            "Early",
            "#111111",
            Hours::from_hundredths(750),
            ShiftKind::Work,
        ));
        assert_eq!(previous.unwrap().label, "Morning");
        assert_eq!(
            catalog.get(&ShiftCode::new("morning")).unwrap().base_hours,
            Hours::from_hundredths(750)
        );
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_remove() {
        let mut catalog: ShiftCatalog = ShiftCatalog::standard();
        assert!(catalog.remove(&ShiftCode::new("night")).is_some());
        assert!(!catalog.contains(&ShiftCode::new("night")));
        assert!(catalog.remove(&ShiftCode::new("night")).is_none());
    }
}
