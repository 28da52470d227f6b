use crate::error::RegistryError;
use enrol_domain::{Unit, UnitCode};
use fxhash::FxHashMap;
use std::sync::Arc;

/// The set of units currently offered, keyed by canonical code.
#[derive(Debug, Default, Clone)]
pub struct UnitCatalog {
    units: FxHashMap<UnitCode, Arc<Unit>>,
}

impl UnitCatalog {
    /// Whether `unit` is offered. This is an existence check on the code, not a seat count.
    #[must_use]
    pub fn is_unit_available(&self, unit: &Unit) -> bool {
        self.units.contains_key(unit.code())
    }

    #[must_use]
    pub fn contains(&self, code: &UnitCode) -> bool {
        self.units.contains_key(code)
    }

    #[must_use]
    pub fn get(&self, code: &UnitCode) -> Option<&Arc<Unit>> {
        self.units.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Unit>> + Clone + '_ {
        self.units.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub(crate) fn insert(&mut self, unit: Unit) -> Result<Arc<Unit>, RegistryError> {
        if unit.code().is_empty() {
            return Err(RegistryError::EmptyKey { field: "Unit code" });
        }
        if self.units.contains_key(unit.code()) {
            return Err(RegistryError::DuplicateUnit { code: unit.code().clone() });
        }

        let unit = Arc::new(unit);
        self.units.insert(unit.code().clone(), Arc::clone(&unit));
        Ok(unit)
    }

    pub(crate) fn remove(&mut self, code: &UnitCode) -> Option<Arc<Unit>> {
        self.units.remove(code)
    }
}
