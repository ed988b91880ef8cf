//=========================================================================
// Variable Registry
//=========================================================================
//
// Name-indexed store of shared variables, standing in for the host
// asset system.
//
// Architecture:
//   register<T>(name, initial) → HashMap<String, Box<dyn VariableSlot>>
//                                       ↓
//   Consumers ← lookup<T>(name) → Option<SharedVariable<T>>
//
// Absence is a normal outcome: a lookup that finds nothing (or finds
// the name under a different type) returns None, and consumers fall
// back to their local values via `Binding`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::slot::VariableSlot;
use super::{SharedVariable, VariableValue};

//=== VariableRegistry ====================================================

/// Name-indexed, type-erased store of shared variables.
///
/// The registry is the wiring surface of the runtime: setup code
/// registers named cells, behaviors look them up and fall back to
/// local values when nothing is wired.
///
/// # Example
///
/// ```
/// use scriptable_runtime::core::variable::VariableRegistry;
///
/// let mut registry = VariableRegistry::new();
/// registry.register("speed", 5.0_f32);
///
/// let speed = registry.lookup::<f32>("speed").unwrap();
/// assert_eq!(speed.get(), 5.0);
/// assert!(registry.lookup::<f32>("missing").is_none());
/// ```
pub struct VariableRegistry {
    slots: HashMap<String, Box<dyn VariableSlot>>,
}

impl VariableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Creates a new shared cell under `name` and returns a handle to it.
    ///
    /// Re-registering a name replaces the stored cell; handles obtained
    /// from earlier lookups keep pointing at the old cell.
    pub fn register<T: VariableValue>(
        &mut self,
        name: impl Into<String>,
        initial: T,
    ) -> SharedVariable<T> {
        let variable = SharedVariable::new(name.into(), initial);
        self.insert(variable.clone());
        variable
    }

    /// Wires an existing shared cell into the registry under its name.
    pub fn insert<T: VariableValue>(&mut self, variable: SharedVariable<T>) {
        let name = variable.name().to_owned();
        debug!(
            target: "runtime::variables",
            "Registering variable {:?} ({})",
            name,
            std::any::type_name::<T>()
        );

        if self.slots.insert(name.clone(), Box::new(variable)).is_some() {
            warn!(
                target: "runtime::variables",
                "Variable {:?} was already registered and has been replaced",
                name
            );
        }
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns a handle to the variable registered under `name`, if any.
    ///
    /// A name registered under a different value type behaves as absent:
    /// the mismatch is logged at `warn` and `None` is returned, leaving
    /// the consumer on its local fallback.
    pub fn lookup<T: VariableValue>(&self, name: &str) -> Option<SharedVariable<T>> {
        let slot = self.slots.get(name)?;

        match slot.as_any().downcast_ref::<SharedVariable<T>>() {
            Some(variable) => Some(variable.clone()),
            None => {
                warn!(
                    target: "runtime::variables",
                    "Variable {:?} holds a {} but was requested as {}",
                    name,
                    slot.value_type_name(),
                    std::any::type_name::<T>()
                );
                None
            }
        }
    }

    /// Returns true if a variable is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    //--- Removal ----------------------------------------------------------

    /// Removes the variable registered under `name`.
    ///
    /// Returns true if something was removed. Handles obtained from
    /// earlier lookups stay valid; only the registry entry goes away.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.slots.remove(name).is_some() {
            debug!(target: "runtime::variables", "Removed variable {:?}", name);
            true
        } else {
            debug!(
                target: "runtime::variables",
                "Variable {:?} not registered, skipping removal",
                name
            );
            false
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns the number of registered variables.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no variables are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
