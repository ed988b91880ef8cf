//=========================================================================
// Variable Slot Trait
//=========================================================================
//
// Type-erased trait for registry slots that preserves access to the
// concrete `SharedVariable<T>` while allowing storage in a HashMap
// without compile-time type knowledge.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::{SharedVariable, VariableValue};

//=========================================================================

/// Type-erased trait for shared-variable storage.
///
/// Allows the registry to report the stored value type and downcast
/// back to the concrete handle on lookup.
pub(super) trait VariableSlot {
    /// Returns the name of the stored value type, for diagnostics.
    fn value_type_name(&self) -> &'static str;

    /// Downcasts to `&dyn Any` for type-specific operations.
    fn as_any(&self) -> &dyn Any;
}

//=========================================================================

/// Implementation of VariableSlot for any shared variable handle.
impl<T: VariableValue> VariableSlot for SharedVariable<T> {
    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
