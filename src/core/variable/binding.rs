//=========================================================================
// Binding
//=========================================================================
//
// Null-safe indirection over a possibly-absent shared variable.
//
// Pattern: construct with an optional handle and a fallback value.
//   Bound   → reads/writes go through the shared cell
//   Unbound → reads/writes target the local value
//
// Absence of the shared side is a normal state, not a failure. Code
// built on bindings has no hard dependency on assets that may or may
// not be wired up by the host.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SharedVariable, VariableValue};

//=== Binding =============================================================

/// Transparent fallback between a shared variable and a local value.
///
/// At any time a binding is exactly one of:
/// - `Bound`: reads and writes target the shared cell
/// - `Unbound`: reads and writes target the owned local value
///
/// The accessor pair is uniform across both states, so consumers never
/// branch on whether the shared side exists.
///
/// # Example
///
/// ```
/// use scriptable_runtime::core::variable::{Binding, SharedVariable};
///
/// // Wired: the shared cell wins.
/// let speed = SharedVariable::new("speed", 5.0_f32);
/// let mut binding = Binding::new(Some(speed.clone()), 10.0);
/// assert_eq!(binding.get(), 5.0);
/// binding.set(6.0);
/// assert_eq!(speed.get(), 6.0);
///
/// // Not wired: the local value takes over.
/// let mut detached = Binding::new(None, 10.0_f32);
/// detached.set(11.0);
/// assert_eq!(detached.get(), 11.0);
/// ```
pub enum Binding<T> {
    /// Reads and writes go through the shared cell.
    Bound(SharedVariable<T>),

    /// Reads and writes target the owned local value.
    Unbound(T),
}

impl<T: VariableValue> Binding<T> {
    //--- Construction -----------------------------------------------------

    /// Creates a binding from a possibly-absent handle and a fallback.
    ///
    /// The fallback becomes the local value when `reference` is `None`
    /// and is discarded otherwise.
    pub fn new(reference: Option<SharedVariable<T>>, fallback: T) -> Self {
        match reference {
            Some(variable) => Self::Bound(variable),
            None => Self::Unbound(fallback),
        }
    }

    /// Creates a binding wired to a shared cell.
    pub fn bound(variable: SharedVariable<T>) -> Self {
        Self::Bound(variable)
    }

    /// Creates a detached binding owning `value` locally.
    pub fn unbound(value: T) -> Self {
        Self::Unbound(value)
    }

    //--- Value Access -----------------------------------------------------

    /// Returns the shared value if bound, the local value otherwise.
    pub fn get(&self) -> T {
        match self {
            Self::Bound(variable) => variable.get(),
            Self::Unbound(value) => value.clone(),
        }
    }

    /// Writes through to the shared cell if bound, overwrites the local
    /// value otherwise.
    pub fn set(&mut self, value: T) {
        match self {
            Self::Bound(variable) => variable.set(value),
            Self::Unbound(local) => *local = value,
        }
    }

    //--- Rebinding --------------------------------------------------------

    /// Returns true if reads and writes currently target a shared cell.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Attaches the binding to a shared cell, discarding any local value.
    pub fn bind(&mut self, variable: SharedVariable<T>) {
        *self = Self::Bound(variable);
    }

    /// Detaches the binding from its shared cell.
    ///
    /// The local value is seeded from the last shared value, so reads
    /// stay continuous across the disconnect. No-op when already unbound.
    pub fn unbind(&mut self) {
        if let Self::Bound(variable) = self {
            let value = variable.get();
            *self = Self::Unbound(value);
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl<T: VariableValue + Default> Default for Binding<T> {
    fn default() -> Self {
        Self::Unbound(T::default())
    }
}

impl<T: VariableValue> From<T> for Binding<T> {
    fn from(value: T) -> Self {
        Self::Unbound(value)
    }
}

impl<T: VariableValue> From<SharedVariable<T>> for Binding<T> {
    fn from(variable: SharedVariable<T>) -> Self {
        Self::Bound(variable)
    }
}

impl<T: VariableValue + std::fmt::Debug> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound(variable) => f.debug_tuple("Bound").field(variable).finish(),
            Self::Unbound(value) => f.debug_tuple("Unbound").field(value).finish(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Unbound Behavior -------------------------------------------------

    #[test]
    fn unbound_get_returns_local_value() {
        let binding = Binding::new(None, 10.0_f64);
        assert_eq!(binding.get(), 10.0);
    }

    #[test]
    fn unbound_set_updates_local_value() {
        let mut binding = Binding::new(None, 10.0_f64);
        binding.set(11.0);
        assert_eq!(binding.get(), 11.0);
    }

    #[test]
    fn unbound_repeated_get_is_stable() {
        let binding = Binding::new(None, 7_i32);
        assert_eq!(binding.get(), 7);
        assert_eq!(binding.get(), 7);
        assert_eq!(binding.get(), 7);
    }

    //--- Bound Behavior ---------------------------------------------------

    #[test]
    fn bound_get_returns_shared_value() {
        let variable = SharedVariable::new("speed", 5.0_f64);
        let binding = Binding::new(Some(variable), 10.0);
        assert_eq!(binding.get(), 5.0);
    }

    #[test]
    fn bound_set_writes_through_to_shared_cell() {
        let variable = SharedVariable::new("speed", 5.0_f64);
        let mut binding = Binding::new(Some(variable.clone()), 10.0);

        binding.set(6.0);

        assert_eq!(binding.get(), 6.0);
        assert_eq!(variable.get(), 6.0, "Write must land in the shared cell");
    }

    #[test]
    fn bound_repeated_get_is_stable() {
        let variable = SharedVariable::new("speed", 5.0_f64);
        let binding = Binding::bound(variable);
        assert_eq!(binding.get(), 5.0);
        assert_eq!(binding.get(), 5.0);
    }

    #[test]
    fn bound_set_does_not_touch_other_bindings() {
        let variable = SharedVariable::new("speed", 5.0_f64);
        let mut bound = Binding::new(Some(variable), 10.0);
        let detached = Binding::new(None, 10.0_f64);

        bound.set(6.0);

        assert_eq!(detached.get(), 10.0, "Detached local values stay untouched");
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn new_with_none_is_unbound() {
        let binding = Binding::new(None, 1_i32);
        assert!(!binding.is_bound());
    }

    #[test]
    fn new_with_some_is_bound() {
        let variable = SharedVariable::new("flag", true);
        let binding = Binding::new(Some(variable), false);
        assert!(binding.is_bound());
    }

    #[test]
    fn default_is_unbound_default_value() {
        let binding: Binding<i32> = Binding::default();
        assert!(!binding.is_bound());
        assert_eq!(binding.get(), 0);
    }

    #[test]
    fn from_value_is_unbound() {
        let binding: Binding<i32> = 3.into();
        assert!(!binding.is_bound());
        assert_eq!(binding.get(), 3);
    }

    #[test]
    fn from_variable_is_bound() {
        let variable = SharedVariable::new("count", 3_i32);
        let binding: Binding<i32> = variable.into();
        assert!(binding.is_bound());
        assert_eq!(binding.get(), 3);
    }

    //--- Rebinding --------------------------------------------------------

    #[test]
    fn bind_switches_reads_to_shared_cell() {
        let mut binding = Binding::unbound(10.0_f64);
        let variable = SharedVariable::new("speed", 5.0_f64);

        binding.bind(variable);

        assert!(binding.is_bound());
        assert_eq!(binding.get(), 5.0);
    }

    #[test]
    fn unbind_seeds_local_from_last_shared_value() {
        let variable = SharedVariable::new("speed", 5.0_f64);
        let mut binding = Binding::new(Some(variable.clone()), 10.0);
        binding.set(6.0);

        binding.unbind();

        assert!(!binding.is_bound());
        assert_eq!(binding.get(), 6.0, "Reads stay continuous across disconnect");

        // Writes no longer reach the shared cell.
        binding.set(7.0);
        assert_eq!(variable.get(), 6.0);
    }

    #[test]
    fn unbind_when_already_unbound_is_noop() {
        let mut binding = Binding::unbound(10.0_f64);
        binding.unbind();
        assert_eq!(binding.get(), 10.0);
    }
}
