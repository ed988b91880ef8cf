//=========================================================================
// Variable System
//=========================================================================
//
// Shared scriptable variables and null-safe bindings.
//
// Architecture:
//   VariableRegistry
//     └─ slots: HashMap<String, Box<dyn VariableSlot>>
//          └─ SharedVariable<T> (Rc handle to a named cell)
//
// Flow:
//   register() → lookup() → Binding::new(Option<handle>, fallback)
//     → Binding::get()/set() redirect to whichever side is active
//
//=========================================================================

//=== Module Declarations =================================================

mod binding;
mod registry;
mod shared_variable;
mod slot;

//=== Public API ==========================================================

pub use binding::Binding;
pub use registry::VariableRegistry;
pub use shared_variable::SharedVariable;

//=== Value Trait =========================================================

/// Marker trait for types that can live in a shared variable.
///
/// Automatically implemented for all types that are Clone + 'static.
pub trait VariableValue: Clone + 'static {}

// Blanket implementation
impl<T: Clone + 'static> VariableValue for T {}

//=== Common Aliases ======================================================
//
// Shorthands for the variable types most setups wire up.
//
pub type FloatVariable = SharedVariable<f32>;
pub type IntVariable = SharedVariable<i32>;
pub type BoolVariable = SharedVariable<bool>;
pub type StringVariable = SharedVariable<String>;
