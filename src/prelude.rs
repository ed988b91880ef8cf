//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use scriptable_runtime::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, ShutdownHandle};

// Runtime context
pub use crate::core::{FrameClock, RuntimeContext};

// Variable system
pub use crate::core::variable::{Binding, SharedVariable, VariableRegistry, VariableValue};

// Behavior system
pub use crate::core::behavior::{Behavior, BehaviorManager};
