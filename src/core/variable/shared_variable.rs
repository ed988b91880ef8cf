//=========================================================================
// Shared Variable
//=========================================================================
//
// Named, reference-counted cell holding a single typed value.
//
// Handles are cheap clones of the same underlying cell, so any number
// of consumers can observe and mutate one value without owning it.
// Cells live on the runtime thread only and use interior mutability
// instead of locks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::VariableValue;

//=== VariableCell ========================================================

/// Backing storage for a shared variable: the asset name plus the value.
struct VariableCell<T> {
    name: Box<str>,
    value: RefCell<T>,
}

//=== SharedVariable ======================================================

/// Handle to a named shared value.
///
/// Cloning a `SharedVariable` duplicates the handle, not the value:
/// all clones read and write the same cell. The cell stays alive as
/// long as any handle does, so removing a variable from the registry
/// never invalidates handles that were looked up earlier.
///
/// # Example
///
/// ```
/// use scriptable_runtime::core::variable::SharedVariable;
///
/// let speed = SharedVariable::new("speed", 5.0_f32);
/// let alias = speed.clone();
///
/// alias.set(6.0);
/// assert_eq!(speed.get(), 6.0);
/// ```
pub struct SharedVariable<T> {
    cell: Rc<VariableCell<T>>,
}

impl<T: VariableValue> SharedVariable<T> {
    //--- Construction -----------------------------------------------------

    /// Creates a new shared cell holding `initial`.
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self {
            cell: Rc::new(VariableCell {
                name: name.into().into_boxed_str(),
                value: RefCell::new(initial),
            }),
        }
    }

    /// Returns the asset name this cell was created under.
    pub fn name(&self) -> &str {
        &self.cell.name
    }

    //--- Value Access -----------------------------------------------------

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    /// Overwrites the current value.
    pub fn set(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
    }

    /// Overwrites the current value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.cell.value.replace(value)
    }

    /// Mutates the value in place.
    ///
    /// Reentrant access to the same cell from inside `f` panics
    /// (RefCell borrow rules).
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.value.borrow_mut());
    }

    //--- Identity ---------------------------------------------------------

    /// Returns true if both handles point at the same underlying cell.
    pub fn shares_cell(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

//--- Trait Implementations -----------------------------------------------

impl<T> Clone for SharedVariable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedVariable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedVariable")
            .field("name", &self.cell.name)
            .field("value", &*self.cell.value.borrow())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
