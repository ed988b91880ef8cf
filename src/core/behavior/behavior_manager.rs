//=========================================================================
// Behavior Manager
//=========================================================================
//
// Manages behavior registration and lifecycle dispatch.
//
// Behaviors are stored with a text label (used only for logging) and
// updated in registration order, matching the deterministic component
// ordering of host-engine update loops.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::RuntimeContext;
use super::Behavior;

//=== Behavior Manager ====================================================

/// Owns registered behaviors and dispatches their lifecycle hooks.
///
/// The runtime loop drives this automatically, but it can also be
/// driven manually by a host embedding the variable system in its own
/// per-frame callback:
///
/// ```
/// use scriptable_runtime::core::behavior::{Behavior, BehaviorManager};
/// use scriptable_runtime::core::RuntimeContext;
///
/// struct Spinner;
/// impl Behavior for Spinner {
///     fn update(&mut self, _context: &mut RuntimeContext) {}
/// }
///
/// let mut context = RuntimeContext::new();
/// let mut behaviors = BehaviorManager::new();
/// behaviors.add("spinner", Spinner);
///
/// behaviors.start(&mut context);
/// for _ in 0..3 {
///     context.clock.advance();
///     behaviors.update(&mut context);
/// }
/// behaviors.stop(&mut context);
/// ```
pub struct BehaviorManager {
    behaviors: Vec<(Box<str>, Box<dyn Behavior>)>,
    started: bool,
}

impl BehaviorManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no registered behaviors.
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
            started: false,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a behavior under a label.
    ///
    /// The label only appears in log output. Behaviors added after
    /// `start` still receive updates but never see `on_start`.
    pub fn add<B>(&mut self, label: &str, behavior: B)
    where
        B: Behavior + 'static,
    {
        if self.started {
            warn!(
                target: "runtime::behaviors",
                "Behavior {:?} added after start and will not receive on_start",
                label
            );
        } else {
            debug!(target: "runtime::behaviors", "Registered behavior {:?}", label);
        }

        self.behaviors.push((label.into(), Box::new(behavior)));
    }

    /// Returns the number of registered behaviors.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Returns true if no behaviors are registered.
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    //--- Lifecycle Dispatch -----------------------------------------------

    /// Calls `on_start` on every registered behavior, in order.
    ///
    /// Dispatches at most once; repeated calls are logged and ignored.
    pub fn start(&mut self, context: &mut RuntimeContext) {
        if self.started {
            warn!(target: "runtime::behaviors", "Behavior manager already started");
            return;
        }
        self.started = true;

        for (label, behavior) in &mut self.behaviors {
            debug!(target: "runtime::behaviors", "Starting behavior {:?}", label);
            behavior.on_start(context);
        }
    }

    /// Calls `update` on every registered behavior, in order.
    pub fn update(&mut self, context: &mut RuntimeContext) {
        for (_, behavior) in &mut self.behaviors {
            behavior.update(context);
        }
    }

    /// Calls `on_stop` on every registered behavior, in order.
    ///
    /// Ignored when the manager was never started. After stopping, the
    /// manager can be started again.
    pub fn stop(&mut self, context: &mut RuntimeContext) {
        if !self.started {
            return;
        }
        self.started = false;

        for (label, behavior) in &mut self.behaviors {
            debug!(target: "runtime::behaviors", "Stopping behavior {:?}", label);
            behavior.on_stop(context);
        }
    }
}

impl Default for BehaviorManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
