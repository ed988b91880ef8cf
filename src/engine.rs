//=========================================================================
// Runtime Engine
//
// Main entry point and coordinator for the variable runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime Thread]
//         │                          │
//         ├─ with_tps()              ├─ init() defers setup to the
//         ├─ with_channel_capacity() │   runtime thread
//         └─ with_frame_limit()      └─ blocks until the runtime exits
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::behavior::BehaviorManager;
use crate::core::{HostEvent, InitFn, RuntimeContext, RuntimeOrchestrator};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Provides a fluent API for setting runtime parameters before
/// construction.
///
/// # Default Values
///
/// - **TPS**: 60.0 (behavior updates per second)
/// - **Channel capacity**: 128 host events
/// - **Frame limit**: none (run until shutdown)
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use scriptable_runtime::EngineBuilder;
///
/// EngineBuilder::new().build().run();
/// ```
///
/// Bounded headless run:
/// ```no_run
/// # use scriptable_runtime::EngineBuilder;
/// EngineBuilder::new()
///     .with_tps(120.0)           // High tick rate
///     .with_frame_limit(600)     // Stop after 600 ticks
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    frame_limit: Option<u64>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            frame_limit: None,
        }
    }

    /// Sets the target ticks per second for the runtime thread.
    ///
    /// The runtime thread maintains this update rate using a fixed
    /// timestep loop.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for host → runtime communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Stops the runtime after `limit` ticks.
    ///
    /// Without a frame limit the runtime runs until a
    /// [`ShutdownHandle`] fires or the host drops the engine's channel.
    ///
    /// # Panics
    ///
    /// Panics if `limit == 0`.
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        assert!(limit > 0, "Frame limit must be positive");
        self.frame_limit = Some(limit);
        self
    }

    /// Builds the engine instance.
    ///
    /// Consumes the builder and produces a configured [`Engine`] ready
    /// for initialization or execution.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        Engine {
            tps: self.tps,
            frame_limit: self.frame_limit,
            init_fn: None,
            sender,
            receiver,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Scriptable-variable runtime.
///
/// The engine spawns a logic thread that ticks registered behaviors at
/// a fixed rate, giving each one access to the shared variable registry
/// through the runtime context. Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Host Thread)
///   └─► RuntimeOrchestrator (Runtime Thread @ TPS)
///         ├─► VariableRegistry (shared cells)
///         └─► BehaviorManager (on_start / update / on_stop)
///
/// Communication: MPSC Channel (HostEvent)
/// ```
///
/// # Examples
///
/// ```no_run
/// use scriptable_runtime::EngineBuilder;
/// use scriptable_runtime::core::behavior::Behavior;
/// use scriptable_runtime::core::RuntimeContext;
///
/// struct Spinner;
/// impl Behavior for Spinner {
///     fn update(&mut self, _context: &mut RuntimeContext) {}
/// }
///
/// EngineBuilder::new()
///     .with_frame_limit(600)
///     .build()
///     .init(|context, behaviors| {
///         context.variables.register("spin_rate", 5.0_f32);
///         behaviors.add("spinner", Spinner);
///     })
///     .run();
/// ```
pub struct Engine {
    tps: f64,
    frame_limit: Option<u64>,
    init_fn: Option<InitFn>,
    sender: Sender<HostEvent>,
    receiver: Receiver<HostEvent>,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Registers the setup closure for the runtime.
    ///
    /// The closure runs on the runtime thread before the first tick,
    /// which is why it must be `Send` while the state it builds
    /// (variable handles, bindings) does not have to be. Use it to
    /// register shared variables and behaviors.
    ///
    /// Calling `init` again replaces the previous closure.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut RuntimeContext, &mut BehaviorManager) + Send + 'static,
    {
        if self.init_fn.is_some() {
            warn!("Engine init closure replaced");
        }
        self.init_fn = Some(Box::new(init_fn));
        self
    }

    //--- Host Surface -----------------------------------------------------

    /// Returns a handle that can stop the runtime from any thread.
    ///
    /// Obtain handles before calling [`Engine::run`]; `run` consumes
    /// the engine.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            sender: self.sender.clone(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until it exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Spawns the runtime thread (setup closure runs there first)
    /// 2. Behaviors receive `on_start`, then `update` at the configured TPS
    /// 3. The thread exits on shutdown, channel disconnect, or frame limit
    /// 4. Behaviors receive `on_stop`, the thread is joined
    ///
    /// Without a frame limit, keep a [`ShutdownHandle`] around or this
    /// call never returns.
    ///
    /// # Thread Panic Handling
    ///
    /// If the runtime thread panics, the error is logged and `run`
    /// returns normally.
    pub fn run(self) {
        info!("Starting runtime (TPS: {})", self.tps);

        let handle = RuntimeOrchestrator::spawn_runtime_thread(
            self.receiver,
            self.tps,
            self.frame_limit,
            self.init_fn,
        );
        info!("Runtime thread spawned");

        match handle.join() {
            Ok(()) => {
                info!("Runtime thread terminated cleanly");
            }
            Err(e) => {
                error!("Runtime thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=== ShutdownHandle ======================================================

/// Cloneable handle for stopping a running engine from any thread.
///
/// This is the host's only control surface once the runtime is up,
/// mirroring a window-close request in a windowed host.
#[derive(Clone)]
pub struct ShutdownHandle {
    sender: Sender<HostEvent>,
}

impl ShutdownHandle {
    /// Requests that the runtime stop at the next tick boundary.
    ///
    /// A no-op when the runtime has already exited.
    pub fn shutdown(&self) {
        if self.sender.try_send(HostEvent::Shutdown).is_err() {
            debug!("Shutdown requested but runtime already stopped");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::behavior::Behavior;
    use std::time::Duration;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_can_be_created() {
        let _builder = EngineBuilder::new();
    }

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.frame_limit, None);
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Frame limit must be positive")]
    fn builder_with_frame_limit_panics_on_zero() {
        EngineBuilder::new().with_frame_limit(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_frame_limit(10)
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.frame_limit, Some(10));
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    // Behavior reporting every observed frame back to the test thread.
    struct TickProbe {
        frames: crossbeam_channel::Sender<u64>,
    }

    impl Behavior for TickProbe {
        fn update(&mut self, context: &mut RuntimeContext) {
            let _ = self.frames.send(context.clock.frame());
        }
    }

    #[test]
    fn frame_limited_run_performs_exact_tick_count() {
        let (tx, rx) = crossbeam_channel::unbounded();

        EngineBuilder::new()
            .with_tps(1000.0)
            .with_frame_limit(5)
            .build()
            .init(move |_context, behaviors| {
                behaviors.add("probe", TickProbe { frames: tx });
            })
            .run();

        let frames: Vec<u64> = rx.try_iter().collect();
        assert_eq!(frames, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn init_closure_wires_variables_for_behaviors() {
        let (tx, rx) = crossbeam_channel::unbounded();

        struct SpeedProbe {
            values: crossbeam_channel::Sender<f32>,
        }

        impl Behavior for SpeedProbe {
            fn on_start(&mut self, context: &mut RuntimeContext) {
                let binding = crate::core::variable::Binding::new(
                    context.variables.lookup::<f32>("speed"),
                    0.0,
                );
                let _ = self.values.send(binding.get());
            }

            fn update(&mut self, _context: &mut RuntimeContext) {}
        }

        EngineBuilder::new()
            .with_tps(1000.0)
            .with_frame_limit(1)
            .build()
            .init(move |context, behaviors| {
                context.variables.register("speed", 5.0_f32);
                behaviors.add("probe", SpeedProbe { values: tx });
            })
            .run();

        assert_eq!(rx.try_iter().collect::<Vec<f32>>(), vec![5.0]);
    }

    #[test]
    fn shutdown_handle_terminates_unlimited_run() {
        let engine = EngineBuilder::new().with_tps(1000.0).build();
        let handle = engine.shutdown_handle();

        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            handle.shutdown();
        });

        // Blocks until the shutdown event lands.
        engine.run();

        stopper.join().unwrap();
    }

    #[test]
    fn shutdown_after_runtime_exit_is_noop() {
        let engine = EngineBuilder::new()
            .with_tps(1000.0)
            .with_frame_limit(1)
            .build();
        let handle = engine.shutdown_handle();

        engine.run();

        // Runtime is gone; this must not panic or block.
        handle.shutdown();
        handle.shutdown();
    }
}
