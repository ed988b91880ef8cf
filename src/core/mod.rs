//=========================================================================
// Runtime Orchestrator
//
// Central coordinator for the variable runtime on the logic thread.
//
// Responsibilities:
// - Own the runtime context (variables, clock) and behavior manager
// - Receive and process host events via MPSC channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Drive the behavior lifecycle (start → update per tick → stop)
//
// Notes:
// The orchestrator is constructed on the runtime thread itself, so
// behaviors and variable handles (Rc-based) never cross a thread
// boundary. Communication with the host occurs only through message
// passing.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, TryRecvError};
use log::info;

//=== Internal Modules ====================================================
use behavior::BehaviorManager;

pub mod behavior;
pub mod variable;

mod runtime_context;

pub use runtime_context::{FrameClock, RuntimeContext};

//=== HostEvent ===========================================================
//
// Events sent from the host (the thread that built the engine) to the
// runtime thread. Currently only a shutdown request crosses over.
//
#[derive(Debug, Clone)]
pub(crate) enum HostEvent {
    Shutdown,
}

//=== TickControl =========================================================
//
// Defines control flow for the runtime update loop.
// Each tick can signal either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== InitFn ==============================================================
//
// Deferred setup closure, executed on the runtime thread before the
// first tick. Runs there so it can build non-Send state (Rc handles).
//
pub(crate) type InitFn = Box<dyn FnOnce(&mut RuntimeContext, &mut BehaviorManager) + Send>;

//=== RuntimeOrchestrator =================================================
//
// Owns the context and behavior manager and ticks them at a fixed
// update frequency (TPS - ticks per second).
//
pub(crate) struct RuntimeOrchestrator {
    context: RuntimeContext,
    behaviors: BehaviorManager,
}

impl RuntimeOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes an empty runtime; variables and behaviors are wired
    // up by the init closure.
    //
    pub fn new() -> Self {
        Self {
            context: RuntimeContext::new(),
            behaviors: BehaviorManager::new(),
        }
    }

    //--- spawn_runtime_thread() ------------------------------------------
    //
    // Spawns the logic thread responsible for ticking behaviors at a
    // fixed update frequency.
    //
    // Each tick:
    //  1. Drains host events (shutdown or disconnect exits the loop)
    //  2. Advances the clock and updates behaviors
    //  3. Exits when the optional frame limit is reached
    //  4. Sleeps to maintain fixed pacing
    //
    pub fn spawn_runtime_thread(
        receiver: Receiver<HostEvent>,
        tps: f64,
        frame_limit: Option<u64>,
        init: Option<InitFn>,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut orchestrator = Self::new();

            if let Some(init) = init {
                init(&mut orchestrator.context, &mut orchestrator.behaviors);
            }

            info!(
                target: "runtime",
                "Runtime thread started ({} behaviors, {} variables)",
                orchestrator.behaviors.len(),
                orchestrator.context.variables.len()
            );

            orchestrator.behaviors.start(&mut orchestrator.context);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Drain host events ----------------------------
                if let TickControl::Exit = Self::drain_host_events(&receiver) {
                    info!(target: "runtime", "Runtime thread exiting.");
                    break;
                }

                //--- Step 2: Tick the behavior layer ----------------------
                orchestrator.tick();

                //--- Step 3: Honor the optional frame limit ---------------
                if let Some(limit) = frame_limit {
                    if orchestrator.context.clock.frame() >= limit {
                        info!(target: "runtime", "Frame limit of {} reached", limit);
                        break;
                    }
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            orchestrator.behaviors.stop(&mut orchestrator.context);
        })
    }

    //--- tick() ----------------------------------------------------------
    //
    // Advances the clock by one frame and updates every behavior.
    //
    fn tick(&mut self) {
        self.context.clock.advance();
        self.behaviors.update(&mut self.context);
    }

    //--- drain_host_events() ---------------------------------------------
    //
    // Processes pending host events without blocking. A disconnected
    // channel means the host dropped every handle, which also ends
    // the run.
    //
    fn drain_host_events(receiver: &Receiver<HostEvent>) -> TickControl {
        match receiver.try_recv() {
            Ok(HostEvent::Shutdown) => {
                info!(target: "runtime", "Shutdown requested by host");
                TickControl::Exit
            }
            Err(TryRecvError::Disconnected) => TickControl::Exit,
            Err(TryRecvError::Empty) => TickControl::Continue,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
