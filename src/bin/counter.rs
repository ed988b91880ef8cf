//=========================================================================
// Counter Demo
//
// Minimal driver for the scriptable-variable runtime: one behavior
// binds to the shared "spin_rate" variable at startup (falling back to
// a local default when it is not wired) and increments it on a fixed
// frame cadence, logging the value.
//
// Run with `--detached` to skip registering the shared variable and
// watch the local fallback increment instead.
//
//=========================================================================

use log::info;

use scriptable_runtime::prelude::*;

//=== SpinCounter =========================================================

const DEFAULT_SPIN_RATE: f32 = 10.0;

/// Increments its bound value every `period` frames.
struct SpinCounter {
    rate: Binding<f32>,
    period: u64,
}

impl SpinCounter {
    fn new(period: u64) -> Self {
        Self {
            rate: Binding::unbound(DEFAULT_SPIN_RATE),
            period,
        }
    }
}

impl Behavior for SpinCounter {
    fn on_start(&mut self, context: &mut RuntimeContext) {
        self.rate = Binding::new(
            context.variables.lookup::<f32>("spin_rate"),
            DEFAULT_SPIN_RATE,
        );

        info!(
            "spin_rate = {} ({})",
            self.rate.get(),
            if self.rate.is_bound() { "shared" } else { "local" }
        );
    }

    fn update(&mut self, context: &mut RuntimeContext) {
        if context.clock.every(self.period) {
            self.rate.set(self.rate.get() + 1.0);
            info!("spin_rate = {}", self.rate.get());
        }
    }

    fn on_stop(&mut self, _context: &mut RuntimeContext) {
        info!("final spin_rate = {}", self.rate.get());
    }
}

//=== Entry Point =========================================================

fn main() {
    env_logger::init();

    let detached = std::env::args().any(|arg| arg == "--detached");

    EngineBuilder::new()
        .with_tps(60.0)
        .with_frame_limit(600)
        .build()
        .init(move |context, behaviors| {
            if !detached {
                context.variables.register("spin_rate", 5.0_f32);
            }
            behaviors.add("spin_counter", SpinCounter::new(100));
        })
        .run();
}
