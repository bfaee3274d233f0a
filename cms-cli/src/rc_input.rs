//! Simulated RC receiver
//!
//! Stands in for the control loop: writes stick positions into the shared
//! store on its own thread so the RC preview has something live to mirror.

use cms_core::menus::fields::RC_CHANNELS;
use cms_core::{ConfigStore, MemoryStore, SharedStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

const FRAME: Duration = Duration::from_millis(20);

pub struct RcInput {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RcInput {
    pub fn spawn(store: SharedStore<MemoryStore>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || run(store, flag));
        debug!("Started simulated RC input");
        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Simulated RC input thread panicked");
            }
        }
    }
}

impl Drop for RcInput {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(mut store: SharedStore<MemoryStore>, running: Arc<AtomicBool>) {
    let mut tick: u32 = 0;
    while running.load(Ordering::Relaxed) {
        for (channel, field) in RC_CHANNELS.iter().enumerate() {
            if let Err(err) = store.write(*field, stick(channel, tick)) {
                warn!(field = %field, error = %err, "RC input write failed");
                return;
            }
        }
        tick = tick.wrapping_add(1);
        thread::sleep(FRAME);
    }
}

/// Slow sweep per channel, phase-shifted, in 1000..=2000 µs
fn stick(channel: usize, tick: u32) -> i32 {
    let phase = tick as f32 / 50.0 + channel as f32 * 0.8;
    1500 + (phase.sin() * 500.0) as i32
}
