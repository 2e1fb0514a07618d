//! Peak resident-memory sampling for a run's statistics.
//!
//! The distilled spec allows substituting a process-wide peak for a
//! finer per-allocation tracker; this samples the current process's RSS via
//! `sysinfo` before and after the search loop (the two points cheap enough
//! to afford without instrumenting every allocation) and reports the larger
//! of the two, in megabytes.

use sysinfo::{Pid, ProcessesToUpdate, System};

/// Samples the current process's resident-set size and remembers the
/// largest value observed.
pub struct MemorySampler {
    system: System,
    pid: Pid,
    peak_bytes: u64,
}

impl MemorySampler {
    /// Starts a new sampler, taking an initial reading immediately.
    pub fn start() -> Self {
        let pid = sysinfo::get_current_pid().unwrap_or(Pid::from(0));
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let peak_bytes = system.process(pid).map_or(0, |p| p.memory());

        MemorySampler {
            system,
            pid,
            peak_bytes,
        }
    }

    /// Takes another reading, updating the peak if it's grown.
    pub fn sample(&mut self) {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        if let Some(process) = self.system.process(self.pid) {
            self.peak_bytes = self.peak_bytes.max(process.memory());
        }
    }

    /// The largest RSS observed so far, in megabytes.
    pub fn peak_mb(&self) -> f64 {
        self.peak_bytes as f64 / (1024.0 * 1024.0)
    }
}
