use std::sync::Mutex;
use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

#[derive(Debug, Clone)]
pub struct RunStats {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed: Duration,
}

/// Per-phase resource snapshots for the running process. Disabled monitors
/// carry no sysinfo state at all and every call is a no-op.
pub struct RunMonitor {
    state: Option<Mutex<MonitorState>>,
    started: Instant,
}

struct MonitorState {
    system: System,
    pid: Pid,
    peak_memory_mb: u64,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let state = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => {
                    let mut system = System::new_all();
                    system.refresh_all();
                    Some(Mutex::new(MonitorState {
                        system,
                        pid,
                        peak_memory_mb: 0,
                    }))
                }
                Err(err) => {
                    tracing::warn!("Resource monitoring unavailable: {}", err);
                    None
                }
            }
        } else {
            None
        };

        Self {
            state,
            started: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }

    pub fn snapshot(&self) -> Option<RunStats> {
        let mut guard = self.state.as_ref()?.lock().ok()?;
        let MonitorState {
            system,
            pid,
            peak_memory_mb,
        } = &mut *guard;

        system.refresh_all();
        let process = system.process(*pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        if memory_mb > *peak_memory_mb {
            *peak_memory_mb = memory_mb;
        }

        Some(RunStats {
            cpu_usage: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: *peak_memory_mb,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.snapshot() {
            tracing::info!(
                "{} - cpu {:.1}%, memory {}MB (peak {}MB), elapsed {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_mb,
                stats.peak_memory_mb,
                stats.elapsed
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.snapshot() {
            tracing::info!(
                "Run finished - elapsed {:?}, peak memory {}MB",
                stats.elapsed,
                stats.peak_memory_mb
            );
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
