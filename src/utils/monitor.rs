#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// 量測抽籤各階段的耗時與記憶體用量,供 --monitor 旗標使用。
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: System,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory_mb: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        Self {
            system,
            pid: sysinfo::get_current_pid().ok(),
            start_time: Instant::now(),
            peak_memory_mb: 0,
            enabled,
        }
    }

    pub fn log_stats(&mut self, phase: &str) {
        if !self.enabled {
            return;
        }
        let Some(pid) = self.pid else {
            return;
        };

        self.system.refresh_all();
        if let Some(process) = self.system.process(pid) {
            let memory_mb = process.memory() / 1024 / 1024;
            if memory_mb > self.peak_memory_mb {
                self.peak_memory_mb = memory_mb;
            }

            tracing::info!(
                "📊 {} - Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                memory_mb,
                self.peak_memory_mb,
                self.start_time.elapsed()
            );
        }
    }

    pub fn log_final_stats(&mut self) {
        if !self.enabled {
            return;
        }
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
            self.start_time.elapsed(),
            self.peak_memory_mb
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

// 為非 CLI 環境提供空實現
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&mut self, _phase: &str) {}

    pub fn log_final_stats(&mut self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
