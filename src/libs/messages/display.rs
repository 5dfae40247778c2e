//! Display implementation for actilog application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the console or routed through tracing. All user-facing wording lives
//! here so the rest of the application never embeds literal strings.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Configuration
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::ConfigModuleStorage => "Storage configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIdleThreshold => "Inactivity threshold in seconds before idle".to_string(),
            Message::PromptPollInterval => "Poll interval in milliseconds".to_string(),
            Message::PromptBackupInterval => "Backup interval in minutes".to_string(),
            Message::PromptActivityDir => "Directory for daily activity logs".to_string(),
            Message::PromptBackupDir => "Directory for activity log backups".to_string(),

            // Monitor
            Message::MonitorStarted {
                idle_threshold,
                poll_interval,
                backup_interval,
            } => format!(
                "Monitor started (idle threshold: {}s, poll interval: {}ms, backup interval: {}min)",
                idle_threshold, poll_interval, backup_interval
            ),
            Message::MonitorExitedNormally => "Monitor exited normally".to_string(),
            Message::MonitorShuttingDown => "Shutting down monitor...".to_string(),
            Message::MonitorError(e) => format!("Monitor error: {}", e),
            Message::MonitorTaskPanicked(e) => format!("Monitor task panicked: {}", e),
            Message::SegmentRecorded(kind, subject) => format!("Recorded {} segment: {}", kind, subject),
            Message::SegmentPersistFailed(e) => format!("Failed to persist segment, it will be missing from the log: {}", e),
            Message::StoreInitFailed(e) => format!("Failed to initialize daily activity store, will retry on next write: {}", e),

            // Activity listener
            Message::ActivityListenerFailed(e) => format!("Failed to listen for input events: {}. Retrying in 1 second...", e),
            Message::ActivityChannelClosed => "Activity event channel closed".to_string(),
            Message::WindowQueryFailed(e) => format!("Error getting active window: {}", e),

            // Store
            Message::StoreLocked {
                path,
                attempt,
                max_attempts,
            } => format!(
                "Unable to save {}. It might be open. Retrying ({}/{})...",
                path, attempt, max_attempts
            ),
            Message::StoreSaveExhausted(path) => format!("Failed to save {} after repeated attempts", path),

            // Backup
            Message::BackupCreated(path) => format!("Backup created at {}", path),
            Message::BackupFailed(e) => format!("Failed to create backup: {}", e),

            // Watcher
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error code: {})", code),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),

            // Report
            Message::ReportHeader(date) => format!("Activity for {}", date),
            Message::NoSegmentsForDate(date) => format!("No activity recorded for {}", date),
            Message::ReportTotals(working, idle) => format!("Working: {} | Idle: {}", working, idle),

            // Export
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::InvalidDateFormat(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
        };
        write!(f, "{}", text)
    }
}
