#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    ConfigModuleStorage,
    PromptSelectModules,
    PromptIdleThreshold,
    PromptPollInterval,
    PromptBackupInterval,
    PromptActivityDir,
    PromptBackupDir,

    // === MONITOR MESSAGES ===
    MonitorStarted {
        idle_threshold: u64,
        poll_interval: u64,
        backup_interval: u64,
    },
    MonitorExitedNormally,
    MonitorShuttingDown,
    MonitorError(String),
    MonitorTaskPanicked(String),
    SegmentRecorded(String, String), // activity type, subject
    SegmentPersistFailed(String),
    StoreInitFailed(String),

    // === ACTIVITY LISTENER MESSAGES ===
    ActivityListenerFailed(String),
    ActivityChannelClosed,
    WindowQueryFailed(String),

    // === STORE MESSAGES ===
    StoreLocked {
        path: String,
        attempt: u32,
        max_attempts: u32,
    },
    StoreSaveExhausted(String),

    // === BACKUP MESSAGES ===
    BackupCreated(String),
    BackupFailed(String),

    // === WATCHER MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    FailedToOpenProcess(u32),
    DaemonModeNotSupported,

    // === REPORT MESSAGES ===
    ReportHeader(String),          // date
    NoSegmentsForDate(String),     // date
    ReportTotals(String, String),  // working total, idle total

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    InvalidDateFormat(String),
}
