//! The foreground-window sampling boundary.
//!
//! The engine only needs the current window title once per tick; any query
//! failure substitutes a fixed sentinel so a tick never fails on this path.

#[cfg(windows)]
use crate::libs::messages::Message;
#[cfg(windows)]
use crate::msg_debug;

/// Subject recorded when the foreground window cannot be determined.
pub const UNKNOWN_WINDOW: &str = "Unknown Window";

/// On-demand source of the currently focused window title.
pub trait WindowSampler: Send {
    /// Returns the foreground window title, or [`UNKNOWN_WINDOW`] when the
    /// query fails or no window has focus.
    fn active_window_title(&mut self) -> String;
}

/// Queries the operating system for the foreground window.
pub struct SystemWindowSampler;

impl WindowSampler for SystemWindowSampler {
    #[cfg(windows)]
    fn active_window_title(&mut self) -> String {
        use winapi::um::winuser::{GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW};

        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.is_null() {
                msg_debug!(Message::WindowQueryFailed("no foreground window".to_string()));
                return UNKNOWN_WINDOW.to_string();
            }

            let len = GetWindowTextLengthW(hwnd);
            if len <= 0 {
                return UNKNOWN_WINDOW.to_string();
            }

            let mut buf = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
            if copied <= 0 {
                msg_debug!(Message::WindowQueryFailed("GetWindowTextW returned 0".to_string()));
                return UNKNOWN_WINDOW.to_string();
            }

            String::from_utf16_lossy(&buf[..copied as usize])
        }
    }

    // No portable foreground-window query on other platforms; the sentinel
    // keeps the engine attributing time without failing the tick.
    #[cfg(not(windows))]
    fn active_window_title(&mut self) -> String {
        UNKNOWN_WINDOW.to_string()
    }
}
