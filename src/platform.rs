//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifiers that trigger the clear-form shortcut together with `r`
/// - macOS: SUPER (Cmd key), with CONTROL as a fallback
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const RESET_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const RESET_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Clear-form shortcut display for help text
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
