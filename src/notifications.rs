/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session completes
pub fn notify_session_complete(message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "🌳 {}" with title "FocusUp - Session Complete""#,
            message.replace('"', "\\\"")
        );

        if let Err(err) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %err, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}
