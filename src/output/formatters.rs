//! Formatting utilities for terminal output

/// Format a canonical feedback code as an emoji string
///
/// Unknown characters pass through unchanged so partially formatted codes
/// stay readable.
#[must_use]
pub fn code_to_emoji(code: &str) -> String {
    code.chars()
        .map(|c| match c {
            'G' => '🟩',
            'Y' => '🟨',
            '-' => '⬜',
            other => other,
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
