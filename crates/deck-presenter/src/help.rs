//! Keyboard shortcut help

/// Help text for a deck of `total` slides
///
/// Digit shortcuts are listed only for slides that exist.
pub fn shortcut_help(deck_name: &str, total: usize) -> String {
    let mut lines = vec![
        format!("{} - Keyboard Shortcuts:", deck_name),
        "• Arrow keys: Navigate slides".to_string(),
        "• Space: Next slide".to_string(),
        "• Home: First slide".to_string(),
        "• End: Last slide".to_string(),
    ];

    match total.min(9) {
        0 | 1 => {}
        last => lines.push(format!("• Numbers 1-{}: Jump to slides 1-{}", last, last)),
    }
    if total >= 10 {
        lines.push("• 0: Jump to slide 10".to_string());
    }
    if total >= 11 {
        lines.push("• Ctrl+1: Jump to slide 11".to_string());
    }
    if total >= 12 {
        lines.push("• Ctrl+2: Jump to slide 12".to_string());
    }

    lines.push("• Escape: Toggle fullscreen".to_string());
    lines.push("• F1 or Shift+?: Show keyboard shortcuts".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_help() {
        let text = shortcut_help("Clancy Brothers Presentation", 12);
        assert!(text.starts_with("Clancy Brothers Presentation - Keyboard Shortcuts:"));
        assert!(text.contains("• Numbers 1-9: Jump to slides 1-9"));
        assert!(text.contains("• 0: Jump to slide 10"));
        assert!(text.contains("• Ctrl+2: Jump to slide 12"));
    }

    #[test]
    fn test_short_deck_help() {
        let text = shortcut_help("Deck", 4);
        assert!(text.contains("• Numbers 1-4: Jump to slides 1-4"));
        assert!(!text.contains("slide 10"));
        assert!(!text.contains("Ctrl+1"));
    }
}
