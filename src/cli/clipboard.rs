use crate::warning;

/// Best-effort clipboard copy. Returns `false` after printing `text` to the
/// console when no clipboard is available.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => true,
        Err(e) => {
            warning!("Failed to copy to clipboard ({}). Please copy manually:", e);
            println!("{}", text);
            false
        }
    }
}
