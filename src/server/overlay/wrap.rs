//! Greedy word wrapping against a pixel width.

/// Measures the rendered width of a string in pixels.
pub trait MeasureText {
    fn width(&self, text: &str) -> u32;
}

/// Splits `text` into lines no wider than `max_width`.
///
/// Words are added to the current line until the next one would overflow it. A word that
/// is wider than `max_width` on its own gets a line to itself instead of being split.
pub fn wrap_text(measure: &impl MeasureText, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", line, word);
        if measure.width(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
