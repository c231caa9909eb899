use std::collections::HashMap;

/// Main-section attributes of a jar manifest.
///
/// Only the main section (everything before the first blank line) is kept;
/// per-entry sections describe individual packages, not the jar itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    attributes: HashMap<String, String>,
}

impl Manifest {
    /// Parse manifest text.
    ///
    /// - `Key: Value` per line, LF or CRLF terminated
    /// - a line starting with one space continues the previous value
    /// - the first occurrence of a key wins
    pub fn parse(text: &str) -> Self {
        let mut attributes = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in text.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(continuation);
                }
                continue;
            }

            if let Some((key, value)) = current.take() {
                attributes.entry(key).or_insert(value);
            }

            if let Some((key, value)) = line.split_once(':') {
                let value = value.strip_prefix(' ').unwrap_or(value);
                current = Some((key.trim().to_string(), value.to_string()));
            }
        }

        if let Some((key, value)) = current {
            attributes.entry(key).or_insert(value);
        }

        Self { attributes }
    }

    /// Trimmed attribute value, `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
