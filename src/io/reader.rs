/// One meaningful line of INI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// A `[name]` header. Following properties belong to `name`.
    Section { name: &'a str },
    /// A `name=value` line inside `section` (empty for the default section).
    Property {
        section: &'a str,
        name: &'a str,
        value: &'a str,
    },
}

/// Iterate the records of INI text.
///
/// - A line whose trimmed form is `[...]` is a section header; the name is everything between the
///   first `[` and the last `]`, untrimmed.
/// - A line whose trimmed form starts with `;` is a comment.
/// - Any other line is split at its first `=`. The name is trimmed, the value is kept verbatim.
///
/// Lines that fit none of these (no `=`, or an empty name) are skipped.
pub fn parse_records(text: &str) -> Records<'_> {
    Records {
        lines: Lines::new(text.strip_prefix('\u{feff}').unwrap_or(text)),
        section: "",
    }
}

#[derive(Debug, Clone)]
pub struct Records<'a> {
    lines: Lines<'a>,
    section: &'a str,
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (line_no, line) in self.lines.by_ref() {
            let trimmed = line.trim();

            if let Some(name) = section_name(trimmed) {
                self.section = name;
                return Some(Record::Section { name });
            }

            if trimmed.starts_with(';') {
                continue;
            }

            let Some((name, value)) = line.split_once('=') else {
                if !trimmed.is_empty() {
                    tracing::trace!(line = line_no, "skipping line without '='");
                }
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                tracing::trace!(line = line_no, "skipping property with empty name");
                continue;
            }

            return Some(Record::Property {
                section: self.section,
                name,
                value,
            });
        }
        None
    }
}

fn section_name(trimmed: &str) -> Option<&str> {
    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        Some(&trimmed[1..trimmed.len() - 1])
    } else {
        None
    }
}

/// Splits text at `\n`, `\r\n` or a lone `\r`, yielding 1-based line numbers.
#[derive(Debug, Clone)]
struct Lines<'a> {
    rest: Option<&'a str>,
    line_no: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: if text.is_empty() { None } else { Some(text) },
            line_no: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        self.line_no += 1;

        let Some(end) = rest.find(['\r', '\n']) else {
            self.rest = None;
            return Some((self.line_no, rest));
        };

        let line = &rest[..end];
        let after = if rest[end..].starts_with("\r\n") {
            &rest[end + 2..]
        } else {
            &rest[end + 1..]
        };
        self.rest = if after.is_empty() { None } else { Some(after) };
        Some((self.line_no, line))
    }
}
