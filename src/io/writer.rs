use crate::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub line_ending: LineEnding,
}

impl WriteOptions {
    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }
}

/// Render a document as INI text.
///
/// Each section is written as a `[name]` header followed by one `name=value` line per property.
/// The default section has no header when it comes first; anywhere else it is written as `[]` so
/// its properties do not fall under the preceding header. Names and values are written exactly as
/// stored.
pub fn write_document(document: &Document, options: &WriteOptions) -> String {
    let newline = options.line_ending.as_str();
    let mut out = String::new();

    for (i, section) in document.iter().enumerate() {
        if i > 0 || !section.is_default() {
            push_line(&mut out, newline, ["[", section.name(), "]"]);
        }
        for property in section {
            push_line(&mut out, newline, [property.name(), "=", property.value()]);
        }
    }

    out
}

fn push_line(out: &mut String, newline: &str, parts: [&str; 3]) {
    for part in parts {
        out.push_str(part);
    }
    out.push_str(newline);
}
