//! The optional YAML frontmatter header block.
//!
//! Every diagram may be preceded by a `---`-delimited header carrying the
//! title and/or the rendering configuration. The block is emitted if and
//! only if a title is present or the configuration differs from its
//! all-defaults form; building with neither yields no header at all.
//!
//! Encoding of the configuration is delegated to serde_yaml; fields equal
//! to their unset/default value are omitted by the config's serde
//! attributes.

use serde::Serialize;

use crate::config::DiagramConfig;

const MARKER: &str = "---";

#[derive(Serialize)]
struct Header<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a DiagramConfig>,
}

/// Renders the frontmatter block, or the empty string when nothing is due.
///
/// A config equal to [`DiagramConfig::default()`] counts as absent. When a
/// block is emitted it ends with its closing marker line plus a line
/// terminator, ready to be prepended to the diagram keyword line.
pub fn render(title: Option<&str>, config: Option<&DiagramConfig>) -> String {
    let config = config.filter(|config| !config.is_default());
    if title.is_none() && config.is_none() {
        return String::new();
    }

    let header = Header { title, config };
    // Closed vocabulary of strings and unit enums; YAML encoding cannot fail.
    let yaml =
        serde_yaml::to_string(&header).expect("frontmatter header is always YAML-serializable");

    format!("{MARKER}\n{yaml}{MARKER}\n")
}
