use std::fmt;

use crate::config::FilterConfig;
use crate::describe::{association_edge, describe_column};
use crate::descriptor::{ModelDescriptor, sanitize_name};

pub const FENCE_OPEN: &str = "```mermaid";
pub const DIAGRAM_TYPE: &str = "erDiagram";
pub const FENCE_CLOSE: &str = "```";

/// Lines of a model's entity block followed by its belongs-to edges.
///
/// Models without a backing table contribute nothing.
pub fn render_model(model: &ModelDescriptor, config: &FilterConfig) -> Vec<String> {
    if !model.table_exists {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(model.columns.len() + model.associations.len() + 2);
    lines.push(format!("  {} {{", sanitize_name(&model.name)));
    lines.extend(
        model
            .columns
            .iter()
            .map(|column| format!("    {}", describe_column(column))),
    );
    lines.push("  }".to_string());

    for association in &model.associations {
        match association_edge(association, &model.name, config) {
            Ok(edge) => lines.push(edge),
            Err(reason) => tracing::debug!(
                event = "association_skipped",
                model = %model.name,
                target = %association.target_class_name,
                reason = reason.as_str()
            ),
        }
    }

    lines
}

/// Final diagram output: a fenced Mermaid `erDiagram` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramText {
    lines: Vec<String>,
}

impl DiagramText {
    /// Wrap rendered model lines in the fence and diagram declaration.
    pub fn from_body(body: Vec<String>) -> Self {
        let mut lines = Vec::with_capacity(body.len() + 3);
        lines.push(FENCE_OPEN.to_string());
        lines.push(DIAGRAM_TYPE.to_string());
        lines.extend(body);
        lines.push(FENCE_CLOSE.to_string());
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines between the diagram declaration and the closing fence.
    pub fn body_len(&self) -> usize {
        self.lines.len().saturating_sub(3)
    }

    /// Lines joined with `\n`, without a trailing newline.
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DiagramText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
