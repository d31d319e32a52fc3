use crate::config::FilterConfig;
use crate::descriptor::ModelDescriptor;
use crate::error::Result;
use crate::filter::is_eligible;
use crate::render::{DiagramText, render_model};

/// Turn discovered models into a Mermaid ERD.
///
/// Models keep their discovery order. Abstract, filtered-out and table-less
/// models are skipped silently; a descriptor with a blank name or column
/// field fails the whole run with [`crate::Error::InvalidArgument`].
pub fn generate(models: &[ModelDescriptor], config: &FilterConfig) -> Result<DiagramText> {
    for model in models {
        model.validate()?;
    }

    let mut body = Vec::new();
    let mut rendered = 0usize;

    for model in models {
        if let Some(reason) = skip_reason(model, config) {
            tracing::debug!(event = "model_skipped", model = %model.name, reason);
            continue;
        }

        body.extend(render_model(model, config));
        rendered += 1;
    }

    tracing::info!(
        event = "diagram_generated",
        discovered = models.len(),
        rendered,
        lines = body.len()
    );

    Ok(DiagramText::from_body(body))
}

fn skip_reason(model: &ModelDescriptor, config: &FilterConfig) -> Option<&'static str> {
    if model.is_abstract {
        Some("abstract")
    } else if !is_eligible(&model.name, config) {
        Some("filtered")
    } else if !model.table_exists {
        Some("no_table")
    } else {
        None
    }
}
