//! Emission driver: one compilation unit in, one block of generated source out.

use actiongen_core::dart;

use crate::config::GeneratorConfig;
use crate::model::DeclarationModel;

use super::GenerationError;
use super::actions::{ActionGenerator, GeneratedActions};
use super::emitter::DartEmitter;

/// Gather the artifacts of every qualifying declaration in the unit, in source order.
#[tracing::instrument(skip_all)]
pub fn generate_actions<M>(model: &M, config: &GeneratorConfig) -> Result<Vec<GeneratedActions>, GenerationError>
where
    M: DeclarationModel + ?Sized,
{
    let generator = ActionGenerator::new(model, config);
    let declarations = model.unit_declarations()?;
    tracing::debug!(decl_count = declarations.len(), "scanning compilation unit");

    let mut generated = Vec::new();
    for decl in declarations {
        if !generator.needs_generation(decl)? {
            continue;
        }
        let actions = generator.generate(decl)?;
        tracing::debug!(
            container = %decl.name,
            dispatcher_subclass = actions.dispatcher.is_some(),
            action_count = actions.names.entries.len(),
            "generated action container"
        );
        generated.push(actions);
    }

    Ok(generated)
}

/// Render gathered artifacts; empty when nothing qualified.
pub fn render_unit(generated: &[GeneratedActions], config: &GeneratorConfig) -> String {
    if generated.is_empty() {
        return String::new();
    }

    let mut out = DartEmitter::new(config.indent_width);
    if config.emit_header {
        for line in dart::LINT_HEADER {
            out.line(line);
        }
    }
    for actions in generated {
        actions.render(&mut out);
    }
    out.finish()
}

/// Generate the source text for a whole compilation unit.
///
/// ## Errors
/// - Any model or rendering failure aborts the unit; no partial output is returned.
pub fn generate_unit<M>(model: &M, config: &GeneratorConfig) -> Result<String, GenerationError>
where
    M: DeclarationModel + ?Sized,
{
    let generated = generate_actions(model, config)?;
    Ok(render_unit(&generated, config))
}
