//! Qualification predicates.
//!
//! Decide which declarations get generated code and which of their fields take part in it.

use crate::config::GeneratorConfig;
use crate::model::{Declaration, DeclarationModel, TypeRef};

use super::GenerationError;

/// Whether `decl` is an action container that still needs generated code.
///
/// True iff `decl` is class-like, its transitive supertypes include the container marker, and its display name does
/// not already carry the generated-code prefix.
pub fn needs_generation<M>(model: &M, decl: &Declaration, config: &GeneratorConfig) -> Result<bool, GenerationError>
where
    M: DeclarationModel + ?Sized,
{
    if !decl.kind.is_class_like() || config.is_generated_name(decl.display_name()) {
        return Ok(false);
    }
    let supertypes = model.all_supertypes(decl)?;
    Ok(supertypes.iter().any(|s| s.name == config.container_marker))
}

/// Whether a field of type `ty` is a dispatcher field (name match, type arguments ignored).
pub fn is_dispatcher_field(ty: &TypeRef, config: &GeneratorConfig) -> bool {
    ty.name() == Some(config.dispatcher_marker.as_str())
}

/// Whether a field of type `ty` holds a nested action container.
///
/// Types the model does not know (e.g. `int`) never qualify.
pub fn is_nested_container<M>(model: &M, ty: &TypeRef, config: &GeneratorConfig) -> Result<bool, GenerationError>
where
    M: DeclarationModel + ?Sized,
{
    let Some(name) = ty.name() else {
        return Ok(false);
    };
    match model.lookup(name)? {
        Some(decl) => needs_generation(model, decl, config),
        None => Ok(false),
    }
}
