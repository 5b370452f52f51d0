//! Type signature rendering.
//!
//! Converts a [`TypeRef`] into the text it has in source code. Generic arguments pass through the value/builder
//! correction first: a builder type produced by this same generation pass is not visible to the declaration model
//! yet, so its slot arrives unresolved and is repaired from the name of its paired value type.
//!
//! ```text
//! bounds: [Value, Builder]   args: [Counter, <unresolved>]   =>   Reducer<Counter,CounterBuilder>
//! ```

use actiongen_core::conventions;
use actiongen_core::dart;

use crate::model::{TypeParam, TypeRef};

use super::GenerationError;

/// Render a type as source text.
///
/// - Generic types render as `Name<arg1,arg2>` after argument correction, or `Name` when they carry no arguments.
/// - `void` renders as `void`.
/// - Anything else renders as the dynamic fallback.
///
/// ## Errors
/// - [`GenerationError::MisalignedTypeArguments`] when declared parameters and supplied arguments differ in length.
pub fn render_type(ty: &TypeRef) -> Result<String, GenerationError> {
    match ty {
        TypeRef::Named { name } => Ok(name.clone()),
        TypeRef::Parameterized { name, params, args } | TypeRef::Function { name, params, args } => {
            let rendered = type_arguments(name, params, args)?;
            if rendered.is_empty() {
                Ok(name.clone())
            } else {
                Ok(format!("{}<{}>", name, rendered.join(",")))
            }
        }
        TypeRef::Void => Ok(dart::VOID.to_string()),
        TypeRef::Dynamic | TypeRef::Unresolved => Ok(dart::DYNAMIC.to_string()),
    }
}

/// Render the supplied type arguments of `ty`, corrected; empty for non-generic types.
pub fn render_type_arguments(ty: &TypeRef) -> Result<Vec<String>, GenerationError> {
    match ty {
        TypeRef::Parameterized { name, params, args } | TypeRef::Function { name, params, args } => {
            type_arguments(name, params, args)
        }
        _ => Ok(Vec::new()),
    }
}

fn type_arguments(name: &str, params: &[TypeParam], args: &[TypeRef]) -> Result<Vec<String>, GenerationError> {
    if params.is_empty() {
        return args.iter().map(render_type).collect();
    }
    if params.len() != args.len() {
        return Err(GenerationError::MisalignedTypeArguments {
            type_name: name.to_string(),
            params: params.len(),
            args: args.len(),
        });
    }
    let bounds: Vec<Option<&TypeRef>> = params.iter().map(|p| p.bound.as_ref()).collect();
    correct_type_arguments(name, &bounds, args)
}

/// Render `args`, filling unresolved builder slots from their paired value slot.
///
/// For every position `i` except the last: when the bound at `i` names a value type and the bound at `i + 1` names a
/// builder type, an argument at `i + 1` that renders as the dynamic fallback is replaced by the rendered argument at
/// `i` plus the builder suffix. Positions without a bound are skipped. The input is never modified.
///
/// ## Errors
/// - [`GenerationError::MisalignedTypeArguments`] when `bounds` and `args` differ in length.
pub fn correct_type_arguments(
    type_name: &str,
    bounds: &[Option<&TypeRef>],
    args: &[TypeRef],
) -> Result<Vec<String>, GenerationError> {
    if bounds.len() != args.len() {
        return Err(GenerationError::MisalignedTypeArguments {
            type_name: type_name.to_string(),
            params: bounds.len(),
            args: args.len(),
        });
    }

    let mut rendered = args.iter().map(render_type).collect::<Result<Vec<_>, _>>()?;

    for i in 0..rendered.len().saturating_sub(1) {
        let Some(value_bound) = bounds[i].and_then(TypeRef::name) else {
            continue;
        };
        if !conventions::is_value_bound(value_bound) {
            continue;
        }
        let Some(builder_bound) = bounds[i + 1].and_then(TypeRef::name) else {
            continue;
        };
        if conventions::is_builder_bound(builder_bound) && rendered[i + 1] == dart::DYNAMIC {
            let builder = conventions::builder_name_for(&rendered[i]);
            tracing::debug!(type_name, slot = i + 1, %builder, "filled unresolved builder type argument");
            rendered[i + 1] = builder;
        }
    }

    Ok(rendered)
}
