//! Field collection across a declaration's hierarchy.
//!
//! Fields come from the declaration itself first, then from each entry of its transitive supertype set in the order
//! the model supplies. Same-named fields from different levels are all kept: a subclass field shadowing an ancestor
//! field yields two entries.

use crate::model::{Declaration, DeclarationModel, Field};

use super::GenerationError;

/// Render every field of `decl` and its supertypes that satisfies `predicate` through `template`.
///
/// ## Errors
/// - Any error from the model, `predicate` or `template` aborts collection and is returned as is.
pub fn collect_fields<'m, M, T, P, F>(
    model: &'m M,
    decl: &'m Declaration,
    mut predicate: P,
    mut template: F,
) -> Result<Vec<T>, GenerationError>
where
    M: DeclarationModel + ?Sized,
    P: FnMut(&Field) -> Result<bool, GenerationError>,
    F: FnMut(&'m Declaration, &'m Field) -> Result<T, GenerationError>,
{
    let supertypes = model.all_supertypes(decl)?;
    let mut out = Vec::new();

    for owner in std::iter::once(decl).chain(supertypes) {
        for field in &owner.fields {
            if predicate(field)? {
                out.push(template(owner, field)?);
            }
        }
    }

    Ok(out)
}

/// The `(owner, field)` pairs selected by `predicate`, in collection order.
pub fn matching_fields<'m, M, P>(
    model: &'m M,
    decl: &'m Declaration,
    predicate: P,
) -> Result<Vec<(&'m Declaration, &'m Field)>, GenerationError>
where
    M: DeclarationModel + ?Sized,
    P: FnMut(&Field) -> Result<bool, GenerationError>,
{
    collect_fields(model, decl, predicate, |owner, field| Ok((owner, field)))
}
