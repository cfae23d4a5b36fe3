//! Struct tag assembly.
//!
//! A field's final tag sequence is built in a fixed order: seed from
//! `generateTags` through the configured naming conventions, then apply
//! `CustomNaming` replacements, then merge `ExtraTags`. Entries keep the
//! position of their first introduction, and tag names stay unique.

use type2go_ast::{FieldDecl, Literal};

use crate::error::{Error, Result};
use crate::naming::NamingRegistry;

const CUSTOM_NAMING: &str = "CustomNaming";
const EXTRA_TAGS: &str = "ExtraTags";

/// Compute the ordered `(tag, value)` sequence for one field.
pub(crate) fn assemble(
    field: &FieldDecl,
    generate_tags: &[String],
    naming: &NamingRegistry,
) -> Result<Vec<(String, String)>> {
    let mut tags: Vec<(String, String)> = Vec::with_capacity(generate_tags.len());

    // 1. seed: one entry per generated tag, value = converted field name
    for tag in generate_tags {
        let value = naming
            .convert(tag, &field.name)
            .ok_or_else(|| Error::UnknownTagStyle {
                tag: tag.clone(),
                field: field.name.clone(),
            })?;
        tags.push((tag.clone(), value));
    }

    // 2. CustomNaming: replace the generated value, or append
    for (tag, literal) in annotation_mapping(field, CUSTOM_NAMING)? {
        let replacement = literal.as_str().ok_or_else(|| {
            Error::invalid_annotation(
                CUSTOM_NAMING,
                format!("field '{}'", field.name),
                format!("a string replacement name for tag '{tag}'"),
            )
        })?;
        match tags.iter_mut().find(|(existing, _)| existing == tag) {
            Some((_, value)) => *value = replacement.to_string(),
            None => tags.push((tag.clone(), replacement.to_string())),
        }
    }

    // 3. ExtraTags: join onto the existing value, or append.
    // The separator is `;` everywhere, including between a generated
    // name and its extras (`json:"id;omitempty"`).
    for (tag, literal) in annotation_mapping(field, EXTRA_TAGS)? {
        let extra = extra_value(tag, literal, field)?;
        match tags.iter_mut().find(|(existing, _)| existing == tag) {
            Some((_, value)) => *value = format!("{value};{extra}"),
            None => tags.push((tag.clone(), extra)),
        }
    }

    Ok(tags)
}

/// Render a tag sequence as a Go struct tag string.
///
/// An empty sequence still renders the backtick delimiters.
pub(crate) fn render(tags: &[(String, String)]) -> String {
    let entries: Vec<String> = tags
        .iter()
        .map(|(tag, value)| format!("{tag}:\"{value}\""))
        .collect();
    format!("`{}`", entries.join(" "))
}

/// Iterate a field annotation's mapping entries, or nothing when absent.
fn annotation_mapping<'a>(
    field: &'a FieldDecl,
    annotation: &'static str,
) -> Result<impl Iterator<Item = (&'a String, &'a Literal)>> {
    let entries = match field.annotations.get(annotation) {
        None => None,
        Some(literal) => Some(
            literal
                .as_mapping()
                .ok_or_else(|| {
                    Error::invalid_annotation(
                        annotation,
                        format!("field '{}'", field.name),
                        "an object literal argument",
                    )
                })?
                .iter(),
        ),
    };
    Ok(entries.into_iter().flatten())
}

/// Normalize an ExtraTags value: a string as-is, a sequence joined with `;`.
fn extra_value(tag: &str, literal: &Literal, field: &FieldDecl) -> Result<String> {
    match literal {
        Literal::String(value) => Ok(value.clone()),
        Literal::Sequence(items) => {
            let parts: Vec<&str> = items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        Error::invalid_annotation(
                            EXTRA_TAGS,
                            format!("field '{}'", field.name),
                            format!("strings in the array for tag '{tag}'"),
                        )
                    })
                })
                .collect::<Result<_>>()?;
            Ok(parts.join(";"))
        }
        _ => Err(Error::invalid_annotation(
            EXTRA_TAGS,
            format!("field '{}'", field.name),
            format!("a string or array of strings for tag '{tag}'"),
        )),
    }
}
