//! Struct emission: assembles the generated Go source text per class.

use type2go_ast::{ClassDecl, FieldDecl};
use type2go_core::to_pascal_case;

use crate::context::GenerationContext;
use crate::error::Result;
use crate::model_config::ModelConfig;
use crate::naming::NamingRegistry;
use crate::tags;
use crate::type_mapper::go_type;

/// Marker emitted for a property with no declared type.
///
/// A visible, reviewable degradation: the field still generates instead of
/// failing the class, and the marker never compiles unnoticed.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Emit the complete generated file text for one annotated class.
///
/// The timestamp is supplied by the caller so emission stays deterministic
/// under test.
pub fn emit_model(class: &ClassDecl, naming: &NamingRegistry, timestamp: &str) -> Result<String> {
    let config = ModelConfig::resolve(class)?;

    // Field lines are rendered first: translating their types is what
    // populates the import set emitted in the header.
    let mut ctx = GenerationContext::new(1);
    let field_lines = field_lines(&class.fields, &config.generate_tags, naming, &mut ctx)?;

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("// Generated By Type2Go At {timestamp} //"));
    lines.push(String::new());
    lines.push(format!("package {}", config.package_name));
    lines.push(String::new());

    if ctx.has_imports() {
        lines.push("import (".to_string());
        for package in ctx.imports() {
            lines.push(format!("{}\"{}\"", indent(1), package));
        }
        lines.push(")".to_string());
        lines.push(String::new());
    }

    lines.push(format!("type {} struct {{", config.model_name));
    if let Some(base) = &class.base {
        lines.push(format!("{}{}", indent(1), base));
        lines.push(String::new());
    }
    lines.extend(field_lines);
    lines.push("}".to_string());

    Ok(lines.join("\n"))
}

/// Emit an anonymous nested struct for an inline object type.
///
/// No banner, package, or import output, and no tag-name defaulting: its
/// fields only carry the tags they declare themselves. Imports required by
/// nested types land in the enclosing class's context.
pub(crate) fn emit_anonymous(
    fields: &[FieldDecl],
    naming: &NamingRegistry,
    ctx: &mut GenerationContext,
) -> Result<String> {
    let base = ctx.depth();

    ctx.enter();
    let field_lines = field_lines(fields, &[], naming, ctx)?;
    ctx.exit();

    let mut lines = vec!["struct {".to_string()];
    lines.extend(field_lines);
    lines.push(format!("{}}}", indent(base)));
    Ok(lines.join("\n"))
}

fn field_lines(
    fields: &[FieldDecl],
    generate_tags: &[String],
    naming: &NamingRegistry,
    ctx: &mut GenerationContext,
) -> Result<Vec<String>> {
    fields
        .iter()
        .map(|field| Ok(field_definition(field, generate_tags, naming, ctx)?.render(ctx.depth())))
        .collect()
}

/// One field of a generated struct, rebuilt per emission.
struct FieldDefinition {
    name: String,
    go_type: String,
    tags: Vec<(String, String)>,
    comment: &'static str,
}

fn field_definition(
    field: &FieldDecl,
    generate_tags: &[String],
    naming: &NamingRegistry,
    ctx: &mut GenerationContext,
) -> Result<FieldDefinition> {
    let base_type = match &field.ty {
        Some(ty) => go_type(ty, naming, ctx)?,
        None => UNKNOWN_TYPE.to_string(),
    };

    // Nullability wraps the resolved base type, whatever its shape.
    let go_type = if field.optional {
        format!("*{base_type}")
    } else {
        base_type
    };

    Ok(FieldDefinition {
        // The Go identifier is always the PascalCase field name,
        // independent of any tag naming convention.
        name: to_pascal_case(&field.name),
        go_type,
        tags: tags::assemble(field, generate_tags, naming)?,
        comment: if field.optional { "nullable" } else { "" },
    })
}

impl FieldDefinition {
    fn render(&self, depth: usize) -> String {
        let mut line = format!(
            "{}{} {} {}",
            indent(depth),
            self.name,
            self.go_type,
            tags::render(&self.tags)
        );
        if !self.comment.is_empty() {
            line.push_str(&format!(" /* {} */", self.comment));
        }
        line
    }
}
