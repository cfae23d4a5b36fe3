//! Type translation from declared field types to Go type expressions.

use type2go_ast::TypeExpr;

use crate::context::GenerationContext;
use crate::emitter;
use crate::error::Result;
use crate::naming::NamingRegistry;

/// Recursively translate a declared type into a Go type expression.
///
/// Structural recursion over the type tree: arrays become slices, `Map`
/// becomes a Go map, inline object types become anonymous nested structs
/// emitted one indent level deeper. Named types the mapper does not
/// recognize pass through unchanged, so hand-written aliases survive
/// untouched rather than failing the class.
pub(crate) fn go_type(
    expr: &TypeExpr,
    naming: &NamingRegistry,
    ctx: &mut GenerationContext,
) -> Result<String> {
    match expr {
        TypeExpr::Named(name) => Ok(named_type(name, ctx)),
        TypeExpr::Array(element) => Ok(format!("[]{}", go_type(element, naming, ctx)?)),
        TypeExpr::Map(key, value) => Ok(format!(
            "map[{}]{}",
            go_type(key, naming, ctx)?,
            go_type(value, naming, ctx)?
        )),
        TypeExpr::Inline(fields) => emitter::emit_anonymous(fields, naming, ctx),
    }
}

fn named_type(name: &str, ctx: &mut GenerationContext) -> String {
    match name {
        "Date" => {
            ctx.require_import("time");
            "time.Time".to_string()
        }
        "boolean" => "bool".to_string(),
        // int/float and friends are plain typedefs on the TypeScript side
        // and already spell valid Go types; everything else passes through
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn translate(expr: &TypeExpr) -> (String, GenerationContext) {
        let naming = NamingRegistry::new(IndexMap::new());
        let mut ctx = GenerationContext::new(1);
        let ty = go_type(expr, &naming, &mut ctx).unwrap();
        (ty, ctx)
    }

    #[test]
    fn test_primitives() {
        assert_eq!(translate(&TypeExpr::named("string")).0, "string");
        assert_eq!(translate(&TypeExpr::named("boolean")).0, "bool");
        assert_eq!(translate(&TypeExpr::named("int")).0, "int");
    }

    #[test]
    fn test_date_registers_time_import() {
        let (ty, ctx) = translate(&TypeExpr::named("Date"));
        assert_eq!(ty, "time.Time");
        assert_eq!(ctx.imports().collect::<Vec<_>>(), vec!["time"]);
    }

    #[test]
    fn test_unrecognized_name_passes_through() {
        assert_eq!(translate(&TypeExpr::named("SomeAlias")).0, "SomeAlias");
    }

    #[test]
    fn test_nested_arrays() {
        let expr = TypeExpr::array(TypeExpr::array(TypeExpr::named("int")));
        assert_eq!(translate(&expr).0, "[][]int");
    }

    #[test]
    fn test_map_of_string_to_int_slice() {
        let expr = TypeExpr::map(
            TypeExpr::named("string"),
            TypeExpr::array(TypeExpr::named("int")),
        );
        assert_eq!(translate(&expr).0, "map[string][]int");
    }

    #[test]
    fn test_array_of_dates_propagates_import() {
        let (ty, ctx) = translate(&TypeExpr::array(TypeExpr::named("Date")));
        assert_eq!(ty, "[]time.Time");
        assert!(ctx.has_imports());
    }
}
