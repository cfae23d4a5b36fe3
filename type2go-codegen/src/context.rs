use std::collections::BTreeSet;

/// Per-class generation state.
///
/// One instance is created at the start of a class's emission and threaded
/// by `&mut` through every field and nested-type translation of that class,
/// so imports discovered deep inside inline types propagate to the
/// top-level import block. The set is sorted and deduplicated by
/// construction.
#[derive(Debug)]
pub struct GenerationContext {
    depth: usize,
    imports: BTreeSet<String>,
}

impl GenerationContext {
    /// Create a context whose field lines indent at `depth` levels.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            imports: BTreeSet::new(),
        }
    }

    /// Current field-line indent depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn exit(&mut self) {
        self.depth -= 1;
    }

    /// Record a runtime package required by a translated type.
    pub fn require_import(&mut self, package: &str) {
        self.imports.insert(package.to_string());
    }

    /// Required import paths, sorted and deduplicated.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_sorted_and_deduplicated() {
        let mut ctx = GenerationContext::new(1);
        ctx.require_import("time");
        ctx.require_import("encoding/json");
        ctx.require_import("time");

        let imports: Vec<&str> = ctx.imports().collect();
        assert_eq!(imports, vec!["encoding/json", "time"]);
    }

    #[test]
    fn test_depth_tracking() {
        let mut ctx = GenerationContext::new(1);
        ctx.enter();
        assert_eq!(ctx.depth(), 2);
        ctx.exit();
        assert_eq!(ctx.depth(), 1);
    }
}
