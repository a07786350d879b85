//! Entry-point lookup.

use swc_ecma_ast::{Decl, Module, ModuleDecl, ModuleItem, Pat, Stmt, VarDecl, VarDeclarator};

/// Find the top-level variable declarator named `name`.
///
/// Only statements directly in the module body are considered, with or
/// without `export`. Re-exports and imports are not followed; that is the
/// resolver's job.
pub fn find_declaration<'a>(module: &'a Module, name: &str) -> Option<&'a VarDeclarator> {
    module
        .body
        .iter()
        .filter_map(top_level_var)
        .flat_map(|decl| decl.decls.iter())
        .find(|declarator| binding_name(declarator) == Some(name))
}

/// The variable statement of a module item, exported or not.
pub(crate) fn top_level_var(item: &ModuleItem) -> Option<&VarDecl> {
    match item {
        ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => Some(var),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
            Decl::Var(var) => Some(var),
            _ => None,
        },
        _ => None,
    }
}

/// Name bound by a declarator; destructuring patterns bind no single name.
pub(crate) fn binding_name(declarator: &VarDeclarator) -> Option<&str> {
    match &declarator.name {
        Pat::Ident(binding) => Some(&binding.id.sym),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Project;

    const SOURCE: &str = r"
        import { helper } from './helper';
        const internal = 1;
        export const models = [internal];
        export const a = 1, b = 2;
        function notAVariable() {}
    ";

    #[test]
    #[allow(clippy::unwrap_used)]
    fn finds_plain_and_exported_declarations() {
        let project = Project::from_sources([("main.ts", SOURCE)]).unwrap();
        let module = project.module("main.ts").unwrap();

        for name in ["internal", "models", "a", "b"] {
            let declarator = find_declaration(module, name);
            assert_eq!(declarator.and_then(binding_name), Some(name));
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn imports_and_functions_are_not_declarations() {
        let project = Project::from_sources([("main.ts", SOURCE)]).unwrap();
        let module = project.module("main.ts").unwrap();

        assert!(find_declaration(module, "helper").is_none());
        assert!(find_declaration(module, "notAVariable").is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn project_lookup_reports_not_found() {
        let project = Project::from_sources([("main.ts", SOURCE)]).unwrap();
        let err = project.find_declaration("main.ts", "missing").unwrap_err();
        assert!(matches!(
            err,
            crate::SyntaxError::NotFound { ref name, .. } if name == "missing"
        ));
    }
}
