//! Definition resolution: identifier occurrence to declaring nodes.
//!
//! Resolution is purely structural. The file an identifier belongs to is found
//! from its span; candidates are gathered from that file's top-level
//! statements in source order, following imports into the exports of other
//! project files.

use std::path::Path;

use rustc_hash::FxHashSet;
use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Decl, ExportSpecifier, Ident, ImportSpecifier, ModuleDecl, ModuleExportName, ModuleItem, Stmt,
};

use crate::locate::{binding_name, top_level_var};
use crate::node::decl_kind;
use crate::project::SourceUnit;
use crate::{Node, Project};

/// The definition-lookup capability the evaluator consumes.
pub trait DefinitionResolver<'a> {
    /// Candidate declarations for this identifier occurrence, best first.
    ///
    /// An empty result means the identifier cannot be resolved.
    fn resolve(&self, ident: &'a Ident) -> Vec<Node<'a>>;

    /// Source text covered by `span`, used to quote nodes in diagnostics.
    fn source_text(&self, span: Span) -> Option<&'a str> {
        let _ = span;
        None
    }
}

/// A resolver that knows no declarations at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDefinitions;

impl<'a> DefinitionResolver<'a> for NoDefinitions {
    fn resolve(&self, _ident: &'a Ident) -> Vec<Node<'a>> {
        Vec::new()
    }
}

/// Resolves identifiers against the files of a [`Project`].
#[derive(Clone, Copy)]
pub struct ProjectResolver<'a> {
    project: &'a Project,
}

type Seen<'a> = FxHashSet<(&'a Path, String)>;

impl<'a> ProjectResolver<'a> {
    pub(crate) fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Declarations of `name` in the top-level scope of `unit`.
    fn local_candidates(
        &self,
        unit: &'a SourceUnit,
        name: &str,
        seen: &mut Seen<'a>,
        out: &mut Vec<Node<'a>>,
    ) {
        for item in &unit.module.body {
            if let Some(var) = top_level_var(item) {
                out.extend(
                    var.decls
                        .iter()
                        .filter(|declarator| binding_name(declarator) == Some(name))
                        .map(Node::Declarator),
                );
                continue;
            }

            match item {
                ModuleItem::Stmt(Stmt::Decl(decl)) => push_opaque_decl(decl, name, out),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    push_opaque_decl(&export.decl, name, out);
                }
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) if !import.type_only => {
                    for specifier in &import.specifiers {
                        match specifier {
                            ImportSpecifier::Named(named)
                                if !named.is_type_only && &*named.local.sym == name =>
                            {
                                let imported = named.imported.as_ref().map_or(name, export_name);
                                if let Some(target) = self.project.import_target(unit, &import.src.value) {
                                    self.export_candidates(target, imported, seen, out);
                                }
                            }
                            ImportSpecifier::Default(default) if &*default.local.sym == name => {
                                if let Some(target) = self.project.import_target(unit, &import.src.value) {
                                    self.export_candidates(target, "default", seen, out);
                                }
                            }
                            ImportSpecifier::Namespace(namespace) if &*namespace.local.sym == name => {
                                out.push(Node::Unsupported {
                                    kind: "NamespaceImport",
                                    span: namespace.span,
                                });
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Declarations reachable through the export named `name` of `unit`.
    fn export_candidates(
        &self,
        unit: &'a SourceUnit,
        name: &str,
        seen: &mut Seen<'a>,
        out: &mut Vec<Node<'a>>,
    ) {
        if !seen.insert((unit.path.as_path(), name.to_string())) {
            return;
        }

        for item in &unit.module.body {
            let ModuleItem::ModuleDecl(decl) = item else {
                continue;
            };
            match decl {
                ModuleDecl::ExportDecl(export) => match &export.decl {
                    Decl::Var(var) => out.extend(
                        var.decls
                            .iter()
                            .filter(|declarator| binding_name(declarator) == Some(name))
                            .map(Node::Declarator),
                    ),
                    other => push_opaque_decl(other, name, out),
                },
                ModuleDecl::ExportNamed(named) if !named.type_only => {
                    let source = named
                        .src
                        .as_ref()
                        .map(|src| self.project.import_target(unit, &src.value));
                    for specifier in &named.specifiers {
                        match specifier {
                            ExportSpecifier::Named(spec) if !spec.is_type_only => {
                                let exported = spec.exported.as_ref().unwrap_or(&spec.orig);
                                if export_name(exported) != name {
                                    continue;
                                }
                                let orig = export_name(&spec.orig);
                                match source {
                                    Some(Some(target)) => {
                                        self.export_candidates(target, orig, seen, out);
                                    }
                                    // Re-export from a module outside the project.
                                    Some(None) => {}
                                    None => self.local_candidates(unit, orig, seen, out),
                                }
                            }
                            ExportSpecifier::Namespace(spec) if export_name(&spec.name) == name => {
                                out.push(Node::Unsupported {
                                    kind: "NamespaceExport",
                                    span: spec.span,
                                });
                            }
                            ExportSpecifier::Default(spec) if &*spec.exported.sym == name => {
                                if let Some(Some(target)) = source {
                                    self.export_candidates(target, "default", seen, out);
                                }
                            }
                            _ => {}
                        }
                    }
                }
                ModuleDecl::ExportDefaultExpr(export) if name == "default" => {
                    out.push(Node::Expr(&export.expr));
                }
                ModuleDecl::ExportDefaultDecl(export) if name == "default" => {
                    out.push(Node::Unsupported {
                        kind: "DefaultDeclaration",
                        span: export.span,
                    });
                }
                ModuleDecl::ExportAll(all) if !all.type_only && name != "default" => {
                    if let Some(target) = self.project.import_target(unit, &all.src.value) {
                        self.export_candidates(target, name, seen, out);
                    }
                }
                _ => {}
            }
        }
    }
}

impl<'a> DefinitionResolver<'a> for ProjectResolver<'a> {
    #[tracing::instrument(level = "trace", skip_all, fields(name = %ident.sym))]
    fn resolve(&self, ident: &'a Ident) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        let Some(unit) = self.project.unit_at(ident.span.lo) else {
            tracing::debug!("identifier outside every project file");
            return out;
        };
        let mut seen = Seen::default();
        self.local_candidates(unit, &ident.sym, &mut seen, &mut out);
        tracing::trace!(candidates = out.len(), "resolved");
        out
    }

    fn source_text(&self, span: Span) -> Option<&'a str> {
        self.project.snippet(span)
    }
}

/// Declarations that bind a value name but cannot be evaluated.
fn push_opaque_decl<'a>(decl: &'a Decl, name: &str, out: &mut Vec<Node<'a>>) {
    let bound = match decl {
        Decl::Fn(function) => &function.ident.sym,
        Decl::Class(class) => &class.ident.sym,
        Decl::TsEnum(enumeration) => &enumeration.id.sym,
        _ => return,
    };
    if &**bound == name {
        out.push(Node::Unsupported {
            kind: decl_kind(decl),
            span: decl.span(),
        });
    }
}

fn export_name(name: &ModuleExportName) -> &str {
    match name {
        ModuleExportName::Ident(ident) => &ident.sym,
        ModuleExportName::Str(string) => &string.value,
    }
}
