//! Project loading: an entry file plus its relative import closure.
//!
//! All files are parsed into one shared `SourceMap`, so every span in the
//! project maps back to exactly one [`SourceUnit`]. The resolver relies on
//! this to find the file an identifier occurrence belongs to.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use swc_common::sync::Lrc;
use swc_common::{BytePos, SourceFile, SourceMap, Span};
use swc_ecma_ast::{Module, ModuleDecl, ModuleItem};

use crate::locate::find_declaration;
use crate::parse::parse_source;
use crate::paths::{candidate_paths, is_local_spec, normalize};
use crate::resolve::ProjectResolver;
use crate::{Node, SyntaxError};

/// Where project sources come from.
pub trait SourceLoader {
    fn read(&self, path: &Path) -> io::Result<String>;
    fn exists(&self, path: &Path) -> bool;
}

/// Reads sources from the filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Serves sources from memory, keyed by normalized path.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, source: impl Into<String>) {
        self.files.insert(normalize(path.as_ref()), source.into());
    }

    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, source: impl Into<String>) -> Self {
        self.insert(path, source);
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such in-memory source")
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize(path))
    }
}

/// One parsed file of a [`Project`].
pub struct SourceUnit {
    pub path: PathBuf,
    pub module: Module,
    /// The file as swc indexed it, leading byte-order mark removed.
    file: Lrc<SourceFile>,
    /// Local specifiers of this file mapped to the file they name.
    imports: FxHashMap<String, PathBuf>,
}

impl SourceUnit {
    /// Whether `pos` falls inside this file.
    pub fn contains(&self, pos: BytePos) -> bool {
        self.file.start_pos <= pos && pos <= self.file.end_pos
    }

    /// Source text covered by `span`, if the span lies in this file.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        if !self.contains(span.lo) || !self.contains(span.hi) {
            return None;
        }
        let start = self.file.start_pos.0;
        let lo = usize::try_from(span.lo.0 - start).ok()?;
        let hi = usize::try_from(span.hi.0 - start).ok()?;
        self.file.src.get(lo..hi)
    }
}

/// Stack kept free before dropping the parsed modules.
const DROP_RED_ZONE: usize = 100 * 1024;

/// Stack given to the drop when less than `DROP_RED_ZONE` remains.
const DROP_STACK_SIZE: usize = 16 * 1024 * 1024;

/// The set of files reachable from one or more entry files.
pub struct Project {
    cm: Lrc<SourceMap>,
    units: Vec<SourceUnit>,
    by_path: FxHashMap<PathBuf, usize>,
    warnings: Vec<String>,
}

impl Project {
    /// Load `entry` and everything it imports from the filesystem.
    pub fn load(entry: impl AsRef<Path>) -> Result<Self, SyntaxError> {
        Self::load_with(&FsLoader, &[entry.as_ref().to_path_buf()])
    }

    /// Build a project from in-memory sources.
    ///
    /// Every given file is parsed, in order; imports between them resolve as
    /// they would on disk.
    pub fn from_sources<I, P, S>(sources: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: Into<String>,
    {
        let mut loader = MemoryLoader::new();
        let mut entries = Vec::new();
        for (path, source) in sources {
            entries.push(path.as_ref().to_path_buf());
            loader.insert(path, source);
        }
        Self::load_with(&loader, &entries)
    }

    /// Load `entries` and, breadth first, every file they reach through
    /// relative `import` / `export ... from` specifiers.
    #[tracing::instrument(level = "debug", skip(loader))]
    pub fn load_with(loader: &dyn SourceLoader, entries: &[PathBuf]) -> Result<Self, SyntaxError> {
        let mut project = Project {
            cm: Lrc::default(),
            units: Vec::new(),
            by_path: FxHashMap::default(),
            warnings: Vec::new(),
        };

        let mut pending: VecDeque<PathBuf> = entries.iter().map(|path| normalize(path)).collect();
        while let Some(path) = pending.pop_front() {
            if project.by_path.contains_key(&path) {
                continue;
            }
            let source = loader.read(&path).map_err(|source| SyntaxError::Io {
                path: path.clone(),
                source,
            })?;
            let parsed = parse_source(&project.cm, &path, source)?;

            let mut imports = FxHashMap::default();
            for spec in local_specifiers(&parsed.module) {
                if imports.contains_key(spec) {
                    continue;
                }
                let target = candidate_paths(&path, spec)
                    .into_iter()
                    .find(|candidate| project.by_path.contains_key(candidate) || loader.exists(candidate));
                match target {
                    Some(target) => {
                        pending.push_back(target.clone());
                        imports.insert(spec.to_string(), target);
                    }
                    None => {
                        tracing::warn!(spec, from = %path.display(), "unable to resolve import");
                        project.warnings.push(format!(
                            "unable to resolve import '{spec}' from {}",
                            path.display()
                        ));
                    }
                }
            }

            tracing::debug!(path = %path.display(), imports = imports.len(), "loaded source");
            project.by_path.insert(path.clone(), project.units.len());
            project.units.push(SourceUnit {
                path,
                module: parsed.module,
                file: parsed.file,
                imports,
            });
        }

        Ok(project)
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    pub fn unit(&self, path: impl AsRef<Path>) -> Option<&SourceUnit> {
        self.by_path
            .get(&normalize(path.as_ref()))
            .map(|&index| &self.units[index])
    }

    /// The parsed module of a project file.
    pub fn module(&self, path: impl AsRef<Path>) -> Result<&Module, SyntaxError> {
        let path = path.as_ref();
        self.unit(path)
            .map(|unit| &unit.module)
            .ok_or_else(|| SyntaxError::UnknownFile {
                path: path.to_path_buf(),
            })
    }

    /// Import specifiers that could not be mapped to a file.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The file containing a source position.
    pub fn unit_at(&self, pos: BytePos) -> Option<&SourceUnit> {
        self.units.iter().find(|unit| unit.contains(pos))
    }

    /// The file a local specifier of `unit` names, if it was loaded.
    pub(crate) fn import_target(&self, unit: &SourceUnit, spec: &str) -> Option<&SourceUnit> {
        let target = unit.imports.get(spec)?;
        self.by_path.get(target).map(|&index| &self.units[index])
    }

    pub fn snippet(&self, span: Span) -> Option<&str> {
        self.unit_at(span.lo)?.snippet(span)
    }

    /// Entry-point lookup: the top-level declarator `name` in file `path`.
    pub fn find_declaration(
        &self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<Node<'_>, SyntaxError> {
        let path = path.as_ref();
        let module = self.module(path)?;
        find_declaration(module, name)
            .map(Node::Declarator)
            .ok_or_else(|| SyntaxError::not_found(name, path))
    }

    pub fn resolver(&self) -> ProjectResolver<'_> {
        ProjectResolver::new(self)
    }
}

/// swc's AST drops recursively; nested modules are released on a grown stack.
impl Drop for Project {
    fn drop(&mut self) {
        let units = std::mem::take(&mut self.units);
        stacker::maybe_grow(DROP_RED_ZONE, DROP_STACK_SIZE, move || drop(units));
    }
}

/// Specifiers of runtime imports and re-exports that point into the project.
fn local_specifiers(module: &Module) -> impl Iterator<Item = &str> {
    module.body.iter().filter_map(|item| {
        let spec = match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) if !import.type_only => {
                &import.src.value
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportAll(export)) if !export.type_only => {
                &export.src.value
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(named)) if !named.type_only => {
                &named.src.as_ref()?.value
            }
            _ => return None,
        };
        let spec: &str = spec;
        is_local_spec(spec).then_some(spec)
    })
}
