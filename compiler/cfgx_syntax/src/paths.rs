//! Module specifier handling: which specifiers are loaded, and which files
//! they may name.

use std::path::{Component, Path, PathBuf};

const FILE_EXTS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs"];
const INDEX_FILES: &[&str] = &[
    "index.ts",
    "index.tsx",
    "index.mts",
    "index.cts",
    "index.js",
    "index.jsx",
    "index.mjs",
];

/// Relative and absolute specifiers point into the project; bare ones name
/// packages, which are never loaded.
pub(crate) fn is_local_spec(spec: &str) -> bool {
    spec.starts_with("./") || spec.starts_with("../") || spec.starts_with('/')
}

/// Files a local specifier may refer to, most specific first.
pub(crate) fn candidate_paths(importer: &Path, spec: &str) -> Vec<PathBuf> {
    let spec = spec.split(['?', '#']).next().unwrap_or(spec);
    let base_dir = importer.parent().unwrap_or_else(|| Path::new(""));
    let base = normalize(&base_dir.join(spec.trim_end_matches('/')));

    let mut candidates = vec![base.clone()];
    match base.extension().and_then(|ext| ext.to_str()) {
        // TypeScript ESM style: `./models.js` names `models.ts`.
        Some(ext) if matches!(ext, "js" | "jsx" | "mjs") => {
            candidates.push(base.with_extension("ts"));
            candidates.push(base.with_extension("tsx"));
            candidates.push(base.with_extension("mts"));
        }
        Some(_) => {}
        None => {
            candidates.extend(FILE_EXTS.iter().map(|ext| base.with_extension(ext)));
            candidates.extend(INDEX_FILES.iter().map(|index| base.join(index)));
        }
    }
    candidates
}

/// Lexically resolve `.` and `..` components.
///
/// Works the same for on-disk and in-memory projects, so both key their
/// module index identically.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
