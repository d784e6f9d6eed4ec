use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

/// Find pages under `root` matching `include` and not `exclude`.
///
/// Globs match the path relative to `root` with `/` separators. The result is relative to
/// `root` and sorted.
pub fn discover_pages(
    root: &Utf8Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let include_set = build_globset(include).context("compile include globset")?;
    let exclude_set = build_globset(exclude).context("compile exclude globset")?;

    let mut out = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walk {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(abs) = Utf8PathBuf::from_path_buf(entry.into_path()) else {
            tracing::debug!("skipping non-UTF-8 path");
            continue;
        };
        let rel = abs
            .strip_prefix(root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");

        if include_set.is_match(&rel) && !exclude_set.is_match(&rel) {
            out.push(Utf8PathBuf::from(rel));
        }
    }

    out.sort();
    out.dedup();
    Ok(out)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}
