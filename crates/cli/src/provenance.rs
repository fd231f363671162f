use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of `<artifact-stem>.provenance.json`.
#[derive(Serialize)]
struct Provenance<'a> {
    code_rev: String,
    gm_version: &'static str,
    callsite: Callsite,
    query: &'a str,
    params: &'a Value,
    outputs: Vec<String>,
}

impl<'a> Provenance<'a> {
    fn capture(
        artifact: &Path,
        query: &'a str,
        params: &'a Value,
        callsite: &'static Location<'static>,
    ) -> Self {
        Self {
            code_rev: current_git_rev(),
            gm_version: gm::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            query,
            params,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, query: &str, params: &Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let doc = Provenance::capture(artifact, query, params, Location::caller());
    let path = provenance_path(artifact);
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?,
        _ => {}
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().unwrap_or(OsStr::new("result"));
    artifact.with_file_name(format!("{}.provenance.json", stem.to_string_lossy()))
}

/// Revision of the running code: `GIT_COMMIT` (build time, then runtime),
/// falling back to `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned())
}
