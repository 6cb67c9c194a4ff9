//! Build script for the site crate.
//!
//! Content-hashes the stylesheet so templates can link an immutable
//! filename and the asset can be cached forever.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    // The hash lands in templates via env!("CSS_HASH")
    match hash_stylesheet(&css_path) {
        Ok(hash) => println!("cargo:rustc-env=CSS_HASH={hash}"),
        Err(e) => {
            // Tolerate a missing stylesheet so a fresh checkout still builds
            println!("cargo:warning=Could not hash main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=dev");
        }
    }
}

/// Hash the stylesheet and copy it to `static/css/derived/main.<hash>.css`.
///
/// Returns the first 8 hex characters of the SHA-256 of the file contents.
fn hash_stylesheet(css_path: &Path) -> std::io::Result<String> {
    let content = fs::read(css_path)?;

    let digest = Sha256::digest(&content);
    let mut hash = format!("{digest:x}");
    hash.truncate(8);

    let derived = derived_path(css_path, &hash);
    if let Some(parent) = derived.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&derived, &content)?;

    Ok(hash)
}

fn derived_path(css_path: &Path, hash: &str) -> PathBuf {
    let dir = css_path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    dir.join("derived").join(format!("main.{hash}.css"))
}
