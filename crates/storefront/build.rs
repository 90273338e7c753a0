//! Fingerprints the stylesheet.
//!
//! `static/css/main.css` is copied to `static/css/derived/main.<hash>.css`
//! so the page can link a URL that changes whenever the file does.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex digits of the SHA-256 kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    fingerprint_css();
}

/// Exposes the short hash as `CSS_HASH` for `env!("CSS_HASH")`.
#[allow(clippy::expect_used)]
fn fingerprint_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_css = Path::new(&manifest_dir).join("static/css");
    let source = static_css.join("main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", source.display());
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived = static_css.join("derived");
    fs::create_dir_all(&derived).expect("Failed to create derived CSS directory");
    fs::copy(&source, derived.join(format!("main.{short}.css")))
        .expect("Failed to copy CSS to derived directory");
}
