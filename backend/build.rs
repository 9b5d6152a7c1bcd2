use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const STATIC_ROOT: &str = "static";

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\" /><title>Gallery Admin</title></head>\n<body><p>The frontend has not been built yet. Run <code>trunk build</code> in <code>frontend/</code> and rebuild the backend.</p></body>\n</html>\n";

/// Refreshes `static/dist` from the trunk output so `include_dir!` embeds the
/// latest bundle.
fn embed_frontend_build(dist: &Path, static_root: &Path) {
    let _ = fs::remove_dir_all(static_root);
    fs::create_dir_all(static_root).expect("create backend/static");
    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .copy_inside(true);
    fs_extra::dir::copy(dist, static_root, &options)
        .expect("copy frontend/dist into backend/static");
}

/// `include_dir!` fails on a missing directory, so an unbuilt frontend gets a
/// one page stand-in.
fn ensure_placeholder_bundle(static_root: &Path) {
    let bundle = static_root.join("dist");
    let index = bundle.join("index.html");
    if index.exists() {
        return;
    }
    fs::create_dir_all(&bundle).expect("create backend/static/dist");
    fs::write(index, PLACEHOLDER_INDEX).expect("write placeholder index.html");
}

fn main() {
    let dist = Path::new(FRONTEND_DIST);
    let static_root = Path::new(STATIC_ROOT);

    if dist.exists() {
        embed_frontend_build(dist, static_root);
    } else {
        ensure_placeholder_bundle(static_root);
    }
    println!("cargo:rerun-if-changed={}", FRONTEND_DIST);
}
