//! Stages the trunk output of `frontend/` under `static/dist`, where
//! `include_dir!` embeds it into the server binary.

use std::fs;
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

const FRONTEND_DIST: &str = "../frontend/dist";
const STAGING: &str = "static";

fn main() {
    println!("cargo:rerun-if-changed={}", FRONTEND_DIST);

    let staging = Path::new(STAGING);
    let source = Path::new(FRONTEND_DIST);

    if source.is_dir() {
        if staging.exists() {
            fs::remove_dir_all(staging).expect("clear stale frontend assets");
        }
        fs::create_dir_all(staging).expect("create asset staging directory");
        let options = CopyOptions::new().overwrite(true);
        copy(source, staging, &options).expect("copy frontend build output");
    }

    // Without a frontend build the server still compiles and serves the API.
    fs::create_dir_all(staging.join("dist")).expect("create embedded asset directory");
}
