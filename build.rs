use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::env;
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

// Baked into the binary with option_env! by src/config.rs
const CONFIG_ENV: [&str; 3] = ["FARMER_SITE_TITLE", "FARMER_ORGANIZATION", "FARMER_BRAND_YEAR"];

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    for key in CONFIG_ENV {
        println!("cargo:rerun-if-env-changed={key}");
    }

    check_brand_year();
    bundle_stylesheet();
}

/// The server refuses to start with an invalid year; surface it at build time
fn check_brand_year() {
    let Ok(raw) = env::var("FARMER_BRAND_YEAR") else {
        return;
    };
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.parse::<u16>().is_err() {
        println!("cargo:warning=FARMER_BRAND_YEAR={raw:?} is not a year; the server will refuse to start");
    }
}

/// Resolve the @import chain from main.css into one minified bundle.css
fn bundle_stylesheet() {
    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(CSS_BUNDLE, css.code).expect("Failed to write bundle.css");
}
