//! Build orchestration: load → shape → render → write.
//!
//! All configured pages are rendered in memory before anything is written, so
//! a bad input file leaves the output directory untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::loader;
use crate::render::render_page;
use crate::view::{self, PageView, Variant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    pub variant: String,
    pub input: String,
    pub input_sha256: String,
    pub output: String,
    pub bytes: u64,
    pub dates: usize,
    pub games: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    pub generated_at: String,
    pub out_dir: String,
    pub pages: Vec<PageReport>,
}

/// Run one full build pass. Returns the manifest that was written to
/// `<out_dir>/manifest.json`.
pub fn build(cfg: &Config) -> Result<BuildManifest> {
    let mut pending: Vec<(PathBuf, String, PageReport)> = Vec::new();

    for &variant in &cfg.variants {
        let input = Path::new(cfg.input_path(variant));
        let page = load_page(variant, input)?;
        let html = render_page(&page);
        let out_path = Path::new(&cfg.out_dir).join(variant.page_file());
        let report = PageReport {
            variant: variant.as_str().to_string(),
            input: input.display().to_string(),
            input_sha256: loader::file_sha256(input)?,
            output: out_path.display().to_string(),
            bytes: html.len() as u64,
            dates: page.sections.len(),
            games: page.sections.iter().map(|s| s.games.len()).sum(),
        };
        pending.push((out_path, html, report));
    }

    fs::create_dir_all(&cfg.out_dir)
        .with_context(|| format!("creating {}", cfg.out_dir))?;

    let mut pages = Vec::with_capacity(pending.len());
    for (path, html, report) in pending {
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        pages.push(report);
    }

    let manifest = BuildManifest {
        generated_at: crate::logging::ts_now(),
        out_dir: cfg.out_dir.clone(),
        pages,
    };
    let manifest_path = Path::new(&cfg.out_dir).join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).context("serializing manifest")?,
    )
    .with_context(|| format!("writing {}", manifest_path.display()))?;

    Ok(manifest)
}

fn load_page(variant: Variant, input: &Path) -> Result<PageView> {
    match variant {
        Variant::GoalTracker | Variant::BetTracker => {
            let dates = loader::load_dates(input)?;
            Ok(view::tracker_page(variant, &dates))
        }
        Variant::PlayoffPool => {
            let pool = loader::load_pool(input)?;
            Ok(view::pool_page(&pool))
        }
    }
}

/// Combined hash over every configured input file. The watch loop compares
/// fingerprints between passes to skip rebuilds on unchanged data.
pub fn input_fingerprint(cfg: &Config) -> Result<String> {
    let mut hasher = Sha256::new();
    for &variant in &cfg.variants {
        let path = Path::new(cfg.input_path(variant));
        hasher.update(loader::file_sha256(path)?.as_bytes());
    }
    Ok(hex::encode(hasher.finalize()))
}
