//! Subcommand implementations.
//!
//! Each takes its output sink explicitly so tests can capture it.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use cubestage_codec::{decode_slice, encode_vec_pretty};
use cubestage_grid::StageDocument;
use cubestage_session::{copy_stages, EditorConfig, FsStore};
use log::{info, warn};

fn read_stage(path: &Path) -> Result<StageDocument> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode_slice(&bytes).with_context(|| format!("decoding {}", path.display()))
}

/// `info`: summary of one stage.
pub fn info(stage: &Path, out: &mut impl Write) -> Result<()> {
    let doc = read_stage(stage)?;
    let meta = &doc.meta;
    let counts = doc.grid.kind_counts();
    let [r, g, b] = meta.appearance.color.to_array();
    let [br, bg, bb] = meta.appearance.bg_color.to_array();

    writeln!(out, "{}", stage.display())?;
    writeln!(out, "  size        {} x {}", doc.width(), doc.length())?;
    writeln!(out, "  color       [{r}, {g}, {b}]")?;
    writeln!(out, "  bg_color    [{br}, {bg}, {bb}]")?;
    writeln!(out, "  x_offset    {}", meta.x_offset)?;
    writeln!(out, "  pickable    {}", meta.pickable)?;
    writeln!(out, "  camera      {}", meta.camera)?;
    writeln!(out, "  light_tween {}", meta.light_tween)?;
    writeln!(
        out,
        "  speeds      build={} collapse={} auto_collapse={}",
        meta.tunables.build_speed, meta.tunables.collapse_speed, meta.tunables.auto_collapse
    )?;
    writeln!(
        out,
        "  variants    items={} movers={} switches={} fallers={} oneways={}",
        counts.items, counts.movers, counts.switches, counts.fallers, counts.oneways
    )?;
    writeln!(out, "  holes       {}", counts.holes)?;
    Ok(())
}

/// `check`: list holes carrying variants. `Ok(false)` if there are any.
pub fn check(stage: &Path, out: &mut impl Write) -> Result<bool> {
    let doc = read_stage(stage)?;
    let invalid = doc.grid.invalid_holes();
    for pos in &invalid {
        let kind = doc
            .grid
            .kind_at(pos.x, pos.z)
            .map(|k| k.to_string())
            .unwrap_or_default();
        writeln!(out, "{}: hole at {pos} carries {kind}", stage.display())?;
    }
    if invalid.is_empty() {
        writeln!(out, "{}: ok", stage.display())?;
    } else {
        warn!("{}: {} invalid holes", stage.display(), invalid.len());
    }
    Ok(invalid.is_empty())
}

/// `normalize`: decode, validate and write pretty JSON back.
///
/// Returns the number of variants stripped from holes.
pub fn normalize(stage: &Path, output: Option<&Path>) -> Result<usize> {
    let mut doc = read_stage(stage)?;
    let stripped = doc.validate();
    let bytes = encode_vec_pretty(&doc).context("encoding stage")?;
    let target = output.unwrap_or(stage);
    fs::write(target, bytes).with_context(|| format!("writing {}", target.display()))?;
    info!(
        "normalized {} -> {} ({stripped} invalid variants stripped)",
        stage.display(),
        target.display()
    );
    Ok(stripped)
}

/// `sync`: copy every configured stage into its deploy path.
///
/// Stages are copied byte for byte without being decoded.
pub fn sync(config: &Path, root: Option<&Path>, out: &mut impl Write) -> Result<usize> {
    let bytes = fs::read(config).with_context(|| format!("reading {}", config.display()))?;
    let params = EditorConfig::from_params_slice(&bytes)
        .with_context(|| format!("loading {}", config.display()))?;
    let root = match root {
        Some(dir) => dir.to_path_buf(),
        None => config.parent().unwrap_or(Path::new("")).to_path_buf(),
    };
    let copied = copy_stages(&params, &mut FsStore::new(root))?;
    writeln!(out, "copied {copied} stages to {}", params.copy_path.display())?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubestage_test_utils::fixtures::{FULL_STAGE, PARAMS, SCENARIO_ITEM};
    use tempfile::tempdir;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ── info / check ────────────────────────────────────────────

    #[test]
    fn info_prints_counts() {
        let dir = tempdir().unwrap();
        let stage = dir.path().join("full.json");
        fs::write(&stage, FULL_STAGE).unwrap();

        let mut buf = Vec::new();
        info(&stage, &mut buf).unwrap();
        let text = output(buf);
        assert!(text.contains("size        4 x 3"));
        assert!(text.contains("items=1 movers=1 switches=1 fallers=1 oneways=1"));
        assert!(text.contains("camera      far"));
        assert!(text.contains("holes       1"));
    }

    #[test]
    fn check_flags_variant_holes() {
        let dir = tempdir().unwrap();
        let stage = dir.path().join("bad.json");
        fs::write(
            &stage,
            r#"{"body": [[-1, 0]], "items": [[0, 0, 0]], "color": [0, 0, 0], "bg_color": [0, 0, 0]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        assert!(!check(&stage, &mut buf).unwrap());
        assert!(output(buf).contains("hole at (0, 0) carries item"));
    }

    #[test]
    fn check_passes_clean_stage() {
        let dir = tempdir().unwrap();
        let stage = dir.path().join("ok.json");
        fs::write(&stage, SCENARIO_ITEM).unwrap();
        assert!(check(&stage, &mut Vec::new()).unwrap());
    }

    #[test]
    fn missing_file_has_context() {
        let dir = tempdir().unwrap();
        let err = info(&dir.path().join("nope.json"), &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }

    // ── normalize ───────────────────────────────────────────────

    #[test]
    fn normalize_strips_and_writes_output() {
        let dir = tempdir().unwrap();
        let stage = dir.path().join("in.json");
        let out = dir.path().join("out.json");
        fs::write(
            &stage,
            r#"{"body": [[-1, 2]], "items": [[0, 0, 0], [1, 0, 0]], "color": [0, 0, 0],
                "bg_color": [0, 0, 0], "build_speed": 0}"#,
        )
        .unwrap();

        assert_eq!(normalize(&stage, Some(&out)).unwrap(), 1);
        let doc = read_stage(&out).unwrap();
        assert!(!doc.grid.is_item(0, 0));
        assert!(doc.grid.is_item(1, 0));
        assert!(!fs::read_to_string(&out).unwrap().contains("build_speed"));
    }

    #[test]
    fn normalize_in_place_is_stable() {
        let dir = tempdir().unwrap();
        let stage = dir.path().join("s.json");
        fs::write(&stage, FULL_STAGE).unwrap();

        normalize(&stage, None).unwrap();
        let first = fs::read(&stage).unwrap();
        normalize(&stage, None).unwrap();
        assert_eq!(fs::read(&stage).unwrap(), first);
    }

    // ── sync ────────────────────────────────────────────────────

    #[test]
    fn sync_copies_relative_to_config() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("params.json");
        fs::write(&config, PARAMS).unwrap();
        fs::write(dir.path().join("stage01.json"), SCENARIO_ITEM).unwrap();
        fs::write(dir.path().join("stage02.json"), FULL_STAGE).unwrap();

        let mut buf = Vec::new();
        assert_eq!(sync(&config, None, &mut buf).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("deploy/stage02.json")).unwrap(),
            FULL_STAGE
        );
        assert!(output(buf).contains("copied 2 stages"));
    }

    #[test]
    fn sync_honors_root_override() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        let config = dir.path().join("params.json");
        fs::write(&config, PARAMS).unwrap();
        fs::write(assets.join("stage01.json"), SCENARIO_ITEM).unwrap();
        fs::write(assets.join("stage02.json"), SCENARIO_ITEM).unwrap();

        sync(&config, Some(&assets), &mut Vec::new()).unwrap();
        assert!(assets.join("deploy/stage01.json").is_file());
    }

    #[test]
    fn sync_copies_undecodable_stages() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("params.json");
        fs::write(&config, PARAMS).unwrap();
        fs::write(dir.path().join("stage01.json"), "{ not json").unwrap();
        fs::write(dir.path().join("stage02.json"), FULL_STAGE).unwrap();

        assert_eq!(sync(&config, None, &mut Vec::new()).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("deploy/stage01.json")).unwrap(),
            "{ not json"
        );
    }
}
