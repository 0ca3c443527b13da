//! Temporary workspaces holding place and profile files.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use vibemap_core::Place;

#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        fs::write(path.as_std_path(), contents).expect("write fixture file");
        path
    }

    pub(super) fn write_places(&self, name: &str, places: &[Place]) -> Utf8PathBuf {
        let payload = serde_json::to_vec_pretty(places).expect("serialize places");
        self.write(name, &payload)
    }

    pub(super) fn write_outdoorsy_profile(&self, name: &str) -> Utf8PathBuf {
        self.write(
            name,
            br#"{"relax":0.0,"activity":1.0,"novelty":0.0,"outdoor":1.0,"crowd_averse":0.0}"#,
        )
    }
}

/// Four places around a Tokyo neighbourhood, each with a category preset.
pub(super) fn neighbourhood() -> Vec<Place> {
    vec![
        Place::at(1, 35.0, 139.0)
            .with_name("City Museum")
            .with_description("Quiet galleries")
            .with_category("museum"),
        Place::at(2, 35.02, 139.0)
            .with_name("Riverside Park")
            .with_description("Open lawns by the river")
            .with_category("park"),
        Place::at(3, 35.1, 139.1)
            .with_name("Thrill Land")
            .with_category("amusement"),
        Place::at(4, 35.001, 139.001)
            .with_name("Corner Cafe")
            .with_category("cafe")
            .with_tag("study"),
    ]
}

/// Identifiers of a JSON array of places or scored places, in order.
pub(super) fn output_ids(stdout: &[u8]) -> Vec<u64> {
    let value: serde_json::Value = serde_json::from_slice(stdout).expect("stdout is JSON");
    value
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|entry| entry["id"].as_u64().expect("numeric id"))
        .collect()
}
