use doorconv_catalog::{DoorGfx, DoorSpawn, YamlError, load_entries, write_entries};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn sample_spawns() -> Vec<DoorSpawn> {
    vec![
        DoorSpawn {
            id: 1,
            gfxid: 92,
            x: 32_568,
            y: 32_800,
            map_id: 4,
            hp: 0,
            keeper: 0,
            is_opening: false,
        },
        DoorSpawn {
            id: 2,
            gfxid: 1336,
            x: 33_139,
            y: 32_772,
            map_id: 4,
            hp: 1200,
            keeper: 40_010,
            is_opening: true,
        },
    ]
}

#[test]
fn load_gfx_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "door_gfx.yaml",
        r#"
door_gfxs:
  - gfxid: 101
    direction: 2
    left_edge_offset: -5
    right_edge_offset: 10
  - gfxid: 92
    direction: 0
    left_edge_offset: 0
    right_edge_offset: 0
"#,
    );

    let gfxs: Vec<DoorGfx> = load_entries(&tmp.path().join("door_gfx.yaml")).unwrap();
    assert_eq!(gfxs.len(), 2);
    assert_eq!(gfxs[0].gfxid, 101);
    assert_eq!(gfxs[0].left_edge_offset, -5);
    assert_eq!(gfxs[1].gfxid, 92);
}

#[test]
fn written_document_loads_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("door_spawn.yaml");
    let spawns = sample_spawns();

    write_entries(&spawns, &path).unwrap();
    let loaded: Vec<DoorSpawn> = load_entries(&path).unwrap();
    assert_eq!(loaded, spawns);
    assert!(!tmp.path().join("door_spawn.yaml.tmp").exists());
}

#[test]
fn write_overwrites_existing_document() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("door_spawn.yaml");
    write_yaml(tmp.path(), "door_spawn.yaml", "stale content that is much longer\n");

    write_entries::<DoorSpawn>(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "doors:\n");
}

#[test]
fn empty_list_loads_as_empty() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "door_gfx.yaml", "door_gfxs:\n");

    let gfxs: Vec<DoorGfx> = load_entries(&tmp.path().join("door_gfx.yaml")).unwrap();
    assert!(gfxs.is_empty());
}

#[test]
fn missing_root_key_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "door_gfx.yaml", "doors:\n");

    let err = load_entries::<DoorGfx>(&tmp.path().join("door_gfx.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::MissingKey { key: "door_gfxs", .. }));
}

#[test]
fn failed_replace_leaves_no_staging_file() {
    let tmp = TempDir::new().unwrap();
    // A directory at the destination makes the final rename fail.
    let path = tmp.path().join("door_spawn.yaml");
    fs::create_dir(&path).unwrap();

    let err = write_entries(&sample_spawns(), &path).unwrap_err();
    assert!(matches!(err, YamlError::Io { .. }));
    assert!(path.is_dir());
    assert!(!tmp.path().join("door_spawn.yaml.tmp").exists());
}

#[test]
fn write_into_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("no-such-dir").join("door_spawn.yaml");

    let err = write_entries(&sample_spawns(), &path).unwrap_err();
    assert!(matches!(err, YamlError::Io { .. }));
    assert!(!path.exists());
}
