//! Round-trip tests: build a baseline from a directory tree, load it back,
//! and check keys and digests against the tree and the hasher directly.

use intact::store::{BaselineStore, SledBaselineStore};
use intact::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use intact::tree::BaselineBuilder;
use std::fs;
use tempfile::TempDir;

fn scan_into(root: &std::path::Path, store_dir: &TempDir) -> SledBaselineStore {
    let store = SledBaselineStore::open(store_dir.path().join("store")).unwrap();
    BaselineBuilder::new(root.to_path_buf())
        .build(&store)
        .unwrap();
    store
}

#[test]
fn roundtrip_keys_are_relative_forward_slash_paths() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();

    fs::write(root.join("top.txt"), "top").unwrap();
    fs::create_dir_all(root.join("a").join("b")).unwrap();
    fs::write(root.join("a").join("mid.txt"), "mid").unwrap();
    fs::write(root.join("a").join("b").join("deep.txt"), "deep").unwrap();
    fs::write(root.join(".hidden"), "hidden files are included").unwrap();

    let store_dir = TempDir::new().unwrap();
    let store = scan_into(root, &store_dir);

    let baseline = store.load_all().unwrap();
    let keys: Vec<_> = baseline.keys().cloned().collect();
    assert_eq!(keys, vec![".hidden", "a/b/deep.txt", "a/mid.txt", "top.txt"]);
}

#[test]
fn roundtrip_digests_match_direct_hashing() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();

    fs::write(root.join("x.bin"), vec![0u8; 3000]).unwrap();
    fs::write(root.join("y.txt"), "text content").unwrap();

    let store_dir = TempDir::new().unwrap();
    let store = scan_into(root, &store_dir);
    let baseline = store.load_all().unwrap();

    for (rel, digest) in &baseline {
        let direct = hasher::hash_file(&root.join(rel), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(digest, &direct, "digest mismatch for {}", rel);
    }
}

#[test]
fn rescan_of_unchanged_tree_yields_identical_baseline() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();

    fs::write(root.join("a.txt"), "stable").unwrap();
    fs::create_dir(root.join("d")).unwrap();
    fs::write(root.join("d").join("b.txt"), "also stable").unwrap();

    let store_dir1 = TempDir::new().unwrap();
    let store_dir2 = TempDir::new().unwrap();
    let baseline1 = scan_into(root, &store_dir1).load_all().unwrap();
    let baseline2 = scan_into(root, &store_dir2).load_all().unwrap();

    assert_eq!(baseline1, baseline2);
}

#[test]
fn tiny_chunk_size_produces_same_baseline() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();
    fs::write(root.join("file.bin"), vec![42u8; 1000]).unwrap();

    let store_dir1 = TempDir::new().unwrap();
    let store1 = SledBaselineStore::open(store_dir1.path().join("store")).unwrap();
    BaselineBuilder::new(root.to_path_buf())
        .with_chunk_size(7)
        .build(&store1)
        .unwrap();

    let store_dir2 = TempDir::new().unwrap();
    let store2 = scan_into(root, &store_dir2);

    assert_eq!(store1.load_all().unwrap(), store2.load_all().unwrap());
}

#[test]
fn empty_tree_builds_empty_baseline() {
    let tree = TempDir::new().unwrap();
    let store_dir = TempDir::new().unwrap();
    let store = scan_into(tree.path(), &store_dir);

    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn bounded_worker_pool_matches_default_pool() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();
    for i in 0..20 {
        fs::write(root.join(format!("f{:02}.txt", i)), format!("content {}", i)).unwrap();
    }

    let store_dir1 = TempDir::new().unwrap();
    let store1 = SledBaselineStore::open(store_dir1.path().join("store")).unwrap();
    BaselineBuilder::new(root.to_path_buf())
        .with_workers(Some(2))
        .build(&store1)
        .unwrap();

    let store_dir2 = TempDir::new().unwrap();
    let store2 = scan_into(root, &store_dir2);

    assert_eq!(store1.load_all().unwrap(), store2.load_all().unwrap());
}
