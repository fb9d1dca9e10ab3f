//! On-disk layout of a built index: `index.bin` and `docs.bin` hold the
//! bincode-serialized positional index and document store, `meta.json` a
//! small human-readable header.

use crate::index::PositionalIndex;
use crate::store::DocStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u32,
    pub created_at: String,
    pub version: u32,
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn index(&self) -> PathBuf {
        self.root.join("index.bin")
    }
    fn docs(&self) -> PathBuf {
        self.root.join("docs.bin")
    }
    fn meta(&self) -> PathBuf {
        self.root.join("meta.json")
    }
}

pub fn save_index(paths: &IndexPaths, index: &PositionalIndex) -> Result<()> {
    create_dir_all(&paths.root)?;
    let f = BufWriter::new(File::create(paths.index())?);
    bincode::serialize_into(f, index)?;
    Ok(())
}

pub fn load_index(paths: &IndexPaths) -> Result<PositionalIndex> {
    let f = BufReader::new(File::open(paths.index())?);
    let index = bincode::deserialize_from(f)?;
    Ok(index)
}

pub fn save_docs(paths: &IndexPaths, docs: &DocStore) -> Result<()> {
    create_dir_all(&paths.root)?;
    let f = BufWriter::new(File::create(paths.docs())?);
    bincode::serialize_into(f, docs)?;
    Ok(())
}

pub fn load_docs(paths: &IndexPaths) -> Result<DocStore> {
    let f = BufReader::new(File::open(paths.docs())?);
    let docs = bincode::deserialize_from(f)?;
    Ok(docs)
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile> {
    let f = BufReader::new(File::open(paths.meta())?);
    let meta = serde_json::from_reader(f)?;
    Ok(meta)
}

/// Load everything needed to search: index, document store, and meta.
pub fn load_all(paths: &IndexPaths) -> Result<(PositionalIndex, DocStore, MetaFile)> {
    let index = load_index(paths)?;
    let docs = load_docs(paths)?;
    let meta = load_meta(paths)?;
    tracing::debug!(num_docs = meta.num_docs, root = %paths.root.display(), "loaded index");
    Ok((index, docs, meta))
}
