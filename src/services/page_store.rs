use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::errors::{Result, WikiError};
use crate::services::page_format::{parse_page, serialize_page};
use crate::types::{Metadata, Page};
use crate::utils::{BOM, is_sanitized, sanitize_page_name, strip_bom};

/// Extension given to the leaf segment of a page name.
pub const PAGE_EXTENSION: &str = "txt";

/// Service mapping page names to files under the data root.
///
/// Holds no state besides its configuration; every call goes to disk.
#[derive(Debug, Clone)]
pub struct PageStore {
    data_root: PathBuf,
    separator: String,
}

impl PageStore {
    /// Create a new page store
    pub fn new(config: &Config) -> Self {
        debug!(
            "Creating PageStore with data root: {:?}",
            config.data_root
        );
        Self {
            data_root: config.data_root.clone(),
            separator: config.separator.clone(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Turn a user-supplied name into a safe page name
    pub fn sanitize(raw: &str) -> String {
        sanitize_page_name(raw)
    }

    /// Resolve a sanitized page name to its file path.
    ///
    /// `a:b:c` becomes `<data_root>/a/b/c.txt`. Names that are not already
    /// sanitized, or that have an empty segment, are rejected.
    pub fn resolve_path(&self, name: &str) -> Result<PathBuf> {
        let segments: Vec<&str> = name.split(':').collect();
        if !is_sanitized(name) || segments.iter().any(|s| s.is_empty()) {
            warn!("Rejecting page name: {:?}", name);
            return Err(WikiError::InvalidPageName {
                name: name.to_string(),
            });
        }

        let (leaf, namespace) = match segments.split_last() {
            Some(parts) => parts,
            None => {
                return Err(WikiError::InvalidPageName {
                    name: name.to_string(),
                });
            }
        };

        let mut path = self.data_root.clone();
        path.extend(namespace);
        path.push(format!("{leaf}.{PAGE_EXTENSION}"));
        Ok(path)
    }

    /// Directory holding the page's file
    pub fn namespace_of(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve_path(name)?;
        Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.data_root.clone()))
    }

    /// Check if a page exists
    pub fn exists(&self, name: &str) -> bool {
        let exists = self
            .resolve_path(name)
            .map(|path| path.is_file())
            .unwrap_or(false);
        debug!("Page exists check: {:?} -> {}", name, exists);
        exists
    }

    /// Read a page's content and metadata
    pub fn load(&self, name: &str) -> Result<Page> {
        let path = self.resolve_path(name)?;
        debug!("Loading page: {:?} (full path: {:?})", name, path);

        if !path.exists() {
            warn!("Page does not exist: {:?}", path);
            return Err(WikiError::NotFound { path });
        }

        let raw = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to read page {:?}: {}", path, e);
            WikiError::page_io(&path, e)
        })?;

        let page = self.parse(strip_bom(&raw)).inspect_err(|e| {
            error!("Failed to parse page {:?}: {}", path, e);
        })?;

        info!(
            "Loaded page {:?}, {} bytes, {} metadata keys",
            name,
            raw.len(),
            page.metadata.len()
        );
        Ok(page)
    }

    /// Write a page, creating its namespace directories first. Any previous
    /// file is replaced whole.
    pub fn save(&self, name: &str, content: &str, metadata: &Metadata) -> Result<()> {
        let path = self.resolve_path(name)?;
        debug!("Saving page: {:?} (full path: {:?})", name, path);

        if let Some(namespace) = path.parent() {
            if !namespace.is_dir() {
                fs::create_dir_all(namespace).map_err(|e| {
                    error!("Failed to create namespace {:?}: {}", namespace, e);
                    WikiError::io(namespace, e)
                })?;
                debug!("Created namespace directory: {:?}", namespace);
            }
        }

        let body = self.serialize(content, metadata)?;
        let mut bytes = String::with_capacity(body.len() + BOM.len_utf8());
        bytes.push(BOM);
        bytes.push_str(&body);

        fs::write(&path, bytes.as_bytes()).map_err(|e| {
            error!("Failed to write page {:?}: {}", path, e);
            WikiError::io(&path, e)
        })?;

        info!("Saved page {:?}, {} bytes", name, bytes.len());
        Ok(())
    }

    /// Remove a page's file
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.resolve_path(name)?;
        debug!("Deleting page: {:?} (full path: {:?})", name, path);

        if !path.exists() {
            warn!("Cannot delete missing page: {:?}", path);
            return Err(WikiError::NotFound { path });
        }

        fs::remove_file(&path).map_err(|e| {
            error!("Failed to delete page {:?}: {}", path, e);
            WikiError::page_io(&path, e)
        })?;

        info!("Deleted page {:?}", name);
        Ok(())
    }

    /// Names of the data root's immediate entries, sorted.
    ///
    /// Not recursive: pages inside namespace directories show up only as
    /// their top-level directory.
    pub fn list_all(&self) -> Result<Vec<String>> {
        debug!("Listing data root: {:?}", self.data_root);

        let entries = fs::read_dir(&self.data_root).map_err(|e| {
            error!("Failed to read data root {:?}: {}", self.data_root, e);
            WikiError::io(&self.data_root, e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => names.push(entry.file_name().to_string_lossy().to_string()),
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                }
            }
        }
        names.sort();

        info!("Listed data root, found {} entries", names.len());
        Ok(names)
    }

    /// Split raw file text into a page using this store's separator
    pub fn parse(&self, raw: &str) -> Result<Page> {
        parse_page(raw, &self.separator)
    }

    /// Join content and metadata using this store's separator
    pub fn serialize(&self, content: &str, metadata: &Metadata) -> Result<String> {
        serialize_page(content, metadata, &self.separator)
    }
}
