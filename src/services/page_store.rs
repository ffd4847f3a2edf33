use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::{debug, info, error};
use crate::errors::WikiError;
use crate::types::{Page, Title};

/// Stores each page as `<title>.txt` inside the data directory.
///
/// There is no locking: two saves of the same title race and the last
/// write wins.
#[derive(Debug, Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a store rooted at `data_dir` without touching the filesystem
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    /// Create a store, making the data directory if it is missing
    pub fn open(data_dir: PathBuf) -> Result<Self, WikiError> {
        fs::create_dir_all(&data_dir).map_err(|e| {
            error!("Failed to create data directory {:?}: {}", data_dir, e);
            WikiError::Io(e)
        })?;
        info!("Page store opened at {:?}", data_dir);
        Ok(Self::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File holding the page called `title`
    pub fn path_for(&self, title: &Title) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Read a page. Every read failure is reported as `PageNotFound`.
    pub fn load(&self, title: &Title) -> Result<Page, WikiError> {
        let path = self.path_for(title);
        match fs::read(&path) {
            Ok(body) => {
                debug!("Loaded page '{}', {} bytes", title, body.len());
                Ok(Page::new(title.clone(), body))
            }
            Err(e) => {
                debug!("Could not load page '{}' from {:?}: {}", title, path, e);
                Err(WikiError::PageNotFound(title.to_string()))
            }
        }
    }

    /// Replace the page's file with its current body
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.path_for(&page.title);
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path).map_err(|e| {
            error!("Failed to open {:?} for writing: {}", path, e);
            WikiError::Io(e)
        })?;
        file.write_all(&page.body).map_err(|e| {
            error!("Failed to write {:?}: {}", path, e);
            WikiError::Io(e)
        })?;

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }
}
