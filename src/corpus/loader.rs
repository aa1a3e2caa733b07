// file: src/corpus/loader.rs
// description: corpus loading from files and directories with filtering
// reference: https://docs.rs/walkdir

use crate::config::CorpusConfig;
use crate::corpus::pdf::PdfLoader;
use crate::error::{Result, RetrieverError};
use crate::models::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct DocumentLoader {
    config: CorpusConfig,
}

impl DocumentLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Load a single document for the QA pipeline. PDF files go through
    /// text extraction, everything else is read as UTF-8.
    pub fn load_document(&self, path: &Path) -> Result<Document> {
        self.check_size(path)?;

        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

        let content = if is_pdf {
            PdfLoader::extract_text(path)?
        } else {
            fs::read_to_string(path).map_err(|source| RetrieverError::FileOperation {
                path: path.to_path_buf(),
                source,
            })?
        };

        if content.trim().is_empty() {
            return Err(RetrieverError::Corpus(format!(
                "document is empty: {}",
                path.display()
            )));
        }

        info!("Loaded {} ({} bytes)", path.display(), content.len());
        Ok(Document::new(path.display().to_string(), content))
    }

    /// Load a corpus for lexical search. A file yields one document per
    /// non-empty line; a directory yields one document per readable text
    /// file under it.
    pub fn load_corpus(&self, path: &Path) -> Result<Vec<String>> {
        let documents = if path.is_dir() {
            self.load_directory(path)?
        } else {
            self.load_corpus_file(path)?
        };

        if documents.is_empty() {
            return Err(RetrieverError::Corpus(format!(
                "no documents found in {}",
                path.display()
            )));
        }

        info!("Loaded corpus of {} documents", documents.len());
        Ok(documents)
    }

    /// The built-in knowledge base from configuration.
    pub fn builtin_corpus(&self) -> Result<Vec<String>> {
        if self.config.documents.is_empty() {
            return Err(RetrieverError::Corpus(
                "configured corpus is empty".to_string(),
            ));
        }
        Ok(self.config.documents.clone())
    }

    fn load_corpus_file(&self, path: &Path) -> Result<Vec<String>> {
        self.check_size(path)?;

        let content = fs::read_to_string(path).map_err(|source| RetrieverError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn load_directory(&self, root: &Path) -> Result<Vec<String>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if self.check_size(path).is_err() {
                debug!("Skipping oversized file: {}", path.display());
                continue;
            }

            match fs::read_to_string(path) {
                Ok(content) if !content.trim().is_empty() => documents.push(content),
                Ok(_) => debug!("Skipping empty file: {}", path.display()),
                Err(e) => debug!("Skipping unreadable file {}: {}", path.display(), e),
            }
        }

        Ok(documents)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let suffix = pattern.replace("*.", ".").replace("/*", "/");
                if path_str.ends_with(&suffix) || path_str.contains(&suffix) {
                    return true;
                }
            } else if path_str.contains(pattern) {
                return true;
            }
        }

        false
    }

    fn check_size(&self, path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|source| RetrieverError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;
        if metadata.len() > max_size {
            return Err(RetrieverError::Validation(format!(
                "file exceeds {} MB limit: {}",
                self.config.max_file_size_mb,
                path.display()
            )));
        }

        Ok(())
    }
}
