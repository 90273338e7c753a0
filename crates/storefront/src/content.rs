//! Markdown-based legal pages.
//!
//! Pages live in `content/pages/{slug}.{lang}.md` with YAML frontmatter and
//! are loaded once at startup. Lookups fall back to the English file when a
//! translation is missing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use max_publishing_core::Language;
use serde::Deserialize;

/// Page frontmatter.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub language: Language,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded pages in memory
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: Arc<HashMap<(String, Language), Page>>,
}

impl ContentStore {
    /// Load all pages below `content_dir/pages`.
    ///
    /// A missing directory yields an empty store. Files that fail to parse
    /// are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("pages");
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(Self::default());
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match load_page(&path) {
                    Ok(page) => {
                        tracing::info!(slug = %page.slug, language = %page.language, "Loaded page");
                        pages.insert((page.slug.clone(), page.language), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Get a page in `language`, falling back to English.
    #[must_use]
    pub fn page(&self, slug: &str, language: Language) -> Option<&Page> {
        self.pages
            .get(&(slug.to_string(), language))
            .or_else(|| self.pages.get(&(slug.to_string(), Language::En)))
    }

    /// Number of loaded page files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Load a single page. The file stem is `{slug}.{lang}`.
fn load_page(path: &Path) -> Result<Page, ContentError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;
    let (slug, language) = split_stem(stem)?;

    let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
    let (meta, body) = parse_page(&content)?;

    Ok(Page {
        slug,
        language,
        meta,
        content_html: render_markdown(&body),
    })
}

fn split_stem(stem: &str) -> Result<(String, Language), ContentError> {
    let (slug, code) = stem
        .rsplit_once('.')
        .ok_or_else(|| ContentError::Parse(format!("missing language suffix in `{stem}`")))?;
    let language = Language::parse(code).map_err(|e| ContentError::Parse(e.to_string()))?;
    Ok((slug.to_string(), language))
}

fn parse_page(content: &str) -> Result<(PageMeta, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PageMeta> = matter
        .parse(content)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;
    Ok((meta, parsed.content))
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.header_ids = Some(String::new());

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: Privacy Policy\nupdated_at: 2026-01-15\n---\n\n# Data\n\nWe keep **no** database.\n";

    #[test]
    fn test_split_stem() {
        let (slug, language) = split_stem("privacy.it").unwrap();
        assert_eq!(slug, "privacy");
        assert_eq!(language, Language::It);
        assert!(split_stem("privacy").is_err());
        assert!(split_stem("privacy.de").is_err());
    }

    #[test]
    fn test_parse_page() {
        let (meta, body) = parse_page(SAMPLE).unwrap();
        assert_eq!(meta.title, "Privacy Policy");
        assert_eq!(meta.updated_at, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert!(body.contains("# Data"));
    }

    #[test]
    fn test_parse_page_requires_frontmatter() {
        assert!(parse_page("# No frontmatter").is_err());
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("We keep **no** database.");
        assert!(html.contains("<strong>no</strong>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_load_missing_dir_is_empty() {
        let store = ContentStore::load(Path::new("/nonexistent/content")).unwrap();
        assert!(store.is_empty());
        assert!(store.page("privacy", Language::En).is_none());
    }

    #[test]
    fn test_load_bundled_pages() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(&dir).unwrap();

        let en = store.page("privacy", Language::En).unwrap();
        let it = store.page("privacy", Language::It).unwrap();
        assert_eq!(en.language, Language::En);
        assert_eq!(it.language, Language::It);
        assert_ne!(en.meta.title, it.meta.title);
        assert!(store.page("terms", Language::It).is_some());
        assert!(store.page("missing", Language::En).is_none());
    }
}
