//! HTML minification
//!
//! Wraps `minify-html`. Comments are dropped and whitespace between block
//! and table elements is removed. The doctype, the `<html>`/`<head>` opening
//! tags and every closing tag are kept so the page stays readable to tools
//! that scrape it.

use crate::error::MinifyError;
use minify_html::Cfg;

/// Trait for markup minifiers
pub trait Minifier {
    /// Compacts a complete markup document
    fn minify(&self, markup: &str) -> Result<String, MinifyError>;
}

/// HTML minifier backed by `minify-html`
pub struct HtmlMinifier {
    cfg: Cfg,
}

impl HtmlMinifier {
    /// Create a new HTML minifier
    pub fn new() -> Self {
        let mut cfg = Cfg::new();
        cfg.do_not_minify_doctype = true;
        cfg.keep_closing_tags = true;
        cfg.keep_html_and_head_opening_tags = true;
        cfg.minify_css = true;
        Self { cfg }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, markup: &str) -> Result<String, MinifyError> {
        let bytes = minify_html::minify(markup.as_bytes(), &self.cfg);
        String::from_utf8(bytes).map_err(|source| MinifyError::InvalidUtf8 { source })
    }
}
