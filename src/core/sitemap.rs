//! Sitemap of the comparison page: the bare page plus one URL for every
//! ordered pair of phones, self-pairs included.

use crate::domain::model::Catalog;
use crate::utils::error::{CompareError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use url::Url;

pub const BASE_PRIORITY: f64 = 1.0;
pub const DEFAULT_PAIR_PRIORITY: f64 = 0.7;
pub const DEFAULT_CHANGE_FREQUENCY: &str = "daily";

/// Values allowed by the sitemap protocol for `<changefreq>`.
pub const CHANGE_FREQUENCIES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: String,
    pub priority: f64,
}

#[derive(Debug, Clone)]
pub struct SitemapOptions {
    pub change_frequency: String,
    pub pair_priority: f64,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            change_frequency: DEFAULT_CHANGE_FREQUENCY.to_string(),
            pair_priority: DEFAULT_PAIR_PRIORITY,
        }
    }
}

pub fn build_sitemap(
    base_url: &str,
    catalog: &Catalog,
    now: DateTime<Utc>,
    options: &SitemapOptions,
) -> Result<Vec<SitemapEntry>> {
    let base = Url::parse(base_url).map_err(|e| CompareError::InvalidConfigValueError {
        field: "site.base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let mut entries = Vec::with_capacity(1 + catalog.len() * catalog.len());
    entries.push(SitemapEntry {
        url: base.to_string(),
        last_modified: now,
        change_frequency: options.change_frequency.clone(),
        priority: BASE_PRIORITY,
    });

    for primary in catalog.phones() {
        for secondary in catalog.phones() {
            let mut url = base.clone();
            url.query_pairs_mut()
                .clear()
                .append_pair("primary", &primary.name)
                .append_pair("secondary", &secondary.name);
            entries.push(SitemapEntry {
                url: url.to_string(),
                last_modified: now,
                change_frequency: options.change_frequency.clone(),
                priority: options.pair_priority,
            });
        }
    }

    tracing::debug!("Built sitemap with {} entries", entries.len());
    Ok(entries)
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Shortest decimal form, always with a fractional part (`1.0`, `0.7`, `0.75`).
fn format_priority(priority: f64) -> String {
    let text = priority.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("<url>\n");
        xml.push_str(&format!("<loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "<lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        xml.push_str(&format!(
            "<changefreq>{}</changefreq>\n",
            escape_xml(&entry.change_frequency)
        ));
        xml.push_str(&format!("<priority>{}</priority>\n", format_priority(entry.priority)));
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
