//! arXiv paper search tool.
//!
//! Queries the arXiv Atom export API and returns paper abstracts only,
//! never full text. The number of papers is capped by configuration.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;

const ARXIV_API_BASE: &str = "http://export.arxiv.org/api/query";

/// Search arXiv for papers matching a free-text query.
pub struct ArxivSearch {
    max_docs: usize,
}

impl ArxivSearch {
    /// Create a search tool returning at most `max_docs` abstracts.
    pub fn new(max_docs: usize) -> Self {
        Self { max_docs }
    }
}

#[async_trait]
impl Tool for ArxivSearch {
    fn name(&self) -> &str {
        "search_arxiv"
    }

    fn description(&self) -> &str {
        "Search arXiv for the latest papers. Returns the abstracts of the best-matching papers."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;

        let encoded_query = urlencoding::encode(query);
        let url = format!(
            "{}?search_query=all:{}&max_results={}",
            ARXIV_API_BASE, encoded_query, self.max_docs
        );

        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ArxivScout/1.0)")
            .build()?;

        let response = client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(anyhow::anyhow!("arXiv API error: HTTP {}", status));
        }

        let feed = response.text().await?;
        let abstracts = extract_abstracts(&feed, self.max_docs);

        if abstracts.is_empty() {
            Ok(format!("No papers found for: {}", query))
        } else {
            Ok(abstracts.join("\n"))
        }
    }
}

/// Extract up to `max_docs` abstracts from an arXiv Atom feed.
///
/// The cap applies here as well as in the request, so an over-full
/// feed never yields more than `max_docs` documents.
fn extract_abstracts(feed: &str, max_docs: usize) -> Vec<String> {
    feed.split("<entry>")
        .skip(1)
        .take(max_docs)
        .filter_map(|entry| {
            let summary = entry.split("<summary>").nth(1)?.split("</summary>").next()?;

            // Atom summaries arrive hard-wrapped and indented
            let text = summary.split_whitespace().collect::<Vec<_>>().join(" ");

            if text.is_empty() {
                None
            } else {
                Some(xml_decode(&text))
            }
        })
        .collect()
}

/// Basic XML entity decoding.
fn xml_decode(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_entries(summaries: &[&str]) -> String {
        let entries: String = summaries
            .iter()
            .map(|s| {
                format!(
                    "<entry><id>http://arxiv.org/abs/0000.0000</id>\n  <summary>{}</summary>\n</entry>",
                    s
                )
            })
            .collect();
        format!(
            "<?xml version=\"1.0\"?><feed xmlns=\"http://www.w3.org/2005/Atom\">{}</feed>",
            entries
        )
    }

    #[test]
    fn test_extract_caps_at_max_docs() {
        let feed = feed_with_entries(&["first abstract", "second abstract", "third abstract"]);
        let abstracts = extract_abstracts(&feed, 2);
        assert_eq!(abstracts, vec!["first abstract", "second abstract"]);
    }

    #[test]
    fn test_extract_collapses_wrapped_whitespace() {
        let feed = feed_with_entries(&["  A line\n  wrapped by\n  the feed.  "]);
        let abstracts = extract_abstracts(&feed, 2);
        assert_eq!(abstracts, vec!["A line wrapped by the feed."]);
    }

    #[test]
    fn test_extract_decodes_entities() {
        let feed = feed_with_entries(&["P &amp; NP, x &lt; y"]);
        let abstracts = extract_abstracts(&feed, 2);
        assert_eq!(abstracts, vec!["P & NP, x < y"]);
    }

    #[test]
    fn test_extract_handles_empty_feed() {
        let feed = feed_with_entries(&[]);
        assert!(extract_abstracts(&feed, 2).is_empty());
    }

    #[test]
    fn test_extract_skips_entry_without_summary() {
        let feed = "<feed><entry><id>x</id></entry><entry><summary>kept</summary></entry></feed>";
        let abstracts = extract_abstracts(feed, 2);
        assert_eq!(abstracts, vec!["kept"]);
    }
}
