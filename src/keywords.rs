use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

// Include default keyword sets at compile time
const DEFAULT_KEYWORDS_BYTES: &[u8] = include_bytes!("../default_keywords.txt");

/// One scoring category: an identifier, a display label for justification
/// strings, and the keywords matched against lowercased titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: String,
    pub label: String,
    pub keywords: Vec<String>,
}

/// The full keyword configuration: the relevance set plus the scoring
/// categories in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    pub relevance: Vec<String>,
    pub categories: Vec<KeywordSet>,
}

/// Loads keyword sets: from an explicitly given file (missing file is an
/// error), else from `keywords.txt` in the working directory, else from the
/// embedded defaults.
pub fn load_keyword_config(keyword_file_path: Option<&Path>) -> Result<KeywordConfig> {
    if let Some(path) = keyword_file_path {
        info!(component = "keyword_file", file_path = ?path, "Loading keywords from specified file");
        if !path.exists() {
            anyhow::bail!("Keyword file not found: {:?}", path);
        }
        let content = fs::read_to_string(path)?;
        let config = parse_keyword_config(&content)
            .with_context(|| format!("Invalid keyword file {:?}", path))?;
        info!(component = "keyword_file", category_count = config.categories.len(), "Loaded keyword sets");
        return Ok(config);
    }

    let default_file = Path::new("keywords.txt");
    if default_file.exists() {
        info!(component = "default_keyword_file", file_path = ?default_file, "Loading keywords from default file");
        let content = fs::read_to_string(default_file)?;
        let config = parse_keyword_config(&content)
            .with_context(|| format!("Invalid keyword file {:?}", default_file))?;
        info!(component = "default_keyword_file", category_count = config.categories.len(), "Loaded keyword sets");
        return Ok(config);
    }

    info!(component = "embedded_keywords", "Using embedded default keywords");
    let default_content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES)
        .context("Failed to decode embedded default keywords")?;
    parse_keyword_config(default_content).context("Invalid embedded default keywords")
}

/// Parses the plain-text keyword format: `#` comments and blank lines are
/// skipped; `[name] Display label` starts a set; other lines are one keyword
/// each, lowercased on load. The `[relevance]` set is split out; everything
/// else is a scoring category.
fn parse_keyword_config(content: &str) -> Result<KeywordConfig> {
    let mut sets: Vec<KeywordSet> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let Some((name, label)) = rest.split_once(']') else {
                anyhow::bail!("Unterminated section header at line {}", line_num + 1);
            };
            let name = name.trim().to_string();
            if name.is_empty() {
                anyhow::bail!("Empty section name at line {}", line_num + 1);
            }
            let label = label.trim();
            sets.push(KeywordSet {
                label: if label.is_empty() { name.clone() } else { label.to_string() },
                name,
                keywords: Vec::new(),
            });
        } else {
            match sets.last_mut() {
                Some(set) => set.keywords.push(line.to_lowercase()),
                None => anyhow::bail!(
                    "Keyword before any [section] header at line {}",
                    line_num + 1
                ),
            }
        }
    }

    let mut relevance = Vec::new();
    let mut categories = Vec::new();
    for set in sets {
        if set.name == "relevance" {
            relevance = set.keywords;
        } else {
            categories.push(set);
        }
    }

    if relevance.is_empty() {
        anyhow::bail!("Keyword config has no [relevance] section");
    }
    if categories.is_empty() {
        anyhow::bail!("Keyword config has no scoring categories");
    }

    Ok(KeywordConfig { relevance, categories })
}

/// Writes the embedded defaults to `keywords.txt` for editing.
pub fn init_default_keywords() -> Result<()> {
    let default_file = Path::new("keywords.txt");

    if default_file.exists() {
        anyhow::bail!("keywords.txt already exists. Remove it first if you want to reinitialize.");
    }

    let default_content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES)
        .context("Failed to decode embedded default keywords")?;

    fs::write(default_file, default_content)?;
    println!("Created keywords.txt with default keyword sets");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> KeywordConfig {
        let content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES).unwrap();
        parse_keyword_config(content).unwrap()
    }

    #[test]
    fn embedded_defaults_parse_into_four_categories() {
        let config = defaults();
        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ai_tools", "money", "learning", "dev"]);
        assert!(config.relevance.contains(&"machine learning".to_string()));
    }

    #[test]
    fn keywords_are_lowercased_on_load() {
        let config = parse_keyword_config("[relevance] r\nAI\n[dev] Dev\nGitHub\n").unwrap();
        assert_eq!(config.relevance, ["ai"]);
        assert_eq!(config.categories[0].keywords, ["github"]);
    }

    #[test]
    fn section_header_label_defaults_to_name() {
        let config = parse_keyword_config("[relevance]\nai\n[dev]\ncode\n").unwrap();
        assert_eq!(config.categories[0].label, "dev");
    }

    #[test]
    fn keyword_before_section_is_rejected() {
        assert!(parse_keyword_config("ai\n[relevance] r\nai\n").is_err());
    }

    #[test]
    fn missing_relevance_section_is_rejected() {
        assert!(parse_keyword_config("[dev] Dev\ncode\n").is_err());
    }
}
