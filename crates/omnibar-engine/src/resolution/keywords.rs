use lazy_static::lazy_static;
use std::collections::HashMap;

/// Words that ask for a private browsing window.
pub const INCOGNITO_WORDS: &[&str] = &["incognito", "private", "hidden", "anonymous"];

lazy_static! {
    static ref BUILTIN_SITES: Vec<(&'static str, &'static str)> = vec![
        ("gmail", "www.gmail.com"),
        ("facebook", "www.facebook.com"),
        ("twitter", "www.twitter.com"),
        ("linkedin", "www.linkedin.com"),
        ("amazon", "www.amazon.com"),
        ("wikipedia", "www.wikipedia.com"),
        ("youtube", "www.youtube.com"),
        ("google", "www.google.com"),
        ("reddit", "www.reddit.com"),
        ("yahoo", "www.yahoo.com"),
        ("msn", "www.msn.com"),
        ("hotmail", "www.hotmail.com"),
        ("outlook", "www.outlook.com"),
    ];
}

/// Lowercased words of a sentence, stripped of surrounding punctuation.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
}

/// True if any of `words` appears as a whole token of `text`.
pub fn mentions_any(text: &str, words: &[&str]) -> bool {
    tokens(text).any(|token| words.contains(&token.as_str()))
}

/// Site keyword to canonical URL. Built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct SiteTable {
    sites: HashMap<String, String>,
}

impl Default for SiteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteTable {
    pub fn builtin() -> Self {
        Self {
            sites: BUILTIN_SITES
                .iter()
                .map(|(keyword, url)| (keyword.to_string(), url.to_string()))
                .collect(),
        }
    }

    /// Builtin sites plus `extra`, where `extra` wins on conflicting keywords.
    pub fn with_overrides<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::builtin();
        for (keyword, url) in extra {
            table
                .sites
                .insert(keyword.as_ref().trim().to_lowercase(), url.into());
        }
        table
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.sites.get(keyword).map(String::as_str)
    }

    /// URL of the first known site mentioned in `text`, in sentence order.
    pub fn infer(&self, text: &str) -> Option<&str> {
        tokens(text).find_map(|token| self.get(&token))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
