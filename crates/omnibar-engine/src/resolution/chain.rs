//! Parameter precedence chain.
//!
//! A parameter is looked up, first success wins, in:
//! 1. the entities nested under the command mention being resolved,
//! 2. the top-level entities of the message,
//! 3. site keywords found in the sentence (URL-like parameters only),
//!
//! and the caller supplies the default when every step misses. Each step is
//! optional so resolvers enable only the steps their parameter uses.

use super::keywords::SiteTable;
use omnibar_common::annotation::{Entities, Occurrence};
use omnibar_common::entity::EntityKind;

#[derive(Debug, Clone, Copy)]
struct Keywords<'a> {
    text: &'a str,
    sites: &'a SiteTable,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<'a> {
    command: Option<&'a Entities>,
    message: Option<&'a Entities>,
    keywords: Option<Keywords<'a>>,
}

impl<'a> Chain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable step 1: parameters scoped to `occurrence`.
    pub fn command(mut self, occurrence: &'a Occurrence) -> Self {
        self.command = occurrence.scope();
        self
    }

    /// Enable step 2: message-wide parameters.
    pub fn message(mut self, entities: &'a Entities) -> Self {
        self.message = Some(entities);
        self
    }

    /// Enable step 3: site keywords in `text`.
    pub fn keywords(mut self, text: &'a str, sites: &'a SiteTable) -> Self {
        self.keywords = Some(Keywords { text, sites });
        self
    }

    /// Steps 1 and 2. Only the first mention of `key` in a scope is
    /// considered; if `extract` rejects it the next scope is tried.
    pub fn find<T>(&self, key: EntityKind, extract: impl Fn(&'a Occurrence) -> Option<T>) -> Option<T> {
        [self.command, self.message]
            .into_iter()
            .flatten()
            .find_map(|scope| scope.first(key).and_then(&extract))
    }

    /// Steps 1 to 3 for a textual parameter.
    pub fn text(&self, key: EntityKind) -> Option<String> {
        self.find(key, Occurrence::text).or_else(|| {
            self.keywords
                .and_then(|k| k.sites.infer(k.text))
                .map(str::to_string)
        })
    }
}
