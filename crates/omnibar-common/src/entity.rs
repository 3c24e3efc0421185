use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every entity key the NLU app is trained to recognise.
///
/// Command kinds name an action the user asked for; the remaining kinds are
/// parameters that may appear either nested under a command mention or at the
/// top level of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    CommandNewTab,
    CommandNewWindow,
    CommandGoToWebsite,
    CommandCheckEmail,
    CommandOpenDownloads,
    CommandSearch,
    CommandBookmarkPage,
    CommandClearBrowsingData,
    BookmarkName,
    BrowsingDataType,
    Url,
    Number,
    MessageBody,
    Duration,
}

impl EntityKind {
    pub const ALL: [EntityKind; 14] = [
        EntityKind::CommandNewTab,
        EntityKind::CommandNewWindow,
        EntityKind::CommandGoToWebsite,
        EntityKind::CommandCheckEmail,
        EntityKind::CommandOpenDownloads,
        EntityKind::CommandSearch,
        EntityKind::CommandBookmarkPage,
        EntityKind::CommandClearBrowsingData,
        EntityKind::BookmarkName,
        EntityKind::BrowsingDataType,
        EntityKind::Url,
        EntityKind::Number,
        EntityKind::MessageBody,
        EntityKind::Duration,
    ];

    /// The key used for this kind in NLU responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::CommandNewTab => "command_new_tab",
            EntityKind::CommandNewWindow => "command_new_window",
            EntityKind::CommandGoToWebsite => "command_go_to_website",
            EntityKind::CommandCheckEmail => "command_check_email",
            EntityKind::CommandOpenDownloads => "command_open_downloads",
            EntityKind::CommandSearch => "command_search",
            EntityKind::CommandBookmarkPage => "command_bookmark_page",
            EntityKind::CommandClearBrowsingData => "command_clear_browsing_data",
            EntityKind::BookmarkName => "bookmark_name",
            EntityKind::BrowsingDataType => "browsing_data_type",
            EntityKind::Url => "url",
            EntityKind::Number => "number",
            EntityKind::MessageBody => "message_body",
            EntityKind::Duration => "duration",
        }
    }

    pub fn is_command(&self) -> bool {
        self.as_str().starts_with("command_")
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity key: {0}")]
pub struct UnknownEntity(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntity(s.to_string()))
    }
}
