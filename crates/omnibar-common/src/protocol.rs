use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel URL telling the browser client to act on the page it is showing.
pub const CURRENT_PAGE: &str = "CURRENT PAGE";

/// Sentinel used for both duration and browsing data type when the user
/// did not narrow the request down.
pub const ALL: &str = "all";

/// Unit reported alongside an unbounded duration.
pub const NO_UNIT: &str = "None";

/// Error message attached to a navigation that names no website.
pub const MISSING_WEBSITE_MESSAGE: &str = "Please include a valid website you would like to visit";

/// One executable instruction for the browser client.
///
/// Serializes as a flat object whose `action` field names the variant, e.g.
/// `{"action":"new_tab","num_tabs":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    NewTab(NewTabRequest),
    NewWindow(NewWindowRequest),
    GoToWebsite(GoToWebsiteRequest),
    OpenDownloads(OpenDownloadsRequest),
    Search(SearchRequest),
    Bookmark(BookmarkRequest),
    ClearBrowsingData(ClearBrowsingDataRequest),
}

impl Action {
    /// The value of the `action` field.
    pub fn name(&self) -> &'static str {
        match self {
            Action::NewTab(_) => "new_tab",
            Action::NewWindow(_) => "new_window",
            Action::GoToWebsite(_) => "go_to_website",
            Action::OpenDownloads(_) => "open_downloads",
            Action::Search(_) => "search",
            Action::Bookmark(_) => "bookmark",
            Action::ClearBrowsingData(_) => "clear_browsing_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTabRequest {
    pub num_tabs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWindowRequest {
    pub num_windows: u32,
    #[serde(default)]
    pub incognito: bool,
}

/// Navigation to a website. When no website could be determined the request
/// carries `missing_param` and an `error_message` instead of a `url`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoToWebsiteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub missing_param: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GoToWebsiteRequest {
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn missing_website() -> Self {
        Self {
            url: None,
            missing_param: true,
            error_message: Some(MISSING_WEBSITE_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenDownloadsRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRequest {
    #[serde(default)]
    pub bookmark_name: String,
    pub url: String,
}

/// Clearing of browsing data. `duration` is whatever the NLU service reported
/// (usually a number) or the string `"all"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearBrowsingDataRequest {
    pub browsing_data_type: String,
    pub duration: Value,
    pub unit: String,
}

impl Default for ClearBrowsingDataRequest {
    fn default() -> Self {
        Self {
            browsing_data_type: ALL.to_string(),
            duration: Value::from(ALL),
            unit: NO_UNIT.to_string(),
        }
    }
}
