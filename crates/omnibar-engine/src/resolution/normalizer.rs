use omnibar_common::annotation::Entities;
use omnibar_common::entity::EntityKind;

/// The resolvers, one per kind of browser command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewTab,
    NewWindow,
    Navigate,
    CheckEmail,
    OpenDownloads,
    Search,
    Bookmark,
    ClearBrowsingData,
}

impl Command {
    /// Resolution order. Output actions follow this order.
    pub const ORDER: [Command; 8] = [
        Command::NewTab,
        Command::NewWindow,
        Command::Navigate,
        Command::CheckEmail,
        Command::OpenDownloads,
        Command::Search,
        Command::Bookmark,
        Command::ClearBrowsingData,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::NewTab => "new_tab",
            Command::NewWindow => "new_window",
            Command::Navigate => "go_to_website",
            Command::CheckEmail => "check_email",
            Command::OpenDownloads => "open_downloads",
            Command::Search => "search",
            Command::Bookmark => "bookmark",
            Command::ClearBrowsingData => "clear_browsing_data",
        }
    }

    /// Entity keys that make this resolver run. Any one of them suffices.
    pub fn triggers(&self) -> &'static [EntityKind] {
        match self {
            Command::NewTab => &[EntityKind::CommandNewTab],
            Command::NewWindow => &[EntityKind::CommandNewWindow],
            Command::Navigate => &[EntityKind::CommandGoToWebsite, EntityKind::Url],
            Command::CheckEmail => &[EntityKind::CommandCheckEmail],
            Command::OpenDownloads => &[EntityKind::CommandOpenDownloads],
            Command::Search => &[EntityKind::CommandSearch],
            Command::Bookmark => &[EntityKind::CommandBookmarkPage, EntityKind::BookmarkName],
            Command::ClearBrowsingData => &[
                EntityKind::CommandClearBrowsingData,
                EntityKind::BrowsingDataType,
            ],
        }
    }

    pub fn is_triggered(&self, entities: &Entities) -> bool {
        self.triggers().iter().any(|kind| entities.contains(*kind))
    }
}

/// Resolvers to run for `entities`, in resolution order.
pub fn plan(entities: &Entities) -> Vec<Command> {
    Command::ORDER
        .into_iter()
        .filter(|command| command.is_triggered(entities))
        .collect()
}
