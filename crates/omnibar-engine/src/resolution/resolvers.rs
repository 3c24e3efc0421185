//! One resolver per browser command. Each reads the annotation tree and
//! appends the actions it produces; none of them can fail.

use super::accumulator::ActionList;
use super::chain::Chain;
use super::keywords::{INCOGNITO_WORDS, SiteTable, mentions_any};
use omnibar_common::annotation::{AnnotationTree, Entities, Occurrence};
use omnibar_common::entity::EntityKind;
use omnibar_common::protocol::{
    ALL, Action, BookmarkRequest, CURRENT_PAGE, ClearBrowsingDataRequest, GoToWebsiteRequest,
    NO_UNIT, NewTabRequest, NewWindowRequest, OpenDownloadsRequest, SearchRequest,
};
use serde_json::Value;
use tracing::debug;

/// Tabs or windows opened when the user gives no number.
pub const DEFAULT_COUNT: u32 = 1;

/// Inbox opened when the user names no mail provider.
pub const DEFAULT_EMAIL_URL: &str = "www.gmail.com";

/// What every resolver reads.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub tree: &'a AnnotationTree,
    pub sites: &'a SiteTable,
}

impl<'a> Context<'a> {
    pub fn new(tree: &'a AnnotationTree, sites: &'a SiteTable) -> Self {
        Self { tree, sites }
    }

    fn entities(&self) -> &'a Entities {
        &self.tree.entities
    }
}

pub fn new_tab(ctx: &Context<'_>, out: &mut ActionList) {
    for occurrence in ctx.entities().get(EntityKind::CommandNewTab) {
        let num_tabs = Chain::new()
            .command(occurrence)
            .find(EntityKind::Number, Occurrence::count)
            .unwrap_or(DEFAULT_COUNT);
        out.push(Action::NewTab(NewTabRequest { num_tabs }));
    }
}

pub fn new_window(ctx: &Context<'_>, out: &mut ActionList) {
    let incognito = mentions_any(&ctx.tree.text, INCOGNITO_WORDS);
    for occurrence in ctx.entities().get(EntityKind::CommandNewWindow) {
        let num_windows = Chain::new()
            .command(occurrence)
            .find(EntityKind::Number, Occurrence::count)
            .unwrap_or(DEFAULT_COUNT);
        out.push(Action::NewWindow(NewWindowRequest {
            num_windows,
            incognito,
        }));
    }
}

/// Explicit navigation commands resolve a URL per mention. A bare URL becomes
/// a navigation only when the sentence is not about bookmarks; otherwise the
/// bookmark resolver owns it.
pub fn navigate(ctx: &Context<'_>, out: &mut ActionList) {
    let entities = ctx.entities();

    if entities.contains(EntityKind::CommandGoToWebsite) {
        for occurrence in entities.get(EntityKind::CommandGoToWebsite) {
            let request = Chain::new()
                .command(occurrence)
                .message(entities)
                .keywords(&ctx.tree.text, ctx.sites)
                .text(EntityKind::Url)
                .map(GoToWebsiteRequest::to)
                .unwrap_or_else(GoToWebsiteRequest::missing_website);
            out.push(Action::GoToWebsite(request));
        }
    } else if entities.contains(EntityKind::Url) && !mentions_bookmark(entities) {
        for occurrence in entities.get(EntityKind::Url) {
            match occurrence.text() {
                Some(url) => out.push(Action::GoToWebsite(GoToWebsiteRequest::to(url))),
                None => debug!("skipping url mention without a value"),
            }
        }
    } else {
        debug!("url left to the bookmark resolver");
    }
}

fn mentions_bookmark(entities: &Entities) -> bool {
    entities.contains(EntityKind::CommandBookmarkPage) || entities.contains(EntityKind::BookmarkName)
}

/// Always exactly one navigation to a mail provider.
pub fn check_email(ctx: &Context<'_>, out: &mut ActionList) {
    let url = Chain::new()
        .keywords(&ctx.tree.text, ctx.sites)
        .text(EntityKind::Url)
        .unwrap_or_else(|| DEFAULT_EMAIL_URL.to_string());
    out.push(Action::GoToWebsite(GoToWebsiteRequest::to(url)));
}

pub fn open_downloads(_ctx: &Context<'_>, out: &mut ActionList) {
    out.push(Action::OpenDownloads(OpenDownloadsRequest {}));
}

pub fn search(ctx: &Context<'_>, out: &mut ActionList) {
    let entities = ctx.entities();
    for occurrence in entities.get(EntityKind::CommandSearch) {
        let query = Chain::new()
            .command(occurrence)
            .message(entities)
            .text(EntityKind::MessageBody)
            .unwrap_or_default();
        out.push(Action::Search(SearchRequest { query }));
    }
}

/// With a bookmark command, the name comes from the command's own bookmark
/// name, then any message body. Without one, each bookmark name mention is
/// resolved on its own and only its nested name is read.
pub fn bookmark(ctx: &Context<'_>, out: &mut ActionList) {
    let entities = ctx.entities();

    if entities.contains(EntityKind::CommandBookmarkPage) {
        for occurrence in entities.get(EntityKind::CommandBookmarkPage) {
            let scoped = Chain::new().command(occurrence);
            let bookmark_name = scoped
                .text(EntityKind::BookmarkName)
                .or_else(|| scoped.message(entities).text(EntityKind::MessageBody))
                .unwrap_or_default();
            out.push(bookmark_action(bookmark_name, occurrence, entities));
        }
        return;
    }

    for occurrence in entities.get(EntityKind::BookmarkName) {
        let bookmark_name = Chain::new()
            .command(occurrence)
            .text(EntityKind::BookmarkName)
            .unwrap_or_default();
        out.push(bookmark_action(bookmark_name, occurrence, entities));
    }
}

fn bookmark_action(bookmark_name: String, occurrence: &Occurrence, entities: &Entities) -> Action {
    let url = Chain::new()
        .command(occurrence)
        .message(entities)
        .text(EntityKind::Url)
        .unwrap_or_else(|| CURRENT_PAGE.to_string());
    Action::Bookmark(BookmarkRequest { bookmark_name, url })
}

/// One action per clear command. A bare browsing data type with no command
/// yields a single action resolved from message-wide entities.
pub fn clear_browsing_data(ctx: &Context<'_>, out: &mut ActionList) {
    let entities = ctx.entities();

    if entities.contains(EntityKind::CommandClearBrowsingData) {
        for occurrence in entities.get(EntityKind::CommandClearBrowsingData) {
            let chain = Chain::new().command(occurrence).message(entities);
            out.push(clear_action(chain));
        }
    } else if entities.contains(EntityKind::BrowsingDataType) {
        out.push(clear_action(Chain::new().message(entities)));
    }
}

fn clear_action(chain: Chain<'_>) -> Action {
    let browsing_data_type = chain
        .text(EntityKind::BrowsingDataType)
        .unwrap_or_else(|| ALL.to_string());
    let (duration, unit) = chain
        .find(EntityKind::Duration, Occurrence::measure)
        .unwrap_or_else(|| (Value::from(ALL), NO_UNIT.to_string()));
    Action::ClearBrowsingData(ClearBrowsingDataRequest {
        browsing_data_type,
        duration,
        unit,
    })
}
