use super::accumulator::ActionList;
use super::keywords::SiteTable;
use super::normalizer::{Command, plan};
use super::resolvers::{self, Context};
use lazy_static::lazy_static;
use omnibar_common::annotation::AnnotationTree;
use tracing::debug;

lazy_static! {
    static ref DEFAULT_ENGINE: ResolutionEngine = ResolutionEngine::default();
}

/// Turns annotation trees into actions.
///
/// The engine holds only the read-only site table; every call to
/// [`ResolutionEngine::resolve`] builds and returns its own [`ActionList`].
#[derive(Debug, Clone, Default)]
pub struct ResolutionEngine {
    sites: SiteTable,
}

impl ResolutionEngine {
    pub fn new(sites: SiteTable) -> Self {
        Self { sites }
    }

    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    pub fn resolve(&self, tree: &AnnotationTree) -> ActionList {
        let ctx = Context::new(tree, &self.sites);
        let mut actions = ActionList::new();

        for command in plan(&tree.entities) {
            let before = actions.len();
            run(command, &ctx, &mut actions);
            debug!(
                command = command.name(),
                produced = actions.len() - before,
                "resolver finished"
            );
        }

        actions
    }
}

fn run(command: Command, ctx: &Context<'_>, out: &mut ActionList) {
    match command {
        Command::NewTab => resolvers::new_tab(ctx, out),
        Command::NewWindow => resolvers::new_window(ctx, out),
        Command::Navigate => resolvers::navigate(ctx, out),
        Command::CheckEmail => resolvers::check_email(ctx, out),
        Command::OpenDownloads => resolvers::open_downloads(ctx, out),
        Command::Search => resolvers::search(ctx, out),
        Command::Bookmark => resolvers::bookmark(ctx, out),
        Command::ClearBrowsingData => resolvers::clear_browsing_data(ctx, out),
    }
}

/// Resolve with the builtin site table.
pub fn resolve_annotations(tree: &AnnotationTree) -> ActionList {
    DEFAULT_ENGINE.resolve(tree)
}
