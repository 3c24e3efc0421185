use omnibar_common::protocol::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

impl OutputStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        }
    }
}

/// Render actions as the JSON list the browser client consumes.
pub fn format_actions(actions: &[Action], style: OutputStyle) -> Result<String, serde_json::Error> {
    match style {
        OutputStyle::Compact => serde_json::to_string(actions),
        OutputStyle::Pretty => serde_json::to_string_pretty(actions),
    }
}

/// One-line human summary, used in logs.
pub fn summarize(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "no actions".to_string();
    }
    actions
        .iter()
        .map(Action::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnibar_common::protocol::{NewTabRequest, SearchRequest};

    #[test]
    fn test_compact_output() {
        let actions = vec![Action::NewTab(NewTabRequest { num_tabs: 2 })];
        assert_eq!(
            format_actions(&actions, OutputStyle::Compact).unwrap(),
            r#"[{"action":"new_tab","num_tabs":2}]"#
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_actions(&[], OutputStyle::Compact).unwrap(), "[]");
        assert_eq!(summarize(&[]), "no actions");
    }

    #[test]
    fn test_summary_lists_names() {
        let actions = vec![
            Action::NewTab(NewTabRequest { num_tabs: 1 }),
            Action::Search(SearchRequest {
                query: "rust".into(),
            }),
        ];
        assert_eq!(summarize(&actions), "new_tab, search");
    }
}
