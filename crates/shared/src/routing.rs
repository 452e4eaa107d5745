use crate::TABLES_PATH;

/// What the notification click handler should do with the open windows it
/// found. `Focus` carries an index into the enumerated client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Focus(usize),
    Open(&'static str),
}

/// Focus the first window already showing the tables page, otherwise open
/// a fresh one there.
pub fn click_action<I, S>(client_urls: I) -> ClickAction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    client_urls
        .into_iter()
        .position(|url| url.as_ref().contains(TABLES_PATH))
        .map(ClickAction::Focus)
        .unwrap_or(ClickAction::Open(TABLES_PATH))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_no_clients_opens_tables() {
        let urls: [&str; 0] = [];
        assert_eq!(click_action(urls), ClickAction::Open("/tables"));
    }

    #[test]
    fn test_no_matching_client_opens_tables() {
        let urls = ["https://app/home", "https://app/menu"];
        assert_eq!(click_action(urls), ClickAction::Open("/tables"));
    }

    #[test]
    fn test_matching_client_is_focused() {
        let urls = ["https://app/tables/5", "https://app/home"];
        assert_eq!(click_action(urls), ClickAction::Focus(0));
    }

    #[test]
    fn test_match_anywhere_in_list() {
        let urls = ["https://app/home", "https://app/tables"];
        assert_eq!(click_action(urls), ClickAction::Focus(1));
    }

    #[test]
    fn test_first_match_wins() {
        let urls = [
            "https://app/home",
            "https://app/tables/2",
            "https://app/tables/7",
        ];
        assert_eq!(click_action(urls), ClickAction::Focus(1));
    }

    #[test]
    fn test_substring_match_includes_subpaths() {
        let urls = ["https://app/tables?seat=4"];
        assert_eq!(click_action(urls), ClickAction::Focus(0));
    }
}
