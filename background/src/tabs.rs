//! Browser tabs as seen by the background.
//!
//! The registry owns content-script injection, so it also owns the
//! "already injected" flag for each page load. A tab is injected at most
//! once until a full page load (`committed` navigation) discards its
//! listeners.

use common::{
    JobDetails, NavigationEvent, NavigationKind, RuntimeMessage, TabId, TabInfo, is_job_detail_url,
};
use dashmap::DashMap;
use job_scraper::{ContentScript, ScrapeError};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
struct Tab {
    url: String,
    document: String,
    injected: bool,
    listeners: Vec<ContentScript>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    Injected,
    AlreadyInjected,
    UnknownTab,
}

#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: DashMap<TabId, Tab>,
    active: RwLock<Option<TabId>>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tab's URL and document and makes it the active tab.
    /// Only job-detail pages keep their document.
    pub fn record_navigation(&self, event: NavigationEvent) {
        let mut tab = self.tabs.entry(event.tab_id).or_default();
        if event.kind == NavigationKind::Committed {
            tab.listeners.clear();
            tab.injected = false;
        }
        tab.document = if is_job_detail_url(&event.url) {
            event.document
        } else {
            String::new()
        };
        tab.url = event.url;
        drop(tab);

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Some(event.tab_id);
    }

    /// Attaches a content script unless this page load already has one.
    pub fn inject(&self, tab_id: TabId) -> Injection {
        let Some(mut tab) = self.tabs.get_mut(&tab_id) else {
            return Injection::UnknownTab;
        };
        if tab.injected {
            return Injection::AlreadyInjected;
        }
        tab.injected = true;
        tab.listeners.push(ContentScript::new());
        Injection::Injected
    }

    /// Delivers `message` to every listener on the tab and collects the
    /// replies. `None` if the tab is unknown.
    pub fn send(
        &self,
        tab_id: TabId,
        message: &RuntimeMessage,
    ) -> Option<Vec<Result<JobDetails, ScrapeError>>> {
        // copy out so no shard lock is held while parsing HTML
        let (url, document, listeners) = {
            let tab = self.tabs.get(&tab_id)?;
            (tab.url.clone(), tab.document.clone(), tab.listeners.clone())
        };

        Some(
            listeners
                .iter()
                .filter_map(|listener| listener.on_message(message, &url, &document))
                .collect(),
        )
    }

    pub fn listener_count(&self, tab_id: TabId) -> usize {
        self.tabs
            .get(&tab_id)
            .map(|tab| tab.listeners.len())
            .unwrap_or(0)
    }

    pub fn active(&self) -> Option<TabInfo> {
        let id = (*self.active.read().unwrap_or_else(PoisonError::into_inner))?;
        let tab = self.tabs.get(&id)?;
        Some(TabInfo {
            id,
            url: tab.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_URL: &str = "https://portal.test/students/app/jobs/detail/42";
    const PAGE: &str = include_str!("../tests/fixtures/job_detail.html");

    fn navigate(registry: &TabRegistry, tab: u32, url: &str, kind: NavigationKind) {
        registry.record_navigation(NavigationEvent {
            tab_id: TabId(tab),
            url: url.to_string(),
            document: PAGE.to_string(),
            kind,
        });
    }

    #[test]
    fn test_second_injection_attaches_nothing() {
        let registry = TabRegistry::new();
        navigate(&registry, 1, DETAIL_URL, NavigationKind::HistoryStateUpdated);

        assert_eq!(registry.inject(TabId(1)), Injection::Injected);
        assert_eq!(registry.inject(TabId(1)), Injection::AlreadyInjected);
        assert_eq!(registry.listener_count(TabId(1)), 1);

        let replies = registry.send(TabId(1), &RuntimeMessage::GetJobDetails).unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].as_ref().unwrap().title, "Hardware Test Co-op");
    }

    #[test]
    fn test_in_app_navigation_keeps_listener() {
        let registry = TabRegistry::new();
        navigate(&registry, 1, DETAIL_URL, NavigationKind::HistoryStateUpdated);
        registry.inject(TabId(1));

        let next = "https://portal.test/students/app/jobs/detail/43";
        navigate(&registry, 1, next, NavigationKind::HistoryStateUpdated);
        assert_eq!(registry.inject(TabId(1)), Injection::AlreadyInjected);

        let replies = registry.send(TabId(1), &RuntimeMessage::GetJobDetails).unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].as_ref().unwrap().url, next);
    }

    #[test]
    fn test_leaving_detail_page_drops_document() {
        let registry = TabRegistry::new();
        navigate(&registry, 1, DETAIL_URL, NavigationKind::HistoryStateUpdated);
        registry.inject(TabId(1));

        let search = "https://portal.test/students/app/jobs/search";
        navigate(&registry, 1, search, NavigationKind::HistoryStateUpdated);

        let replies = registry.send(TabId(1), &RuntimeMessage::GetJobDetails).unwrap();
        assert_eq!(replies.len(), 1);
        assert!(matches!(
            replies[0],
            Err(ScrapeError::MissingElement { field: "title", .. })
        ));
        assert_eq!(registry.active().unwrap().url, search);
    }

    #[test]
    fn test_full_load_resets_guard() {
        let registry = TabRegistry::new();
        navigate(&registry, 1, DETAIL_URL, NavigationKind::HistoryStateUpdated);
        registry.inject(TabId(1));

        navigate(&registry, 1, DETAIL_URL, NavigationKind::Committed);
        assert_eq!(registry.listener_count(TabId(1)), 0);
        assert_eq!(registry.inject(TabId(1)), Injection::Injected);
        assert_eq!(registry.listener_count(TabId(1)), 1);
    }

    #[test]
    fn test_unknown_tab() {
        let registry = TabRegistry::new();
        assert_eq!(registry.inject(TabId(9)), Injection::UnknownTab);
        assert!(registry.send(TabId(9), &RuntimeMessage::GetJobDetails).is_none());
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_active_follows_latest_navigation() {
        let registry = TabRegistry::new();
        navigate(&registry, 1, DETAIL_URL, NavigationKind::HistoryStateUpdated);
        navigate(&registry, 2, "https://portal.test/", NavigationKind::Committed);

        assert_eq!(
            registry.active(),
            Some(TabInfo {
                id: TabId(2),
                url: "https://portal.test/".into()
            })
        );
    }
}
