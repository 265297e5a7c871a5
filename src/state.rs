use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{DetailId, ProjectId};

/// What the page is currently focused on. Holding one value instead of two
/// optional fields keeps project and detail selection mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Project(ProjectId),
    Detail(DetailId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    SelectProject(ProjectId),
    SelectDetail(DetailId),
    Back,
    ToggleMenu,
    CloseMenu,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub selection: Selection,
    pub menu_open: bool,
}

impl PageState {
    pub fn in_detail_view(&self) -> bool {
        self.selection != Selection::None
    }

    pub fn apply(&self, action: PageAction) -> PageState {
        let mut next = self.clone();
        match action {
            PageAction::SelectProject(id) => {
                info!("Showing project {}", id.slug());
                next.selection = Selection::Project(id);
            }
            PageAction::SelectDetail(id) => {
                info!("Showing detail {:?}", id);
                next.selection = Selection::Detail(id);
            }
            PageAction::Back => next.selection = Selection::None,
            PageAction::ToggleMenu => next.menu_open = !self.menu_open,
            PageAction::CloseMenu => next.menu_open = false,
        }
        next
    }

    /// A nav click always closes the menu; the anchor to scroll to is only
    /// returned when the variant renders that section.
    pub fn navigate(&self, config: &SiteConfig, id: &str) -> (PageState, Option<&'static str>) {
        (self.apply(PageAction::CloseMenu), config.anchor(id))
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[PageAction]) -> PageState {
        actions
            .iter()
            .fold(PageState::default(), |state, a| state.apply(*a))
    }

    #[test]
    fn starts_on_full_page_with_menu_closed() {
        let state = PageState::default();
        assert_eq!(state.selection, Selection::None);
        assert!(!state.menu_open);
        assert!(!state.in_detail_view());
    }

    #[test]
    fn project_then_back_restores_full_page() {
        let state = run(&[PageAction::SelectProject(ProjectId::Farmer)]);
        assert_eq!(state.selection, Selection::Project(ProjectId::Farmer));
        assert!(state.in_detail_view());

        let state = state.apply(PageAction::Back);
        assert_eq!(state.selection, Selection::None);
        assert!(!state.in_detail_view());
    }

    #[test]
    fn detail_selection_resolves_to_static_record() {
        let state = run(&[PageAction::SelectDetail(DetailId::Rackathon2024)]);
        let Selection::Detail(id) = state.selection else {
            panic!("expected a detail selection, got {:?}", state.selection);
        };
        let record = id.record();
        assert_eq!(record.title, "Rackathon 2024 Participation - GH Raisoni");
        assert!(record.cert_link.is_some());

        assert_eq!(state.apply(PageAction::Back).selection, Selection::None);
    }

    #[test]
    fn later_selection_replaces_earlier_one() {
        let state = run(&[
            PageAction::SelectProject(ProjectId::Crime),
            PageAction::SelectDetail(DetailId::Hsc),
        ]);
        assert_eq!(state.selection, Selection::Detail(DetailId::Hsc));

        let state = state.apply(PageAction::SelectProject(ProjectId::Crime));
        assert_eq!(state.selection, Selection::Project(ProjectId::Crime));
    }

    #[test]
    fn toggle_menu_alternates() {
        let mut state = PageState::default();
        for expected in [true, false, true, false] {
            state = state.apply(PageAction::ToggleMenu);
            assert_eq!(state.menu_open, expected);
        }
    }

    #[test]
    fn close_menu_is_idempotent_and_keeps_selection() {
        let state = run(&[
            PageAction::ToggleMenu,
            PageAction::SelectDetail(DetailId::Internship),
            PageAction::CloseMenu,
            PageAction::CloseMenu,
        ]);
        assert!(!state.menu_open);
        assert_eq!(state.selection, Selection::Detail(DetailId::Internship));
    }

    #[test]
    fn navigate_to_known_section_closes_menu_and_scrolls() {
        let open = PageState::default().apply(PageAction::ToggleMenu);
        let (next, target) = open.navigate(&SiteConfig::classic(), "projects");
        assert!(!next.menu_open);
        assert_eq!(target, Some("projects"));
        assert_eq!(next.selection, Selection::None);
    }

    #[test]
    fn navigate_to_unknown_section_only_closes_menu() {
        let open = PageState::default().apply(PageAction::ToggleMenu);
        let (next, target) = open.navigate(&SiteConfig::classic(), "blog");
        assert!(!next.menu_open);
        assert_eq!(target, None);

        // Contact only exists in the extended variant.
        let (_, target) = open.navigate(&SiteConfig::classic(), "contact");
        assert_eq!(target, None);
        let (_, target) = open.navigate(&SiteConfig::extended(), "contact");
        assert_eq!(target, Some("contact"));
    }

    #[test]
    fn navigate_with_closed_menu_keeps_it_closed() {
        let (next, _) = PageState::default().navigate(&SiteConfig::extended(), "resume");
        assert_eq!(next, PageState::default());
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let same = state.clone().reduce(PageAction::Back);
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(PageAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.menu_open);
    }
}
