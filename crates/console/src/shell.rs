//! Sidebar state: which sections are expanded, joined with what the user may
//! see.

use std::collections::BTreeMap;

use backoffice_auth::{AuthContext, MenuKey, MenuLink, NavigationModel};

/// One visible sidebar section, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub key: MenuKey,
    pub label: &'static str,
    pub open: bool,
    pub links: &'static [MenuLink],
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    navigation: NavigationModel,
    open: BTreeMap<MenuKey, bool>,
    collapsed: bool,
}

impl Sidebar {
    pub fn new(navigation: NavigationModel) -> Self {
        Self {
            navigation,
            open: BTreeMap::new(),
            collapsed: false,
        }
    }

    pub fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    pub fn is_open(&self, key: MenuKey) -> bool {
        self.open.get(&key).copied().unwrap_or(false)
    }

    /// Flip one section; returns the new state.
    pub fn toggle(&mut self, key: MenuKey) -> bool {
        let open = self.open.entry(key).or_insert(false);
        *open = !*open;
        *open
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Shrink the whole sidebar to icons, or expand it again.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Expand the section owning `route`, e.g. after a deep link. Returns the
    /// section, if any link matches.
    pub fn open_for_route(&mut self, route: &str) -> Option<MenuKey> {
        let key = MenuKey::ALL
            .into_iter()
            .find(|key| key.links().iter().any(|link| link.route == route))?;
        self.open.insert(key, true);
        Some(key)
    }

    /// Sections the user may see, in sidebar order.
    pub fn sections(&self, ctx: &AuthContext) -> Vec<SidebarSection> {
        self.navigation
            .visible_sections(ctx)
            .into_iter()
            .map(|key| SidebarSection {
                key,
                label: key.label(),
                open: self.is_open(key),
                links: key.links(),
            })
            .collect()
    }
}
