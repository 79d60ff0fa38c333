//! Navigation state controller
//!
//! Owns the rail's observable state (`collapsed`, the open-set, the
//! selected entry) and is the only writer of it. Storage and routing are
//! reached through injected ports; the host UI serializes events, so
//! every transition here is a plain synchronous call.

use crate::filter::filter_nodes;
use crate::models::{MenuNode, MenuTree, RoleId};
use crate::ports::{NavigationSink, PreferenceStore};
use crate::resolver::{key_for_path, open_ancestor};

/// Fixed storage key for the persisted collapse preference.
///
/// The stored value is the literal string `"true"` or `"false"`.
pub const COLLAPSED_PREF_KEY: &str = "left_nav_collapsed";

/// Outcome of activating a menu entry by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A leaf with a target was activated; a navigate command went to the sink
    Navigated(String),
    /// A group was activated; its expansion state was toggled instead
    ToggledGroup(String),
    /// Unknown key, or a placeholder leaf without a target
    Ignored,
}

/// Role-aware controller for a left navigation rail.
///
/// Holds the immutable menu definition, the role-filtered projection of
/// it, and the UI state. Only `collapsed` outlives a session; it is read
/// from the store at construction and written back on every toggle.
pub struct NavController<S: PreferenceStore> {
    tree: MenuTree,
    role: RoleId,
    filtered: Vec<MenuNode>,
    store: S,
    collapsed: bool,
    open_keys: Vec<String>,
    selected: Option<String>,
}

impl<S: PreferenceStore> NavController<S> {
    /// Initialize from the menu definition, the current role and path,
    /// and a preference store.
    ///
    /// A missing stored preference defaults to collapsed; any stored
    /// value other than `"true"` reads as expanded.
    pub fn new(tree: MenuTree, role: RoleId, current_path: &str, store: S) -> Self {
        let collapsed = match store.get(COLLAPSED_PREF_KEY) {
            None => true,
            Some(value) => value == "true",
        };
        let filtered = filter_nodes(tree.nodes(), role);
        let mut controller = Self {
            tree,
            role,
            filtered,
            store,
            collapsed,
            open_keys: Vec::new(),
            selected: None,
        };
        controller.recompute_derived(current_path);
        controller
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn role(&self) -> RoleId {
        self.role
    }

    /// Key of the entry matching the current path, if any
    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Groups currently shown expanded.
    ///
    /// Path-driven recomputes collapse this back to the single derived
    /// ancestor; user toggles may temporarily hold several.
    pub fn open_keys(&self) -> &[String] {
        &self.open_keys
    }

    /// The derived single open group, when exactly the derived state holds
    pub fn open_ancestor_key(&self) -> Option<&str> {
        self.open_keys.first().map(String::as_str)
    }

    /// The role-filtered tree currently backing the rail
    pub fn filtered(&self) -> &[MenuNode] {
        &self.filtered
    }

    /// The injected preference store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the rail between collapsed and expanded.
    ///
    /// Writes the new value to the store synchronously on every call, no
    /// debouncing. Selection and open-set are untouched: collapsing only
    /// hides sub-items, and the retained open-set means expanding the
    /// rail reopens the same section.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        let value = if self.collapsed { "true" } else { "false" };
        self.store.set(COLLAPSED_PREF_KEY, value);
        self.collapsed
    }

    /// Replace the open-set with groups the user explicitly opened.
    /// Never persisted.
    pub fn set_open_groups(&mut self, keys: Vec<String>) {
        self.open_keys = keys;
    }

    /// React to a route change from the host router.
    ///
    /// The only path besides direct menu interaction by which selection
    /// and the open-set change.
    pub fn path_changed(&mut self, path: &str) {
        self.recompute_derived(path);
    }

    /// Switch roles, re-filtering the tree and re-deriving state
    pub fn set_role(&mut self, role: RoleId, current_path: &str) {
        self.role = role;
        self.filtered = filter_nodes(self.tree.nodes(), role);
        self.recompute_derived(current_path);
    }

    /// Activate a menu entry by key.
    ///
    /// Dispatch looks at top-level entries plus their immediate children,
    /// matching the rail's two-level rendering; deeper nodes are not
    /// clickable. A leaf with a target emits a navigate command; a group
    /// toggles its own expansion; anything else is a no-op.
    pub fn activate(&mut self, key: &str, sink: &mut dyn NavigationSink) -> Activation {
        let hit = self
            .filtered
            .iter()
            .flat_map(|node| std::iter::once(node).chain(node.children().iter()))
            .find(|node| node.key() == key)
            .map(|node| (node.is_group(), node.target().map(str::to_string)));

        match hit {
            Some((_, Some(target))) => {
                sink.navigate(&target);
                Activation::Navigated(target)
            }
            Some((true, None)) => {
                self.toggle_group(key);
                Activation::ToggledGroup(key.to_string())
            }
            Some((false, None)) | None => Activation::Ignored,
        }
    }

    fn toggle_group(&mut self, key: &str) {
        if let Some(pos) = self.open_keys.iter().position(|k| k == key) {
            self.open_keys.remove(pos);
        } else {
            self.open_keys.push(key.to_string());
        }
    }

    fn recompute_derived(&mut self, path: &str) {
        self.selected = key_for_path(&self.filtered, path).map(str::to_string);
        self.open_keys = open_ancestor(&self.filtered, self.selected.as_deref())
            .map(str::to_string)
            .into_iter()
            .collect();
    }
}
