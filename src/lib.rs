//! navrail - role-aware navigation rail engine
//!
//! navrail is the decision core of a left-navigation rail for business
//! web applications: it filters a hierarchical menu by the current
//! user's role, maps the current URL path back to the entry that
//! represents it, derives which top-level section should be expanded,
//! and owns the persisted collapse preference. Rendering widgets and
//! actual routing stay in the host; navrail consumes a path string and
//! emits navigate commands through an injected sink.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod ports;
pub mod render;
pub mod resolver;
pub mod state;

// Re-exports for convenience
pub use controller::{Activation, NavController, COLLAPSED_PREF_KEY};
pub use error::{NavError, NavResult};
pub use filter::filter_nodes;
pub use models::{GroupNode, LeafNode, MenuNode, MenuTree, RoleId};
pub use ports::{MemoryStore, NavigationSink, PreferenceStore};
pub use resolver::{key_for_path, open_ancestor, MAX_AUTO_EXPAND_DEPTH};
pub use state::FilePreferences;
