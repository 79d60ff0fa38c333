//! navrail CLI - inspect and exercise menu configurations
//!
//! Usage: navrail <COMMAND>
//!
//! Commands:
//!   check    Validate a menu file (duplicate keys, unknown fields)
//!   resolve  Map a role and path to the selected entry and open group
//!   show     Render the role-filtered tree
//!   toggle   Flip the persisted collapse preference

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use navrail::config::{self, MenuWarning};
use navrail::{
    filter_nodes, key_for_path, open_ancestor, render::render_tree, FilePreferences, MemoryStore,
    NavController, PreferenceStore, RoleId, COLLAPSED_PREF_KEY,
};

/// navrail - role-aware navigation rail engine
#[derive(Parser, Debug)]
#[command(name = "navrail")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a menu file
    Check {
        /// Path to the menu definition
        #[arg(short, long, default_value = "menu.toml")]
        menu: PathBuf,
    },

    /// Resolve a role and path against the menu
    Resolve {
        /// Path to the menu definition
        #[arg(short, long, default_value = "menu.toml")]
        menu: PathBuf,

        /// Role identifier to filter with
        #[arg(short, long)]
        role: u16,

        /// Current URL path
        #[arg(short, long)]
        path: String,
    },

    /// Render the tree visible to a role
    Show {
        /// Path to the menu definition
        #[arg(short, long, default_value = "menu.toml")]
        menu: PathBuf,

        /// Role identifier to filter with
        #[arg(short, long)]
        role: u16,

        /// Current URL path, for selection marking
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Flip the persisted collapse preference
    Toggle {
        /// Preferences file (defaults to the per-user location)
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { menu } => cmd_check(&menu, cli.json),
        Commands::Resolve { menu, role, path } => cmd_resolve(&menu, role, &path, cli.json),
        Commands::Show { menu, role, path } => cmd_show(&menu, role, path.as_deref(), cli.json),
        Commands::Toggle { prefs } => cmd_toggle(prefs, cli.json),
    }
}

fn cmd_check(menu: &Path, json: bool) -> Result<()> {
    let (tree, warnings) = config::load_with_warnings(menu)?;
    if !json {
        print_menu_warnings(menu, &warnings);
    }

    let total = count_nodes(tree.nodes());
    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "entries": tree.nodes().len(),
                "nodes": total,
                "warnings": warnings.len(),
            })
        );
    } else {
        println!(
            "✓ {}: {} top-level entries, {} nodes",
            menu.display(),
            tree.nodes().len(),
            total
        );
    }
    Ok(())
}

fn cmd_resolve(menu: &Path, role: u16, path: &str, json: bool) -> Result<()> {
    let tree = config::load(menu)?;
    let nav = NavController::new(tree, RoleId(role), path, MemoryStore::new());

    if json {
        println!(
            "{}",
            serde_json::json!({
                "selected": nav.selected_key(),
                "open": nav.open_ancestor_key(),
            })
        );
    } else {
        println!("selected = {}", nav.selected_key().unwrap_or("(none)"));
        println!("open = {}", nav.open_ancestor_key().unwrap_or("(none)"));
    }
    Ok(())
}

fn cmd_show(menu: &Path, role: u16, path: Option<&str>, json: bool) -> Result<()> {
    let tree = config::load(menu)?;
    let filtered = filter_nodes(tree.nodes(), RoleId(role));

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    let selected = path.and_then(|p| key_for_path(&filtered, p));
    let open: Vec<String> = open_ancestor(&filtered, selected)
        .map(str::to_string)
        .into_iter()
        .collect();
    print!("{}", render_tree(&filtered, selected, &open));
    Ok(())
}

fn cmd_toggle(prefs: Option<PathBuf>, json: bool) -> Result<()> {
    let path = match prefs {
        Some(path) => path,
        None => FilePreferences::default_path()
            .context("no user config directory available; pass --prefs")?,
    };

    let mut store = FilePreferences::load(&path);
    let collapsed = match store.get(COLLAPSED_PREF_KEY) {
        None => true,
        Some(value) => value == "true",
    };
    let next = !collapsed;
    store.set(COLLAPSED_PREF_KEY, if next { "true" } else { "false" });

    if json {
        println!("{}", serde_json::json!({ "collapsed": next }));
    } else {
        println!("collapsed = {}", next);
    }
    Ok(())
}

fn print_menu_warnings(path: &Path, warnings: &[MenuWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown menu key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown menu key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

fn count_nodes(nodes: &[navrail::MenuNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(node.children()))
        .sum()
}
