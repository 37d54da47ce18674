//! Lantern - inspect the application menu and accelerator wiring
//!
//! Builds the menu from an accelerator configuration and an accounts file
//! using the in-memory bridges, then prints what a native host would see.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use menubar::{
    AccountId, AccountState, AccountSummary, AcceleratorParser, AcceleratorSet, InMemoryMenuBridge,
    InMemoryShortcutRegistry, MenuController, MenuEvent, MenuItemNode, Platform, RawKeyEvent,
    RecordingDispatcher, ServiceType,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lantern")]
#[command(about = "Inspect Lantern's application menu and shortcuts")]
struct Cli {
    /// Accelerator overrides file (defaults to the Lantern config directory)
    #[arg(long, short = 'a')]
    accelerators: Option<PathBuf>,

    /// Accounts JSON file ({"accounts": [...], "activeAccountId": "...", "activeService": "..."})
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Platform to build for: macos, windows or linux (defaults to this machine)
    #[arg(long, short = 'p', value_parser = parse_platform)]
    platform: Option<Platform>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu tree
    Menu,

    /// Print the accelerator index
    Index,

    /// Simulate a key press that bypassed the native menu
    Press {
        /// Accelerator to press, e.g. "Ctrl+Shift+N"
        accelerator: String,
    },

    /// List hidden global shortcuts bound while the window has focus
    Shortcuts,
}

/// Accounts file layout
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<AccountSummary>,
    active_account_id: Option<AccountId>,
    active_service: Option<ServiceType>,
}

impl From<AccountsFile> for AccountState {
    fn from(file: AccountsFile) -> Self {
        let state = AccountState::new(file.accounts);
        match file.active_account_id {
            Some(id) => state.with_active(&id, file.active_service),
            None => state,
        }
    }
}

fn parse_platform(name: &str) -> Result<Platform, String> {
    Platform::from_name(name).ok_or_else(|| format!("unknown platform `{}`", name))
}

fn load_accelerators(path: Option<&Path>) -> Result<AcceleratorSet> {
    match path {
        Some(path) => AcceleratorSet::from_file(path),
        None => AcceleratorSet::load(),
    }
}

fn load_accounts(path: Option<&Path>) -> Result<AccountState> {
    let file: AccountsFile = match path {
        Some(path) => config::load_json_file(path)
            .with_context(|| format!("Failed to load accounts from {}", path.display()))?,
        None => AccountsFile::default(),
    };
    Ok(file.into())
}

fn print_tree(node: &MenuItemNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        MenuItemNode::Separator => println!("{}---", indent),
        MenuItemNode::Submenu { label, children } => {
            println!("{}{}", indent, label);
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        MenuItemNode::Action { label, accelerator, .. } => match accelerator {
            Some(accelerator) => println!("{}{:<32} {}", indent, label, accelerator),
            None => println!("{}{}", indent, label),
        },
        MenuItemNode::Radio {
            label,
            checked,
            accelerator,
            ..
        } => {
            let mark = if *checked { "(*)" } else { "( )" };
            let text = format!("{} {}", mark, label);
            match accelerator {
                Some(accelerator) => println!("{}{:<32} {}", indent, text, accelerator),
                None => println!("{}{}", indent, text),
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let platform = cli.platform.unwrap_or_else(Platform::current);
    let accelerators = load_accelerators(cli.accelerators.as_deref())?;
    let accounts = load_accounts(cli.accounts.as_deref())?;

    let registry = Arc::new(InMemoryShortcutRegistry::new());
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let mut controller = MenuController::new(
        platform,
        accelerators,
        Arc::new(InMemoryMenuBridge::new()),
        registry.clone(),
        dispatcher.clone(),
    );
    controller.handle(MenuEvent::AccountsChanged(accounts));
    let snapshot = controller.snapshot().context("No menu installed")?;
    info!("Built menu for {} (generation {})", platform, snapshot.generation());

    match cli.command {
        Commands::Menu => {
            for group in snapshot.tree().children() {
                print_tree(group, 0);
            }
        }
        Commands::Index => {
            let mut entries: Vec<_> = snapshot.accelerator_index().iter().collect();
            entries.sort();
            for (accelerator, action) in entries {
                println!("{:<24} {}", accelerator.to_string(), action);
            }
        }
        Commands::Press { accelerator } => {
            let descriptor = AcceleratorParser::new(platform).parse(&accelerator)?;
            let event = RawKeyEvent::from_descriptor(&descriptor);
            if controller.handle(MenuEvent::KeyInput(event)) {
                if let Some(action) = dispatcher.last() {
                    println!("{} -> {}", descriptor, action);
                }
            } else {
                println!("{} -> (no match)", descriptor);
            }
        }
        Commands::Shortcuts => {
            controller.handle(MenuEvent::FocusGained);
            for accelerator in registry.registered() {
                println!("{}", accelerator);
            }
        }
    }

    controller.teardown();
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
