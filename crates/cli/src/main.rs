use anyhow::Result;
use clap::{Parser, Subcommand};
use steam_shortcuts::commands::{
    cache_info_command, catalog_command, icon_command, libraries_command, manifest_command,
    preview_shortcuts_command, scan_icons_command,
};
use steam_shortcuts::init_logging;

/// Steam library scanner CLI.
///
/// This CLI is a thin wrapper around `shortcut-core` (exposed in code as `shortcut_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "steam-shortcuts",
    version,
    about = "Inspect a Steam install and preview desktop shortcuts for installed games",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Optional JSON or YAML config file providing `install_root` / `icons_dir`.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan `appcache/appinfo.vdf` and list the client icon of every app.
    ScanIcons {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the client icon of a single app.
    Icon {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// App id to look up.
        #[arg(long)]
        app_id: i32,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Report size, SHA-256 and scan counters of the icon cache.
    CacheInfo {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Parse a single `appmanifest_<id>.acf` file.
    Manifest {
        /// Path to the manifest.
        #[arg(long)]
        path: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List library roots registered in `steamapps/libraryfolders.vdf`.
    Libraries {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List installed apps joined with their icons.
    ///
    /// Unreadable manifests are reported and skipped; a missing icon cache only
    /// removes icons.
    Catalog {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the `.url` shortcuts that would be created. Nothing is written.
    PreviewShortcuts {
        /// Steam install root. Falls back to `install_root` from --config.
        #[arg(long)]
        install_root: Option<String>,

        /// Only preview the shortcut for this app.
        #[arg(long)]
        app_id: Option<i32>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Command::ScanIcons { install_root, json } => {
            scan_icons_command(install_root.as_deref(), config, json)?
        }
        Command::Icon { install_root, app_id, json } => {
            icon_command(install_root.as_deref(), config, app_id, json)?
        }
        Command::CacheInfo { install_root, json } => {
            cache_info_command(install_root.as_deref(), config, json)?
        }
        Command::Manifest { path, json } => manifest_command(&path, json)?,
        Command::Libraries { install_root, json } => {
            libraries_command(install_root.as_deref(), config, json)?
        }
        Command::Catalog { install_root, json } => {
            catalog_command(install_root.as_deref(), config, json)?
        }
        Command::PreviewShortcuts { install_root, app_id, json } => {
            preview_shortcuts_command(install_root.as_deref(), config, app_id, json)?
        }
    }

    Ok(())
}
