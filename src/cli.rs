//! Command-line front end.
//!
//! Each invocation builds one [`AppContext`], runs one command against it
//! and writes plain text to the given writer.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::catalog::{build_groups, is_known_app, KNOWN_APPS};
use crate::config::{default_config_path, load_config, Config};
use crate::context::AppContext;
use crate::data::{JsonDirSource, ShortcutSource};
use crate::error::AdobeKeysError;
use crate::locale::Locale;
use crate::os::{host_platform, Os};
use crate::router::Route;
use crate::storage::{FileStorage, MemoryStorage, SharedStorage};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse keyboard shortcuts for creative applications")]
pub struct Cli {
    /// Config file (JSON), default: ~/.adobe-keys/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep favorites and locale in memory only
    #[arg(long, global = true, default_value_t = false)]
    pub ephemeral: bool,

    /// Platform string used for OS detection, e.g. "MacIntel"
    #[arg(long, global = true)]
    pub platform: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the page at a path: "/" or "/<appId>"
    Open {
        path: String,
        /// Only show shortcuts matching this text
        #[arg(long)]
        search: Option<String>,
        /// Flip the detected OS before rendering
        #[arg(long, default_value_t = false)]
        toggle_os: bool,
    },
    /// Add or remove a favorite shortcut id for an app
    Favorite { app_id: String, id: String },
    /// List favorite shortcut ids for an app
    Favorites { app_id: String },
    /// Show or change the UI language
    Locale {
        #[arg(value_enum)]
        action: Option<LocaleAction>,
    },
    /// Show how a key combination is displayed
    Format {
        key: String,
        #[arg(long, value_enum)]
        os: Option<OsArg>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleAction {
    Toggle,
    Zh,
    En,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OsArg {
    Win,
    Mac,
}

impl From<OsArg> for Os {
    fn from(arg: OsArg) -> Self {
        match arg {
            OsArg::Win => Os::Win,
            OsArg::Mac => Os::Mac,
        }
    }
}

/// Everything a command needs besides its arguments.
pub struct Session {
    pub ctx: AppContext,
    pub source: Box<dyn ShortcutSource>,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Self {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        let config = load_config(&config_path);

        let storage: SharedStorage = if cli.ephemeral {
            MemoryStorage::shared()
        } else {
            FileStorage::shared(&config.get_storage_path())
        };
        let platform = resolve_platform(cli, &config);
        info!(platform = %platform, ephemeral = cli.ephemeral, "Starting session");

        Self {
            ctx: AppContext::with_platform(storage, &platform),
            source: Box::new(JsonDirSource::new(config.get_data_dir())),
        }
    }
}

fn resolve_platform(cli: &Cli, config: &Config) -> String {
    cli.platform
        .clone()
        .or_else(|| config.get_platform().map(str::to_string))
        .unwrap_or_else(host_platform)
}

/// Text printed to stderr when a command fails.
///
/// Known domain errors get their short message; anything else is shown
/// with its full context chain.
pub fn error_message(err: &anyhow::Error) -> String {
    err.downcast_ref::<AdobeKeysError>()
        .map(AdobeKeysError::user_message)
        .unwrap_or_else(|| format!("{:#}", err))
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut session = Session::from_cli(&cli);
    execute(cli.command, &mut session, out)
}

pub fn execute(command: Command, session: &mut Session, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Open {
            path,
            search,
            toggle_os,
        } => {
            if toggle_os {
                session.ctx.os_mut().toggle_os();
            }
            let route =
                Route::resolve(&path).ok_or_else(|| AdobeKeysError::UnknownRoute(path.clone()))?;
            info!(route = route.name(), path = %route.path(), "Opening page");
            match route {
                Route::Home => render_home(&session.ctx, out),
                Route::Shortcut { app_id } => {
                    render_app(session, &app_id, search.as_deref().unwrap_or(""), out)
                }
            }
        }
        Command::Favorite { app_id, id } => {
            let now_favorite = session.ctx.favorites_mut().toggle_favorite(&app_id, &id);
            let mark = if now_favorite { "★" } else { "☆" };
            writeln!(out, "{} {}", mark, id)?;
            Ok(())
        }
        Command::Favorites { app_id } => {
            for id in session.ctx.favorites().get_favorites(&app_id) {
                writeln!(out, "{}", id)?;
            }
            Ok(())
        }
        Command::Locale { action } => {
            let locale = session.ctx.locale_mut();
            match action {
                Some(LocaleAction::Toggle) => locale.toggle_locale(),
                Some(LocaleAction::Zh) => locale.set_locale(Locale::Zh),
                Some(LocaleAction::En) => locale.set_locale(Locale::En),
                None => {}
            }
            writeln!(out, "{}", locale.locale())?;
            Ok(())
        }
        Command::Format { key, os } => {
            let os_store = session.ctx.os_mut();
            if let Some(os) = os.map(Os::from) {
                if os_store.os() != os {
                    os_store.toggle_os();
                }
            }
            writeln!(out, "{}", os_store.format_key(&key))?;
            writeln!(out, "{}", os_store.key_symbols(&key).join(" "))?;
            Ok(())
        }
    }
}

fn render_home(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    let t = ctx.locale().t();
    writeln!(out, "{}", t.title)?;
    writeln!(out, "{}", t.subtitle)?;
    writeln!(out)?;
    for app_id in KNOWN_APPS {
        let description = t.app_description(app_id).unwrap_or_default();
        writeln!(out, "  /{:<4} {}", app_id, description)?;
    }
    Ok(())
}

fn render_app(session: &Session, app_id: &str, query: &str, out: &mut impl Write) -> Result<()> {
    let ctx = &session.ctx;
    let t = ctx.locale().t();
    let locale = ctx.locale().locale();

    if !is_known_app(app_id) {
        return Err(AdobeKeysError::UnknownApp(app_id.to_string()).into());
    }

    let shortcuts = session
        .source
        .load(app_id)
        .with_context(|| t.error.to_string())?;
    let groups = build_groups(
        &shortcuts,
        ctx.favorites().get_favorites(app_id),
        query,
        locale,
        t.favorites,
    );

    writeln!(out, "← {}", t.back)?;
    if let Some(description) = t.app_description(app_id) {
        writeln!(out, "{} - {}", app_id, description)?;
    }

    if groups.is_empty() {
        writeln!(out, "{} \"{}\"", t.no_results, query.trim())?;
        return Ok(());
    }

    for group in &groups {
        writeln!(out)?;
        writeln!(out, "{}", group.name)?;
        for shortcut in &group.items {
            let id = ctx.favorites().generate_id(shortcut);
            let mark = if ctx.favorites().is_favorite(app_id, &id) {
                "★"
            } else {
                " "
            };
            writeln!(
                out,
                "  {} {:<20} {}",
                mark,
                ctx.os().format_key(&shortcut.key),
                shortcut.description.get(locale)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticSource;
    use crate::types::{LocalizedString, Shortcut};

    fn session() -> Session {
        let source = StaticSource::new().with_app(
            "ps",
            vec![
                Shortcut::new(
                    "Ctrl+S",
                    LocalizedString::new("Save", "保存"),
                    LocalizedString::new("File", "文件"),
                ),
                Shortcut::new(
                    "Ctrl+Alt+Z",
                    LocalizedString::new("Step Backward", "后退一步"),
                    LocalizedString::new("Edit", "编辑"),
                ),
            ],
        );
        Session {
            ctx: AppContext::with_platform(MemoryStorage::shared(), "Win32"),
            source: Box::new(source),
        }
    }

    fn run_command(session: &mut Session, command: Command) -> String {
        let mut out = Vec::new();
        execute(command, session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn open(path: &str) -> Command {
        Command::Open {
            path: path.to_string(),
            search: None,
            toggle_os: false,
        }
    }

    #[test]
    fn home_lists_apps_in_current_locale() {
        let mut session = session();
        let text = run_command(&mut session, open("/"));
        assert!(text.starts_with("掌握高效工作流"));
        assert!(text.contains("/ps"));
        assert!(text.contains("视频剪辑与制作"));
    }

    #[test]
    fn app_page_shows_favorites_first() {
        let mut session = session();
        run_command(
            &mut session,
            Command::Locale {
                action: Some(LocaleAction::En),
            },
        );
        let text = run_command(
            &mut session,
            Command::Favorite {
                app_id: "ps".to_string(),
                id: "Edit-Ctrl+Alt+Z".to_string(),
            },
        );
        assert_eq!(text, "★ Edit-Ctrl+Alt+Z\n");

        let text = run_command(&mut session, open("/ps"));
        let favorites_at = text.find("Favorites").unwrap();
        let file_at = text.find("File").unwrap();
        assert!(favorites_at < file_at);
        assert!(text.contains("Step Backward"));
    }

    #[test]
    fn app_page_formats_keys_for_mac() {
        let mut session = session();
        let text = run_command(
            &mut session,
            Command::Open {
                path: "/ps".to_string(),
                search: Some("step".to_string()),
                toggle_os: true,
            },
        );
        assert!(text.contains("Cmd+Opt+Z"));
        assert!(!text.contains("Ctrl+S"));
    }

    #[test]
    fn search_without_results_says_so() {
        let mut session = session();
        let text = run_command(
            &mut session,
            Command::Open {
                path: "/ps".to_string(),
                search: Some("export".to_string()),
                toggle_os: false,
            },
        );
        assert!(text.contains("未找到匹配的快捷键 \"export\""));
    }

    #[test]
    fn unknown_paths_and_apps_fail() {
        let mut session = session();
        let mut out = Vec::new();
        let err = execute(open("/ps/extra"), &mut session, &mut out).unwrap_err();
        assert_eq!(error_message(&err), "Nothing to show at /ps/extra");
        let err = execute(open("/xd"), &mut session, &mut out).unwrap_err();
        assert_eq!(error_message(&err), "No shortcuts for 'xd'");
    }

    #[test]
    fn missing_dataset_reports_domain_message_through_context() {
        let mut session = session();
        session.source = Box::new(StaticSource::new());
        let err = execute(open("/ai"), &mut session, &mut Vec::new()).unwrap_err();
        assert_eq!(error_message(&err), "No shortcuts for 'ai'");
    }

    #[test]
    fn other_errors_show_full_chain() {
        let err = anyhow::anyhow!("disk gone").context("writing output");
        assert_eq!(error_message(&err), "writing output: disk gone");
    }

    #[test]
    fn favorite_toggle_and_list() {
        let mut session = session();
        let toggle = |id: &str| Command::Favorite {
            app_id: "ai".to_string(),
            id: id.to_string(),
        };
        run_command(&mut session, toggle("a"));
        run_command(&mut session, toggle("b"));
        assert_eq!(run_command(&mut session, toggle("a")), "☆ a\n");

        let listed = run_command(
            &mut session,
            Command::Favorites {
                app_id: "ai".to_string(),
            },
        );
        assert_eq!(listed, "b\n");
    }

    #[test]
    fn locale_command_toggles() {
        let mut session = session();
        let show = || Command::Locale { action: None };
        assert_eq!(run_command(&mut session, show()), "zh\n");
        let toggled = run_command(
            &mut session,
            Command::Locale {
                action: Some(LocaleAction::Toggle),
            },
        );
        assert_eq!(toggled, "en\n");
    }

    #[test]
    fn format_command_prints_text_and_symbols() {
        let mut session = session();
        let text = run_command(
            &mut session,
            Command::Format {
                key: "Ctrl+Shift+S".to_string(),
                os: Some(OsArg::Mac),
            },
        );
        assert_eq!(text, "Cmd+Shift+S\n⌘ ⇧ S\n");

        let text = run_command(
            &mut session,
            Command::Format {
                key: "Ctrl+Shift+S".to_string(),
                os: Some(OsArg::Win),
            },
        );
        assert_eq!(text, "Ctrl+Shift+S\nCtrl Shift S\n");
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adobe-keys",
            "open",
            "/ps",
            "--search",
            "save",
            "--ephemeral",
            "--platform",
            "MacIntel",
        ])
        .unwrap();
        assert!(cli.ephemeral);
        assert_eq!(cli.platform.as_deref(), Some("MacIntel"));
        assert!(matches!(cli.command, Command::Open { search: Some(_), .. }));
    }
}
