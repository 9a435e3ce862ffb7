mod domain;
mod error;
mod hooks;
mod picker;
mod platform;
mod settings;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use domain::{HookEvent, HookPreference};
use platform::PlatformRegistry;
use settings::SettingsStore;

#[derive(Parser)]
#[command(name = "chime")]
#[command(about = "Desktop notifications for Claude Code task events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install notification hooks without prompting
    Install {
        /// Play the platform alert sound with each notification
        #[arg(long)]
        sound: bool,
        /// Skip the task-completion notification
        #[arg(long)]
        no_completion: bool,
        /// Skip the session-stop notification
        #[arg(long)]
        no_stop: bool,
    },
    /// Remove notification hooks (both events unless names are given)
    Remove {
        /// Event names to remove (Notification, Stop)
        events: Vec<String>,
    },
    /// Remove the entire hooks section from the settings file
    Uninstall,
    /// Show which hooks are installed
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Install {
            sound,
            no_completion,
            no_stop,
        }) => {
            let preference = HookPreference {
                on_completion: !no_completion,
                completion_sound: sound,
                on_stop: !no_stop,
                stop_sound: sound,
            };
            install(&PlatformRegistry::new(), preference)
        }
        Some(Commands::Remove { events }) => remove(events),
        Some(Commands::Uninstall) => uninstall(),
        Some(Commands::Status { json }) => status(json),
        None => interactive_install(),
    }
}

fn interactive_install() -> Result<()> {
    let registry = PlatformRegistry::new();
    let strategy = registry
        .resolve()
        .context("cannot set up notifications on this machine")?;

    match picker::run_picker(strategy.supports_sound())? {
        Some(preference) => install(&registry, preference),
        None => {
            println!("Cancelled; settings left untouched.");
            Ok(())
        }
    }
}

fn install(registry: &PlatformRegistry, preference: HookPreference) -> Result<()> {
    if preference.is_empty() {
        println!("Nothing selected; settings left untouched.");
        return Ok(());
    }

    let strategy = registry
        .resolve()
        .context("cannot set up notifications on this machine")?;
    let hook_map = hooks::build_hook_map(&preference, strategy)?;
    let installed: Vec<String> = hook_map.keys().cloned().collect();

    let mut store = SettingsStore::open_default()?;
    store.merge_hooks(hook_map)?;
    store.save()?;

    println!(
        "Installed {} ({}) into {}",
        if installed.len() == 1 { "hook" } else { "hooks" },
        installed.join(", "),
        store.path().display()
    );
    Ok(())
}

fn remove(events: Vec<String>) -> Result<()> {
    let names: Vec<String> = if events.is_empty() {
        HookEvent::ALL.iter().map(|event| event.key().to_string()).collect()
    } else {
        events
            .iter()
            .map(|name| match HookEvent::from_key(name) {
                Some(event) => Ok(event.key().to_string()),
                None => bail!("unknown event \"{}\" (expected Notification or Stop)", name),
            })
            .collect::<Result<_>>()?
    };

    let mut store = SettingsStore::open_default()?;
    store.load()?;
    let mut removed = Vec::new();
    for name in &names {
        if store.has_hook(name)? {
            removed.push(name.clone());
        }
    }
    if removed.is_empty() {
        println!("None of these hooks are installed; settings left untouched.");
        return Ok(());
    }

    store.remove_hooks(&names)?;
    store.save()?;

    println!("Removed {} from {}", removed.join(", "), store.path().display());
    Ok(())
}

fn uninstall() -> Result<()> {
    let mut store = SettingsStore::open_default()?;
    store.load()?;
    if !store.has_hooks()? {
        println!("No hooks installed; settings left untouched.");
        return Ok(());
    }

    store.remove_all_hooks()?;
    store.save()?;
    println!("Removed all hooks from {}", store.path().display());
    Ok(())
}

fn status(json: bool) -> Result<()> {
    let registry = PlatformRegistry::new();
    let mut store = SettingsStore::open_default()?;
    let analysis = store.analyze_configuration(&registry)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    match analysis.platform {
        Some(platform) => println!(
            "Platform: {} (sound {})",
            platform,
            if analysis.platform_supports_sound {
                "supported"
            } else {
                "not supported"
            }
        ),
        None => println!("Platform: unsupported ({})", std::env::consts::OS),
    }
    println!("Settings: {}", store.path().display());
    for hook in &analysis.hooks {
        let state = match (hook.installed, hook.sound) {
            (false, _) => "not installed",
            (true, false) => "installed",
            (true, true) => "installed (sound)",
        };
        println!("  {:<14} {}", hook.event.key(), state);
    }
    Ok(())
}
