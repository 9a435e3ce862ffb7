use crate::domain::{ConfigAnalysis, HookEvent, HookStatus};
use crate::error::{Error, Result};
use crate::platform::PlatformRegistry;
use crate::settings::paths::{backup_path, settings_file};
use crate::settings::validate::validate_document;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the runner's settings document for the duration of one invocation.
/// All hook edits go through here and `save` is the only write path. There
/// is no cross-process locking; concurrent invocations race and the last
/// writer wins.
pub struct SettingsStore {
    path: PathBuf,
    document: Option<Map<String, Value>>,
}

impl SettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            document: None,
        }
    }

    /// Store over the default per-user settings file
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(settings_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file into memory. A missing or blank file is an
    /// empty document, not an error.
    pub fn load(&mut self) -> Result<()> {
        let document = if self.path.exists() {
            let content = fs::read_to_string(&self.path).map_err(|source| Error::Io {
                op: "read",
                path: self.path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                let value: Value =
                    serde_json::from_str(&content).map_err(|source| Error::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                match value {
                    Value::Object(map) => map,
                    other => {
                        return Err(Error::Validate {
                            errors: vec![format!(
                                "settings root must be an object, found: {}",
                                other
                            )],
                        })
                    }
                }
            }
        } else {
            debug!("no settings file at {}, starting empty", self.path.display());
            Map::new()
        };

        self.document = Some(document);
        Ok(())
    }

    /// Validate and write the document back, copying the previous file to a
    /// `.backup` sibling first. The backup is best-effort; a failure there
    /// only warns. The write itself is a plain overwrite, not an atomic
    /// replace.
    pub fn save(&mut self) -> Result<()> {
        let document = self.document.as_ref().ok_or(Error::NotLoaded)?;

        let outcome = validate_document(document);
        if !outcome.is_valid() {
            return Err(Error::Validate {
                errors: outcome.errors,
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                op: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if self.path.exists() {
            let backup = backup_path(&self.path);
            if let Err(err) = fs::copy(&self.path, &backup) {
                warn!(
                    "could not back up {} to {}: {}",
                    self.path.display(),
                    backup.display(),
                    err
                );
            }
        }

        let mut json =
            serde_json::to_string_pretty(document).map_err(|source| Error::Serialize {
                path: self.path.clone(),
                source,
            })?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|source| Error::Io {
            op: "write",
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the in-memory document wholesale and persist it
    pub fn save_document(&mut self, document: Map<String, Value>) -> Result<()> {
        self.document = Some(document);
        self.save()
    }

    /// Shallow per-event merge: each event key in `new_hooks` replaces that
    /// event's existing groups wholesale. Events not named are untouched.
    pub fn merge_hooks(&mut self, new_hooks: Map<String, Value>) -> Result<()> {
        self.ensure_loaded()?;
        let document = self.document_mut()?;

        let hooks = document
            .entry("hooks")
            .or_insert_with(|| Value::Object(Map::new()));
        if !hooks.is_object() {
            return Err(Error::Validate {
                errors: vec![format!("\"hooks\" must be an object, found: {}", hooks)],
            });
        }
        if let Some(events) = hooks.as_object_mut() {
            for (event, groups) in new_hooks {
                events.insert(event, groups);
            }
        }

        self.revalidate()
    }

    /// Remove the named events. Removing an absent event is a no-op; when
    /// the last event goes, the `hooks` key goes with it so an empty object
    /// is never persisted.
    pub fn remove_hooks<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        self.ensure_loaded()?;
        let document = self.document_mut()?;

        let mut now_empty = false;
        if let Some(events) = document.get_mut("hooks").and_then(Value::as_object_mut) {
            for name in names {
                events.remove(name.as_ref());
            }
            now_empty = events.is_empty();
        }
        if now_empty {
            document.remove("hooks");
        }

        self.revalidate()
    }

    /// Drop the entire hooks section, installed by chime or not
    pub fn remove_all_hooks(&mut self) -> Result<()> {
        self.ensure_loaded()?;
        self.document_mut()?.remove("hooks");
        Ok(())
    }

    pub fn has_hooks(&self) -> Result<bool> {
        Ok(!self.installed_hook_names()?.is_empty())
    }

    pub fn has_hook(&self, name: &str) -> Result<bool> {
        let document = self.document()?;
        Ok(document
            .get("hooks")
            .and_then(Value::as_object)
            .map_or(false, |events| events.contains_key(name)))
    }

    /// Event names with installed hook groups, in document order
    pub fn installed_hook_names(&self) -> Result<Vec<String>> {
        let document = self.document()?;
        Ok(document
            .get("hooks")
            .and_then(Value::as_object)
            .map(|events| events.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Report what is installed for each known event. The sound check is a
    /// substring heuristic over the stored command text; the runner's schema
    /// has no structural sound field to read instead.
    pub fn analyze_configuration(&mut self, registry: &PlatformRegistry) -> Result<ConfigAnalysis> {
        self.ensure_loaded()?;
        let markers = registry.sound_markers();
        let document = self.document()?;
        let events = document.get("hooks").and_then(Value::as_object);

        let mut hooks = Vec::new();
        for event in HookEvent::ALL {
            let groups = events.and_then(|events| events.get(event.key()));
            let sound = groups.map_or(false, |groups| {
                commands_of(groups)
                    .any(|command| markers.iter().any(|marker| command.contains(marker)))
            });
            hooks.push(HookStatus {
                event,
                installed: groups.is_some(),
                sound,
            });
        }

        let (platform, platform_supports_sound) = match registry.resolve() {
            Ok(strategy) => (Some(strategy.platform_id()), strategy.supports_sound()),
            Err(_) => (None, false),
        };

        Ok(ConfigAnalysis {
            platform,
            platform_supports_sound,
            hooks,
        })
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.document.is_none() {
            self.load()?;
        }
        Ok(())
    }

    fn document(&self) -> Result<&Map<String, Value>> {
        self.document.as_ref().ok_or(Error::NotLoaded)
    }

    fn document_mut(&mut self) -> Result<&mut Map<String, Value>> {
        self.document.as_mut().ok_or(Error::NotLoaded)
    }

    fn revalidate(&self) -> Result<()> {
        let outcome = validate_document(self.document()?);
        if outcome.is_valid() {
            Ok(())
        } else {
            Err(Error::Validate {
                errors: outcome.errors,
            })
        }
    }
}

/// Every command string reachable under one event's groups
fn commands_of(groups: &Value) -> impl Iterator<Item = &str> {
    groups
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|group| group.get("hooks").and_then(Value::as_array))
        .flatten()
        .filter_map(|entry| entry.get("command").and_then(Value::as_str))
}
