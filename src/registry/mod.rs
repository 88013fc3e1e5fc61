//! Alias registry
//!
//! Maps short alias names to shell command lines. Built once at startup
//! from the built-in table and the user's configuration, then read-only.
//! The default target is a regular (usually composite) alias looked up
//! through the same path as any other.

pub mod builtin;
mod entry;

pub use entry::{AliasEntry, AliasRef, CompositeAlias};

use crate::config::Config;
use crate::error::{DockaliasError, DockaliasResult};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Names taken by CLI commands; an alias with one of these could never run
pub const RESERVED_NAMES: &[&str] = &["help", "list", "init", "completions"];

/// Validated, immutable alias table
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<AliasEntry>,
    composites: Vec<CompositeAlias>,
    default_alias: String,
}

impl Registry {
    /// Build a registry, checking names, composite steps and the default
    pub fn new(
        entries: Vec<AliasEntry>,
        composites: Vec<CompositeAlias>,
        default_alias: impl Into<String>,
    ) -> DockaliasResult<Self> {
        let registry = Self {
            entries,
            composites,
            default_alias: default_alias.into(),
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Built-in table, overlaid with the aliases from `config`
    ///
    /// A user alias named like a built-in replaces it at the same position.
    pub fn from_config(config: &Config) -> DockaliasResult<Self> {
        let mut entries = builtin::commands(&config.project);
        let mut composites = builtin::composites();
        let mut seen = HashSet::new();

        for alias in &config.aliases {
            if !seen.insert(alias.name.as_str()) {
                return Err(DockaliasError::DuplicateAlias(alias.name.clone()));
            }
            composites.retain(|c| c.name != alias.name);

            let entry = AliasEntry {
                name: alias.name.clone(),
                description: alias.description.clone(),
                command_line: builtin::expand_placeholders(&alias.command, &config.project),
            };
            match entries.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => {
                    debug!("Overriding built-in alias: {}", entry.name);
                    *existing = entry;
                }
                None => entries.push(entry),
            }
        }

        for composite in &config.composites {
            if !seen.insert(composite.name.as_str()) {
                return Err(DockaliasError::DuplicateAlias(composite.name.clone()));
            }
            entries.retain(|e| e.name != composite.name);

            let replacement = CompositeAlias {
                name: composite.name.clone(),
                description: composite.description.clone(),
                steps: composite.steps.clone(),
            };
            match composites.iter_mut().find(|c| c.name == replacement.name) {
                Some(existing) => *existing = replacement,
                None => composites.push(replacement),
            }
        }

        Self::new(entries, composites, config.general.default_alias.clone())
    }

    /// All plain aliases in declaration order
    pub fn list_aliases(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Every alias, plain ones first, each group in declaration order
    pub fn iter(&self) -> impl Iterator<Item = AliasRef<'_>> {
        self.entries
            .iter()
            .map(AliasRef::Command)
            .chain(self.composites.iter().map(AliasRef::Composite))
    }

    /// Names of every alias, in `iter` order
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|alias| alias.name().to_string()).collect()
    }

    /// Name of the alias run when none is given
    pub fn default_alias(&self) -> &str {
        &self.default_alias
    }

    /// Look up a plain alias
    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up a composite alias
    pub fn get_composite(&self, name: &str) -> Option<&CompositeAlias> {
        self.composites.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some() || self.get_composite(name).is_some()
    }

    /// Resolve `name` to the command lines it runs, in order
    ///
    /// Plain aliases yield one entry; composites are expanded depth-first.
    pub fn resolve(&self, name: &str) -> DockaliasResult<Vec<&AliasEntry>> {
        let mut resolved = Vec::new();
        self.expand(name, &mut resolved)?;
        debug!("Resolved '{}' to {} command(s)", name, resolved.len());
        Ok(resolved)
    }

    /// Resolve the default alias
    pub fn resolve_default(&self) -> DockaliasResult<Vec<&AliasEntry>> {
        self.resolve(&self.default_alias)
    }

    fn expand<'a>(&'a self, name: &str, out: &mut Vec<&'a AliasEntry>) -> DockaliasResult<()> {
        if let Some(entry) = self.get(name) {
            out.push(entry);
            return Ok(());
        }

        let composite = self
            .get_composite(name)
            .ok_or_else(|| DockaliasError::UnknownAlias {
                name: name.to_string(),
                available: self.names(),
            })?;

        for step in &composite.steps {
            self.expand(step, out)?;
        }
        Ok(())
    }

    fn validate(&self) -> DockaliasResult<()> {
        let mut seen = HashSet::new();
        for alias in self.iter() {
            validate_name(alias.name())?;
            if !seen.insert(alias.name()) {
                return Err(DockaliasError::DuplicateAlias(alias.name().to_string()));
            }
        }

        for composite in &self.composites {
            if composite.steps.is_empty() {
                return Err(DockaliasError::invalid_alias(
                    &composite.name,
                    "composite has no steps",
                ));
            }
            if let Some(step) = composite.steps.iter().find(|s| !self.contains(s)) {
                return Err(DockaliasError::invalid_alias(
                    &composite.name,
                    format!("step '{step}' is not a registered alias"),
                ));
            }
        }

        self.check_cycles()?;

        if !self.contains(&self.default_alias) {
            return Err(DockaliasError::invalid_alias(
                &self.default_alias,
                "default alias is not registered",
            ));
        }

        Ok(())
    }

    fn check_cycles(&self) -> DockaliasResult<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit<'a>(
            registry: &'a Registry,
            name: &'a str,
            marks: &mut HashMap<&'a str, Mark>,
        ) -> DockaliasResult<()> {
            let Some(composite) = registry.get_composite(name) else {
                return Ok(());
            };
            match marks.get(name) {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => {
                    return Err(DockaliasError::invalid_alias(
                        name,
                        "composite refers back to itself",
                    ))
                }
                None => {}
            }
            marks.insert(name, Mark::Visiting);
            for step in &composite.steps {
                visit(registry, step, marks)?;
            }
            marks.insert(name, Mark::Done);
            Ok(())
        }

        let mut marks = HashMap::new();
        for composite in &self.composites {
            visit(self, &composite.name, &mut marks)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> DockaliasResult<()> {
    if name.is_empty() {
        return Err(DockaliasError::invalid_alias(name, "name is empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DockaliasError::invalid_alias(name, "name contains whitespace"));
    }
    if name.starts_with('-') {
        return Err(DockaliasError::invalid_alias(name, "name starts with '-'"));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(DockaliasError::invalid_alias(
            name,
            "name is reserved for a dockalias command",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{AliasConfig, CompositeConfig};

    fn up_down() -> Registry {
        Registry::new(
            vec![AliasEntry::new("up", "echo up"), AliasEntry::new("down", "echo down")],
            vec![CompositeAlias::new("all", ["down", "up"])],
            "all",
        )
        .unwrap()
    }

    fn command_lines(entries: &[&AliasEntry]) -> Vec<String> {
        entries.iter().map(|e| e.command_line.clone()).collect()
    }

    #[test]
    fn every_builtin_resolves() {
        let registry = Registry::from_config(&Config::default()).unwrap();
        for name in registry.names() {
            assert!(!registry.resolve(&name).unwrap().is_empty(), "{name}");
        }
    }

    #[test]
    fn builtin_declaration_order() {
        let registry = Registry::from_config(&Config::default()).unwrap();
        let names: Vec<_> = registry.list_aliases().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "up", "down", "down-v", "down-all", "access", "reload", "logs", "logs-all",
                "migrations", "migrate", "shell", "perm",
            ]
        );
        assert_eq!(registry.list_aliases(), registry.list_aliases());
    }

    #[test]
    fn unknown_alias_is_an_error() {
        let err = up_down().resolve("nonexistent").unwrap_err();
        match err {
            DockaliasError::UnknownAlias { name, available } => {
                assert_eq!(name, "nonexistent");
                assert_eq!(available, vec!["up", "down", "all"]);
            }
            other => panic!("expected UnknownAlias, got {other:?}"),
        }
    }

    #[test]
    fn default_expands_in_declared_order() {
        let registry = up_down();
        let resolved = registry.resolve_default().unwrap();
        assert_eq!(command_lines(&resolved), vec!["echo down", "echo up"]);
    }

    #[test]
    fn nested_composites_expand_depth_first() {
        let registry = Registry::new(
            vec![
                AliasEntry::new("a", "echo a"),
                AliasEntry::new("b", "echo b"),
                AliasEntry::new("c", "echo c"),
            ],
            vec![
                CompositeAlias::new("ab", ["a", "b"]),
                CompositeAlias::new("abc", ["ab", "c"]),
            ],
            "abc",
        )
        .unwrap();

        let resolved = registry.resolve("abc").unwrap();
        assert_eq!(command_lines(&resolved), vec!["echo a", "echo b", "echo c"]);
    }

    #[test]
    fn rejects_duplicates() {
        let err = Registry::new(
            vec![AliasEntry::new("up", "a"), AliasEntry::new("up", "b")],
            vec![],
            "up",
        )
        .unwrap_err();
        assert!(matches!(err, DockaliasError::DuplicateAlias(name) if name == "up"));
    }

    #[test]
    fn rejects_cycles() {
        let err = Registry::new(
            vec![AliasEntry::new("up", "echo up")],
            vec![
                CompositeAlias::new("x", ["up", "y"]),
                CompositeAlias::new("y", ["x"]),
            ],
            "up",
        )
        .unwrap_err();
        assert!(matches!(err, DockaliasError::InvalidAlias { .. }));
    }

    #[test]
    fn rejects_dangling_steps_and_empty_composites() {
        let dangling = Registry::new(
            vec![AliasEntry::new("up", "echo up")],
            vec![CompositeAlias::new("all", ["down", "up"])],
            "all",
        );
        assert!(dangling.is_err());

        let empty = Registry::new(
            vec![AliasEntry::new("up", "echo up")],
            vec![CompositeAlias::new("all", Vec::<String>::new())],
            "up",
        );
        assert!(empty.is_err());
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "two words", "-x", "help", "list"] {
            let result = Registry::new(vec![AliasEntry::new(name, "true")], vec![], name);
            assert!(result.is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn rejects_unregistered_default() {
        let err = Registry::new(vec![AliasEntry::new("up", "true")], vec![], "all").unwrap_err();
        assert!(err.to_string().contains("default alias"));
    }

    #[test]
    fn user_alias_overrides_builtin_in_place() {
        let mut config = Config::default();
        config.aliases.push(AliasConfig {
            name: "logs".to_string(),
            description: None,
            command: "{compose} logs --tail 50 {service}".to_string(),
        });
        config.aliases.push(AliasConfig {
            name: "test".to_string(),
            description: Some("Run tests".to_string()),
            command: "{compose} exec {service} {manage} test".to_string(),
        });

        let registry = Registry::from_config(&config).unwrap();
        let entries = registry.list_aliases();
        assert_eq!(entries[6].name, "logs");
        assert_eq!(entries[6].command_line, "docker compose logs --tail 50 web");
        assert_eq!(entries.last().unwrap().name, "test");
        assert_eq!(
            entries.last().unwrap().command_line,
            "docker compose exec web python manage.py test"
        );
    }

    #[test]
    fn user_duplicates_are_rejected() {
        let mut config = Config::default();
        for _ in 0..2 {
            config.aliases.push(AliasConfig {
                name: "test".to_string(),
                description: None,
                command: "true".to_string(),
            });
        }
        assert!(matches!(
            Registry::from_config(&config),
            Err(DockaliasError::DuplicateAlias(_))
        ));
    }

    #[test]
    fn user_composite_and_default() {
        let mut config = Config::default();
        config.general.default_alias = "rebuild".to_string();
        config.composites.push(CompositeConfig {
            name: "rebuild".to_string(),
            description: None,
            steps: vec!["down-all".to_string(), "all".to_string()],
        });

        let registry = Registry::from_config(&config).unwrap();
        let resolved = registry.resolve_default().unwrap();
        assert_eq!(
            command_lines(&resolved),
            vec![
                "docker compose down -v --rmi all",
                "docker compose down",
                "docker compose up -d",
            ]
        );
    }
}
