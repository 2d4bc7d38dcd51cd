// src/identity.rs
//! Identity resolution: folds raw sender/recipient fields into one key per person.
//!
//! A raw field is normalized (lower-cased, commas removed, domain dropped) and
//! then looked up in the alias table. Aliases point at a person id, and the
//! person table supplies the canonical display name used as the identity.

use std::collections::HashMap;

/// Canonical key for one participant.
pub type Identity = String;

/// Person id as it appears in the person and alias tables.
pub type PersonId = i64;

/// Alias key (lower-cased) -> person id.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, PersonId>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias under its lower-cased form. Domains and commas are
    /// kept, so only keys already in normalized form are reachable by resolution.
    pub fn insert(&mut self, alias: &str, person: PersonId) {
        self.entries.insert(alias.to_lowercase(), person);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<PersonId> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, PersonId)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, PersonId)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, person) in iter {
            table.insert(&alias, person);
        }
        table
    }
}

/// Person id -> canonical display name.
#[derive(Debug, Clone, Default)]
pub struct PersonTable {
    names: HashMap<PersonId, String>,
}

impl PersonTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PersonId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    #[must_use]
    pub fn name(&self, id: PersonId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

impl FromIterator<(PersonId, String)> for PersonTable {
    fn from_iter<I: IntoIterator<Item = (PersonId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Normalizes a raw name or address field.
///
/// Lower-cases, removes commas and keeps only the part before the first `@`.
/// For `Name <mailbox@domain>` fields the mailbox is kept.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lowered: String = raw.to_lowercase().chars().filter(|c| *c != ',').collect();

    match lowered.split_once('@') {
        Some((local, _)) => mailbox_part(local).to_string(),
        None => lowered,
    }
}

fn mailbox_part(local: &str) -> &str {
    local.rsplit_once('<').map_or(local, |(_, mailbox)| mailbox)
}

/// Resolves raw fields to identities against read-only alias/person tables.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    /// Normalized key -> display name, with aliases already joined to persons.
    canonical: HashMap<String, Identity>,
}

impl IdentityResolver {
    /// Joins the alias table against the person table once.
    ///
    /// Aliases pointing at unknown person ids are skipped. Each display name is
    /// also registered under its own normalized form so canonical names resolve
    /// to themselves; explicit aliases win over that fallback.
    #[must_use]
    pub fn new(aliases: &AliasTable, persons: &PersonTable) -> Self {
        let mut canonical = HashMap::new();

        for (key, person) in &aliases.entries {
            match persons.name(*person) {
                Some(name) => {
                    canonical.insert(key.clone(), name.to_string());
                }
                None => tracing::debug!(alias = %key, person, "alias points at unknown person"),
            }
        }

        for (_, name) in persons.iter() {
            canonical
                .entry(normalize(name))
                .or_insert_with(|| name.to_string());
        }

        Self { canonical }
    }

    /// Resolver with no aliases: identities are the normalized strings.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Resolves a raw field to its identity. Never fails.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Identity {
        let key = normalize(raw);
        match self.canonical.get(&key) {
            Some(name) => name.clone(),
            None => key,
        }
    }

    /// Number of normalized keys that map to a display name.
    #[must_use]
    pub fn known_keys(&self) -> usize {
        self.canonical.len()
    }
}
