// SPDX-License-Identifier: MPL-2.0
//! Locale catalogs: per-language trees of translated strings.
//!
//! Catalogs are TOML files embedded at build time from `assets/i18n/`, one
//! per language (`en.toml`, `hi.toml`, `kn.toml`). Tables become branches
//! and string values become leaves, so `[weather] humidity = "..."` is
//! addressed as `weather.humidity`.

use super::Language;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One node of a catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

impl Node {
    /// Walks `key` segment by segment (split on `.`).
    ///
    /// Returns `None` when a segment is missing, when the walk ends on a
    /// branch or passes through a leaf, or when the final leaf is empty.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for segment in key.split('.') {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        match node {
            Node::Leaf(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Dotted paths of every leaf under this node, in key order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &Node, prefix: String, out: &mut Vec<String>) {
    match node {
        Node::Leaf(_) => out.push(prefix),
        Node::Branch(children) => {
            for (name, child) in children {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_leaf_paths(child, path, out);
            }
        }
    }
}

/// Immutable set of catalog trees, one per supported language.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    locales: HashMap<Language, Node>,
}

impl LocaleCatalog {
    /// Loads the catalogs embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let file_name = format!("{}.toml", lang.code());
            let file = Asset::get(&file_name)
                .ok_or_else(|| Error::Catalog(format!("missing embedded catalog {file_name}")))?;
            sources.push((lang, String::from_utf8_lossy(file.data.as_ref()).into_owned()));
        }
        Self::from_sources(sources.iter().map(|(lang, text)| (*lang, text.as_str())))
    }

    /// Parses one TOML document per language.
    ///
    /// Fails if any supported language is missing or a document is not a
    /// tree of tables and strings.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Language, &'a str)>) -> Result<Self> {
        let mut locales = HashMap::new();
        for (lang, text) in sources {
            let root: Node = toml::from_str(text)
                .map_err(|err| Error::Catalog(format!("{}: {err}", lang.code())))?;
            if !matches!(root, Node::Branch(_)) {
                return Err(Error::Catalog(format!("{}: root must be a table", lang.code())));
            }
            locales.insert(lang, root);
        }
        if let Some(missing) = Language::ALL.into_iter().find(|lang| !locales.contains_key(lang)) {
            return Err(Error::Catalog(format!("no catalog for '{}'", missing.code())));
        }
        tracing::debug!("loaded {} locale catalogs", locales.len());
        Ok(Self { locales })
    }

    /// The catalog tree for `lang`.
    pub fn locale(&self, lang: Language) -> Option<&Node> {
        self.locales.get(&lang)
    }

    /// Resolves `key` in `lang`'s tree.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.locale(lang)?.resolve(key)
    }
}
