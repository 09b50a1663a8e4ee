//! Term and entity label lookups
//!
//! The reconciler never loads storage itself. Hosts pass implementations of
//! [`TermLookup`] and [`EntityLookup`]; [`MemoryStore`] covers fixtures and tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resolves taxonomy term ids to term names
pub trait TermLookup {
    fn term_name(&self, id: &str) -> Option<String>;
}

/// Resolves entity ids to entity titles
pub trait EntityLookup {
    fn entity_title(&self, id: &str) -> Option<String>;
}

/// The lookups a render pass may use
#[derive(Clone, Copy)]
pub struct Lookups<'a> {
    pub terms: &'a dyn TermLookup,
    pub entities: &'a dyn EntityLookup,
}

impl<'a> Lookups<'a> {
    pub fn new(terms: &'a dyn TermLookup, entities: &'a dyn EntityLookup) -> Self {
        Self { terms, entities }
    }
}

/// An in-memory label store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    pub terms: HashMap<String, String>,
    #[serde(default)]
    pub entities: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, id: &str, name: &str) -> Self {
        self.terms.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_entity(mut self, id: &str, title: &str) -> Self {
        self.entities.insert(id.to_string(), title.to_string());
        self
    }

    pub fn lookups(&self) -> Lookups<'_> {
        Lookups::new(self, self)
    }
}

impl TermLookup for MemoryStore {
    fn term_name(&self, id: &str) -> Option<String> {
        self.terms.get(id).cloned()
    }
}

impl EntityLookup for MemoryStore {
    fn entity_title(&self, id: &str) -> Option<String> {
        self.entities.get(id).cloned()
    }
}

/// Remembers lookup results, hits and misses alike, for one render pass
pub struct MemoizedLookups<'a> {
    inner: Lookups<'a>,
    terms: RefCell<HashMap<String, Option<String>>>,
    entities: RefCell<HashMap<String, Option<String>>>,
}

impl<'a> MemoizedLookups<'a> {
    pub fn new(inner: Lookups<'a>) -> Self {
        Self {
            inner,
            terms: RefCell::new(HashMap::new()),
            entities: RefCell::new(HashMap::new()),
        }
    }

    pub fn lookups(&self) -> Lookups<'_> {
        Lookups::new(self, self)
    }
}

impl TermLookup for MemoizedLookups<'_> {
    fn term_name(&self, id: &str) -> Option<String> {
        if let Some(cached) = self.terms.borrow().get(id) {
            return cached.clone();
        }
        let name = self.inner.terms.term_name(id);
        self.terms.borrow_mut().insert(id.to_string(), name.clone());
        name
    }
}

impl EntityLookup for MemoizedLookups<'_> {
    fn entity_title(&self, id: &str) -> Option<String> {
        if let Some(cached) = self.entities.borrow().get(id) {
            return cached.clone();
        }
        let title = self.inner.entities.entity_title(id);
        self.entities.borrow_mut().insert(id.to_string(), title.clone());
        title
    }
}
