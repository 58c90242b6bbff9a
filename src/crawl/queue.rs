// src/crawl/queue.rs
// =============================================================================
// This module keeps track of which paths the crawler has found and which of
// them it has already visited.
//
// How it works:
// 1. Every path ever discovered is stored once, in discovery order
// 2. Each stored path is either Unvisited or Visited
// 3. The next path to visit is the oldest one still Unvisited
//
// Because a path is stored only once and never goes back to Unvisited, the
// crawl always ends on a finite site: each path is handed out exactly once.
//
// Paths are compared as plain strings. "/a", "/a/" and "/a?x=1" are three
// different paths.
//
// Rust concepts:
// - IndexMap: A HashMap that remembers insertion order
// - Option<&str>: "maybe a path", borrowed from the queue
// =============================================================================

use indexmap::IndexMap;

/// Whether a discovered path has been processed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    Visited,
}

/// Discovered paths and their visit state, in discovery order.
#[derive(Debug, Default)]
pub struct PathQueue {
    paths: IndexMap<String, VisitState>,
}

impl PathQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds a path as Unvisited unless it is already known (in any state)
    //
    // Returns: true if the path was new
    pub fn discover(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.paths.contains_key(&path) {
            return false;
        }
        self.paths.insert(path, VisitState::Unvisited);
        true
    }

    // Returns the earliest discovered path that is still Unvisited.
    // The path stays in the queue; call mark_visited once it is processed.
    pub fn next_unvisited(&self) -> Option<&str> {
        self.paths
            .iter()
            .find(|(_, state)| **state == VisitState::Unvisited)
            .map(|(path, _)| path.as_str())
    }

    // Unknown or already visited paths are left alone
    pub fn mark_visited(&mut self, path: &str) {
        if let Some(state) = self.paths.get_mut(path) {
            *state = VisitState::Visited;
        }
    }

    pub fn state(&self, path: &str) -> Option<VisitState> {
        self.paths.get(path).copied()
    }

    /// All discovered paths, in discovery order.
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths.into_keys().collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why IndexMap instead of HashMap?
//    - HashMap iterates in an arbitrary order
//    - IndexMap iterates in the order keys were inserted
//    - The order paths were discovered decides the order they are visited,
//      so we need that order back
//
// 2. Why does next_unvisited() not remove the path?
//    - The crawler still needs the path to stay "known" after visiting it
//    - Otherwise a later link to the same page would queue it again
//
// 3. What is impl Into<String>?
//    - Lets callers pass either &str or String
//    - A String is moved in; a &str is copied once
// -----------------------------------------------------------------------------
