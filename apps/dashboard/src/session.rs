//! In-memory session store for evaluated candidates.
//!
//! Volatile by design: cleared explicitly by the user or when the process
//! exits. There is no persistence layer behind it.

use crate::candidate::Candidate;

#[derive(Debug, Default)]
pub struct SessionStore {
    candidates: Vec<Candidate>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate, replacing any existing candidate with the same
    /// name. Last write wins: a re-analyzed file is newer information.
    pub fn upsert(&mut self, candidate: Candidate) {
        if let Some(existing) = self
            .candidates
            .iter_mut()
            .find(|c| c.name == candidate.name)
        {
            *existing = candidate;
        } else {
            self.candidates.push(candidate);
        }
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates_mut(&mut self) -> &mut [Candidate] {
        self.candidates.as_mut_slice()
    }

    /// All candidates, highest score first.
    pub fn sorted_by_score(&self) -> Vec<&Candidate> {
        let mut sorted: Vec<&Candidate> = self.candidates.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    /// Qualified candidates (not filtered out), highest score first.
    pub fn qualified(&self) -> Vec<&Candidate> {
        self.sorted_by_score()
            .into_iter()
            .filter(|c| !c.filtered_out)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }
}
