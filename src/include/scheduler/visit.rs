use serde::{Deserialize, Serialize};

use crate::include::common::config::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitKind {
    // a track that was actually requested
    Request,
    // the head sweeping to a disk edge (SCAN / C-SCAN only)
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub track: Track,
    pub kind: VisitKind,
}

impl Visit {
    pub fn request(track: Track) -> Self {
        Visit { track, kind: VisitKind::Request }
    }

    pub fn boundary(track: Track) -> Self {
        Visit { track, kind: VisitKind::Boundary }
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == VisitKind::Boundary
    }
}

/// Ordered list of tracks the head visits, as produced by a scheduling policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitSequence {
    visits: Vec<Visit>,
}

impl VisitSequence {
    pub fn new() -> Self {
        VisitSequence { visits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VisitSequence { visits: Vec::with_capacity(capacity) }
    }

    /// Every track is treated as a serviced request.
    pub fn from_requests<I: IntoIterator<Item = Track>>(tracks: I) -> Self {
        VisitSequence {
            visits: tracks.into_iter().map(Visit::request).collect(),
        }
    }

    pub fn push_request(&mut self, track: Track) {
        self.visits.push(Visit::request(track));
    }

    pub fn push_boundary(&mut self, track: Track) {
        self.visits.push(Visit::boundary(track));
    }

    pub fn extend_requests<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        self.visits.extend(tracks.into_iter().map(Visit::request));
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.visits.iter().map(|v| v.track).collect()
    }

    // tracks of the original request set, in service order
    pub fn serviced(&self) -> Vec<Track> {
        self.visits
            .iter()
            .filter(|v| !v.is_boundary())
            .map(|v| v.track)
            .collect()
    }

    pub fn boundary_count(&self) -> usize {
        self.visits.iter().filter(|v| v.is_boundary()).count()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
