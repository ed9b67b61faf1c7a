use streakmap_core::{BucketGrid, ContributionGraph, Theme};

use crate::fallback::decorative_buckets;

pub struct App {
    pub graph: Option<ContributionGraph>,
    /// Cached display levels; random when no graph was loaded. Buckets are
    /// theme-independent, so a theme toggle reuses them as-is.
    pub buckets: BucketGrid,
    pub decorative: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(graph: Option<ContributionGraph>, theme: Theme) -> App {
        let (buckets, decorative) = match &graph {
            Some(g) => (g.buckets, false),
            None => (decorative_buckets(), true),
        };
        App {
            graph,
            buckets,
            decorative,
            theme,
        }
    }

    /// Only the palette lookup changes; the next draw picks it up.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn total(&self) -> Option<u32> {
        self.graph.as_ref().and_then(|g| g.total)
    }
}
