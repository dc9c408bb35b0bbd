//! Searchable candidates
//!
//! Candidates are supplied by the host and never mutated by the engine.
//! The palette pulls a fresh [`Catalog`] from its [`CandidateSource`] every
//! time it opens.

/// Display category of a candidate (only used for iconography)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Host-curated destination
    Featured,
    #[default]
    Plain,
}

/// A single searchable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub category: Category,
}

impl Candidate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: Category::Plain,
        }
    }

    pub fn featured(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: Category::Featured,
        }
    }

    pub fn is_featured(&self) -> bool {
        self.category == Category::Featured
    }
}

/// Everything the palette can show: the searchable candidates plus the
/// featured entries listed when there is no query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub candidates: Vec<Candidate>,
    pub featured: Vec<Candidate>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>, featured: Vec<Candidate>) -> Self {
        Self {
            candidates,
            featured,
        }
    }

    /// Build a catalog from plain labels.
    ///
    /// Searchable labels that also appear in `featured` are tagged as
    /// [`Category::Featured`], so matched rows can show the featured icon.
    pub fn from_labels<I, S, F, T>(labels: I, featured: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let featured: Vec<Candidate> = featured.into_iter().map(Candidate::featured).collect();
        let candidates = labels
            .into_iter()
            .map(|label| {
                let label = label.into();
                if featured.iter().any(|f| f.label == label) {
                    Candidate::featured(label)
                } else {
                    Candidate::new(label)
                }
            })
            .collect();

        Self {
            candidates,
            featured,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.featured.is_empty()
    }
}

/// Supplies the catalog to the palette.
///
/// Implemented for [`StaticCandidates`] and for any `FnMut() -> Catalog`,
/// so hosts with a dynamic candidate list can pass a closure.
pub trait CandidateSource {
    fn catalog(&mut self) -> Catalog;
}

/// Fixed catalog handed over at construction time
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    catalog: Catalog,
}

impl StaticCandidates {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CandidateSource for StaticCandidates {
    fn catalog(&mut self) -> Catalog {
        self.catalog.clone()
    }
}

impl<F> CandidateSource for F
where
    F: FnMut() -> Catalog,
{
    fn catalog(&mut self) -> Catalog {
        self()
    }
}
