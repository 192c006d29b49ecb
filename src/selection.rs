//! Selection session: the candidate list, the chosen object and the most
//! recent assessment for it.
//!
//! The assessment is the only retained result. It is keyed by the selected
//! object and dropped whenever the selection changes.

use tracing::info;

use crate::catalog::CatalogEntry;
use crate::config::EngineConfig;
use crate::error::ImpactError;
use crate::pipeline::ImpactAssessment;

#[derive(Clone, Debug, Default)]
pub struct Selection {
    candidates: Vec<CatalogEntry>,
    selected: Option<usize>,
    last_assessment: Option<ImpactAssessment>,
}

impl Selection {
    pub fn new(candidates: Vec<CatalogEntry>) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    pub fn candidates(&self) -> &[CatalogEntry] {
        &self.candidates
    }

    /// Replace the candidate list. Clears the selection.
    pub fn set_candidates(&mut self, candidates: Vec<CatalogEntry>) {
        self.candidates = candidates;
        self.clear();
    }

    /// Select the candidate with `id`. An empty id clears the selection.
    pub fn select(&mut self, id: &str) -> Result<Option<&CatalogEntry>, ImpactError> {
        if id.is_empty() {
            self.clear();
            return Ok(None);
        }

        let index = self
            .candidates
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| ImpactError::UnknownObject(id.to_string()))?;

        self.selected = Some(index);
        self.last_assessment = None;
        let entry = &self.candidates[index];
        info!(id = %entry.id, name = %entry.name, "selected object");
        Ok(Some(entry))
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.selected.map(|index| &self.candidates[index])
    }

    /// Run the pipeline for the selected object and keep the result.
    pub fn simulate_impact(
        &mut self,
        config: &EngineConfig,
    ) -> Result<&ImpactAssessment, ImpactError> {
        let entry = self.selected().ok_or(ImpactError::NoSelection)?;
        let assessment = entry.assess(config)?;
        Ok(self.last_assessment.insert(assessment))
    }

    pub fn last_assessment(&self) -> Option<&ImpactAssessment> {
        self.last_assessment.as_ref()
    }

    pub fn has_assessment(&self) -> bool {
        self.last_assessment.is_some()
    }

    /// Drop the selection and its assessment.
    pub fn clear(&mut self) {
        self.selected = None;
        self.last_assessment = None;
    }
}
