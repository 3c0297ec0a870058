//! Bill-of-materials batch editor: the raw material percentages of one ready
//! item, saved together.

use std::collections::HashSet;

use backoffice_client::ClientResult;
use backoffice_client::services::{
    Proposition, PropositionBatchRequest, PropositionLine, RawMaterial, ReadyItem,
};
use backoffice_core::{DomainError, RawMaterialId, ReadyItemId};

use crate::selection::Selection;
use crate::{EditorError, EditorPhase, LoadTicket, Notice, PropositionBackend, SubmitTicket};

pub const SAVED_MESSAGE: &str = "Propositions saved successfully";

/// Percentages must add up to this, give or take [`TOTAL_TOLERANCE`].
pub const FULL_COMPOSITION: f64 = 100.0;
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// One editable line. The material stays unset until chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropositionDraft {
    pub raw_material_id: Option<RawMaterialId>,
    pub percentage: f64,
}

impl PropositionDraft {
    pub fn for_material(raw_material_id: RawMaterialId) -> Self {
        Self {
            raw_material_id: Some(raw_material_id),
            percentage: 0.0,
        }
    }
}

impl From<&Proposition> for PropositionDraft {
    fn from(p: &Proposition) -> Self {
        Self {
            raw_material_id: Some(p.raw_material_id),
            percentage: p.percentage,
        }
    }
}

pub type PropositionSubmit = SubmitTicket<ReadyItemId, PropositionBatchRequest>;

#[derive(Debug, Clone)]
pub struct PropositionEditor {
    ready_items: Vec<ReadyItem>,
    raw_materials: Vec<RawMaterial>,
    phase: EditorPhase,
    selection: Selection<ReadyItemId>,
    rows: Vec<PropositionDraft>,
    notice: Option<Notice>,
}

impl Default for PropositionEditor {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl PropositionEditor {
    pub fn new(ready_items: Vec<ReadyItem>, raw_materials: Vec<RawMaterial>) -> Self {
        Self {
            ready_items,
            raw_materials,
            phase: EditorPhase::Idle,
            selection: Selection::new(),
            rows: Vec::new(),
            notice: None,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn ready_items(&self) -> &[ReadyItem] {
        &self.ready_items
    }

    pub fn raw_materials(&self) -> &[RawMaterial] {
        &self.raw_materials
    }

    pub fn selected_ready_item(&self) -> Option<ReadyItemId> {
        self.selection.current()
    }

    pub fn rows(&self) -> &[PropositionDraft] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn can_edit(&self) -> bool {
        self.phase == EditorPhase::Editing
    }

    /// Sum of all percentages, for the running total under the grid.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.percentage).sum()
    }

    pub fn set_catalogue(&mut self, ready_items: Vec<ReadyItem>, raw_materials: Vec<RawMaterial>) {
        self.ready_items = ready_items;
        self.raw_materials = raw_materials;
    }

    fn materials_in_use(&self, except: Option<usize>) -> HashSet<RawMaterialId> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != except)
            .filter_map(|(_, row)| row.raw_material_id)
            .collect()
    }

    /// Materials a row may switch to: everything not held by another row.
    pub fn selectable_materials(&self, index: usize) -> Vec<&RawMaterial> {
        let taken = self.materials_in_use(Some(index));
        self.raw_materials
            .iter()
            .filter(|m| m.id.is_some_and(|id| !taken.contains(&id)))
            .collect()
    }

    pub fn select_ready_item(
        &mut self,
        ready_item_id: Option<ReadyItemId>,
    ) -> Option<LoadTicket<ReadyItemId>> {
        self.rows.clear();
        self.notice = None;
        let ticket = self.selection.select(ready_item_id);
        self.phase = if ticket.is_some() {
            EditorPhase::Loading
        } else {
            EditorPhase::Idle
        };
        ticket
    }

    /// Returns `false` when the answer was for an earlier selection.
    pub fn apply_loaded(
        &mut self,
        ticket: LoadTicket<ReadyItemId>,
        result: ClientResult<Vec<Proposition>>,
    ) -> bool {
        if !self.selection.is_current(&ticket) {
            tracing::debug!(ready_item_id = %ticket.key(), "dropping stale propositions");
            return false;
        }

        match result {
            Ok(propositions) => {
                let mut seen = HashSet::new();
                self.rows = propositions
                    .iter()
                    .filter(|p| seen.insert(p.raw_material_id))
                    .map(PropositionDraft::from)
                    .collect();
            }
            Err(err) if err.is_not_found() => self.rows.clear(),
            Err(err) => {
                self.rows.clear();
                self.notice = Some(Notice::from(&err));
            }
        }
        self.phase = EditorPhase::Editing;
        true
    }

    fn require_editing(&self) -> Result<(), EditorError> {
        match self.phase {
            EditorPhase::Editing => Ok(()),
            EditorPhase::Idle => Err(EditorError::NoReadyItemSelected),
            EditorPhase::Loading | EditorPhase::Submitting => Err(EditorError::Busy),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(EditorError::RowOutOfRange(index))
        }
    }

    pub fn add_row(&mut self) -> Result<usize, EditorError> {
        self.require_editing()?;
        let taken = self.materials_in_use(None);
        let next = self
            .raw_materials
            .iter()
            .filter_map(|m| m.id)
            .find(|id| !taken.contains(id));

        let Some(raw_material_id) = next else {
            let err = EditorError::NothingLeftToAdd;
            self.notice = Some(Notice::error(err.to_string()));
            return Err(err);
        };
        self.rows.push(PropositionDraft::for_material(raw_material_id));
        Ok(self.rows.len() - 1)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<PropositionDraft, EditorError> {
        self.require_editing()?;
        self.check_index(index)?;
        Ok(self.rows.remove(index))
    }

    pub fn change_material(
        &mut self,
        index: usize,
        raw_material_id: RawMaterialId,
    ) -> Result<(), EditorError> {
        self.require_editing()?;
        self.check_index(index)?;
        if !self.raw_materials.iter().any(|m| m.id == Some(raw_material_id)) {
            return Err(EditorError::UnknownOption(raw_material_id.get()));
        }
        if self.materials_in_use(Some(index)).contains(&raw_material_id) {
            return Err(EditorError::AlreadyUsed);
        }
        self.rows[index].raw_material_id = Some(raw_material_id);
        Ok(())
    }

    pub fn set_percentage(&mut self, index: usize, percentage: f64) -> Result<(), EditorError> {
        self.require_editing()?;
        self.check_index(index)?;
        self.rows[index].percentage = percentage;
        Ok(())
    }

    fn validate(&self) -> Result<PropositionBatchRequest, EditorError> {
        let ready_item_id = self
            .selection
            .current()
            .ok_or(EditorError::NoReadyItemSelected)?;
        if self.rows.is_empty() {
            return Err(EditorError::NoRows);
        }

        let mut seen = HashSet::new();
        let mut propositions = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let raw_material_id = row.raw_material_id.ok_or(EditorError::IncompleteRow(i + 1))?;
            if !seen.insert(raw_material_id) {
                return Err(EditorError::AlreadyUsed);
            }
            if !(row.percentage > 0.0 && row.percentage <= FULL_COMPOSITION) {
                return Err(DomainError::validation(format!(
                    "Row {}: percentage must be greater than 0 and at most 100",
                    i + 1
                ))
                .into());
            }
            propositions.push(PropositionLine {
                raw_material_id,
                percentage: row.percentage,
            });
        }

        let total = self.total();
        if (total - FULL_COMPOSITION).abs() > TOTAL_TOLERANCE {
            return Err(DomainError::invariant(format!(
                "Percentages must add up to 100 (currently {total:.2})"
            ))
            .into());
        }

        Ok(PropositionBatchRequest {
            ready_item_id,
            propositions,
        })
    }

    pub fn begin_submit(&mut self) -> Result<PropositionSubmit, EditorError> {
        self.require_editing()?;
        let request = self.validate().inspect_err(|err| {
            self.notice = Some(Notice::error(err.to_string()));
        })?;
        let ticket = self
            .selection
            .submit_ticket(request)
            .ok_or(EditorError::NoReadyItemSelected)?;
        self.notice = None;
        self.phase = EditorPhase::Submitting;
        Ok(ticket)
    }

    pub fn finish_submit(
        &mut self,
        ticket: &PropositionSubmit,
        result: ClientResult<()>,
    ) -> Option<LoadTicket<ReadyItemId>> {
        if !self.selection.is_current_submit(ticket) {
            return None;
        }
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success(SAVED_MESSAGE));
                self.phase = EditorPhase::Loading;
                self.selection.reissue()
            }
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                self.phase = EditorPhase::Editing;
                None
            }
        }
    }

    pub async fn load_catalogue<B: PropositionBackend + ?Sized>(&mut self, backend: &B) {
        match (
            backend.list_ready_items().await,
            backend.list_raw_materials().await,
        ) {
            (Ok(ready_items), Ok(raw_materials)) => self.set_catalogue(ready_items, raw_materials),
            (Err(err), _) | (_, Err(err)) => self.notice = Some(Notice::from(&err)),
        }
    }

    pub async fn choose_ready_item<B: PropositionBackend + ?Sized>(
        &mut self,
        backend: &B,
        ready_item_id: Option<ReadyItemId>,
    ) {
        if let Some(ticket) = self.select_ready_item(ready_item_id) {
            let result = backend.fetch_propositions(ticket.key()).await;
            self.apply_loaded(ticket, result);
        }
    }

    pub async fn submit<B: PropositionBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<(), EditorError> {
        let ticket = self.begin_submit()?;
        let result = backend.save_propositions(&ticket.request).await;
        if let Some(reload) = self.finish_submit(&ticket, result) {
            let refreshed = backend.fetch_propositions(reload.key()).await;
            self.apply_loaded(reload, refreshed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: i64, name: &str) -> RawMaterial {
        RawMaterial {
            id: Some(RawMaterialId::new(id)),
            name: name.to_string(),
            ..RawMaterial::default()
        }
    }

    fn editing() -> PropositionEditor {
        let mut editor = PropositionEditor::new(
            Vec::new(),
            vec![material(1, "Flour"), material(2, "Sugar"), material(3, "Salt")],
        );
        let ticket = editor.select_ready_item(Some(ReadyItemId::new(9))).unwrap();
        assert!(editor.apply_loaded(ticket, Ok(Vec::new())));
        editor
    }

    fn with_rows(percentages: &[f64]) -> PropositionEditor {
        let mut editor = editing();
        for (i, pct) in percentages.iter().enumerate() {
            editor.add_row().unwrap();
            editor.set_percentage(i, *pct).unwrap();
        }
        editor
    }

    #[test]
    fn rows_pick_distinct_materials() {
        let editor = with_rows(&[50.0, 30.0, 20.0]);
        let ids: Vec<_> = editor.rows().iter().map(|r| r.raw_material_id).collect();
        assert_eq!(
            ids,
            vec![
                Some(RawMaterialId::new(1)),
                Some(RawMaterialId::new(2)),
                Some(RawMaterialId::new(3)),
            ]
        );

        let mut editor = editor;
        assert_eq!(editor.add_row(), Err(EditorError::NothingLeftToAdd));
        assert_eq!(editor.rows().len(), 3);
    }

    #[test]
    fn used_material_is_not_selectable() {
        let mut editor = with_rows(&[60.0, 40.0]);
        let choices: Vec<_> = editor
            .selectable_materials(0)
            .iter()
            .filter_map(|m| m.id)
            .collect();
        assert_eq!(choices, vec![RawMaterialId::new(1), RawMaterialId::new(3)]);
        assert_eq!(
            editor.change_material(0, RawMaterialId::new(2)),
            Err(EditorError::AlreadyUsed)
        );
        editor.change_material(0, RawMaterialId::new(3)).unwrap();
    }

    #[test]
    fn total_must_be_one_hundred() {
        let mut editor = with_rows(&[60.0, 30.0]);
        let err = editor.begin_submit().unwrap_err();
        assert!(matches!(err, EditorError::Invalid(DomainError::InvariantViolation(_))));
        assert_eq!(
            err.to_string(),
            "Percentages must add up to 100 (currently 90.00)"
        );
        assert_eq!(editor.phase(), EditorPhase::Editing);
        assert!(editor.notice().is_some_and(Notice::is_error));

        let mut editor = with_rows(&[33.33, 33.33, 33.34]);
        let ticket = editor.begin_submit().unwrap();
        assert_eq!(ticket.request.ready_item_id, ReadyItemId::new(9));
        assert_eq!(ticket.request.propositions.len(), 3);
    }

    #[test]
    fn percentages_must_be_in_range() {
        let mut editor = with_rows(&[0.0, 100.0]);
        assert!(matches!(editor.begin_submit(), Err(EditorError::Invalid(_))));

        let mut editor = with_rows(&[120.0, -20.0]);
        assert!(matches!(editor.begin_submit(), Err(EditorError::Invalid(_))));
    }

    #[test]
    fn duplicate_materials_from_server_are_collapsed() {
        let mut editor = PropositionEditor::new(Vec::new(), vec![material(1, "Flour")]);
        let ticket = editor.select_ready_item(Some(ReadyItemId::new(2))).unwrap();
        let line = |pct| Proposition {
            id: None,
            ready_item_id: ReadyItemId::new(2),
            raw_material_id: RawMaterialId::new(1),
            percentage: pct,
        };
        editor.apply_loaded(ticket, Ok(vec![line(70.0), line(30.0)]));
        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0].percentage, 70.0);
    }

    #[test]
    fn stale_propositions_are_ignored() {
        let mut editor = PropositionEditor::default();
        let first = editor.select_ready_item(Some(ReadyItemId::new(1))).unwrap();
        let _second = editor.select_ready_item(Some(ReadyItemId::new(2))).unwrap();
        assert!(!editor.apply_loaded(first, Ok(Vec::new())));
        assert_eq!(editor.phase(), EditorPhase::Loading);
    }

    #[test]
    fn idle_editor_needs_a_ready_item() {
        let mut editor = PropositionEditor::default();
        assert_eq!(editor.add_row(), Err(EditorError::NoReadyItemSelected));
    }
}
