//! Role → rights permission matrix editor.
//!
//! One role is edited at a time. The full set of rows is submitted as a
//! single [`RoleRightMappingRequest`]; there is no partial save.
//!
//! ```text
//! Idle ──select──▶ Loading ──loaded──▶ Editing ──submit──▶ Submitting
//!   ▲                 ▲                  │  ▲                  │
//!   └──deselect───────┼──────────────────┘  └──── failed ──────┤
//!                     └──────────────── saved (refresh) ◀──────┘
//! ```

use std::collections::HashSet;

use backoffice_auth::{Right, Role};
use backoffice_client::ClientResult;
use backoffice_client::services::{
    PermissionFlag, PermissionRow, RoleRightMapping, RoleRightMappingRequest,
};
use backoffice_core::{RightId, RoleId};

use crate::selection::Selection;
use crate::{EditorError, LoadTicket, MappingBackend, Notice, SubmitTicket};

pub const SAVED_MESSAGE: &str = "Rights mapped to role successfully";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditorPhase {
    /// No role selected; nothing can be edited.
    Idle,
    /// Existing mapping of the selected role is being fetched.
    Loading,
    Editing,
    /// The batch is on its way to the server.
    Submitting,
}

pub type MappingSubmit = SubmitTicket<RoleId, RoleRightMappingRequest>;

#[derive(Debug, Clone)]
pub struct RoleRightMappingEditor {
    roles: Vec<Role>,
    rights: Vec<Right>,
    phase: EditorPhase,
    selection: Selection<RoleId>,
    rows: Vec<PermissionRow>,
    notice: Option<Notice>,
}

impl Default for RoleRightMappingEditor {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl RoleRightMappingEditor {
    pub fn new(roles: Vec<Role>, rights: Vec<Right>) -> Self {
        Self {
            roles,
            rights,
            phase: EditorPhase::Idle,
            selection: Selection::new(),
            rows: Vec::new(),
            notice: None,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The full right catalogue.
    pub fn rights(&self) -> &[Right] {
        &self.rights
    }

    pub fn selected_role(&self) -> Option<RoleId> {
        self.selection.current()
    }

    pub fn rows(&self) -> &[PermissionRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Add / remove / save are enabled only while editing.
    pub fn can_edit(&self) -> bool {
        self.phase == EditorPhase::Editing
    }

    /// Rights a given row may switch to: the catalogue minus rights held by
    /// any other row. The row's own right stays selectable.
    pub fn selectable_rights(&self, index: usize) -> Vec<&Right> {
        let taken = self.rights_in_use(Some(index));
        self.rights
            .iter()
            .filter(|right| !taken.contains(&right.id))
            .collect()
    }

    /// Rights not yet present in any row.
    pub fn unassigned_rights(&self) -> Vec<&Right> {
        let taken = self.rights_in_use(None);
        self.rights
            .iter()
            .filter(|right| !taken.contains(&right.id))
            .collect()
    }

    fn rights_in_use(&self, except: Option<usize>) -> HashSet<RightId> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != except)
            .filter_map(|(_, row)| row.right_id)
            .collect()
    }

    // ── catalogue ───────────────────────────────────────────────────────────

    /// Replace roles and rights after they were (re)fetched.
    pub fn set_catalogue(&mut self, roles: Vec<Role>, rights: Vec<Right>) {
        self.roles = roles;
        self.rights = rights;
    }

    // ── selection / loading ─────────────────────────────────────────────────

    /// Select a role (or none). Discards the current rows; returns the ticket
    /// the caller must present with the fetched mapping.
    pub fn select_role(&mut self, role_id: Option<RoleId>) -> Option<LoadTicket<RoleId>> {
        self.rows.clear();
        self.notice = None;
        let ticket = self.selection.select(role_id);
        self.phase = if ticket.is_some() {
            EditorPhase::Loading
        } else {
            EditorPhase::Idle
        };
        ticket
    }

    /// Apply a fetched mapping. Returns `false` when the answer belongs to an
    /// earlier selection and was dropped.
    pub fn apply_loaded(
        &mut self,
        ticket: LoadTicket<RoleId>,
        result: ClientResult<RoleRightMapping>,
    ) -> bool {
        if !self.selection.is_current(&ticket) {
            tracing::debug!(role_id = %ticket.key(), "dropping stale role right mapping");
            return false;
        }

        match result {
            Ok(mapping) => self.rows = dedupe_rows(mapping.rows),
            Err(err) if err.is_not_found() => {
                tracing::debug!(role_id = %ticket.key(), "role has no mapping yet");
                self.rows.clear();
            }
            Err(err) => {
                self.rows.clear();
                self.notice = Some(Notice::from(&err));
            }
        }
        self.phase = EditorPhase::Editing;
        true
    }

    // ── row editing ─────────────────────────────────────────────────────────

    fn require_editing(&self) -> Result<(), EditorError> {
        match self.phase {
            EditorPhase::Editing => Ok(()),
            EditorPhase::Idle => Err(EditorError::NoRoleSelected),
            EditorPhase::Loading | EditorPhase::Submitting => Err(EditorError::Busy),
        }
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut PermissionRow, EditorError> {
        self.rows
            .get_mut(index)
            .ok_or(EditorError::RowOutOfRange(index))
    }

    /// Append a row for the first catalogue right not present yet.
    ///
    /// When every right is already present the rows are left untouched and
    /// an error notice is shown.
    pub fn add_row(&mut self) -> Result<usize, EditorError> {
        self.require_editing()?;

        let Some(right_id) = self.unassigned_rights().first().map(|r| r.id) else {
            let err = EditorError::NothingLeftToAdd;
            self.notice = Some(Notice::error(err.to_string()));
            return Err(err);
        };

        self.rows.push(PermissionRow::for_right(right_id));
        Ok(self.rows.len() - 1)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<PermissionRow, EditorError> {
        self.require_editing()?;
        if index >= self.rows.len() {
            return Err(EditorError::RowOutOfRange(index));
        }
        Ok(self.rows.remove(index))
    }

    /// Point a row at another right. Permissions chosen for the old right do
    /// not carry over: every flag is reset.
    pub fn change_right(&mut self, index: usize, right_id: RightId) -> Result<(), EditorError> {
        self.require_editing()?;
        if index >= self.rows.len() {
            return Err(EditorError::RowOutOfRange(index));
        }
        if !self.rights.iter().any(|r| r.id == right_id) {
            return Err(EditorError::UnknownOption(right_id.get()));
        }
        if self.rights_in_use(Some(index)).contains(&right_id) {
            return Err(EditorError::AlreadyUsed);
        }

        let row = self.row_mut(index)?;
        if row.right_id == Some(right_id) {
            return Ok(());
        }
        *row = PermissionRow::for_right(right_id);
        Ok(())
    }

    pub fn toggle_permission(
        &mut self,
        index: usize,
        flag: PermissionFlag,
        value: bool,
    ) -> Result<(), EditorError> {
        self.require_editing()?;
        self.row_mut(index)?.set_flag(flag, value);
        Ok(())
    }

    // ── submission ──────────────────────────────────────────────────────────

    fn validate(&self) -> Result<RoleRightMappingRequest, EditorError> {
        let role_id = self.selection.current().ok_or(EditorError::NoRoleSelected)?;
        if self.rows.is_empty() {
            return Err(EditorError::NoRows);
        }
        if let Some(i) = self.rows.iter().position(|row| row.right_id.is_none()) {
            return Err(EditorError::IncompleteRow(i + 1));
        }
        Ok(RoleRightMappingRequest {
            role_id,
            rights: self.rows.clone(),
        })
    }

    /// Validate and freeze the batch. On failure the editor stays in
    /// `Editing` with an error notice and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<MappingSubmit, EditorError> {
        self.require_editing()?;

        let request = self.validate().inspect_err(|err| {
            self.notice = Some(Notice::error(err.to_string()));
        })?;

        let ticket = self
            .selection
            .submit_ticket(request)
            .ok_or(EditorError::NoRoleSelected)?;
        self.notice = None;
        self.phase = EditorPhase::Submitting;
        Ok(ticket)
    }

    /// Apply the save result. On success the editor re-enters `Loading` and
    /// returns the ticket for the confirming refresh.
    pub fn finish_submit(
        &mut self,
        ticket: &MappingSubmit,
        result: ClientResult<()>,
    ) -> Option<LoadTicket<RoleId>> {
        if !self.selection.is_current_submit(ticket) {
            tracing::debug!(role_id = %ticket.key(), "dropping stale save result");
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

    // ── drivers ─────────────────────────────────────────────────────────────

    /// Fetch roles and rights. A failure leaves the previous catalogue and
    /// shows an error.
    pub async fn load_catalogue<B: MappingBackend + ?Sized>(&mut self, backend: &B) {
        match (backend.list_roles().await, backend.list_rights().await) {
            (Ok(roles), Ok(rights)) => self.set_catalogue(roles, rights),
            (Err(err), _) | (_, Err(err)) => self.notice = Some(Notice::from(&err)),
        }
    }

    /// Select a role and load its mapping.
    pub async fn choose_role<B: MappingBackend + ?Sized>(
        &mut self,
        backend: &B,
        role_id: Option<RoleId>,
    ) {
        if let Some(ticket) = self.select_role(role_id) {
            let result = backend.fetch_mapping(ticket.key()).await;
            self.apply_loaded(ticket, result);
        }
    }

    /// Validate, send the batch, and refresh from the server on success.
    pub async fn submit<B: MappingBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<(), EditorError> {
        let ticket = self.begin_submit()?;
        let result = backend.save_mapping(&ticket.request).await;
        if let Some(reload) = self.finish_submit(&ticket, result) {
            let refreshed = backend.fetch_mapping(reload.key()).await;
            self.apply_loaded(reload, refreshed);
        }
        Ok(())
    }
}

/// Keep the first row of every right; rows without a right are kept as-is.
fn dedupe_rows(rows: Vec<PermissionRow>) -> Vec<PermissionRow> {
    let mut seen = HashSet::new();
    let before = rows.len();
    let rows: Vec<_> = rows
        .into_iter()
        .filter(|row| row.right_id.is_none_or(|id| seen.insert(id)))
        .collect();
    if rows.len() != before {
        tracing::warn!(dropped = before - rows.len(), "server mapping repeated rights");
    }
    rows
}
