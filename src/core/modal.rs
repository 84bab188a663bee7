//! Create/edit modal state machine
//!
//! # States
//!
//! ```text
//!            begin_create                     begin_edit(existing)
//!   Closed ───────────────▶ Creating   Closed ────────────────────▶ Editing
//!     ▲                        │          ▲                           │
//!     └──── commit / cancel ───┘          └── commit / cancel /  ─────┘
//!                                             confirm_delete
//! ```
//!
//! While a modal is open all edits land in the draft. The store is touched
//! only by `commit` (add or update) and `confirm_delete` (remove).
//!
//! Deleting is two-phase: `request_delete` hands the boundary a
//! [`DeleteConfirmation`] to prompt with, then `confirm_delete` performs the
//! irreversible removal or `cancel_delete` backs out.

use serde::Serialize;

use crate::config::ValidationMode;
use crate::core::error::{DeskError, Result};
use crate::core::field::{FieldValue, InvoiceField};
use crate::core::invoice::{Invoice, InvoiceId};
use crate::core::store::InvoiceStore;
use crate::core::validation;

/// Which modal is open, with its working copy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ModalState {
    Closed,
    Creating {
        draft: Invoice,
    },
    #[serde(rename_all = "camelCase")]
    Editing {
        draft: Invoice,
        original_id: InvoiceId,
        delete_requested: bool,
    },
}

impl ModalState {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Creating { .. } => "creating",
            ModalState::Editing { .. } => "editing",
        }
    }
}

/// Signal that a delete is waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub id: InvoiceId,
    pub client: String,
}

impl DeleteConfirmation {
    /// Prompt text for the boundary layer
    pub fn prompt(&self) -> String {
        if self.client.is_empty() {
            "Delete this invoice?".to_string()
        } else {
            format!("Delete the invoice for {}?", self.client)
        }
    }
}

/// What a successful commit did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(InvoiceId),
    Updated(InvoiceId),
}

impl CommitOutcome {
    pub fn id(&self) -> InvoiceId {
        match self {
            CommitOutcome::Created(id) | CommitOutcome::Updated(id) => *id,
        }
    }
}

/// Drives the modal state machine
#[derive(Debug, Clone)]
pub struct ModalController {
    state: ModalState,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// The working copy, if a modal is open
    pub fn draft(&self) -> Option<&Invoice> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Creating { draft } | ModalState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Whether a delete is awaiting confirmation
    pub fn delete_pending(&self) -> bool {
        matches!(
            self.state,
            ModalState::Editing {
                delete_requested: true,
                ..
            }
        )
    }

    fn transition(&mut self, next: ModalState) -> ModalState {
        tracing::debug!(from = self.state.name(), to = next.name(), "modal transition");
        std::mem::replace(&mut self.state, next)
    }

    fn ensure_closed(&self) -> Result<()> {
        if self.is_open() {
            tracing::warn!(state = self.state.name(), "modal already open");
            return Err(DeskError::ModalBusy);
        }
        Ok(())
    }

    /// Open the create modal on a blank draft
    pub fn begin_create(&mut self, draft: Invoice) -> Result<()> {
        self.ensure_closed()?;
        self.transition(ModalState::Creating { draft });
        Ok(())
    }

    /// Open the edit modal on a copy of `existing`
    pub fn begin_edit(&mut self, existing: &Invoice) -> Result<()> {
        self.ensure_closed()?;
        self.transition(ModalState::Editing {
            draft: existing.clone(),
            original_id: existing.id,
            delete_requested: false,
        });
        Ok(())
    }

    /// Apply a form edit to the draft
    ///
    /// No validation happens here; see [`Invoice::set_field`] for the type
    /// conversions applied.
    pub fn field_change(&mut self, field: InvoiceField, value: FieldValue) -> Result<()> {
        match &mut self.state {
            ModalState::Closed => Err(DeskError::ModalClosed {
                action: "change a field",
            }),
            ModalState::Creating { draft } | ModalState::Editing { draft, .. } => {
                draft.set_field(field, value)?;
                tracing::trace!(field = %field, invoice_id = %draft.id, "draft field changed");
                Ok(())
            }
        }
    }

    /// Write the draft to the store and close
    ///
    /// Creating adds the draft; editing replaces the stored record with the
    /// same id. In strict mode a failing draft is rejected and the modal stays
    /// open with the draft intact. So is an edit whose record has left the
    /// store, which reports `InvoiceNotFound`.
    pub fn commit<S>(&mut self, store: &mut S, mode: ValidationMode) -> Result<CommitOutcome>
    where
        S: InvoiceStore + ?Sized,
    {
        let draft = self.draft().ok_or(DeskError::ModalClosed { action: "commit" })?;
        if mode == ValidationMode::Strict {
            validation::check_strict(draft)?;
        }
        if let ModalState::Editing { original_id, .. } = &self.state
            && !store.contains(original_id)
        {
            tracing::warn!(invoice_id = %original_id, "commit refused: edited invoice no longer stored");
            return Err(DeskError::InvoiceNotFound(*original_id));
        }

        match self.transition(ModalState::Closed) {
            ModalState::Creating { draft } => {
                let id = draft.id;
                store.add(draft);
                Ok(CommitOutcome::Created(id))
            }
            ModalState::Editing {
                draft, original_id, ..
            } => {
                store.update(draft);
                Ok(CommitOutcome::Updated(original_id))
            }
            ModalState::Closed => Err(DeskError::ModalClosed { action: "commit" }),
        }
    }

    /// Ask for delete confirmation of the record being edited
    pub fn request_delete(&mut self) -> Result<DeleteConfirmation> {
        match &mut self.state {
            ModalState::Editing {
                draft,
                original_id,
                delete_requested,
            } => {
                *delete_requested = true;
                tracing::debug!(invoice_id = %original_id, "delete requested");
                Ok(DeleteConfirmation {
                    id: *original_id,
                    client: draft.client.clone(),
                })
            }
            _ => Err(DeskError::NotEditing {
                action: "request delete",
            }),
        }
    }

    /// Remove the record being edited from the store and close
    ///
    /// Only valid after [`request_delete`](Self::request_delete). There is
    /// no undo.
    pub fn confirm_delete<S>(&mut self, store: &mut S) -> Result<InvoiceId>
    where
        S: InvoiceStore + ?Sized,
    {
        match &self.state {
            ModalState::Editing {
                delete_requested: true,
                ..
            } => {}
            ModalState::Editing { .. } => return Err(DeskError::DeleteNotRequested),
            _ => {
                return Err(DeskError::NotEditing {
                    action: "confirm delete",
                });
            }
        }

        match self.transition(ModalState::Closed) {
            ModalState::Editing { original_id, .. } => {
                store.remove(&original_id);
                Ok(original_id)
            }
            other => {
                // Unreachable after the check above; put the state back.
                self.state = other;
                Err(DeskError::DeleteNotRequested)
            }
        }
    }

    /// Back out of a pending delete, keeping the edit open
    pub fn cancel_delete(&mut self) -> Result<()> {
        match &mut self.state {
            ModalState::Editing {
                delete_requested, ..
            } => {
                *delete_requested = false;
                Ok(())
            }
            _ => Err(DeskError::NotEditing {
                action: "cancel delete",
            }),
        }
    }

    /// Discard the draft and close without touching the store
    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_open() {
            return Err(DeskError::ModalClosed { action: "cancel" });
        }
        self.transition(ModalState::Closed);
        Ok(())
    }
}
