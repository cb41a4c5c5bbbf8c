// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Two-phase commit reporting.
//!
//! A commit failure is not raised where it happens. The host commits while it
//! cannot raise errors, so the failure is kept here and raised later by
//! [`TransactionCoordinator::report_if_failed`], once the host is able to
//! abort the transaction cleanly.

use pggate_type::Result;
use tracing::{debug, instrument, warn};

use crate::{
	backend::{Backend, StatusHandle},
	status::{StatusOrigin, StatusTranslator},
};

#[derive(Debug, Default)]
pub struct TransactionCoordinator {
	pending: Option<StatusHandle>,
}

impl TransactionCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Commits the current transaction. Returns `false` when the backend
	/// rejected the commit; the failure is then pending until reported.
	///
	/// With `enabled` unset nothing is sent to the backend and the commit
	/// counts as successful.
	#[instrument(name = "transaction::commit", level = "debug", skip(self, backend))]
	pub fn commit<B: Backend + ?Sized>(&mut self, backend: &B, enabled: bool) -> bool {
		if !enabled {
			return true;
		}

		match backend.commit_transaction() {
			None => true,
			Some(status) => {
				warn!(message = status.message(), "commit rejected by backend");
				if let Some(previous) = self.pending.replace(status) {
					debug!(status = previous.raw(), "dropping unreported commit failure");
					backend.free_status(previous);
				}
				false
			}
		}
	}

	/// Raises the pending commit failure, if any, and clears it. A second call
	/// without an intervening failed commit is a no-op.
	pub fn report_if_failed<B: Backend + ?Sized>(&mut self, translator: &StatusTranslator<'_, B>) -> Result<()> {
		match self.pending.take() {
			None => Ok(()),
			Some(status) => Err(translator.raise(status, StatusOrigin::Commit, None, None)),
		}
	}

	pub fn has_pending_failure(&self) -> bool {
		self.pending.is_some()
	}

	/// Frees a pending failure without raising it.
	pub fn discard<B: Backend + ?Sized>(&mut self, backend: &B) {
		if let Some(status) = self.pending.take() {
			backend.free_status(status);
		}
	}
}
