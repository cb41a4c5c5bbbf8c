// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Turns backend statuses into host errors.
//!
//! The translator owns the cleanup order: handles that belong to the failed
//! call are released first, then the message is copied out of the status, then
//! the status itself is freed. Only after that is the error built, so nothing
//! the backend handed out outlives the failure.

use std::backtrace::Backtrace;

use pggate_type::{
	Error, Result,
	error::diagnostic::{backend::backend_failure, transaction::commit_conflict},
};
use tracing::{error, instrument, warn};

use crate::{
	backend::{Backend, StatementHandle, StatusHandle, TableDescHandle},
	config::{Feature, FeatureGate},
};

/// Which kind of call produced a status. Commit failures are conflicts the
/// host may retry, everything else is an internal backend error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOrigin {
	Commit,
	Backend,
}

pub struct StatusTranslator<'a, B: Backend + ?Sized> {
	backend: &'a B,
	log_stack_trace: bool,
}

impl<'a, B: Backend + ?Sized> StatusTranslator<'a, B> {
	pub fn new(backend: &'a B) -> Self {
		Self {
			backend,
			log_stack_trace: false,
		}
	}

	/// Logs stack traces when [`Feature::StackTraceOnError`] is on.
	pub fn for_features(backend: &'a B, features: &FeatureGate) -> Self {
		Self::new(backend).with_stack_trace(features.resolve(Feature::StackTraceOnError))
	}

	pub fn with_stack_trace(mut self, log_stack_trace: bool) -> Self {
		self.log_stack_trace = log_stack_trace;
		self
	}

	pub fn logs_stack_trace(&self) -> bool {
		self.log_stack_trace
	}

	pub fn backend(&self) -> &'a B {
		self.backend
	}

	/// Consumes `status` and the handles tied to the failed call and returns
	/// the error to raise.
	#[instrument(name = "status::raise", level = "trace", skip_all, fields(status = status.raw(), origin = ?origin))]
	pub fn raise(
		&self,
		status: StatusHandle,
		origin: StatusOrigin,
		statement: Option<StatementHandle>,
		table_desc: Option<TableDescHandle>,
	) -> Error {
		if let Some(statement) = statement {
			let raw = statement.raw();
			if let Some(failure) = self.backend.delete_statement(statement) {
				warn!(statement = raw, message = failure.message(), "failed to release statement");
				self.backend.free_status(failure);
			}
		}

		if let Some(table_desc) = table_desc {
			let raw = table_desc.raw();
			if let Some(failure) = self.backend.delete_table_desc(table_desc) {
				warn!(table_desc = raw, message = failure.message(), "failed to release table descriptor");
				self.backend.free_status(failure);
			}
		}

		let message = status.message().to_string();
		self.backend.free_status(status);

		let diagnostic = match origin {
			StatusOrigin::Commit => commit_conflict(message),
			StatusOrigin::Backend => backend_failure(message),
		};

		if self.log_stack_trace {
			error!(
				code = %diagnostic.code,
				message = %diagnostic.message,
				backtrace = %Backtrace::force_capture(),
				"backend call failed"
			);
		}

		Error(diagnostic)
	}

	/// `Ok` when the call succeeded, otherwise the translated failure.
	pub fn check(&self, status: Option<StatusHandle>) -> Result<()> {
		match status {
			None => Ok(()),
			Some(status) => Err(self.raise(status, StatusOrigin::Backend, None, None)),
		}
	}

	/// Like [`check`](Self::check), but a failure also releases `statement`.
	/// On success the statement is handed back to the caller.
	pub fn check_statement(&self, status: Option<StatusHandle>, statement: StatementHandle) -> Result<StatementHandle> {
		match status {
			None => Ok(statement),
			Some(status) => Err(self.raise(status, StatusOrigin::Backend, Some(statement), None)),
		}
	}

	pub fn check_table_desc(
		&self,
		status: Option<StatusHandle>,
		table_desc: TableDescHandle,
	) -> Result<TableDescHandle> {
		match status {
			None => Ok(table_desc),
			Some(status) => Err(self.raise(status, StatusOrigin::Backend, None, Some(table_desc))),
		}
	}
}
