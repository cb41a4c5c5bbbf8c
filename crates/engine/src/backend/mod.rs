// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod handle;

pub use handle::{SessionHandle, StatementHandle, StatusHandle, TableDescHandle};

/// The storage backend behind the gateway.
///
/// Failures come back as a [`StatusHandle`]. Every status handed out must be
/// returned through [`Backend::free_status`] exactly once, which is what
/// [`StatusTranslator`](crate::StatusTranslator) does.
pub trait Backend: Send + Sync {
	/// Process-level initialization. Runs once per process, before anything else.
	fn init(&self, program_name: &str) -> Option<StatusHandle>;

	fn init_gateway(&self);

	fn destroy_gateway(&self);

	fn create_session(&self, database: &str) -> Result<SessionHandle, StatusHandle>;

	fn destroy_session(&self, session: SessionHandle);

	/// Commits the transaction of the current session.
	fn commit_transaction(&self) -> Option<StatusHandle>;

	fn delete_statement(&self, statement: StatementHandle) -> Option<StatusHandle>;

	fn delete_table_desc(&self, table_desc: TableDescHandle) -> Option<StatusHandle>;

	fn free_status(&self, status: StatusHandle);
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
	fn init(&self, program_name: &str) -> Option<StatusHandle> {
		(**self).init(program_name)
	}

	fn init_gateway(&self) {
		(**self).init_gateway()
	}

	fn destroy_gateway(&self) {
		(**self).destroy_gateway()
	}

	fn create_session(&self, database: &str) -> Result<SessionHandle, StatusHandle> {
		(**self).create_session(database)
	}

	fn destroy_session(&self, session: SessionHandle) {
		(**self).destroy_session(session)
	}

	fn commit_transaction(&self) -> Option<StatusHandle> {
		(**self).commit_transaction()
	}

	fn delete_statement(&self, statement: StatementHandle) -> Option<StatusHandle> {
		(**self).delete_statement(statement)
	}

	fn delete_table_desc(&self, table_desc: TableDescHandle) -> Option<StatusHandle> {
		(**self).delete_table_desc(table_desc)
	}

	fn free_status(&self, status: StatusHandle) {
		(**self).free_status(status)
	}
}
