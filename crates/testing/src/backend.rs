// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A scripted in-memory backend that records every call.

use std::collections::{HashSet, VecDeque};

use parking_lot::Mutex;
use pggate_engine::{Backend, SessionHandle, StatementHandle, StatusHandle, TableDescHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
	Init(String),
	InitGateway,
	DestroyGateway,
	CreateSession(String),
	DestroySession(u64),
	Commit,
	DeleteStatement(u64),
	DeleteTableDesc(u64),
	FreeStatus(u64),
}

/// Handles handed out and not yet released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LiveHandles {
	pub sessions: usize,
	pub statements: usize,
	pub table_descs: usize,
	pub statuses: usize,
}

impl LiveHandles {
	pub fn is_empty(&self) -> bool {
		*self == LiveHandles::default()
	}
}

#[derive(Default)]
struct Inner {
	next_handle: u64,
	events: Vec<BackendEvent>,
	sessions: HashSet<u64>,
	statements: HashSet<u64>,
	table_descs: HashSet<u64>,
	statuses: HashSet<u64>,
	commit_failures: VecDeque<String>,
	init_failure: Option<String>,
	session_failure: Option<String>,
	statement_release_failure: Option<String>,
}

impl Inner {
	fn next(&mut self) -> u64 {
		self.next_handle += 1;
		self.next_handle
	}

	fn status(&mut self, message: String) -> StatusHandle {
		let raw = self.next();
		self.statuses.insert(raw);
		StatusHandle::new(raw, message)
	}
}

/// Panics on any double release, so a test that completes did not release a
/// handle twice.
#[derive(Default)]
pub struct MockBackend {
	inner: Mutex<Inner>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// The next commit fails with `message`. Calls queue up.
	pub fn fail_next_commit(&self, message: impl Into<String>) {
		self.inner.lock().commit_failures.push_back(message.into());
	}

	pub fn fail_init(&self, message: impl Into<String>) {
		self.inner.lock().init_failure = Some(message.into());
	}

	pub fn fail_session_creation(&self, message: impl Into<String>) {
		self.inner.lock().session_failure = Some(message.into());
	}

	/// The next statement release reports `message` as a failure. The
	/// statement is released anyway.
	pub fn fail_statement_release(&self, message: impl Into<String>) {
		self.inner.lock().statement_release_failure = Some(message.into());
	}

	pub fn alloc_statement(&self) -> StatementHandle {
		let mut inner = self.inner.lock();
		let raw = inner.next();
		inner.statements.insert(raw);
		StatementHandle::from_raw(raw)
	}

	pub fn alloc_table_desc(&self) -> TableDescHandle {
		let mut inner = self.inner.lock();
		let raw = inner.next();
		inner.table_descs.insert(raw);
		TableDescHandle::from_raw(raw)
	}

	/// A failure status as some backend call would return it.
	pub fn status(&self, message: impl Into<String>) -> StatusHandle {
		self.inner.lock().status(message.into())
	}

	pub fn events(&self) -> Vec<BackendEvent> {
		self.inner.lock().events.clone()
	}

	pub fn count(&self, event: &BackendEvent) -> usize {
		self.inner.lock().events.iter().filter(|e| *e == event).count()
	}

	pub fn commits(&self) -> usize {
		self.count(&BackendEvent::Commit)
	}

	pub fn live_handles(&self) -> LiveHandles {
		let inner = self.inner.lock();
		LiveHandles {
			sessions: inner.sessions.len(),
			statements: inner.statements.len(),
			table_descs: inner.table_descs.len(),
			statuses: inner.statuses.len(),
		}
	}
}

impl Backend for MockBackend {
	fn init(&self, program_name: &str) -> Option<StatusHandle> {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::Init(program_name.to_string()));
		let failure = inner.init_failure.take()?;
		Some(inner.status(failure))
	}

	fn init_gateway(&self) {
		self.inner.lock().events.push(BackendEvent::InitGateway);
	}

	fn destroy_gateway(&self) {
		self.inner.lock().events.push(BackendEvent::DestroyGateway);
	}

	fn create_session(&self, database: &str) -> Result<SessionHandle, StatusHandle> {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::CreateSession(database.to_string()));
		if let Some(failure) = inner.session_failure.take() {
			return Err(inner.status(failure));
		}
		let raw = inner.next();
		inner.sessions.insert(raw);
		Ok(SessionHandle::from_raw(raw))
	}

	fn destroy_session(&self, session: SessionHandle) {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::DestroySession(session.raw()));
		assert!(inner.sessions.remove(&session.raw()), "session {} released twice", session.raw());
	}

	fn commit_transaction(&self) -> Option<StatusHandle> {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::Commit);
		let failure = inner.commit_failures.pop_front()?;
		Some(inner.status(failure))
	}

	fn delete_statement(&self, statement: StatementHandle) -> Option<StatusHandle> {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::DeleteStatement(statement.raw()));
		assert!(inner.statements.remove(&statement.raw()), "statement {} released twice", statement.raw());
		let failure = inner.statement_release_failure.take()?;
		Some(inner.status(failure))
	}

	fn delete_table_desc(&self, table_desc: TableDescHandle) -> Option<StatusHandle> {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::DeleteTableDesc(table_desc.raw()));
		assert!(
			inner.table_descs.remove(&table_desc.raw()),
			"table descriptor {} released twice",
			table_desc.raw()
		);
		None
	}

	fn free_status(&self, status: StatusHandle) {
		let mut inner = self.inner.lock();
		inner.events.push(BackendEvent::FreeStatus(status.raw()));
		assert!(inner.statuses.remove(&status.raw()), "status {} released twice", status.raw());
	}
}
