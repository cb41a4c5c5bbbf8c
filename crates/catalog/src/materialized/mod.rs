// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashSet,
	sync::atomic::{AtomicU64, Ordering},
};

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tracing::instrument;

use crate::{Catalog, CatalogEntry, ObjectId, ObjectKind};

mod keyspace;
mod object;
mod role;

/// In-memory catalog, used by embedders that mirror the backend's schema
/// locally and by tests.
#[derive(Debug)]
pub struct MaterializedCatalog {
	entries: DashMap<ObjectId, CatalogEntry>,
	keyspaces_by_name: DashMap<String, ObjectId>,
	roles_by_name: DashMap<String, ObjectId>,
	objects_by_name: DashMap<(String, String), ObjectId>,
	next_id: AtomicU64,
	/// Held across the name check and the inserts of one create.
	ddl: Mutex<()>,
	unsupported_drops: RwLock<HashSet<(ObjectKind, bool)>>,
}

impl Default for MaterializedCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl MaterializedCatalog {
	pub fn new() -> Self {
		Self {
			entries: DashMap::new(),
			keyspaces_by_name: DashMap::new(),
			roles_by_name: DashMap::new(),
			objects_by_name: DashMap::new(),
			next_id: AtomicU64::new(1),
			ddl: Mutex::new(()),
			unsupported_drops: RwLock::new(HashSet::new()),
		}
	}

	pub fn find(&self, id: ObjectId) -> Option<CatalogEntry> {
		self.entries.get(&id).map(|entry| entry.value().clone())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Marks `DROP <kind>` (with or without `IF EXISTS`) as unsupported.
	pub fn reject_drop(&self, kind: ObjectKind, if_exists: bool) {
		self.unsupported_drops.write().insert((kind, if_exists));
	}

	fn allocate_id(&self) -> ObjectId {
		ObjectId(self.next_id.fetch_add(1, Ordering::Relaxed))
	}

	fn lookup(&self, id: Option<ObjectId>) -> Option<CatalogEntry> {
		id.and_then(|id| self.find(id))
	}
}

impl Catalog for MaterializedCatalog {
	#[instrument(name = "catalog::keyspace::find", level = "trace", skip(self))]
	fn find_keyspace(&self, name: &str) -> Option<CatalogEntry> {
		self.lookup(self.keyspaces_by_name.get(name).map(|id| *id.value()))
	}

	#[instrument(name = "catalog::role::find", level = "trace", skip(self))]
	fn find_role(&self, name: &str) -> Option<CatalogEntry> {
		self.lookup(self.roles_by_name.get(name).map(|id| *id.value()))
	}

	#[instrument(name = "catalog::object::find", level = "trace", skip(self))]
	fn find_object(&self, keyspace: &str, name: &str) -> Option<CatalogEntry> {
		let key = (keyspace.to_string(), name.to_string());
		self.lookup(self.objects_by_name.get(&key).map(|id| *id.value()))
	}

	fn supports_drop(&self, kind: ObjectKind, if_exists: bool) -> bool {
		!self.unsupported_drops.read().contains(&(kind, if_exists))
	}
}
