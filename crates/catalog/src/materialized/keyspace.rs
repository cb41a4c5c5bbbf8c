// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::{error::diagnostic::catalog::object_already_exists, return_error};
use tracing::debug;

use crate::{CatalogEntry, ObjectKind, Result, materialized::MaterializedCatalog};

impl MaterializedCatalog {
	pub fn create_keyspace(&self, name: &str) -> Result<CatalogEntry> {
		let _ddl = self.ddl.lock();
		if self.keyspaces_by_name.contains_key(name) {
			return_error!(object_already_exists("keyspace", name));
		}

		let entry = CatalogEntry {
			id: self.allocate_id(),
			kind: ObjectKind::Keyspace,
			keyspace: None,
			name: name.to_string(),
		};
		self.keyspaces_by_name.insert(entry.name.clone(), entry.id);
		self.entries.insert(entry.id, entry.clone());
		debug!(id = %entry.id, name, "created keyspace");
		Ok(entry)
	}
}

#[cfg(test)]
mod tests {
	use pggate_type::ErrorKind;

	use crate::{Catalog, MaterializedCatalog, ObjectKind};

	#[test]
	fn test_create_and_find_keyspace() {
		let catalog = MaterializedCatalog::new();
		let created = catalog.create_keyspace("sales").unwrap();

		let found = catalog.find_keyspace("sales").unwrap();
		assert_eq!(found, created);
		assert_eq!(found.kind, ObjectKind::Keyspace);
		assert_eq!(found.keyspace, None);
	}

	#[test]
	fn test_find_missing_keyspace() {
		let catalog = MaterializedCatalog::new();
		assert!(catalog.find_keyspace("nope").is_none());
	}

	#[test]
	fn test_duplicate_keyspace() {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("sales").unwrap();

		let err = catalog.create_keyspace("sales").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::DuplicateObject);
		assert_eq!(catalog.len(), 1);
	}
}
