// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::{
	error::diagnostic::{
		catalog::{object_already_exists, object_not_found},
		internal::internal,
	},
	return_error,
};
use tracing::debug;

use crate::{CatalogEntry, ObjectKind, Result, materialized::MaterializedCatalog};

impl MaterializedCatalog {
	pub fn create_table(&self, keyspace: &str, name: &str) -> Result<CatalogEntry> {
		self.create_object(ObjectKind::Table, keyspace, name)
	}

	pub fn create_index(&self, keyspace: &str, name: &str) -> Result<CatalogEntry> {
		self.create_object(ObjectKind::Index, keyspace, name)
	}

	pub fn create_type(&self, keyspace: &str, name: &str) -> Result<CatalogEntry> {
		self.create_object(ObjectKind::Type, keyspace, name)
	}

	/// Tables, indexes and types share one namespace per keyspace.
	pub fn create_object(&self, kind: ObjectKind, keyspace: &str, name: &str) -> Result<CatalogEntry> {
		if kind.is_global() {
			return_error!(internal(format!("{} is not a keyspace-scoped object", kind)));
		}

		let _ddl = self.ddl.lock();
		if !self.keyspaces_by_name.contains_key(keyspace) {
			return_error!(object_not_found("keyspace", keyspace));
		}

		let key = (keyspace.to_string(), name.to_string());
		if self.objects_by_name.contains_key(&key) {
			return_error!(object_already_exists(kind.as_str(), &format!("{}.{}", keyspace, name)));
		}

		let entry = CatalogEntry {
			id: self.allocate_id(),
			kind,
			keyspace: Some(keyspace.to_string()),
			name: name.to_string(),
		};
		self.objects_by_name.insert(key, entry.id);
		self.entries.insert(entry.id, entry.clone());
		debug!(id = %entry.id, %kind, keyspace, name, "created object");
		Ok(entry)
	}
}

#[cfg(test)]
mod tests {
	use pggate_type::ErrorKind;

	use crate::{Catalog, MaterializedCatalog, ObjectKind};

	#[test]
	fn test_create_and_find_table() {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("ks").unwrap();
		let table = catalog.create_table("ks", "users").unwrap();

		let found = catalog.find_object("ks", "users").unwrap();
		assert_eq!(found, table);
		assert_eq!(found.kind, ObjectKind::Table);
		assert_eq!(found.qualified_name(), "ks.users");
	}

	#[test]
	fn test_objects_are_scoped_by_keyspace() {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("a").unwrap();
		catalog.create_keyspace("b").unwrap();
		catalog.create_table("a", "t").unwrap();

		assert!(catalog.find_object("a", "t").is_some());
		assert!(catalog.find_object("b", "t").is_none());
	}

	#[test]
	fn test_create_in_missing_keyspace() {
		let catalog = MaterializedCatalog::new();
		let err = catalog.create_index("missing", "idx").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UndefinedObject);
	}

	#[test]
	fn test_table_and_type_share_namespace() {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("ks").unwrap();
		catalog.create_table("ks", "point").unwrap();

		let err = catalog.create_type("ks", "point").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::DuplicateObject);
	}

	#[test]
	fn test_global_kinds_are_rejected() {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("ks").unwrap();
		let err = catalog.create_object(ObjectKind::Role, "ks", "admin").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Internal);
	}

	#[test]
	fn test_reject_drop() {
		let catalog = MaterializedCatalog::new();
		assert!(catalog.supports_drop(ObjectKind::Index, false));

		catalog.reject_drop(ObjectKind::Index, false);
		assert!(!catalog.supports_drop(ObjectKind::Index, false));
		assert!(catalog.supports_drop(ObjectKind::Index, true));
	}
}
