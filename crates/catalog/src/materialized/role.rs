// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::{error::diagnostic::catalog::object_already_exists, return_error};
use tracing::debug;

use crate::{CatalogEntry, ObjectKind, Result, materialized::MaterializedCatalog};

impl MaterializedCatalog {
	pub fn create_role(&self, name: &str) -> Result<CatalogEntry> {
		let _ddl = self.ddl.lock();
		if self.roles_by_name.contains_key(name) {
			return_error!(object_already_exists("role", name));
		}

		let entry = CatalogEntry {
			id: self.allocate_id(),
			kind: ObjectKind::Role,
			keyspace: None,
			name: name.to_string(),
		};
		self.roles_by_name.insert(entry.name.clone(), entry.id);
		self.entries.insert(entry.id, entry.clone());
		debug!(id = %entry.id, name, "created role");
		Ok(entry)
	}
}

#[cfg(test)]
mod tests {
	use crate::{Catalog, MaterializedCatalog};

	#[test]
	fn test_roles_and_keyspaces_do_not_collide() {
		let catalog = MaterializedCatalog::new();
		let keyspace = catalog.create_keyspace("analyst").unwrap();
		let role = catalog.create_role("analyst").unwrap();

		assert_ne!(keyspace.id, role.id);
		assert_eq!(catalog.find_role("analyst").unwrap(), role);
		assert_eq!(catalog.find_keyspace("analyst").unwrap(), keyspace);
	}
}
