// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::Oid;

/// The template database is created by the host itself and never stored in
/// the distributed backend.
pub const TEMPLATE_DATABASE_OID: Oid = 1;

const LOCAL_SCHEMAS: &[&str] = &["pg_catalog", "information_schema"];
const TOAST_SCHEMA_PREFIX: &str = "pg_toast";

/// Whether a table in `schema` of database `database` is stored in the
/// distributed backend. System schemas stay local to each node.
pub fn is_distributed_table(database: Oid, schema: &str) -> bool {
	database != TEMPLATE_DATABASE_OID
		&& !LOCAL_SCHEMAS.contains(&schema)
		&& !schema.starts_with(TOAST_SCHEMA_PREFIX)
}

#[cfg(test)]
mod tests {
	use super::{TEMPLATE_DATABASE_OID, is_distributed_table};

	#[test]
	fn test_user_schema_is_distributed() {
		assert!(is_distributed_table(16384, "public"));
		assert!(is_distributed_table(16384, "sales"));
	}

	#[test]
	fn test_template_database_is_local() {
		assert!(!is_distributed_table(TEMPLATE_DATABASE_OID, "public"));
	}

	#[test]
	fn test_system_schemas_are_local() {
		assert!(!is_distributed_table(16384, "pg_catalog"));
		assert!(!is_distributed_table(16384, "information_schema"));
		assert!(!is_distributed_table(16384, "pg_toast"));
		assert!(!is_distributed_table(16384, "pg_toast_temp_1"));
	}
}
