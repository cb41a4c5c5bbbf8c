// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_catalog::CatalogEntry;
use pggate_type::{
	Result,
	error::diagnostic::{
		catalog::{no_keyspace_selected, object_kind_mismatch, object_not_found},
		feature::{drop_not_supported, qualified_name_too_long, unsupported},
		internal::{already_analyzed, internal},
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::{
	analyze::SemContext,
	ast::{DropObjectType, DropStmt, QualifiedName},
};

/// `keyspace.object` at most.
const MAX_NAME_PARTS: usize = 2;

impl<'bump> DropStmt<'bump> {
	/// Resolves the first name of the list and checks that it can be dropped.
	///
	/// Returns `None` when the target is missing and `IF EXISTS` was given.
	/// Fails when called a second time on the same node.
	#[instrument(
		name = "sql::drop::analyze",
		level = "debug",
		skip(self, ctx),
		fields(object_type = %self.object_type, name = %self.name())
	)]
	pub fn analyze(&self, ctx: &SemContext<'_>) -> Result<Option<CatalogEntry>> {
		if self.analyzed.replace(true) {
			return_error!(already_analyzed("DROP"));
		}

		let name = self.name();
		let expected = self.object_type.object_kind();

		let Some(entry) = self.resolve(ctx, name)? else {
			if self.if_exists {
				debug!("drop target does not exist, nothing to do");
				return Ok(None);
			}
			return_error!(object_not_found(expected.as_str(), &name.to_string()));
		};

		if entry.kind != expected {
			return_error!(object_kind_mismatch(expected.as_str(), &entry.qualified_name(), entry.kind.as_str()));
		}

		if !ctx.catalog().supports_drop(expected, self.if_exists) {
			return_error!(drop_not_supported(expected.as_str(), self.if_exists));
		}

		debug!(id = %entry.id, "resolved drop target");
		Ok(Some(entry))
	}

	fn resolve(&self, ctx: &SemContext<'_>, name: &QualifiedName<'bump>) -> Result<Option<CatalogEntry>> {
		let catalog = ctx.catalog();

		match (self.object_type, name.parts()) {
			(_, parts) if parts.len() > MAX_NAME_PARTS => {
				return_error!(qualified_name_too_long(&name.to_string(), MAX_NAME_PARTS))
			}
			(DropObjectType::Keyspace, [keyspace]) => Ok(catalog.find_keyspace(keyspace.value)),
			(DropObjectType::Role, [role]) => Ok(catalog.find_role(role.value)),
			(object_type @ (DropObjectType::Keyspace | DropObjectType::Role), _) => {
				return_error!(unsupported(format!(
					"{} names cannot be qualified",
					object_type.object_kind()
				)))
			}
			(_, [keyspace, object]) => Ok(catalog.find_object(keyspace.value, object.value)),
			(_, [object]) => match ctx.current_keyspace() {
				Some(keyspace) => Ok(catalog.find_object(keyspace, object.value)),
				// no keyspace to look in, so the object cannot exist
				None if self.if_exists => Ok(None),
				None => return_error!(no_keyspace_selected(object.value)),
			},
			_ => return_error!(internal("qualified name without parts")),
		}
	}
}
