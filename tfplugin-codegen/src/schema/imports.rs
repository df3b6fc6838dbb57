//! Import aggregation for generated Go source
//!
//! Every generator reports the imports its emitted code needs. [`Imports`]
//! merges those reports: entries are keyed by path, so adding the same path
//! twice keeps one entry, and empty paths are never stored.

use crate::spec::CodeImport;
use std::collections::BTreeMap;

/// Go standard library `context` package
pub const CONTEXT_IMPORT: &str = "context";

/// Go standard library `fmt` package
pub const FMT_IMPORT: &str = "fmt";

/// Framework `attr` package
pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";

/// Framework `diag` package
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";

/// Framework `tfsdk` package
pub const TFSDK_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/tfsdk";

/// Framework `types` package
pub const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";

/// Framework `types/basetypes` package
pub const BASE_TYPES_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/types/basetypes";

/// Framework resource `schema` package
pub const RESOURCE_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema";

/// Framework resource `schema/planmodifier` package
pub const PLAN_MODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";

/// Framework `schema/validator` package
pub const VALIDATOR_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/schema/validator";

/// Framework resource `schema/booldefault` package
pub const BOOL_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault";

/// terraform-plugin-go `tftypes` package
pub const TF_TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";

/// Deduplicating set of Go imports keyed by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    imports: BTreeMap<String, CodeImport>,
}

impl Imports {
    /// Create an empty import set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import, ignoring empty paths
    ///
    /// A later import with the same path replaces the earlier one, so an alias
    /// supplied last wins.
    pub fn add(&mut self, import: CodeImport) {
        if import.path.is_empty() {
            return;
        }

        self.imports.insert(import.path.clone(), import);
    }

    /// Add an unaliased import by path
    pub fn add_path(&mut self, path: &str) {
        self.add(CodeImport::new(path));
    }

    /// Merge every import of `other` into this set
    pub fn append(&mut self, other: &Self) {
        for import in other.imports.values() {
            self.add(import.clone());
        }
    }

    /// Check whether an import path is present
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Iterate imports in path order
    pub fn all(&self) -> impl Iterator<Item = &CodeImport> {
        self.imports.values()
    }

    /// Number of distinct import paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Check whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Render a Go `import (...)` block
    ///
    /// Standard library packages are grouped ahead of third-party packages.
    /// An empty set renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tfplugin_codegen::schema::Imports;
    ///
    /// let mut imports = Imports::new();
    /// imports.add_path("github.com/example/apisdk");
    /// imports.add_path("context");
    ///
    /// assert_eq!(
    ///     imports.to_go_block(),
    ///     "import (\n\t\"context\"\n\n\t\"github.com/example/apisdk\"\n)\n"
    /// );
    /// ```
    #[must_use]
    pub fn to_go_block(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let (std, external): (Vec<&CodeImport>, Vec<&CodeImport>) =
            self.all().partition(|i| is_standard_library(&i.path));

        let groups: Vec<String> = [std, external]
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                group
                    .iter()
                    .map(|import| import_line(import))
                    .collect::<String>()
            })
            .collect();

        format!("import (\n{})\n", groups.join("\n"))
    }
}

impl Extend<CodeImport> for Imports {
    fn extend<T: IntoIterator<Item = CodeImport>>(&mut self, iter: T) {
        for import in iter {
            self.add(import);
        }
    }
}

impl FromIterator<CodeImport> for Imports {
    fn from_iter<T: IntoIterator<Item = CodeImport>>(iter: T) -> Self {
        let mut imports = Self::new();
        imports.extend(iter);
        imports
    }
}

/// Imports needed by custom type, value and conversion code for an external type binding
#[must_use]
pub fn associated_external_type_imports() -> Imports {
    [
        CONTEXT_IMPORT,
        FMT_IMPORT,
        ATTR_IMPORT,
        DIAG_IMPORT,
        TFSDK_IMPORT,
        BASE_TYPES_IMPORT,
        TF_TYPES_IMPORT,
    ]
    .into_iter()
    .map(CodeImport::new)
    .collect()
}

fn is_standard_library(path: &str) -> bool {
    path.split('/')
        .next()
        .is_some_and(|first| !first.contains('.'))
}

fn import_line(import: &CodeImport) -> String {
    match &import.alias {
        Some(alias) => format!("\t{alias} \"{}\"\n", import.path),
        None => format!("\t\"{}\"\n", import.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_path_is_dropped() {
        let mut imports = Imports::new();
        imports.add(CodeImport::new(""));
        imports.add(CodeImport::new("").with_alias("x"));

        assert!(imports.is_empty());
    }

    #[test]
    fn test_shared_path_merges_to_one_entry() {
        let mut a = Imports::new();
        a.add_path(FMT_IMPORT);
        a.add_path(ATTR_IMPORT);

        let mut b = Imports::new();
        b.add_path(ATTR_IMPORT);

        a.append(&b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(ATTR_IMPORT));
    }

    #[test]
    fn test_later_alias_wins() {
        let mut imports = Imports::new();
        imports.add(CodeImport::new("example.com/apisdk"));
        imports.add(CodeImport::new("example.com/apisdk").with_alias("sdk"));

        let all: Vec<_> = imports.all().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].alias.as_deref(), Some("sdk"));
    }

    #[test]
    fn test_associated_external_type_imports() {
        let imports = associated_external_type_imports();
        assert_eq!(imports.len(), 7);
        assert!(imports.contains(TF_TYPES_IMPORT));
        assert!(imports.contains(BASE_TYPES_IMPORT));
    }

    #[test]
    fn test_go_block_with_alias() {
        let imports: Imports = vec![
            CodeImport::new("example.com/apisdk").with_alias("sdk"),
            CodeImport::new(FMT_IMPORT),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            imports.to_go_block(),
            "import (\n\t\"fmt\"\n\n\tsdk \"example.com/apisdk\"\n)\n"
        );
    }

    #[test]
    fn test_go_block_empty() {
        assert_eq!(Imports::new().to_go_block(), "");
    }

    proptest! {
        #[test]
        fn merge_is_idempotent_and_never_stores_empty_paths(
            paths in proptest::collection::vec("[a-z./]{0,12}", 0..16)
        ) {
            let imports: Imports = paths.iter().map(CodeImport::new).collect();

            let mut merged = imports.clone();
            merged.append(&imports);

            prop_assert_eq!(&merged, &imports);
            prop_assert!(imports.all().all(|i| !i.path.is_empty()));

            let mut distinct: Vec<&String> = paths.iter().filter(|p| !p.is_empty()).collect();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(imports.len(), distinct.len());
        }
    }
}
