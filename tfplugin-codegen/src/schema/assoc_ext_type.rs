//! External type bindings

use super::imports::Imports;
use crate::spec::AssociatedExternalType;

/// Resolved binding between an attribute and a non-framework Go type
///
/// Generators hold `Option<AssocExtType>`; `None` means the attribute has no
/// binding, and `None == None` keeps equality nil-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssocExtType {
    inner: AssociatedExternalType,
}

impl AssocExtType {
    /// Resolve the binding declared by an attribute, if any
    #[must_use]
    pub fn new(assoc_ext_type: Option<&AssociatedExternalType>) -> Option<Self> {
        assoc_ext_type.map(|inner| Self {
            inner: inner.clone(),
        })
    }

    /// Import of the package declaring the external type
    #[must_use]
    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();

        if let Some(import) = &self.inner.import {
            imports.add(import.clone());
        }

        imports
    }

    /// External type expression as declared (e.g., `*apisdk.Settings`)
    #[must_use]
    pub fn type_expr(&self) -> &str {
        &self.inner.r#type
    }

    /// External type without a leading pointer (e.g., `apisdk.Settings`)
    #[must_use]
    pub fn type_reference(&self) -> &str {
        self.inner
            .r#type
            .strip_prefix('*')
            .unwrap_or(&self.inner.r#type)
    }

    /// Qualified type name joined into one exported identifier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tfplugin_codegen::schema::AssocExtType;
    /// use tfplugin_codegen::spec::AssociatedExternalType;
    ///
    /// let declared = AssociatedExternalType {
    ///     import: None,
    ///     r#type: "*apisdk.Settings".to_string(),
    /// };
    /// let binding = AssocExtType::new(Some(&declared)).unwrap();
    ///
    /// assert_eq!(binding.to_pascal_case(), "ApisdkSettings");
    /// ```
    #[must_use]
    pub fn to_pascal_case(&self) -> String {
        self.type_reference()
            .split('.')
            .map(capitalize)
            .collect()
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
