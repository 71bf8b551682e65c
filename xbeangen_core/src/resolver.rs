//! Subtype and implementation tests over the inheritance relation.
//!
//! Walks are explicit loops over the [`TypeCatalog`]. A superclass edge that
//! points back at a type already visited ends the walk, so malformed input
//! (including a type naming itself as its superclass) always terminates.

use crate::model::SchemaElement;
use crate::types::{TypeCatalog, TypeDescriptor};
use std::collections::HashSet;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> TypeResolver<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a TypeCatalog {
        self.catalog
    }

    /// Checks the directly declared interfaces of `ty` and then of each
    /// superclass in turn.
    pub fn implements_interface(&self, ty: &TypeDescriptor, interface_name: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = ty;

        loop {
            trace!(
                type_name = %current.qualified_name,
                interface = interface_name,
                "Checking declared interfaces"
            );
            if current.interfaces.iter().any(|i| i == interface_name) {
                return true;
            }
            visited.insert(current.qualified_name.as_str());

            let Some(superclass) = current.superclass.as_deref() else {
                return false;
            };
            if visited.contains(superclass) {
                trace!(
                    type_name = %current.qualified_name,
                    superclass,
                    "Self-referential superclass, stopping walk"
                );
                return false;
            }
            match self.catalog.get(superclass) {
                Some(next) => current = next,
                None => return false,
            }
        }
    }

    /// Name-based form of [`implements_interface`](Self::implements_interface);
    /// false for names missing from the catalog.
    pub fn type_implements_interface(&self, type_name: &str, interface_name: &str) -> bool {
        self.catalog
            .get(type_name)
            .is_some_and(|ty| self.implements_interface(ty, interface_name))
    }

    /// Whether `ty` implements or extends `target`.
    ///
    /// An interface target is answered by the interface walk. A class target
    /// is compared against the strict ancestors of `ty`; `ty` itself never
    /// matches. A target missing from the catalog has no known kind, so
    /// either relation counts.
    pub fn is_implementation_of(&self, ty: &TypeDescriptor, target: &str) -> bool {
        match self.catalog.get(target) {
            Some(target_ty) if target_ty.is_interface() => self.implements_interface(ty, target),
            Some(_) => self.extends(ty, target),
            None => self.implements_interface(ty, target) || self.extends(ty, target),
        }
    }

    fn extends(&self, ty: &TypeDescriptor, target: &str) -> bool {
        let mut visited = HashSet::new();
        visited.insert(ty.qualified_name.as_str());
        let mut next = ty.superclass.as_deref();

        while let Some(ancestor) = next {
            if ancestor == target {
                return true;
            }
            if !visited.insert(ancestor) {
                return false;
            }
            next = self
                .catalog
                .get(ancestor)
                .and_then(|t| t.superclass.as_deref());
        }
        false
    }

    /// Every element, in catalog order, whose type implements `type_name`.
    pub fn find_implementations_of<'e>(
        &self,
        type_name: &str,
        elements: &'e [SchemaElement],
    ) -> Vec<&'e SchemaElement> {
        let found: Vec<&SchemaElement> = elements
            .iter()
            .filter(|element| self.is_implementation_of(&element.ty, type_name))
            .collect();
        trace!(
            type_name,
            candidates = found.len(),
            "Resolved implementation candidates"
        );
        found
    }
}
