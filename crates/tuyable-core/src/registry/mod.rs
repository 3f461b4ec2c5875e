//! Category/product lookup of number descriptors.
//!
//! A [`NumberRegistry`] is assembled once through [`RegistryBuilder`] and is
//! read-only afterwards. Product lists are stored behind `Arc<[_]>` so several
//! product ids can share one list; [`NumberRegistry::resolve`] hands out that
//! shared list itself.

mod builtin;

use crate::error::RegistryError;
use crate::number::NumberDescriptor;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
struct CategoryMapping {
    products: HashMap<&'static str, Arc<[NumberDescriptor]>>,
    fallback: Option<Arc<[NumberDescriptor]>>,
}

/// Read-only table of number descriptors keyed by category and product id.
#[derive(Debug, Default)]
pub struct NumberRegistry {
    categories: HashMap<&'static str, CategoryMapping>,
}

impl NumberRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Resolves the controls of a device.
    ///
    /// An exact product match wins; otherwise the category fallback list is
    /// used; otherwise the device has no number controls. The two lists are
    /// never merged.
    pub fn resolve(&self, category: &str, product_id: &str) -> &[NumberDescriptor] {
        let Some(mapping) = self.categories.get(category) else {
            return &[];
        };
        if let Some(list) = mapping.products.get(product_id) {
            return list;
        }
        mapping.fallback.as_deref().unwrap_or(&[])
    }

    /// Registered categories, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.keys().copied()
    }

    /// Product ids registered under `category`, in no particular order.
    pub fn products(&self, category: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|mapping| mapping.products.keys().copied())
    }
}

/// Builder for [`NumberRegistry`].
///
/// Registering a product id or a fallback list twice in one category is an
/// error rather than a silent overwrite.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: HashMap<&'static str, CategoryMapping>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one control list shared by every id in `product_ids`.
    pub fn products<I>(
        &mut self,
        category: &'static str,
        product_ids: &[&'static str],
        descriptors: I,
    ) -> Result<&mut Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<NumberDescriptor>,
    {
        let mapping = self.categories.entry(category).or_default();
        for (i, product_id) in product_ids.iter().enumerate() {
            if mapping.products.contains_key(product_id) || product_ids[..i].contains(product_id) {
                return Err(RegistryError::DuplicateProduct {
                    category,
                    product_id: *product_id,
                });
            }
        }
        let list: Arc<[NumberDescriptor]> = descriptors.into_iter().map(Into::into).collect();
        for product_id in product_ids {
            mapping.products.insert(*product_id, Arc::clone(&list));
        }
        Ok(self)
    }

    /// Registers the list used for products of `category` with no entry of
    /// their own.
    pub fn fallback<I>(
        &mut self,
        category: &'static str,
        descriptors: I,
    ) -> Result<&mut Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<NumberDescriptor>,
    {
        let mapping = self.categories.entry(category).or_default();
        if mapping.fallback.is_some() {
            return Err(RegistryError::DuplicateFallback { category });
        }
        mapping.fallback = Some(descriptors.into_iter().map(Into::into).collect());
        Ok(self)
    }

    pub fn build(self) -> NumberRegistry {
        NumberRegistry {
            categories: self.categories,
        }
    }
}

/// Builds the registry holding every known Tuya BLE product.
pub fn builtin_registry() -> Result<NumberRegistry, RegistryError> {
    builtin::build()
}

/// The process-wide built-in registry, built on first use.
pub fn registry() -> &'static NumberRegistry {
    static REGISTRY: OnceLock<NumberRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        builtin::build().expect("built-in number table registers each product once")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{NumberDescription, NumberMapping, VirtualNumberMapping};

    fn mapping(dp_id: u8, key: &'static str) -> NumberMapping {
        NumberMapping::new(dp_id, NumberDescription::new(key, 0.0, 100.0))
    }

    #[test]
    fn product_match_wins_over_fallback() {
        let mut builder = RegistryBuilder::new();
        builder
            .products("wk", &["a"], [mapping(1, "specific")])
            .unwrap()
            .fallback("wk", [mapping(2, "generic")])
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.resolve("wk", "a")[0].key(), "specific");
        assert_eq!(registry.resolve("wk", "b")[0].key(), "generic");
        assert_eq!(registry.resolve("wk", "a").len(), 1);
    }

    #[test]
    fn unknown_category_or_product_resolves_empty() {
        let mut builder = RegistryBuilder::new();
        builder.products("wk", &["a"], [mapping(1, "x")]).unwrap();
        let registry = builder.build();

        assert!(registry.resolve("kg", "a").is_empty());
        assert!(registry.resolve("wk", "b").is_empty());
    }

    #[test]
    fn shared_product_ids_resolve_to_one_list() {
        let mut builder = RegistryBuilder::new();
        builder
            .products("szjqr", &["a", "b"], [mapping(1, "x")])
            .unwrap();
        let registry = builder.build();
        assert!(std::ptr::eq(
            registry.resolve("szjqr", "a"),
            registry.resolve("szjqr", "b")
        ));
    }

    #[test]
    fn mixed_descriptor_lists() {
        let mut builder = RegistryBuilder::new();
        builder
            .products(
                "sfkzq",
                &["a"],
                [
                    NumberDescriptor::from(mapping(9, "time_use")),
                    VirtualNumberMapping::new(NumberDescription::new("watering", 60.0, 86400.0))
                        .into(),
                ],
            )
            .unwrap();
        let registry = builder.build();
        let keys: Vec<_> = registry
            .resolve("sfkzq", "a")
            .iter()
            .map(NumberDescriptor::key)
            .collect();
        assert_eq!(keys, ["time_use", "watering"]);
    }

    #[test]
    fn duplicate_product_is_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.products("ggq", &["hfgdqhho"], [mapping(106, "a")]).unwrap();
        let err = builder
            .products("ggq", &["hfgdqhho"], [mapping(106, "b")])
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateProduct {
                category: "ggq",
                product_id: "hfgdqhho"
            }
        );
    }

    #[test]
    fn duplicate_within_one_call_is_rejected() {
        let mut builder = RegistryBuilder::new();
        assert!(builder
            .products("kg", &["a", "a"], [mapping(1, "x")])
            .is_err());
    }

    #[test]
    fn duplicate_fallback_is_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.fallback("kg", [mapping(1, "x")]).unwrap();
        assert_eq!(
            builder.fallback("kg", [mapping(2, "y")]).unwrap_err(),
            RegistryError::DuplicateFallback { category: "kg" }
        );
    }

    #[test]
    fn builtin_table_builds() {
        assert!(builtin_registry().is_ok());
        assert!(!registry().resolve("szjqr", "blliqpsj").is_empty());
    }
}
