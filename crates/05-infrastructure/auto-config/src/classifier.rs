//! 能力分类与具体性过滤

use crate::catalog::Catalog;
use crate::descriptor::ClassDescriptor;
use infrastructure_common::{CapabilityCategory, Marker};

/// 描述符是否带有类别的标记
pub fn matches(descriptor: &ClassDescriptor, category: CapabilityCategory) -> bool {
    match category.marker() {
        Marker::Supertype(kind) => descriptor.has_supertype(kind),
        Marker::Annotation(name) => descriptor.has_annotation(name),
    }
}

/// 目录中属于指定类别的全部描述符，包括抽象类型
pub fn classify(catalog: &Catalog, category: CapabilityCategory) -> Vec<&ClassDescriptor> {
    catalog.iter().filter(|d| matches(d, category)).collect()
}

/// 去掉抽象类型
pub fn concrete<'a>(classes: Vec<&'a ClassDescriptor>) -> Vec<&'a ClassDescriptor> {
    classes.into_iter().filter(|d| !d.is_abstract).collect()
}

/// 指定类别中可以注册的描述符
pub fn registrable(catalog: &Catalog, category: CapabilityCategory) -> Vec<&ClassDescriptor> {
    concrete(classify(catalog, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Supertype;
    use crate::source::StaticClassSource;
    use infrastructure_common::{annotations, Annotation, TypeInfo};

    struct OrdersResource;
    struct BaseResource;
    struct AuditProvider;
    struct Plain;

    fn catalog() -> Catalog {
        let source = StaticClassSource::new(vec![
            ClassDescriptor::new(TypeInfo::named::<OrdersResource>("demo::OrdersResource"))
                .with_annotation(Annotation::with_value(annotations::PATH, "/orders"))
                .with_annotation(Annotation::marker(annotations::PROVIDER)),
            ClassDescriptor::new(TypeInfo::named::<BaseResource>("demo::BaseResource"))
                .with_annotation(Annotation::with_value(annotations::PATH, "/base"))
                .with_abstract(true),
            ClassDescriptor::new(TypeInfo::named::<AuditProvider>("demo::AuditProvider"))
                .with_supertype(Supertype::InjectableProvider),
            ClassDescriptor::new(TypeInfo::named::<Plain>("demo::Plain")),
        ]);
        Catalog::build(&["demo"], &source).unwrap()
    }

    fn names(classes: &[&ClassDescriptor]) -> Vec<String> {
        let mut names: Vec<String> = classes.iter().map(|d| d.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_annotation_categories() {
        let catalog = catalog();

        assert_eq!(
            names(&classify(&catalog, CapabilityCategory::Resource)),
            vec!["demo::BaseResource", "demo::OrdersResource"]
        );
        assert_eq!(
            names(&classify(&catalog, CapabilityCategory::Provider)),
            vec!["demo::OrdersResource"]
        );
    }

    #[test]
    fn test_supertype_categories() {
        let catalog = catalog();

        assert_eq!(
            names(&classify(&catalog, CapabilityCategory::InjectableProvider)),
            vec!["demo::AuditProvider"]
        );
        assert!(classify(&catalog, CapabilityCategory::Task).is_empty());
    }

    #[test]
    fn test_plain_class_matches_no_category() {
        let catalog = catalog();
        let plain = catalog
            .get(std::any::TypeId::of::<Plain>())
            .expect("plain class in catalog");

        assert!(infrastructure_common::CAPABILITIES
            .iter()
            .all(|c| !matches(plain, c.category)));
    }

    #[test]
    fn test_registrable_skips_abstract() {
        let catalog = catalog();

        assert_eq!(
            names(&registrable(&catalog, CapabilityCategory::Resource)),
            vec!["demo::OrdersResource"]
        );
    }
}
