use super::{TypeDescriptor, TypeKind};

const OBJECT: &str = "java.lang.Object";
const SERIALIZABLE: &str = "java.io.Serializable";
const COMPARABLE: &str = "java.lang.Comparable";
const COLLECTION: &str = "java.util.Collection";
const LIST: &str = "java.util.List";
const SET: &str = "java.util.Set";
const SORTED_SET: &str = "java.util.SortedSet";
const QUEUE: &str = "java.util.Queue";
const MAP: &str = "java.util.Map";
const ABSTRACT_COLLECTION: &str = "java.util.AbstractCollection";
const ABSTRACT_LIST: &str = "java.util.AbstractList";
const ABSTRACT_SET: &str = "java.util.AbstractSet";

fn class(name: &str, superclass: Option<&str>, interfaces: &[&str]) -> TypeDescriptor {
    TypeDescriptor::builder()
        .qualified_name(name)
        .kind(TypeKind::Class)
        .maybe_superclass(superclass)
        .interfaces(interfaces.iter().map(|i| i.to_string()).collect())
        .build()
}

fn interface(name: &str, extends: &[&str]) -> TypeDescriptor {
    TypeDescriptor::builder()
        .qualified_name(name)
        .kind(TypeKind::Interface)
        .interfaces(extends.iter().map(|i| i.to_string()).collect())
        .build()
}

fn primitive(name: &str) -> TypeDescriptor {
    TypeDescriptor::builder()
        .qualified_name(name)
        .kind(TypeKind::Primitive)
        .build()
}

/// Stub descriptors for the platform types the generator reasons about.
///
/// Interface lists mirror what reflection reports as *directly* declared,
/// so `java.util.ArrayList` names `java.util.List` but not
/// `java.util.Collection`.
pub(super) fn platform_types() -> Vec<TypeDescriptor> {
    let mut types = vec![
        class(OBJECT, None, &[]),
        class(
            "java.lang.String",
            Some(OBJECT),
            &[SERIALIZABLE, COMPARABLE, "java.lang.CharSequence"],
        ),
        class("java.lang.Number", Some(OBJECT), &[SERIALIZABLE]),
        class("java.lang.Boolean", Some(OBJECT), &[SERIALIZABLE, COMPARABLE]),
        class("java.lang.Character", Some(OBJECT), &[SERIALIZABLE, COMPARABLE]),
        class("java.lang.Class", Some(OBJECT), &[SERIALIZABLE]),
        interface(SERIALIZABLE, &[]),
        interface(COMPARABLE, &[]),
        interface("java.lang.CharSequence", &[]),
        interface("java.lang.Iterable", &[]),
        interface(COLLECTION, &["java.lang.Iterable"]),
        interface(LIST, &[COLLECTION]),
        interface(SET, &[COLLECTION]),
        interface(SORTED_SET, &[SET]),
        interface(QUEUE, &[COLLECTION]),
        interface(MAP, &[]),
        class(ABSTRACT_COLLECTION, Some(OBJECT), &[COLLECTION]),
        class(ABSTRACT_LIST, Some(ABSTRACT_COLLECTION), &[LIST]),
        class(ABSTRACT_SET, Some(ABSTRACT_COLLECTION), &[SET]),
        class("java.util.ArrayList", Some(ABSTRACT_LIST), &[LIST, SERIALIZABLE]),
        class(
            "java.util.LinkedList",
            Some(ABSTRACT_LIST),
            &[LIST, QUEUE, SERIALIZABLE],
        ),
        class("java.util.HashSet", Some(ABSTRACT_SET), &[SET, SERIALIZABLE]),
        class("java.util.TreeSet", Some(ABSTRACT_SET), &[SORTED_SET, SERIALIZABLE]),
        class("java.util.HashMap", Some(OBJECT), &[MAP, SERIALIZABLE]),
        class("java.util.Date", Some(OBJECT), &[SERIALIZABLE, COMPARABLE]),
        class("java.sql.Date", Some("java.util.Date"), &[]),
        class("java.io.File", Some(OBJECT), &[SERIALIZABLE, COMPARABLE]),
        class("java.net.URI", Some(OBJECT), &[SERIALIZABLE, COMPARABLE]),
        class("java.net.URL", Some(OBJECT), &[SERIALIZABLE]),
        class("javax.xml.namespace.QName", Some(OBJECT), &[SERIALIZABLE]),
        class("javax.management.ObjectName", Some(OBJECT), &[SERIALIZABLE]),
    ];

    for boxed in [
        "java.lang.Byte",
        "java.lang.Short",
        "java.lang.Integer",
        "java.lang.Long",
        "java.lang.Float",
        "java.lang.Double",
    ] {
        types.push(class(boxed, Some("java.lang.Number"), &[COMPARABLE]));
    }

    for name in PRIMITIVES {
        types.push(primitive(name));
    }

    types
}

/// The primitive value types, as reflection names them.
pub const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];
