// Type identifiers for runtime discrimination by the dispatch layer

/// Trait for types that publish a stable, namespaced type identifier
pub trait TypeIdent {
    /// Identifier of the form `namespace/Name`
    const TYPE_IDENT: &'static str;
}

/// The identifier published by `T`
pub fn type_ident<T: TypeIdent + ?Sized>() -> &'static str {
    T::TYPE_IDENT
}
