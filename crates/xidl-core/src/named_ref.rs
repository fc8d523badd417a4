use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a resource (`TResource`)
/// stored in some other container (`TSource`), held without borrowing that
/// container. Dereferencing goes through [`NamedRef::deref()`] with an
/// explicit reference to the `TSource`.
///
/// The resolved [`Document`](crate::Document) stores every reference from
/// a field, parameter or return type to a declaration this way. Object
/// types may refer to themselves or to each other in a cycle, and all of
/// them still live side by side in the document's name table without any
/// self-referential ownership.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    /// Where in the document this reference was written.
    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this trait for any type that can be referenced by name. This
/// enables [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No declaration named `{0}`")]
    DanglingReference(String),

    /// The name exists, but refers to a different kind of declaration than
    /// the caller asked for.
    #[error("`{name}` is declared as {found}, not {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}
