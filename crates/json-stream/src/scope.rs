/// Nesting state shared by the text reader and writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    EmptyDocument,
    NonEmptyDocument,
    EmptyArray,
    NonEmptyArray,
    EmptyObject,
    /// A member name was read or written and its value is pending.
    DanglingName,
    NonEmptyObject,
}
