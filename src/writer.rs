pub(crate) mod xml;
pub(crate) mod zip;

pub(crate) type WriterResult<T> = crate::errors::PagepubResult<T>;
