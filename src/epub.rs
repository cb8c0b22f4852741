//! EPUB 3 package assembly (with an EPUB 2 NCX for older reading systems).

pub(crate) mod builder;
mod consts;
mod document;
mod identity;
mod state;
mod writer;
