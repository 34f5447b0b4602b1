//! Generated TypeScript bindings for the control panel shell live in
//! `generated/typescript`, produced by this crate's build script.
