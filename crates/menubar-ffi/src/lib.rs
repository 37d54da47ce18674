//! UniFFI bindings crate for the menubar library
//!
//! This crate wraps the menubar crate for UniFFI library mode binding
//! generation. It re-exports the FFI module and the UniFFI scaffolding.
//!
//! ## Building for Swift
//!
//! 1. Build the library for Apple platforms:
//!    ```bash
//!    cargo build --release -p menubar-ffi --target aarch64-apple-darwin
//!    ```
//!
//! 2. Generate Swift bindings:
//!    ```bash
//!    cargo run -p menubar-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-apple-darwin/release/libmenubar_ffi.dylib \
//!        --language swift \
//!        --out-dir generated/swift
//!    ```
//!
//! Kotlin bindings are generated the same way with `--language kotlin`
//! against the Linux or Windows build.

pub use menubar::ffi::*;

// Library mode needs the scaffolding symbols in this cdylib
menubar::uniffi_reexport_scaffolding!();
