//! log-capture-macros: Procedural macros for log-capture
//!
//! This crate provides compile-time macros for the log-capture test-support
//! library:
//!
//! - [`macro@log_test`] - Test attribute that scopes log capture to the test body
//! - [`expected!`] - Define expectation sequences with compile-time validated
//!   regexes
//!
//! # Example: Captured Test
//!
//! ```ignore
//! use log_capture::prelude::*;
//!
//! #[log_test]
//! fn server_startup(logs: LogCapture) {
//!     start_server();
//!     logs.assert_logged(&[info("listening")]);
//! }
//! ```
//!
//! # Example: Expectation Sequence
//!
//! ```ignore
//! use log_capture::expected;
//!
//! let expectations = expected! {
//!     info: "started",
//!     warn: regex(r"slow query took \d+ms"),
//!     error: glob("*connection lost*"),
//! };
//! ```

// In proc-macro crates, passing parsed input by value is idiomatic
#![allow(clippy::needless_pass_by_value)]

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expected;

/// Scope log capture to a test function.
///
/// Generates a `#[test]` wrapper that starts capture before the body runs and
/// tears it down on exit. The test function may take a single parameter that
/// receives the capture handle; with no parameter the capture still runs
/// (useful to silence output) but cannot be asserted on.
///
/// # Arguments
///
/// - `level = "trace" | "debug" | "info" | "warn" | "error"` - maximum level
///   to record
/// - `target = "prefix"` - restrict capture to targets under the prefix (may
///   be repeated)
/// - `echo = "stderr" | "stdout"` - echo captured events while recording
///
/// # Examples
///
/// ```ignore
/// #[log_test]
/// fn plain(logs: LogCapture) {
///     tracing::info!("hello");
///     logs.assert_logged(&[info("hello")]);
/// }
///
/// #[log_test(level = "debug", target = "my_app", echo = "stderr")]
/// fn scoped(logs: LogCapture) {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn log_test(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as log_test::LogTestArgs);
    let item = parse_macro_input!(item as syn::ItemFn);
    log_test::expand(args, item).into()
}

/// Define a sequence of log expectations.
///
/// Creates a `Vec<LogExpectation>` with compile-time validated regex
/// patterns.
///
/// # Syntax
///
/// ```ignore
/// expected! {
///     info: "substring",
///     warn: regex(r"regex\s+pattern"),
///     error: glob("glob*pattern"),
///     any: exact("whole message"),
/// }
/// ```
///
/// Each item is a level keyword (`trace`, `debug`, `info`, `warn`, `error`,
/// or `any`) followed by a matcher: a bare string literal (substring match)
/// or one of `exact(..)`, `contains(..)`, `starts_with(..)`, `ends_with(..)`,
/// `regex(..)`, `glob(..)`.
///
/// # Examples
///
/// ```ignore
/// let startup = expected! {
///     info: starts_with("listening"),
///     debug: regex(r"worker \d+ ready"),
/// };
/// logs.assert_logged(&startup);
/// ```
#[proc_macro]
pub fn expected(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expected::ExpectedInput);
    expected::expand(input).into()
}
