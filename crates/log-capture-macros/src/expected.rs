//! Expectation sequence macro implementation.
//!
//! This module implements the `expected!` macro for declaratively building a
//! vector of log expectations, with regex patterns validated at expansion
//! time.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Result, Token, braced};

/// A single expectation definition: level keyword plus matcher.
pub struct Expectation {
    /// The level keyword (`trace` .. `error`, or `any`).
    pub level: Ident,
    /// The message matcher.
    pub matcher: MatcherKind,
}

/// The kind of message matcher.
pub enum MatcherKind {
    /// Bare string literal: substring match.
    Contains(LitStr),
    /// Named matcher call: `exact("..")`, `regex("..")`, etc.
    Named(Ident, LitStr),
}

impl Parse for Expectation {
    fn parse(input: ParseStream) -> Result<Self> {
        let level: Ident = input.parse()?;
        let _: Token![:] = input.parse()?;

        let matcher = if input.peek(Ident) {
            let kind: Ident = input.parse()?;
            let content;
            syn::parenthesized!(content in input);
            let lit: LitStr = content.parse()?;

            match kind.to_string().as_str() {
                "exact" | "contains" | "starts_with" | "ends_with" | "regex" | "glob" => {
                    MatcherKind::Named(kind, lit)
                }
                other => {
                    return Err(syn::Error::new(
                        kind.span(),
                        format!("unknown matcher: {other}"),
                    ));
                }
            }
        } else {
            MatcherKind::Contains(input.parse()?)
        };

        Ok(Self { level, matcher })
    }
}

/// The expected! macro input.
pub struct ExpectedInput {
    /// The list of expectations.
    pub expectations: Punctuated<Expectation, Token![,]>,
}

impl Parse for ExpectedInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // Handle braced or unbraced syntax
        let expectations = if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);
            Punctuated::parse_terminated(&content)?
        } else {
            Punctuated::parse_terminated(input)?
        };

        Ok(Self { expectations })
    }
}

/// Generate code for the expected! macro.
pub fn expand(input: ExpectedInput) -> TokenStream {
    let expectations: Vec<_> = input
        .expectations
        .into_iter()
        .map(|expectation| {
            let level = expectation.level;
            let constructor = match level.to_string().as_str() {
                "trace" => quote! { ::log_capture::expect::trace },
                "debug" => quote! { ::log_capture::expect::debug },
                "info" => quote! { ::log_capture::expect::info },
                "warn" => quote! { ::log_capture::expect::warn },
                "error" => quote! { ::log_capture::expect::error },
                "any" => quote! { ::log_capture::expect::any_level },
                other => {
                    return syn::Error::new(
                        level.span(),
                        format!("unknown level keyword: {other}"),
                    )
                    .to_compile_error();
                }
            };

            let matcher_expr = match expectation.matcher {
                MatcherKind::Contains(lit) => {
                    quote! { ::log_capture::MessageMatcher::contains(#lit) }
                }
                MatcherKind::Named(kind, lit) => match kind.to_string().as_str() {
                    "exact" => quote! { ::log_capture::MessageMatcher::exact(#lit) },
                    "contains" => quote! { ::log_capture::MessageMatcher::contains(#lit) },
                    "starts_with" => {
                        quote! { ::log_capture::MessageMatcher::starts_with(#lit) }
                    }
                    "ends_with" => quote! { ::log_capture::MessageMatcher::ends_with(#lit) },
                    "glob" => quote! { ::log_capture::MessageMatcher::glob(#lit) },
                    "regex" => {
                        let pattern = lit.value();
                        // Validate regex at compile time
                        if let Err(e) = regex::Regex::new(&pattern) {
                            return syn::Error::new(lit.span(), format!("invalid regex: {e}"))
                                .to_compile_error();
                        }
                        quote! {
                            ::log_capture::MessageMatcher::regex(#lit)
                                .expect("regex was validated at compile time")
                        }
                    }
                    _ => unreachable!("matcher kinds are validated during parsing"),
                },
            };

            quote! { #constructor(#matcher_expr) }
        })
        .collect();

    quote! {
        vec![#(#expectations),*]
    }
}
