//! # tagcheck-parser
//!
//! Tag extraction and balance checking for markup sources.
//!
//! Layout
//!
//!     The work is one shallow pass split in two stages:
//!         1. Extraction. See [extraction](tagcheck::extraction). A regex built from an
//!            allow-list of tag names turns the raw text into an ordered stream of
//!            [TagToken](tagcheck::token::TagToken)s.
//!         2. Balance checking. See [balance](tagcheck::balance). A stack of open names
//!            consumes the tokens and reports [Diagnostic](tagcheck::diagnostic::Diagnostic)s
//!            as soon as they are detected.
//!
//!     Nothing here understands real markup: attributes, comments and self-closing syntax
//!     are invisible to the extractor.

#![allow(rustdoc::invalid_html_tags)]

pub mod tagcheck;
