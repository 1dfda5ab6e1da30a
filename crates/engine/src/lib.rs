//! Intent-matching engine for the Elite Cuts chat assistant.
//!
//! The engine is a pure classifier: given the page a conversation widget is
//! embedded in and one free-text utterance, it walks a fixed waterfall of
//! keyword rule tiers and returns the first matching canned response. All
//! rule data is static; resolution performs no I/O and cannot fail.

mod error;
mod keywords;
mod page;
mod quick;
mod resolver;
mod responses;
mod rules;

pub use error::{EngineError, Result};
pub use keywords::KeywordSet;
pub use page::PageContext;
pub use quick::quick_questions;
pub use resolver::resolve;
pub use rules::{page_rules, PageRules, Predicate, RuleTier};
