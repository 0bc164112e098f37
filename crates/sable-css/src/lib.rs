//! CSS selector assembly for Sable.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Assembler** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fragment ordering and uniqueness rules within a compound selector
//!   - Joining selectors with combinators (descendant, child, sibling)
//!
//! # Not Implemented
//!
//! - Parsing selector text back into fragments
//! - Validating fragment values or attribute expressions
//! - Selector matching against a document

/// Ordered CSS selector assembly per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{Combinator, FragmentKind, Phase, SelectorBuilder, SelectorError};
