//! Ordered CSS selector assembly
//!
//! [`SelectorBuilder`] accumulates the text of one selector fragment by
//! fragment, enforcing the order in which the parts of a
//! [compound selector](https://www.w3.org/TR/selectors-4/#compound) are
//! conventionally written:
//!
//! ```text
//! element  #id  .class  [attribute]  :pseudo-class  ::pseudo-element
//! ```
//!
//! Two rules apply to every append:
//! - element, id and pseudo-element fragments may appear at most once
//! - a fragment may never rank lower than the one appended before it
//!
//! Finished selectors are joined with [`SelectorBuilder::combine`].

mod error;
mod kind;

use std::fmt;

use sable_common::warning::warn_once;

pub use error::SelectorError;
pub use kind::{Combinator, FragmentKind};

/// Lifecycle phase of a [`SelectorBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing appended yet.
    #[default]
    Empty,
    /// At least one fragment appended since creation or the last combine.
    Building,
    /// Produced by [`SelectorBuilder::combine`]; no rank is being tracked.
    Combined,
}

/// Accumulates a selector string under the fragment ordering rules.
///
/// # Example
/// ```
/// use sable_css::SelectorBuilder;
///
/// let mut link = SelectorBuilder::new();
/// let _ = link.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), sable_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    buffer: String,
    last: Option<FragmentKind>,
    phase: Phase,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            last: None,
            phase: Phase::Empty,
        }
    }

    /// Append a fragment of the given kind.
    ///
    /// Calling this on a combined selector starts a fresh ordered run whose
    /// text is appended directly after the combined text.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateSingleton`] if `kind` is an element,
    /// id or pseudo-element and the previous fragment had the same kind, and
    /// [`SelectorError::OutOfOrder`] if `kind` ranks lower than the previous
    /// fragment. The builder is left unchanged in both cases.
    pub fn append(&mut self, kind: FragmentKind, value: &str) -> Result<&mut Self, SelectorError> {
        check_unique(self.last, kind)?;
        check_order(self.last, kind)?;

        kind.write_to(&mut self.buffer, value);
        self.last = Some(kind);
        self.phase = Phase::Building;
        Ok(self)
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an ID selector, e.g. `#main`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn id(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector, e.g. `.container`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector. `expr` is written verbatim between the
    /// brackets, so `attr("lang|=en")` produces `[lang|=en]`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn attr(&mut self, expr: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Attribute, expr)
    }

    /// Append a pseudo-class, e.g. `:focus`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element, e.g. `::before`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join two selectors as `left <token> right`, with one space either side
    /// of the token. The result tracks no rank.
    ///
    /// The token is not validated. Anything other than the four standard
    /// combinators is still written out, with a one-time warning.
    #[must_use]
    pub fn combine(left: &Self, combinator: impl AsRef<str>, right: &Self) -> Self {
        let token = combinator.as_ref();
        if Combinator::from_token(token).is_none() {
            warn_once("CSS", &format!("non-standard combinator token {token:?}"));
        }

        let mut buffer =
            String::with_capacity(left.buffer.len() + token.len() + right.buffer.len() + 2);
        buffer.push_str(&left.buffer);
        buffer.push(' ');
        buffer.push_str(token);
        buffer.push(' ');
        buffer.push_str(&right.buffer);

        Self {
            buffer,
            last: None,
            phase: Phase::Combined,
        }
    }

    /// The selector text built so far.
    #[must_use]
    pub fn render(&self) -> &str {
        &self.buffer
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Kind of the most recently appended fragment, if rank is being tracked.
    #[must_use]
    pub const fn last_kind(&self) -> Option<FragmentKind> {
        self.last
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Element, id and pseudo-element fragments may not repeat.
const fn check_unique(last: Option<FragmentKind>, next: FragmentKind) -> Result<(), SelectorError> {
    match last {
        Some(prev) if prev.rank() == next.rank() && next.is_singleton() => {
            Err(SelectorError::DuplicateSingleton { kind: next })
        }
        _ => Ok(()),
    }
}

/// Ranks must never decrease.
const fn check_order(last: Option<FragmentKind>, next: FragmentKind) -> Result<(), SelectorError> {
    match last {
        Some(prev) if next.rank() < prev.rank() => Err(SelectorError::OutOfOrder {
            kind: next,
            after: prev,
        }),
        _ => Ok(()),
    }
}
