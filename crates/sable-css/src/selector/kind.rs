//! Fragment kinds and combinators.

use strum_macros::{Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The category of a fragment appended to a compound selector. Each kind has
/// a fixed rank; fragments must be appended in non-decreasing rank order.
///
/// | Kind            | Rank | Written as  |
/// |-----------------|------|-------------|
/// | `Element`       | 1    | `div`       |
/// | `Id`            | 2    | `#main`     |
/// | `Class`         | 3    | `.btn`      |
/// | `Attribute`     | 4    | `[href]`    |
/// | `PseudoClass`   | 5    | `:hover`    |
/// | `PseudoElement` | 6    | `::before`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`, `a`, `h1`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The value is the raw expression between the brackets, e.g. `href$=".png"`.
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`, `:first-child`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Every kind, in rank order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the required fragment order (1..=6).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Kinds that may appear at most once in a compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Append `value` to `buf` with this kind's prefix (and suffix, for attributes).
    pub fn write_to(self, buf: &mut String, value: &str) {
        match self {
            Self::Element => {}
            Self::Id => buf.push('#'),
            Self::Class => buf.push('.'),
            Self::Attribute => buf.push('['),
            Self::PseudoClass => buf.push(':'),
            Self::PseudoElement => buf.push_str("::"),
        }
        buf.push_str(value);
        if self == Self::Attribute {
            buf.push(']');
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The standard combinator tokens. `SelectorBuilder::combine` also accepts
/// raw string tokens; these are the ones it recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Token: a single space.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// Token: `>`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// Token: `+`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// Token: `~`
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Recognise a raw token. Returns `None` for anything non-standard.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        let ranks: Vec<u8> = FragmentKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_singleton_kinds() {
        let singletons: Vec<FragmentKind> = FragmentKind::ALL
            .into_iter()
            .filter(|k| k.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            vec![
                FragmentKind::Element,
                FragmentKind::Id,
                FragmentKind::PseudoElement
            ]
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!(
            "pseudo-element".parse::<FragmentKind>(),
            Ok(FragmentKind::PseudoElement)
        );
        assert!("tag".parse::<FragmentKind>().is_err());
    }

    #[test]
    fn test_write_to_prefixes() {
        let mut buf = String::new();
        FragmentKind::Element.write_to(&mut buf, "a");
        FragmentKind::Attribute.write_to(&mut buf, "href");
        FragmentKind::PseudoElement.write_to(&mut buf, "after");
        assert_eq!(buf, "a[href]::after");
    }

    #[test]
    fn test_combinator_tokens() {
        for combinator in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
        ] {
            assert_eq!(Combinator::from_token(combinator.as_str()), Some(combinator));
        }
        assert_eq!(Combinator::from_token("|"), None);
    }
}
