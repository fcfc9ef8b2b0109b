use super::{MissingDescription, UnknownVariant};

/// An enum whose variants can be enumerated and may carry a description.
///
/// This is normally implemented through [`described!`](crate::described) rather than by hand.
pub trait Described: Sized + Copy + 'static {
    /// The name of the enum itself, used in error messages.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The identifier of this variant.
    fn name(&self) -> &'static str;

    /// The description attached to this variant, if there is one.
    fn description(&self) -> Option<&'static str>;
}

/// Lookups built on [`Described`].
///
/// # Examples
/// ```
/// use standard_ext::described;
/// use standard_ext::enums::{Described, DescribedExt};
///
/// described! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Level {
///         #[describe("Something went wrong")]
///         Error,
///         Info,
///     }
/// }
///
/// assert_eq!(Level::Error.description(), Some("Something went wrong"));
/// assert_eq!(Level::Info.description_or_name(), "Info");
/// assert_eq!(Level::from_description("Something went wrong"), Ok(Level::Error));
/// assert!(Level::Info.require_description().is_err());
/// ```
pub trait DescribedExt: Described {
    /// Returns the description, falling back to the variant name.
    fn description_or_name(&self) -> &'static str {
        self.description().unwrap_or_else(|| self.name())
    }

    /// Returns the description, or an error if this variant was declared without one.
    fn require_description(&self) -> Result<&'static str, MissingDescription> {
        self.description().ok_or(MissingDescription {
            enum_name: Self::NAME,
            variant: self.name(),
        })
    }

    /// Finds the first variant whose description is exactly `text`.
    fn from_description(text: &str) -> Result<Self, UnknownVariant> {
        Self::VARIANTS
            .iter()
            .find(|variant| variant.description() == Some(text))
            .copied()
            .ok_or_else(|| UnknownVariant {
                enum_name: Self::NAME,
                text: text.to_owned(),
            })
    }

    /// Finds the variant with the identifier `text`.
    fn from_name(text: &str) -> Result<Self, UnknownVariant> {
        Self::VARIANTS
            .iter()
            .find(|variant| variant.name() == text)
            .copied()
            .ok_or_else(|| UnknownVariant {
                enum_name: Self::NAME,
                text: text.to_owned(),
            })
    }

    /// Iterates over the variants that have a description, paired with it.
    fn descriptions() -> impl Iterator<Item = (Self, &'static str)> {
        Self::VARIANTS
            .iter()
            .filter_map(|variant| variant.description().map(|desc| (*variant, desc)))
    }
}

impl<E: Described> DescribedExt for E {}

/// Declares a fieldless enum and implements [`Described`](crate::enums::Described) for it.
///
/// Each variant may carry one `#[describe("...")]` attribute, in any position among its other
/// attributes. Every other attribute, doc comments included, is passed through to the generated
/// enum, as are the attributes before the `enum` keyword. The enum must be `Copy`.
///
/// ```
/// use standard_ext::described;
/// use standard_ext::enums::Described;
///
/// described! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Shape {
///         /// A regular quadrilateral.
///         #[describe("four equal sides")]
///         Square,
///         Circle,
///     }
/// }
///
/// assert_eq!(Shape::VARIANTS, &[Shape::Square, Shape::Circle]);
/// assert_eq!(Shape::Circle.name(), "Circle");
/// ```
#[macro_export]
macro_rules! described {
    (@describe) => {
        None
    };
    (@describe $desc:literal) => {
        Some($desc)
    };

    // Every variant has been consumed.
    (@munch
        head: [$($head:tt)*] name: $name:ident
        variants: [$($variants:tt)*]
        descs: [$(($dv:ident [$($dd:tt)*]))*]
        attrs: [] desc: []
        rest: []
    ) => {
        $($head)* $name {
            $($variants)*
        }

        impl $crate::enums::Described for $name {
            const NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [Self] = &[$(Self::$dv),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$dv => stringify!($dv)),*
                }
            }

            fn description(&self) -> Option<&'static str> {
                match self {
                    $(Self::$dv => $crate::described!(@describe $($dd)*)),*
                }
            }
        }
    };
    (@munch
        head: $head:tt name: $name:ident variants: $variants:tt descs: $descs:tt
        attrs: $attrs:tt desc: []
        rest: [#[describe($d:literal)] $($rest:tt)*]
    ) => {
        $crate::described!(@munch
            head: $head name: $name variants: $variants descs: $descs
            attrs: $attrs desc: [$d]
            rest: [$($rest)*]
        );
    };
    (@munch
        head: $head:tt name: $name:ident variants: $variants:tt descs: $descs:tt
        attrs: [$($attrs:tt)*] desc: $desc:tt
        rest: [#[$($attr:tt)*] $($rest:tt)*]
    ) => {
        $crate::described!(@munch
            head: $head name: $name variants: $variants descs: $descs
            attrs: [$($attrs)* #[$($attr)*]] desc: $desc
            rest: [$($rest)*]
        );
    };
    (@munch
        head: $head:tt name: $name:ident
        variants: [$($variants:tt)*] descs: [$($descs:tt)*]
        attrs: [$($attrs:tt)*] desc: $desc:tt
        rest: [$variant:ident $(, $($rest:tt)*)?]
    ) => {
        $crate::described!(@munch
            head: $head name: $name
            variants: [$($variants)* $($attrs)* $variant,]
            descs: [$($descs)* ($variant $desc)]
            attrs: [] desc: []
            rest: [$($($rest)*)?]
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::described!(@munch
            head: [$(#[$meta])* $vis enum] name: $name
            variants: [] descs: []
            attrs: [] desc: []
            rest: [$($body)*]
        );
    };
}
