/// Types that can be read from the text of a property.
///
/// `from_value` never fails loudly; text that does not describe a `Self` yields `None`.
pub trait FromValue: Sized {
    fn from_value(text: &str) -> Option<Self>;
}

/// Types that can be stored as the text of a property.
pub trait ToValue {
    fn to_value(&self) -> String;
}

impl FromValue for String {
    fn from_value(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> String {
        self.clone()
    }
}

impl ToValue for str {
    fn to_value(&self) -> String {
        self.to_string()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> String {
        (**self).to_value()
    }
}

impl FromValue for bool {
    fn from_value(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> String {
        self.to_string()
    }
}

impl FromValue for char {
    fn from_value(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl ToValue for char {
    fn to_value(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_from_str_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_from_str_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Implements [`FromValue`] and [`ToValue`] for a fieldless enum.
///
/// Variants are written by name. Reading accepts a variant name (ASCII case-insensitive) or the
/// decimal text of a declared discriminant; any other integer is rejected.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Level {
///     Low = 1,
///     High = 2,
/// }
///
/// inidoc::value_enum!(Level { Low = 1, High = 2 });
///
/// use inidoc::{FromValue, ToValue};
/// assert_eq!(Level::from_value("high"), Some(Level::High));
/// assert_eq!(Level::from_value("1"), Some(Level::Low));
/// assert_eq!(Level::from_value("3"), None);
/// assert_eq!(Level::High.to_value(), "High");
/// ```
#[macro_export]
macro_rules! value_enum {
    ($ty:ident { $($variant:ident = $disc:expr),+ $(,)? }) => {
        impl $crate::FromValue for $ty {
            fn from_value(text: &str) -> ::core::option::Option<Self> {
                $(
                    if text.eq_ignore_ascii_case(stringify!($variant)) {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+
                let number: i64 = text.parse().ok()?;
                $(
                    if number == $disc {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }

        impl $crate::ToValue for $ty {
            fn to_value(&self) -> ::std::string::String {
                match self {
                    $($ty::$variant => stringify!($variant).to_string(),)+
                }
            }
        }
    };
}
