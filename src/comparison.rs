use std::borrow::Cow;

/// Rule deciding whether two names refer to the same section or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameComparison {
    #[default]
    CaseSensitive,
    IgnoreCase,
}

impl NameComparison {
    /// Lookup key for `name`. Two names are equal under this rule iff their keys are equal.
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::CaseSensitive => Cow::Borrowed(name),
            Self::IgnoreCase => {
                if name.chars().any(char::is_uppercase) {
                    Cow::Owned(name.to_lowercase())
                } else {
                    Cow::Borrowed(name)
                }
            }
        }
    }

    pub fn names_equal(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }
}
