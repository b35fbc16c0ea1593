//! Named option declarations.

/// A declared command line option.
///
/// An option is looked up under its short prefix (`-u`) and/or its long
/// prefix (`--user`); the `name` is how callers retrieve the parsed value
/// from the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub short: Option<String>,
    pub long: Option<String>,
    pub required: bool,
    pub default: Option<String>,
}

impl Argument {
    /// Declare an option under `name`, with no prefixes, optional, and no
    /// default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            required: false,
            default: None,
        }
    }

    /// Set the short prefix, without the leading dash.
    pub fn short(mut self, prefix: impl Into<String>) -> Self {
        self.short = Some(prefix.into());
        self
    }

    /// Set the long prefix, without the leading dashes.
    pub fn long(mut self, prefix: impl Into<String>) -> Self {
        self.long = Some(prefix.into());
        self
    }

    /// Mark the option as required. A default value satisfies the
    /// requirement when the option is absent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the value used when the option is absent from argv.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_starts_optional_with_no_prefixes() {
        let arg = Argument::named("user");
        assert_eq!(arg.name, "user");
        assert_eq!(arg.short, None);
        assert_eq!(arg.long, None);
        assert!(!arg.required);
        assert_eq!(arg.default, None);
    }

    #[test]
    fn builder_style_declaration() {
        let arg = Argument::named("iterations")
            .short("i")
            .long("iterations")
            .required()
            .default_value("1");

        assert_eq!(arg.short.as_deref(), Some("i"));
        assert_eq!(arg.long.as_deref(), Some("iterations"));
        assert!(arg.required);
        assert_eq!(arg.default.as_deref(), Some("1"));
    }
}
