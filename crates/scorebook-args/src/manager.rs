//! The option manager: declarations in, parsed values out.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::argument::Argument;
use crate::error::ArgsError;
use crate::parser;

/// Holds declared options and, after [`Manager::parse`], their values.
#[derive(Debug, Default)]
pub struct Manager {
    arguments: Vec<Argument>,
    values: HashMap<String, String>,
    defaulted: HashSet<String>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option. Re-declaring a name replaces the previous
    /// declaration.
    pub fn add(&mut self, argument: Argument) -> &mut Self {
        if let Some(existing) = self
            .arguments
            .iter_mut()
            .find(|existing| existing.name == argument.name)
        {
            *existing = argument;
        } else {
            self.arguments.push(argument);
        }
        self
    }

    /// Declare several options at once.
    pub fn add_many(&mut self, arguments: impl IntoIterator<Item = Argument>) -> &mut Self {
        for argument in arguments {
            self.add(argument);
        }
        self
    }

    /// Parse an argv token stream (callers typically pass
    /// `std::env::args().skip(1)`).
    ///
    /// Absent options fall back to their default value; required options
    /// with neither a value nor a default fail the parse, all of them listed
    /// in the error. No values are stored on failure.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<(), ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = argv.into_iter().map(Into::into).collect();
        let found = parser::scan(&tokens);

        let mut values = HashMap::new();
        let mut defaulted = HashSet::new();
        let mut missing = Vec::new();

        for argument in &self.arguments {
            let hit = argument
                .short
                .as_deref()
                .and_then(|prefix| found.get(prefix))
                .or_else(|| argument.long.as_deref().and_then(|prefix| found.get(prefix)));

            if let Some(value) = hit {
                values.insert(argument.name.clone(), value.clone());
            } else if let Some(default) = &argument.default {
                values.insert(argument.name.clone(), default.clone());
                defaulted.insert(argument.name.clone());
            } else if argument.required {
                missing.push(argument.name.clone());
            }
        }

        if !missing.is_empty() {
            return Err(ArgsError::MissingRequired(missing));
        }

        debug!(options = values.len(), "parsed command line options");
        self.values = values;
        self.defaulted = defaulted;
        Ok(())
    }

    /// The parsed value for `name`, or `None` when the option was never
    /// given and has no default.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether `name` fell back to its default value during the last parse.
    pub fn defaulted(&self, name: &str) -> bool {
        self.defaulted.contains(name)
    }

    /// All declared options, in declaration order.
    pub fn all(&self) -> &[Argument] {
        &self.arguments
    }
}
