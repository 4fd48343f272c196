use std::fmt::{self, Display};

/// A workflow command line understood by the Actions runner, rendered as
/// `::name key=value,key=value::message`.
#[derive(Debug)]
pub struct Command<'a> {
    name: &'a str,
    properties: Vec<(&'a str, &'a str)>,
    message: &'a str,
}

impl<'a> Command<'a> {
    pub fn new(name: &'a str, message: &'a str) -> Self {
        Command {
            name,
            properties: vec![],
            message,
        }
    }

    pub fn property(mut self, key: &'a str, value: &'a str) -> Self {
        self.properties.push((key, value));
        self
    }

    /// Writes the command to stdout, where the runner picks it up
    pub fn issue(&self) {
        println!("{}", self);
    }
}

impl Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;

        if !self.properties.is_empty() {
            let properties = self
                .properties
                .iter()
                .map(|(key, value)| format!("{}={}", key, escape_property(value)))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, " {}", properties)?;
        }

        write!(f, "::{}", escape_data(self.message))
    }
}

pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
