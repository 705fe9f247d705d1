//! Dotted-query classification.

use crate::error::{Error, Result};
use crate::model::Kind;

/// A decomposed documentation query.
///
/// A one-segment query is a class when its first character is uppercase and
/// a function otherwise; the empty string targets the module docstring; a
/// two-segment query is a method. More segments fail with a format error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub class_name: String,
    pub function_name: String,
    pub kind: Kind,
}

impl Query {
    pub fn parse(query: &str) -> Result<Self> {
        let members: Vec<&str> = query.split('.').collect();
        match members.as_slice() {
            [""] => Ok(Query {
                class_name: String::new(),
                function_name: String::new(),
                kind: Kind::Module,
            }),
            [name] => {
                if name.chars().next().is_some_and(char::is_uppercase) {
                    Ok(Query {
                        class_name: (*name).to_string(),
                        function_name: String::new(),
                        kind: Kind::Class,
                    })
                } else {
                    Ok(Query {
                        class_name: String::new(),
                        function_name: (*name).to_string(),
                        kind: Kind::Function,
                    })
                }
            }
            [class_name, function_name] => Ok(Query {
                class_name: (*class_name).to_string(),
                function_name: (*function_name).to_string(),
                kind: Kind::Method,
            }),
            _ => Err(Error::MalformedQuery {
                query: query.to_string(),
            }),
        }
    }
}
