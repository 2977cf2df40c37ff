//! Built-in teaching topics

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key selecting a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopicKey {
    #[default]
    Pointers,
    Recursion,
}

impl TopicKey {
    pub const ALL: [TopicKey; 2] = [TopicKey::Pointers, TopicKey::Recursion];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicKey::Pointers => "pointers",
            TopicKey::Recursion => "recursion",
        }
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic '{0}' (expected 'pointers' or 'recursion')")]
pub struct UnknownTopic(pub String);

impl FromStr for TopicKey {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pointers" => Ok(TopicKey::Pointers),
            "recursion" => Ok(TopicKey::Recursion),
            _ => Err(UnknownTopic(s.to_string())),
        }
    }
}

/// A read-only topic definition
#[derive(Debug)]
pub struct Topic {
    pub key: TopicKey,
    pub title: &'static str,
    pub description: &'static str,
    pub default_source: &'static str,
}

const POINTERS_SOURCE: &str = r#"#include <stdio.h>

int main() {
    int x = 25;
    int *ptr = &x;

    printf("Value of x: %d\n", x);
    printf("Address of x: %p\n", &x);
    printf("Pointer ptr: %p\n", ptr);
    printf("Dereferenced ptr: %d\n", *ptr);

    return 0;
}"#;

const RECURSION_SOURCE: &str = r#"#include <stdio.h>

int factorial(int n) {
    if (n <= 1) return 1;
    return n * factorial(n - 1);
}

int main() {
    int result = factorial(5);
    printf("Factorial of 5: %d\n", result);
    return 0;
}"#;

static TOPICS: [Topic; 2] = [
    Topic {
        key: TopicKey::Pointers,
        title: "Pointers & Memory",
        description: "Understand memory addresses and how pointers reference data",
        default_source: POINTERS_SOURCE,
    },
    Topic {
        key: TopicKey::Recursion,
        title: "Recursion",
        description: "Master recursive functions and understand the call stack",
        default_source: RECURSION_SOURCE,
    },
];

/// Look up the definition for `key`
pub fn lookup(key: TopicKey) -> &'static Topic {
    match key {
        TopicKey::Pointers => &TOPICS[0],
        TopicKey::Recursion => &TOPICS[1],
    }
}

/// Every topic, in menu order
pub fn all() -> &'static [Topic] {
    &TOPICS
}
