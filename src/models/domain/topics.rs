use serde::Serialize;

use crate::models::domain::taxonomy::Language;

/// A subject area scoped to a single language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
}

const fn topic(id: &'static str, name: &'static str) -> Topic {
    Topic { id, name }
}

const PYTHON_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and data types"),
    topic("lists_arrays", "Lists and arrays"),
    topic("dictionaries", "Dictionaries"),
    topic("functions", "Functions"),
    topic("closures", "Closures"),
    topic("decorators", "Decorators"),
    topic("generators", "Generators"),
    topic("classes_oop", "Classes and OOP"),
    topic("exceptions", "Exception handling"),
    topic("context_managers", "Context managers"),
    topic("async_await", "Asynchronous programming"),
];

const JAVASCRIPT_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and types"),
    topic("arrays", "Arrays"),
    topic("objects", "Objects"),
    topic("functions", "Functions"),
    topic("closures", "Closures"),
    topic("this_binding", "Execution context (this)"),
    topic("prototypes", "Prototypes"),
    topic("classes", "Classes (ES6+)"),
    topic("promises_async", "Promises and async/await"),
    topic("event_loop", "Event loop"),
    topic("destructuring", "Destructuring"),
    topic("modules", "Modules (ES6+)"),
];

const GO_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and types"),
    topic("slices", "Slices"),
    topic("maps", "Maps"),
    topic("functions", "Functions"),
    topic("methods", "Methods"),
    topic("interfaces", "Interfaces"),
    topic("goroutines", "Goroutines"),
    topic("channels", "Channels"),
    topic("select", "Select statement"),
    topic("defer_panic_recover", "Defer, panic, recover"),
    topic("pointers", "Pointers"),
    topic("structs", "Structs"),
];

const JAVA_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and types"),
    topic("arrays_lists", "Arrays and lists"),
    topic("collections", "Collections (Set, Map)"),
    topic("methods", "Methods"),
    topic("classes_objects", "Classes and objects"),
    topic("inheritance", "Inheritance"),
    topic("interfaces", "Interfaces"),
    topic("generics", "Generics"),
    topic("exceptions", "Exceptions"),
    topic("streams", "Streams API"),
    topic("lambda_expressions", "Lambda expressions"),
    topic("concurrency", "Concurrency"),
];

const CPP_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and types"),
    topic("pointers_references", "Pointers and references"),
    topic("arrays_vectors", "Arrays and vectors"),
    topic("functions", "Functions"),
    topic("classes_objects", "Classes and objects"),
    topic("inheritance", "Inheritance"),
    topic("templates", "Templates"),
    topic("smart_pointers", "Smart pointers"),
    topic("stl", "STL containers and algorithms"),
    topic("move_semantics", "Move semantics"),
    topic("lambda", "Lambda expressions"),
    topic("multithreading", "Multithreading"),
];

const RUST_TOPICS: &[Topic] = &[
    topic("variables_types", "Variables and types"),
    topic("ownership", "Ownership"),
    topic("borrowing", "Borrowing"),
    topic("lifetimes", "Lifetimes"),
    topic("vectors", "Vectors"),
    topic("hashmaps", "HashMap"),
    topic("functions", "Functions"),
    topic("structs", "Structs"),
    topic("enums", "Enums"),
    topic("pattern_matching", "Pattern matching"),
    topic("error_handling", "Error handling (Result, Option)"),
    topic("concurrency", "Concurrency"),
];

const TYPESCRIPT_TOPICS: &[Topic] = &[
    topic("types", "Types"),
    topic("interfaces", "Interfaces"),
    topic("generics", "Generics"),
    topic("unions_intersections", "Union and intersection types"),
    topic("type_guards", "Type guards"),
    topic("decorators", "Decorators"),
    topic("utility_types", "Utility types"),
    topic("modules", "Modules"),
    topic("async_promises", "Asynchronous code"),
    topic("classes", "Classes"),
    topic("namespaces", "Namespaces"),
];

/// Topics registered for `language`, in catalog order.
pub fn topics_for(language: Language) -> &'static [Topic] {
    match language {
        Language::Python => PYTHON_TOPICS,
        Language::JavaScript => JAVASCRIPT_TOPICS,
        Language::Go => GO_TOPICS,
        Language::Java => JAVA_TOPICS,
        Language::Cpp => CPP_TOPICS,
        Language::Rust => RUST_TOPICS,
        Language::TypeScript => TYPESCRIPT_TOPICS,
    }
}

/// Same as [`topics_for`] but keyed by the raw language id. Unknown ids have no topics.
pub fn topics_for_id(language_id: &str) -> &'static [Topic] {
    Language::from_id(language_id).map(topics_for).unwrap_or(&[])
}

pub fn find_topic(language: Language, topic_id: &str) -> Option<&'static Topic> {
    topics_for(language).iter().find(|t| t.id == topic_id)
}

pub fn is_valid_topic(language_id: &str, topic_id: &str) -> bool {
    topics_for_id(language_id).iter().any(|t| t.id == topic_id)
}
