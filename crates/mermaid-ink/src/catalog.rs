//! Built-in example diagrams, one per diagram type.

/// Example sources keyed by diagram type, in listing order.
const EXAMPLES: [(&str, &str); 7] = [
    (
        "flowchart",
        "flowchart TD
    A[Start] --> B{Is it?}
    B -->|Yes| C[OK]
    C --> D[Rethink]
    D --> B
    B ---->|No| E[End]",
    ),
    (
        "sequence",
        "sequenceDiagram
    participant Alice
    participant Bob
    Alice->>John: Hello John, how are you?
    loop Healthcheck
        John->>John: Fight against hypochondria
    end
    Note right of John: Rational thoughts <br/>prevail!
    John-->>Alice: Great!
    John->>Bob: How about you?
    Bob-->>John: Jolly good!",
    ),
    (
        "gantt",
        "gantt
    title A Gantt Diagram
    dateFormat  YYYY-MM-DD
    section Section
    A task           :a1, 2014-01-01, 30d
    Another task     :after a1  , 20d
    section Another
    Task in sec      :2014-01-12  , 12d
    another task      : 24d",
    ),
    (
        "pie",
        r#"pie title Pets adopted by volunteers
    "Dogs" : 386
    "Cats" : 85
    "Rats" : 15"#,
    ),
    (
        "gitgraph",
        "gitgraph
    commit
    commit
    branch develop
    checkout develop
    commit
    commit
    checkout main
    merge develop
    commit
    commit",
    ),
    (
        "mindmap",
        "mindmap
  root((mindmap))
    Origins
      Long history
      ::icon(fa fa-book)
      Popularisation
        British popular psychology author Tony Buzan
    Research
      On effectiveness<br/>and features
      On Automatic creation
        Uses
            Creative techniques
            Strategic planning
            Argument mapping
    Tools
      Pen and paper
      Mermaid",
    ),
    (
        "class",
        "classDiagram
    class Animal {
        +String name
        +int age
        +makeSound()
    }
    class Dog {
        +String breed
        +bark()
    }
    class Cat {
        +String color
        +meow()
    }
    Animal <|-- Dog
    Animal <|-- Cat",
    ),
];

/// Look up the example for a diagram type, ignoring case.
#[must_use]
pub fn example(diagram_type: &str) -> Option<&'static str> {
    let key = diagram_type.to_lowercase();
    EXAMPLES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, source)| *source)
}

/// Known diagram types, in listing order.
pub fn example_types() -> impl Iterator<Item = &'static str> {
    EXAMPLES.iter().map(|(name, _)| *name)
}

/// Return the example for a diagram type, or a message listing known types.
#[must_use]
pub fn lookup_example(diagram_type: &str) -> String {
    match example(diagram_type) {
        Some(source) => source.to_owned(),
        None => {
            let available = example_types().collect::<Vec<_>>().join(", ");
            format!("Unknown diagram type '{diagram_type}'. Available types: {available}")
        }
    }
}
