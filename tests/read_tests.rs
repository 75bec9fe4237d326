use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: i64,
}

const SAMPLE: &str = "\
person:
  name: John Doe
  age: 30
settings:
  theme: dark
  notifications: true
";

#[test]
fn test_read_whole_struct() {
    let person: Person = yamledit::read(SAMPLE, "person").expect("Failed to read person node");
    assert_eq!(
        person,
        Person {
            name: "John Doe".to_string(),
            age: 30,
        }
    );
}

#[test]
fn test_read_string() {
    let name: String = yamledit::read(SAMPLE, "person.name").expect("Failed to read person.name");
    assert_eq!(name, "John Doe");
}

#[test]
fn test_read_integer() {
    let age: i64 = yamledit::read(SAMPLE, "person.age").expect("Failed to read person.age");
    assert_eq!(age, 30);
}

#[test]
fn test_read_boolean() {
    let notifications: bool = yamledit::read(SAMPLE, "settings.notifications")
        .expect("Failed to read settings.notifications");
    assert!(notifications);
}

#[test]
fn test_read_into_generic_value() {
    let settings: serde_yaml::Value =
        yamledit::read(SAMPLE, "settings").expect("Failed to read settings node");

    match settings {
        serde_yaml::Value::Mapping(map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(
                map.get("theme"),
                Some(&serde_yaml::Value::String("dark".to_string()))
            );
        }
        other => panic!("settings should be a mapping, got {:?}", other),
    }
}

#[test]
fn test_read_node_on_parsed_tree() {
    let tree = yamledit::parse_yaml(SAMPLE).expect("Failed to parse sample");

    let theme: String =
        yamledit::read_node(&tree, "settings.theme").expect("Failed to read settings.theme");
    assert_eq!(theme, "dark");

    // The tree is untouched by reads and can serve further lookups.
    let age: i64 = yamledit::read_node(&tree, "person.age").expect("Failed to read person.age");
    assert_eq!(age, 30);
}
