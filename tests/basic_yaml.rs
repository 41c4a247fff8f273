use twofy::document::decoder::decode_str;
use twofy::document::value::{Value, YamlNumber};

#[test]
fn test_decode_simple_yaml() {
    let yaml = r#"
name: Test
count: 42
enabled: true
"#;

    let value = decode_str(yaml)
        .expect("Failed to parse YAML")
        .expect("document missing");

    match &value {
        Value::Mapping(obj) => {
            assert_eq!(obj.len(), 3);

            let name = obj.get("name").expect("name field missing");
            assert_eq!(name, &Value::String("Test".to_string()));

            let count = obj.get("count").expect("count field missing");
            match count {
                Value::Number(n) => assert_eq!(n.as_f64(), 42.0),
                _ => panic!("count should be number"),
            }

            let enabled = obj.get("enabled").expect("enabled field missing");
            assert_eq!(enabled, &Value::Boolean(true));
        }
        _ => panic!("Root should be mapping"),
    }
}

#[test]
fn test_decode_nested_structures() {
    let yaml = r#"
server:
  host: localhost
  ports:
    - 80
    - 443
  tls:
    enabled: false
    ratio: 0.5
"#;

    let value = decode_str(yaml).unwrap().unwrap();
    let server = value.get("server").expect("server missing");

    assert_eq!(
        server.get("ports"),
        Some(&Value::Sequence(vec![
            Value::Number(YamlNumber::Integer(80)),
            Value::Number(YamlNumber::Integer(443)),
        ]))
    );
    let tls = server.get("tls").unwrap();
    assert_eq!(tls.get("ratio"), Some(&Value::Number(YamlNumber::Float(0.5))));
}

#[test]
fn test_decode_block_scalars() {
    let yaml = "script: |\n  echo one\n  echo two\nfolded: >\n  a\n  b\n";
    let value = decode_str(yaml).unwrap().unwrap();
    assert_eq!(
        value.get("script"),
        Some(&Value::String("echo one\necho two\n".to_string()))
    );
    assert_eq!(value.get("folded"), Some(&Value::String("a b\n".to_string())));
}

#[test]
fn test_decode_top_level_sequence() {
    let value = decode_str("- a\n- b\n").unwrap().unwrap();
    assert_eq!(
        value,
        Value::Sequence(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn test_decode_quoted_scalars_stay_strings() {
    let value = decode_str("version: \"1.0\"\nflag: 'true'\n").unwrap().unwrap();
    assert_eq!(value.get("version"), Some(&Value::from("1.0")));
    assert_eq!(value.get("flag"), Some(&Value::from("true")));
}
