/// Cross-module checks: `Optional` as a struct field next to plain `Option`.
#[cfg(test)]
mod tests {
    use crate::option::Optional;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        nickname: Optional<String>,
        #[serde(default, skip_serializing_if = "Optional::is_default_for_serialization")]
        age: Optional<u32>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PlainProfile {
        name: String,
        nickname: Option<String>,
        age: Option<u32>,
    }

    #[test]
    fn test_absent_field_is_null_or_omitted() {
        let profile = Profile {
            name: "julius".to_string(),
            nickname: Optional::none(),
            age: Optional::none(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value, json!({ "name": "julius", "nickname": null }));
    }

    #[test]
    fn test_present_field_is_bare_value() {
        let profile = Profile {
            name: "julius".to_string(),
            nickname: Optional::some("jc".to_string()),
            age: Optional::some(0),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value, json!({ "name": "julius", "nickname": "jc", "age": 0 }));
    }

    #[test]
    fn test_wire_compatible_with_option() {
        let plain = PlainProfile {
            name: "julius".to_string(),
            nickname: None,
            age: Some(30),
        };
        let text = serde_json::to_string(&plain).unwrap();
        let profile: Profile = serde_json::from_str(&text).unwrap();
        assert_eq!(profile.nickname, Optional::none());
        assert_eq!(profile.age, Optional::some(30));

        let back: PlainProfile = serde_json::from_str(&serde_json::to_string(&profile).unwrap()).unwrap();
        assert_eq!(back, plain);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let profile: Profile = serde_json::from_str(r#"{"name":"julius","nickname":null}"#).unwrap();
        assert!(profile.age.is_absent());
    }

    #[test]
    fn test_field_type_mismatch_fails() {
        let result: Result<Profile, _> =
            serde_json::from_str(r#"{"name":"julius","nickname":null,"age":"old"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_collection_of_optionals() {
        let values: Vec<Optional<i32>> = serde_json::from_str("[1, null, 3]").unwrap();
        assert_eq!(values, vec![Optional::some(1), Optional::none(), Optional::some(3)]);
        assert_eq!(serde_json::to_string(&values).unwrap(), "[1,null,3]");
    }
}
