use apidts_codegen::{TypeMap, model::FieldDescriptor};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TypegenTest {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub expected: Option<TypeMap>,
    /// Expected error message, for fixtures describing malformed docs
    #[serde(default)]
    pub error: Option<String>,
}

fn run_typegen_test(test_name: &str, test: TypegenTest) {
    let res = apidts_codegen::generate_types(&test.fields, &test.type_name);

    match (res, test.expected, test.error) {
        (Ok(types), Some(expected), None) => {
            assert_eq!(types, expected, "{test_name}: synthesized types differ");
            assert_eq!(
                types.keys().next(),
                Some(&test.type_name),
                "{test_name}: root type should come first"
            );

            // a second run over the same input yields the same types
            let again = apidts_codegen::generate_types(&test.fields, &test.type_name)
                .expect("second run failed");
            assert_eq!(types, again, "{test_name}: synthesis is not deterministic");
        }
        (Err(e), None, Some(message)) => {
            assert_eq!(e.to_string(), message, "{test_name}: unexpected error");
        }
        (res, expected, error) => panic!(
            "{test_name}: got {res:?}, expected types {expected:?} / error {error:?}"
        ),
    }
}

macro_rules! typegen_test {
    ($test_name:ident, $yml_str:expr) => {
        #[test]
        fn $test_name() {
            let test: TypegenTest =
                serde_yaml::from_str($yml_str).expect("Failed to parse test YAML");
            run_typegen_test(stringify!($test_name), test);
        }
    };
}

typegen_test!(
    test_flat_fields,
    include_str!("./fixtures/typegen/flat_fields.yml")
);
typegen_test!(
    test_object_array_continuation,
    include_str!("./fixtures/typegen/object_array_continuation.yml")
);
typegen_test!(
    test_nested_objects,
    include_str!("./fixtures/typegen/nested_objects.yml")
);
typegen_test!(
    test_skipped_keys,
    include_str!("./fixtures/typegen/skipped_keys.yml")
);
typegen_test!(
    test_orphan_continuation,
    include_str!("./fixtures/typegen/orphan_continuation.yml")
);
typegen_test!(
    test_missing_definition,
    include_str!("./fixtures/typegen/missing_definition.yml")
);
