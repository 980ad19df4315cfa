use super::*;

#[test]
fn can_read_config_from_json() {
    let json = r#"
    {
        "objectives": [2, 0],
        "epsilons": [0.5, 0.1],
        "delimiter": ",",
        "printOnlyObjectives": true,
        "precision": 4,
        "parallelThreshold": 128
    }
    "#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(
        config,
        Config {
            objectives: Some(vec![2, 0]),
            epsilons: Some(vec![0.5, 0.1]),
            delimiter: Some(",".to_string()),
            print_only_objectives: Some(true),
            precision: Some(4),
            parallel_threshold: Some(128),
        }
    );
    assert_eq!(config.delimiter().unwrap(), b',');
    assert_eq!(config.projection(), Projection::ObjectivesOnly);
    assert_eq!(config.precision(), 4);
}

#[test]
fn can_reject_unknown_config_keys() {
    let result = read_config(BufReader::new(r#"{ "epsilon": [0.1] }"#.as_bytes()));

    assert!(matches!(result, Err(ArchiveError::Configuration(_))));
}

#[test]
fn can_use_defaults() {
    let config = Config::default();

    assert_eq!(config.delimiter().unwrap(), b' ');
    assert_eq!(config.precision(), DEFAULT_PRECISION);
    assert_eq!(config.projection(), Projection::Full);
    assert!(config.validate().is_ok());

    let spec = config.create_objective_spec(2).unwrap();
    assert_eq!(spec.indices(), &[0, 1]);
    assert_eq!(spec.epsilons(), &[DEFAULT_EPSILON, DEFAULT_EPSILON]);
}

#[test]
fn can_override_config_values() {
    let file_config = Config { objectives: Some(vec![0]), precision: Some(3), ..Config::default() };
    let args_config = Config { objectives: Some(vec![1, 2]), delimiter: Some("\t".to_string()), ..Config::default() };

    let config = file_config.override_with(args_config);

    assert_eq!(config.objectives, Some(vec![1, 2]));
    assert_eq!(config.precision, Some(3));
    assert_eq!(config.delimiter().unwrap(), b'\t');
}

parameterized_test! {can_validate_config, (config, is_valid), {
    assert_eq!(config.validate().is_ok(), is_valid);
}}

can_validate_config! {
    case01_matching_epsilons: (Config { objectives: Some(vec![0, 1]), epsilons: Some(vec![0.1, 0.2]), ..Config::default() }, true),
    case02_epsilon_mismatch: (Config { objectives: Some(vec![0, 1]), epsilons: Some(vec![0.1]), ..Config::default() }, false),
    case03_only_objectives: (Config { objectives: Some(vec![3]), ..Config::default() }, true),
    case04_negative_epsilon: (Config { epsilons: Some(vec![0.1, -0.2]), ..Config::default() }, false),
    case05_long_delimiter: (Config { delimiter: Some("::".to_string()), ..Config::default() }, false),
    case06_empty_delimiter: (Config { delimiter: Some(String::new()), ..Config::default() }, false),
}

#[test]
fn can_create_environment_with_parallel_threshold() {
    let config = Config { parallel_threshold: Some(10), ..Config::default() };

    let environment = config.create_environment(std::sync::Arc::new(|_: &str| {}));

    assert!(!environment.is_parallel_for(9));
    assert!(environment.is_parallel_for(10));
}
