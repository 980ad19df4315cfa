use super::*;

#[test]
fn can_create_spec_with_defaults() {
    let spec = ObjectiveSpec::with_defaults(3, None, None).unwrap();

    assert_eq!(spec.indices(), &[0, 1, 2]);
    assert_eq!(spec.epsilons(), &[DEFAULT_EPSILON; 3]);
    assert_eq!(spec.size(), 3);
}

#[test]
fn can_create_spec_with_default_epsilons_for_given_objectives() {
    let spec = ObjectiveSpec::with_defaults(4, Some(vec![3, 1]), None).unwrap();

    assert_eq!(spec.indices(), &[3, 1]);
    assert_eq!(spec.epsilons(), &[DEFAULT_EPSILON, DEFAULT_EPSILON]);
}

parameterized_test! {can_reject_invalid_spec, (field_count, indices, epsilons, expected_message), {
    can_reject_invalid_spec_impl(field_count, indices, epsilons, expected_message);
}}

can_reject_invalid_spec! {
    case01_epsilon_count: (2, Some(vec![0, 1]), Some(vec![0.1]), "number of epsilons (1) must match number of objectives (2)"),
    case02_out_of_bounds: (2, Some(vec![0, 2]), None, "objective column 2 exceeds input record bounds"),
    case03_zero_epsilon: (2, Some(vec![0]), Some(vec![0.]), "epsilon for objective 0 must be a positive number"),
    case04_negative_epsilon: (2, Some(vec![0, 1]), Some(vec![1., -1.]), "epsilon for objective 1 must be a positive number"),
    case05_nan_epsilon: (2, Some(vec![1]), Some(vec![Float::NAN]), "epsilon for objective 0 must be a positive number"),
    case06_no_objectives: (2, Some(vec![]), Some(vec![]), "at least one objective is required"),
    case07_no_fields: (0, None, None, "at least one objective is required"),
}

fn can_reject_invalid_spec_impl(
    field_count: usize,
    indices: Option<Vec<usize>>,
    epsilons: Option<Vec<Float>>,
    expected_message: &str,
) {
    let result = ObjectiveSpec::with_defaults(field_count, indices, epsilons);

    match result {
        Err(ArchiveError::Configuration(message)) => {
            assert!(message.starts_with(expected_message), "unexpected message: '{message}'")
        }
        other => panic!("expected configuration error, got: {other:?}"),
    }
}

#[test]
fn can_validate_width() {
    let spec = ObjectiveSpec::new(vec![0, 4], vec![1., 1.]).unwrap();

    assert!(spec.validate_width(5).is_ok());
    assert!(spec.validate_width(4).is_err());
}

#[test]
fn can_calculate_box_index() {
    let spec = ObjectiveSpec::new(vec![0, 1], vec![0.5, 2.]).unwrap();

    assert_eq!(spec.box_index(1.2, 0), 2.);
    assert_eq!(spec.box_index(1.2, 1), 0.);
    assert_eq!(spec.box_index(-0.1, 0), -1.);
    assert_eq!(spec.box_index(4., 1), 2.);
}

#[test]
fn can_get_box_of_solution_using_column_mapping() {
    let spec = ObjectiveSpec::new(vec![2, 0], vec![1., 10.]).unwrap();
    let solution = Solution::new(vec![25., 100., 3.5]);

    assert_eq!(spec.box_of(&solution).coordinates(), vec![3., 2.]);
}

#[test]
fn can_keep_far_boxes_distinct_with_default_epsilon() {
    let spec = ObjectiveSpec::new(vec![0], vec![DEFAULT_EPSILON]).unwrap();

    let near = spec.box_of(&Solution::new(vec![1e11]));
    let far = spec.box_of(&Solution::new(vec![2e11]));

    assert_ne!(near, far);
    assert!(far.coordinates()[0] > near.coordinates()[0]);
}

#[test]
fn can_treat_negative_zero_box_as_zero_box() {
    let spec = ObjectiveSpec::new(vec![0], vec![1.]).unwrap();

    assert_eq!(spec.box_of(&Solution::new(vec![-0.])), spec.box_of(&Solution::new(vec![0.5])));
}
