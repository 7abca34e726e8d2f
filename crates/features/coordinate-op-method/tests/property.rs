use georeg_coordinate_op_method::CoordinateOpMethodData;
use georeg_kernel::class::ItemData;
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitized_parameters_are_unique_and_trimmed(
        parameters in proptest::collection::vec("[ P0-9]{0,4}", 0..12),
        formula in ".{0,20}",
    ) {
        let item = CoordinateOpMethodData { parameters, formula, ..CoordinateOpMethodData::default() };
        let once = item.sanitized();

        prop_assert_eq!(once.clone().sanitized(), once.clone());
        for (index, id) in once.parameters.iter().enumerate() {
            prop_assert!(!id.is_empty());
            prop_assert_eq!(id.trim(), id.as_str());
            prop_assert!(!once.parameters[..index].contains(id));
        }
    }
}
