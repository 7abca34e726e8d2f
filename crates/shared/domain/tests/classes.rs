use georeg_domain::classes::{
    self, COORDINATE_SYSTEM_TARGETS, ClassSet, HORIZONTAL_CRS_TARGETS, VERTICAL_CRS_TARGETS,
};

#[test]
fn class_ids_match_registry_strings() {
    assert_eq!(classes::CRS_COMPOUND, "crs--compound");
    assert_eq!(classes::DATUM_GEODETIC, "datums--geodetic");
    assert_eq!(classes::COORDINATE_OP_METHOD, "coordinate-op-method");
    assert_eq!(classes::COORDINATE_SYS_AXIS, "coordinate-sys-axis");
}

#[test]
fn restricted_sets_admit_only_their_members() {
    assert!(HORIZONTAL_CRS_TARGETS.admits("crs--projected"));
    assert!(HORIZONTAL_CRS_TARGETS.admits("crs--geodetic"));
    assert!(!HORIZONTAL_CRS_TARGETS.admits("crs--vertical"));

    assert!(VERTICAL_CRS_TARGETS.admits("crs--engineering"));
    assert!(!VERTICAL_CRS_TARGETS.admits("crs--projected"));
    assert!(!VERTICAL_CRS_TARGETS.admits("unknown-class"));

    assert_eq!(
        COORDINATE_SYSTEM_TARGETS.ids().collect::<Vec<_>>(),
        vec![
            "coordinate-sys--cartesian",
            "coordinate-sys--ellipsoidal",
            "coordinate-sys--spherical",
            "coordinate-sys--vertical",
        ]
    );
}

#[test]
fn unknown_ids_map_to_the_empty_set() {
    assert!(ClassSet::from("not-a-class").is_empty());
    assert!(!ClassSet::all().admits(""));
    assert_eq!(ClassSet::from("datums--vertical"), ClassSet::DATUM_VERTICAL);
}
