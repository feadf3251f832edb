use super::*;

// =============================================================
// Province index
// =============================================================

#[test]
fn every_province_has_cities() {
    for province in Province::ALL {
        assert!(!province.cities().is_empty(), "{province} has no cities");
        assert!(province.cities().len() <= 10, "{province} has too many cities");
    }
}

#[test]
fn islamabad_has_exactly_one_city() {
    assert_eq!(Province::IslamabadCapitalTerritory.cities(), &["Islamabad"]);
}

#[test]
fn city_lists_keep_display_order() {
    assert_eq!(Province::Sindh.cities()[0], "Karachi");
    assert_eq!(Province::Punjab.cities()[0], "Lahore");
    assert_eq!(Province::Punjab.cities().last(), Some(&"Gujrat"));
}

#[test]
fn available_cities_empty_without_province() {
    assert!(available_cities(None).is_empty());
    assert_eq!(available_cities(Some(Province::Balochistan))[0], "Quetta");
}

#[test]
fn province_names_round_trip_through_from_str() {
    for province in Province::ALL {
        assert_eq!(province.name().parse::<Province>(), Ok(province));
    }
}

#[test]
fn province_from_str_rejects_unknown_and_empty() {
    let err = "Atlantis".parse::<Province>().unwrap_err();
    assert_eq!(err.kind, "province");
    assert_eq!(err.value, "Atlantis");
    assert!("".parse::<Province>().is_err());
    assert!("sindh".parse::<Province>().is_err());
}

#[test]
fn province_serializes_to_display_name() {
    assert_eq!(
        serde_json::to_value(Province::AzadJammuKashmir).unwrap(),
        serde_json::json!("Azad Jammu & Kashmir")
    );
    let parsed: Province = serde_json::from_value(serde_json::json!("Khyber Pakhtunkhwa")).unwrap();
    assert_eq!(parsed, Province::KhyberPakhtunkhwa);
}

// =============================================================
// Gender
// =============================================================

#[test]
fn gender_defaults_to_prefer_not_to_say() {
    assert_eq!(Gender::default(), Gender::PreferNotToSay);
}

#[test]
fn gender_values_match_serde_names() {
    for gender in Gender::ALL {
        assert_eq!(serde_json::to_value(gender).unwrap(), serde_json::json!(gender.value()));
        assert_eq!(gender.value().parse::<Gender>(), Ok(gender));
    }
}

#[test]
fn gender_labels() {
    assert_eq!(Gender::PreferNotToSay.label(), "Prefer Not to Say");
    assert_eq!(Gender::Male.label(), "Male");
}

#[test]
fn unknown_option_message_names_kind() {
    let err = "robot".parse::<Gender>().unwrap_err();
    assert_eq!(err.to_string(), "unknown gender: \"robot\"");
}
