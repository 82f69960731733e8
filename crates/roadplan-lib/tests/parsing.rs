use roadplan_lib::{parse_input, Criterion, Error};

const SAMPLE_INPUT: &str = "\
[CITIES]
1: Arlen
2: Basel
3: Corin

[ROADS]
1-2: 10,1,8
1-3: 2,4,3
3-2: 2,4,3

[REQUESTS]
Arlen -> Basel | LTC
Basel -> Basel | T
";

#[test]
fn parses_all_three_sections() {
    let (network, requests) = parse_input(SAMPLE_INPUT).expect("valid input");

    assert_eq!(network.num_locations(), 3);
    assert_eq!(network.location_id_by_name("Corin"), Some(3));
    assert_eq!(network.neighbours(1).len(), 2);

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].origin, "Arlen");
    assert_eq!(requests[0].destination, "Basel");
    assert_eq!(
        requests[0].priorities,
        vec![Criterion::Length, Criterion::Time, Criterion::Cost]
    );
    assert_eq!(requests[1].priorities, vec![Criterion::Time]);
}

#[test]
fn roads_are_inserted_as_mirrored_arcs() {
    let (network, _) = parse_input(SAMPLE_INPUT).expect("valid input");

    let forward = network
        .neighbours(1)
        .iter()
        .find(|road| road.target == 2)
        .expect("arc exists");
    let backward = network
        .neighbours(2)
        .iter()
        .find(|road| road.target == 1)
        .expect("mirror arc exists");

    assert_eq!(
        (forward.length, forward.time, forward.cost),
        (backward.length, backward.time, backward.cost)
    );
}

#[test]
fn criterion_letters_tolerate_separators() {
    let input = "\
[CITIES]
1: Arlen
2: Basel
[REQUESTS]
Arlen -> Basel | L, T C
";
    let (_, requests) = parse_input(input).expect("valid input");
    assert_eq!(
        requests[0].priorities,
        vec![Criterion::Length, Criterion::Time, Criterion::Cost]
    );
}

#[test]
fn duplicate_criterion_letters_are_kept() {
    let input = "\
[CITIES]
1: Arlen
2: Basel
[REQUESTS]
Arlen -> Basel | TTL
";
    let (_, requests) = parse_input(input).expect("valid input");
    assert_eq!(
        requests[0].priorities,
        vec![Criterion::Time, Criterion::Time, Criterion::Length]
    );
}

#[test]
fn content_before_a_section_header_is_rejected() {
    let error = parse_input("1: Arlen\n").expect_err("no section");
    assert!(format!("{error}").contains("line 1"));
}

#[test]
fn unknown_section_is_rejected() {
    let error = parse_input("[PLANES]\n").expect_err("unknown section");
    assert!(format!("{error}").contains("unknown section"));
}

#[test]
fn malformed_city_line_is_rejected_with_line_number() {
    let error = parse_input("[CITIES]\nArlen\n").expect_err("missing colon");
    let message = format!("{error}");
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("expected `id: name`"), "{message}");
}

#[test]
fn malformed_road_weights_are_rejected() {
    let input = "\
[CITIES]
1: Arlen
2: Basel
[ROADS]
1-2: 10,1
";
    let error = parse_input(input).expect_err("two weights only");
    assert!(format!("{error}").contains("exactly three weights"));
}

#[test]
fn road_referencing_unknown_city_is_rejected() {
    let input = "\
[CITIES]
1: Arlen
[ROADS]
1-9: 1,1,1
";
    let error = parse_input(input).expect_err("unknown endpoint");
    assert!(matches!(error, Error::UnknownLocationId { id: 9 }));
}

#[test]
fn unknown_criterion_symbol_is_rejected() {
    let input = "\
[CITIES]
1: Arlen
2: Basel
[REQUESTS]
Arlen -> Basel | LX
";
    let error = parse_input(input).expect_err("bad symbol");
    assert!(matches!(error, Error::UnknownCriterion { symbol: 'X' }));
}

#[test]
fn request_without_criteria_is_rejected() {
    let input = "\
[CITIES]
1: Arlen
2: Basel
[REQUESTS]
Arlen -> Basel |
";
    let error = parse_input(input).expect_err("empty criteria");
    assert!(format!("{error}").contains("no criteria"));
}

#[test]
fn invalid_numbers_are_rejected() {
    let error = parse_input("[CITIES]\nten: Arlen\n").expect_err("bad id");
    assert!(format!("{error}").contains("invalid number `ten`"));
}
