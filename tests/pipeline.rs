use maybe::{Absent, Maybe, Present};

/// Parse a port number, signalling absence on anything invalid.
fn parse_port(input: &str) -> Maybe<u16> {
    match input.trim().parse::<u16>() {
        Ok(port) => Maybe::present(port),
        Err(_) => Maybe::absent(),
    }
}

/// Reject reserved ports, keep the rest.
fn unreserved(port: u16) -> (u16, bool) {
    (port, port >= 1024)
}

#[test]
fn test_parse_and_validate_pipeline() {
    let port = parse_port(" 8080 ").map(unreserved).or_else(9000);
    assert_eq!(8080, port);

    // Garbage input falls through to the fallback.
    let port = parse_port("not-a-port").map(unreserved).or_else(9000);
    assert_eq!(9000, port);

    // A parsed but reserved port is dropped by the mapper itself.
    let port = parse_port("80").map(unreserved).or_else(9000);
    assert_eq!(9000, port);
}

#[test]
fn test_flat_map_chains_across_types() {
    let label = parse_port("8080")
        .flat_map(|port| Maybe::present(format!("listening on :{port}")));
    assert_eq!(Present("listening on :8080".to_string()), label);

    let label = parse_port("eighty")
        .flat_map(|_| -> Maybe<String> { panic!("mapper must not run") });
    assert_eq!(Absent, label);
}

#[test]
fn test_map_none_recovers_with_default_port() {
    let port = parse_port("").map_none(|| (9000, true));
    assert_eq!(Present(9000), port);

    let port = parse_port("8080").map_none(|| panic!("mapper must not run"));
    assert_eq!(Present(8080), port);
}

#[test]
fn test_match_with_handles_both_branches() {
    let describe = |maybe: Maybe<u16>| {
        maybe
            .map(|port| (format!("port {port}"), true))
            .match_with(|text| (text, true), || ("no port".to_string(), true))
            .must_get()
    };

    assert_eq!("port 8080", describe(parse_port("8080")));
    assert_eq!("no port", describe(parse_port("")));
}

#[test]
fn test_doc_example_pipeline() {
    let doubled = Maybe::present(21).map(|x| (x * 2, true));
    assert_eq!(Present(42), doubled);

    let doubled = Maybe::<i32>::absent()
        .map(|_| -> (i32, bool) { panic!("mapper must not run") });
    assert_eq!(Absent, doubled);

    let recovered = Maybe::<i32>::absent().map_none(|| (42, true));
    assert_eq!(Present(42), recovered);
}

#[test]
fn test_uniform_aggregation_with_collections() {
    let maybes = vec![parse_port("8080"), parse_port("nope"), parse_port("9090")];

    let total: usize = maybes.iter().map(Maybe::size).sum();
    assert_eq!(2, total);

    let ports: Vec<u16> = maybes.into_iter().flatten().collect();
    assert_eq!(vec![8080, 9090], ports);
}
