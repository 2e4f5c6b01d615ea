use mail_signal::*;

#[test]
fn test_rank_by_count() {
    let ranking = rank_frequency("Acme deal Acme Acme deal offer");
    assert_eq!(
        ranking.as_slice(),
        &[
            ("Acme".to_string(), 3),
            ("deal".to_string(), 2),
            ("offer".to_string(), 1)
        ]
    );
}

#[test]
fn test_rank_case_sensitive() {
    let ranking = rank_frequency("Acme acme Acme");
    assert_eq!(ranking.top(), Some(("Acme", 2)));
    assert_eq!(ranking.len(), 2);
}

#[test]
fn test_rank_ties_stable() {
    let ranking = rank_frequency("zeta Acme Widgets zeta Acme Widgets");
    let tokens: Vec<&str> = ranking.iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, vec!["zeta", "Acme", "Widgets"]);
}

#[test]
fn test_rank_empty() {
    assert!(rank_frequency("").is_empty());
    assert!(rank_frequency("   ").is_empty());
}
