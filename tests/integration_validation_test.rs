use tptp_language_server::validation::{validate_document, Severity};

#[test]
fn test_realistic_problem_file() {
    let text = r#"% Axioms for a small group theory problem
include('Axioms/GRP004-0.ax').

fof(left_identity, axiom,
    ! [X] :
    mult(e, X) = X).

fof(left_inverse, axiom,
    ! [X] :
    mult(inverse(X), X) = e).

fof(right_identity, conjecture,
    ! [X] :
    mult(X, e) = X).
"#;

    let result = validate_document(text);
    assert!(
        result.diagnostics.is_empty(),
        "expected clean file, got {:?}",
        result.diagnostics
    );
}

#[test]
fn test_mixed_error_document() {
    let text = "\
fof(ok, axiom, p(X)).
fof(no_period, axiom, q(X))
fof(bad_role, lemmma, r(X)).
cnf(bad_ops, axiom, s(X) &&& t(X)).
include(unquoted).
";

    let result = validate_document(text);

    let messages: Vec<&str> = result
        .diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect();

    assert!(
        messages
            .iter()
            .any(|m| m.contains("must end with a period")),
        "missing-period error not found in {messages:?}"
    );
    assert!(
        messages
            .iter()
            .any(|m| m.contains("Unknown TPTP role 'lemmma'")),
        "role warning not found in {messages:?}"
    );
    assert!(
        messages
            .iter()
            .any(|m| m.contains("Invalid operator sequence: &&&")),
        "operator-run error not found in {messages:?}"
    );
    assert!(
        messages
            .iter()
            .any(|m| m.contains("include('filename')")),
        "include error not found in {messages:?}"
    );

    // The missing-period error is anchored on the offending line.
    let missing = result
        .diagnostics
        .iter()
        .find(|d| d.message.contains("must end with a period"))
        .unwrap();
    assert_eq!(missing.range.start.line, 1);

    // One diagnostic per defect, none for the clean declaration.
    assert_eq!(result.diagnostics.len(), 4);
}

#[test]
fn test_error_and_warning_severities() {
    let result = validate_document("fof(a, guess, p(X)\nfof(b, axiom, q(X)).");

    let errors: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect();

    // The unterminated declaration gets exactly the missing-period error;
    // the force-flushed text is not probed further, so the bogus role on
    // the flushed prefix stays unreported.
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("must end with a period"));
    assert!(warnings.is_empty());
}

#[test]
fn test_continuation_across_many_lines() {
    let text = "\
fof(long_axiom, axiom,
    ! [X] :

    % the interesting part
    (p(X)
     => q(X))).
";
    let result = validate_document(text);
    assert!(
        result.diagnostics.is_empty(),
        "expected clean continuation, got {:?}",
        result.diagnostics
    );
}

#[test]
fn test_unterminated_final_statement_still_probed() {
    // The final statement never terminates; it still gets a best-effort
    // structural pass on top of the missing-period error.
    let result = validate_document("fof(tail, axiom, (p(X)");
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("must end with a period")));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message == "Missing closing parenthesis"));
}

#[test]
fn test_repeated_validation_is_stable() {
    let text = "fof(a, axiom, p(X)).\nfof(b, guess, q(X) ~~ r).\ninclude(broken)\n";
    let first = validate_document(text);
    for _ in 0..3 {
        assert_eq!(validate_document(text), first);
    }
}
