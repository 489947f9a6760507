use super::*;

#[test]
fn test_degenerate_inputs() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("   "));
    assert!(!is_valid_email("@"));
    assert!(!is_valid_email("@@"));
    assert!(!is_valid_email("null@"));
    assert!(!is_valid_email("@apache.org"));
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("."));
}

#[test]
fn test_edge_case_quoted_strings() {
    assert!(is_valid_email("\"\"@apache.org"));
    assert!(is_valid_email("\"joe blow\"@apache.org"));
    assert!(is_valid_email("\"joe@blow\"@apache.org"));
    assert!(is_valid_email("\"joe\".\"blow\"@apache.org"));
    assert!(is_valid_email("joe.\"blow\"@apache.org"));

    assert!(!is_valid_email("\"joe@apache.org"));
    assert!(!is_valid_email("joe\"@apache.org"));
    assert!(!is_valid_email("\"jo\"e\"@apache.org"));
    assert!(!is_valid_email("\"joe\"\"blow\"@apache.org"));
    assert!(!is_valid_email("\"joe\".@apache.org"));
}

#[test]
fn test_split_uses_last_at() {
    assert!(!is_valid_email("joe@blow@apache.org"));
    assert!(is_valid_email("\"joe@blow\"@apache.org"));
    assert!(!is_valid_email("joe@apache.org@"));
}

#[test]
fn test_unquoted_special_characters() {
    for special in ['(', ')', '<', '>', ',', ';', ':', '\\', '"', '[', ']'] {
        let email = format!("jo{special}e@apache.org");
        assert!(!is_valid_email(&email), "{email} should be invalid");
    }
}

#[test]
fn test_domain_literal_edge_cases() {
    assert!(is_valid_email("user@[127.0.0.1]"));
    assert!(is_valid_email("user@[0.0.0.0]"));
    assert!(is_valid_email("user@[255.255.255.255]"));
    assert!(is_valid_email("user@[010.001.000.099]"));

    assert!(!is_valid_email("someone@[111.222.333.44444]"));
    assert!(!is_valid_email("user@[256.0.0.1]"));
    assert!(!is_valid_email("user@[192.168.1]"));
    assert!(!is_valid_email("user@[1.2.3.4.5]"));
    assert!(!is_valid_email("user@[not.an.ip]"));
    assert!(!is_valid_email("user@[]"));
    assert!(!is_valid_email("user@[IPv6:::1]"));
    assert!(!is_valid_email("user@[192.168.0.1"));
    assert!(!is_valid_email("user@192.168.0.1]"));
    assert!(!is_valid_email("user@192.168.0.1"));
}

#[test]
fn test_non_ascii_rejected() {
    assert!(!is_valid_email("jöe@apache.org"));
    assert!(!is_valid_email("joe@apäche.org"));
    assert!(!is_valid_email("用户@例子.中国"));
}

#[test]
fn test_case_handling() {
    assert!(is_valid_email("JSMITH@APACHE.ORG"));
    assert!(is_valid_email("Joe.Blow@Apache.Org"));
}

#[test]
fn test_validator_reports_local_setting() {
    assert!(!EmailValidator::default().allow_local());
    assert!(EmailValidator::new(true).allow_local());
}

#[test]
fn test_validation_is_pure() {
    let inputs = [
        ("jsmith@apache.org", true),
        ("plainaddress", false),
        ("someone@[216.109.118.76]", true),
        ("joe..ok@apache.org", false),
    ];
    for _ in 0..3 {
        for (email, expected) in inputs {
            assert_eq!(is_valid_email(email), expected, "{email}");
        }
    }
}

#[test]
fn test_long_local_part_runs() {
    let user = "a".repeat(50_000);
    assert!(is_valid_email(&format!("{user}@apache.org")));

    let dotted = "a.".repeat(20_000);
    assert!(!is_valid_email(&format!("{dotted}@apache.org")));
}
