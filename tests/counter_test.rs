use unique_email::*;

#[test]
fn test_count_mixed_tags_and_domains() {
    let emails = [
        "test.email+alex@leetcode.com",
        "test.e.mail+bob.cathy@leetcode.com",
        "testemail+david@lee.tcode.com",
    ];
    assert_eq!(count_unique_normalized_emails(emails).unwrap(), 2);
}

#[test]
fn test_count_distinct_locals() {
    let emails = ["a@leetcode.com", "b@leetcode.com"];
    assert_eq!(count_unique_normalized_emails(emails).unwrap(), 2);
}

#[test]
fn test_count_empty() {
    let emails: [&str; 0] = [];
    assert_eq!(count_unique_normalized_emails(emails).unwrap(), 0);
}

#[test]
fn test_count_dots_collapse() {
    let emails = ["a.b.c@x.com", "abc@x.com"];
    assert_eq!(count_unique_normalized_emails(emails).unwrap(), 1);
}

#[test]
fn test_count_tags_collapse() {
    let emails = ["a+x@y.com", "a+z@y.com", "a@y.com"];
    assert_eq!(count_unique_normalized_emails(emails).unwrap(), 1);
}

#[test]
fn test_count_accepts_owned_strings() {
    let emails = vec![String::from("a@y.com"), String::from("a@y.com")];
    assert_eq!(count_unique_normalized_emails(&emails).unwrap(), 1);
}

#[test]
fn test_count_reports_malformed_entry_index() {
    let emails = ["a@y.com", "b@y.com", "broken", "c@y.com"];
    let err = count_unique_normalized_emails(emails).unwrap_err();

    match &err {
        NormalizeError::InvalidEntry { index, source } => {
            assert_eq!(*index, 2);
            assert_eq!(**source, NormalizeError::MissingSeparator("broken".into()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.address(), "broken");
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn test_mailbox_set_from_raw() {
    let set = MailboxSet::from_raw(["b.o.b+1@x.com", "bob@x.com", "alice@x.com"]).unwrap();

    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
    assert!(set.contains(&normalize_email("bob@x.com").unwrap()));

    let sorted: Vec<String> = set
        .into_sorted_vec()
        .into_iter()
        .map(NormalizedEmail::into_string)
        .collect();
    assert_eq!(sorted, ["alice@x.com", "bob@x.com"]);
}

#[test]
fn test_mailbox_set_insert_reports_new() {
    let mut set = MailboxSet::new();
    assert!(set.is_empty());
    assert!(set.insert(normalize_email("a.a@x.com").unwrap()));
    assert!(!set.insert(normalize_email("aa+dup@x.com").unwrap()));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_mailbox_set_collect_and_extend() {
    let mut set: MailboxSet = ["a@x.com", "a.@x.com"]
        .into_iter()
        .map(|raw| normalize_email(raw).unwrap())
        .collect();
    assert_eq!(set.len(), 1);

    set.extend([normalize_email("b@x.com").unwrap()]);
    assert_eq!(set.iter().count(), 2);
    assert_eq!((&set).into_iter().count(), 2);
}

#[test]
fn test_count_with_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("unique_email=trace")
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(count_unique_normalized_emails(["x+1@y.z", "x@y.z"]).unwrap(), 1);
        assert!(count_unique_normalized_emails(["nope"]).is_err());
    });
}
