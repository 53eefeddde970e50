use xmlfrag::{Attribute, Error, Tag};

#[test]
fn test_duplicate_attribute() {
    let err = Tag::try_new(
        "yell",
        [
            Attribute::new("volume", "30db"),
            Attribute::new("duration", "5sec"),
            Attribute::new("volume", "5ft"),
        ],
    )
    .unwrap_err();
    assert_eq!(err, Error::DuplicateAttribute("volume".to_string()));
    assert_eq!(err.to_string(), "duplicate attribute: volume");
}

#[test]
fn test_unique_attributes() {
    let tag = Tag::try_new(
        "yell",
        [
            Attribute::new("volume", "30db"),
            Attribute::new("duration", "5sec"),
        ],
    )
    .unwrap();
    assert_eq!(tag.attributes().len(), 2);
}

#[test]
fn test_error_is_std_error() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    assert_eq!(
        describe(&Error::DuplicateAttribute("a".to_string())),
        "duplicate attribute: a"
    );
}
