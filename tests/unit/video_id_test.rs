//! Table tests for video identifier extraction.

use rstest::rstest;

use vidmarks::services::video_id::parse;

#[rstest]
#[case("https://youtu.be/dQw4w9WgXcQ")]
#[case("https://youtu.be/dQw4w9WgXcQ?t=42")]
#[case("https://youtu.be/dQw4w9WgXcQ?si=tracking123")]
#[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
#[case("https://youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=2")]
#[case("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
#[case("http://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s")]
#[case("https://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ")]
#[case("  https://www.youtube.com/watch?v=dQw4w9WgXcQ  ")]
fn test_recognized_forms_resolve_to_same_id(#[case] input: &str) {
    let id = parse(input).expect("should be recognized");
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[rstest]
#[case("")]
#[case("not a url")]
#[case("youtu.be/dQw4w9WgXcQ")]
#[case("https://vimeo.com/123456")]
#[case("https://example.com/watch?v=dQw4w9WgXcQ")]
#[case("https://www.youtube.com/watch")]
#[case("https://www.youtube.com/watch?v=")]
#[case("https://www.youtube.com/watch?list=PL123")]
#[case("https://youtu.be/")]
#[case("https://youtu.be")]
#[case("https://www.youtube.com/watch?v=abc%26x")]
#[case("https://www.youtube.com/watch?v=abc%23frag")]
#[case("https://www.youtube.com/watch?v=abc+def")]
#[case("https://youtu.be/abc%20def")]
fn test_unrecognized_inputs_yield_none(#[case] input: &str) {
    assert_eq!(parse(input), None, "{:?} should not parse", input);
}

#[test]
fn test_parse_is_idempotent_through_watch_url() {
    let first = parse("https://youtu.be/abcDEF_-123").unwrap();
    let second = parse(&first.watch_url()).unwrap();
    assert_eq!(first, second);
}
