//! Property-based tests for video identifier parsing.
//!
//! These tests verify that the short-link and watch-page forms of a link
//! resolve to the same identifier, that other hosts never resolve, and that
//! arbitrary input never panics.

use proptest::prelude::*;
use vidmarks::services::video_id;

/// Strategy for identifiers in the shape YouTube issues.
fn arb_video_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{11}"
}

/// Strategy for extra query parameters appended to a link.
fn arb_extra_query() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z]{1,6}=[a-z0-9]{1,8}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn short_and_watch_forms_agree(id in arb_video_id(), extra in arb_extra_query()) {
        let suffix = extra.map(|q| format!("&{}", q)).unwrap_or_default();
        let short = format!("https://youtu.be/{}?t=5{}", id, suffix);
        let watch = format!("https://www.youtube.com/watch?v={}{}", id, suffix);
        let mobile = format!("https://m.youtube.com/watch?feature=share&v={}", id);

        let a = video_id::parse(&short);
        let b = video_id::parse(&watch);
        let c = video_id::parse(&mobile);

        prop_assert_eq!(a.as_ref().map(|v| v.as_str()), Some(id.as_str()));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &c);
    }

    #[test]
    fn canonical_url_reparses_to_same_id(id in arb_video_id()) {
        let parsed = video_id::parse(&format!("https://youtu.be/{}", id)).unwrap();
        prop_assert_eq!(video_id::parse(&parsed.watch_url()), Some(parsed));
    }

    #[test]
    fn other_hosts_never_resolve(
        host in "[a-z]{3,12}\\.(com|org|net)",
        id in arb_video_id(),
    ) {
        prop_assume!(!host.contains("youtube.com") && host != "youtu.be");
        let watch_url = format!("https://{}/watch?v={}", host, id);
        let short_url = format!("https://{}/{}", host, id);
        prop_assert!(video_id::parse(&watch_url).is_none());
        prop_assert!(video_id::parse(&short_url).is_none());
    }

    #[test]
    fn parsed_id_survives_its_watch_url(
        host in prop_oneof![Just("www.youtube.com"), Just("m.youtube.com"), Just("youtu.be")],
        raw in "[A-Za-z0-9_%&#=+.-]{1,16}",
    ) {
        let input = if host == "youtu.be" {
            format!("https://youtu.be/{}", raw)
        } else {
            format!("https://{}/watch?v={}", host, raw)
        };
        if let Some(id) = video_id::parse(&input) {
            prop_assert_eq!(video_id::parse(&id.watch_url()), Some(id));
        }
    }

    #[test]
    fn arbitrary_input_does_not_panic(input in ".{0,200}") {
        let _ = video_id::parse(&input);
    }
}
