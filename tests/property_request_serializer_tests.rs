use chart_request::request::{build, normalize};
use proptest::prelude::*;

fn fragments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{2,5}=[A-Za-z0-9,|.]{0,12}", 1..10)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn built_requests_are_ordered_by_fragment_length(fragments in fragments()) {
        let url = build("https://h.test/chart", &fragments);
        let (_, query) = url.split_once('?').expect("query");
        let lengths = query.split('&').map(str::len).collect::<Vec<_>>();

        prop_assert_eq!(lengths.len(), fragments.len());
        prop_assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn normalization_ignores_fragment_order(
        (original, shuffled) in fragments().prop_flat_map(|f| (Just(f.clone()), Just(f).prop_shuffle()))
    ) {
        let a = format!("https://h.test/chart?{}", original.join("&"));
        let b = format!("https://h.test/chart?{}", shuffled.join("&"));
        prop_assert_eq!(normalize(&a), normalize(&b));
    }
}
