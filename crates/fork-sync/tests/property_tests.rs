use fork_sync::{RecursiveDiscovery, sync_dirs};
use fork_test_utils::tree::TreePair;
use proptest::prelude::*;
use std::fs;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_equal_content_never_copies(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let pair = TreePair::new();
        fs::write(pair.modifications().join("f.bin"), &content).unwrap();
        fs::write(pair.chromium().join("f.bin"), &content).unwrap();

        let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

        prop_assert_eq!(report.copied(), 0);
        prop_assert_eq!(report.unchanged(), 1);
    }

    #[test]
    fn test_different_content_always_copies(
        content in proptest::collection::vec(any::<u8>(), 1..4096),
        index in any::<prop::sample::Index>(),
    ) {
        let pair = TreePair::new();
        let mut other = content.clone();
        let i = index.index(other.len());
        other[i] = other[i].wrapping_add(1);
        fs::write(pair.modifications().join("f.bin"), &content).unwrap();
        fs::write(pair.chromium().join("f.bin"), &other).unwrap();

        let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

        prop_assert_eq!(report.copied(), 1);
        prop_assert_eq!(fs::read(pair.chromium().join("f.bin")).unwrap(), content);
    }
}
