use proptest::prelude::*;
use tokviz_core::{segment, CharClass, PUNCTUATION, WORD_CHUNK_LEN, WORD_CHUNK_THRESHOLD};

proptest! {
    #[test]
    fn tokens_concatenate_to_input(input in any::<String>()) {
        prop_assert_eq!(segment(&input).joined_text(), input);
    }

    #[test]
    fn ids_are_contiguous_from_zero(input in any::<String>()) {
        let tokens = segment(&input);
        prop_assert_eq!(tokens.ids(), (0..tokens.len()).collect::<Vec<_>>());
    }

    #[test]
    fn every_token_is_non_empty_and_single_class(input in any::<String>()) {
        for token in segment(&input).iter() {
            let mut classes = token.text.chars().map(CharClass::of);
            let first = classes.next();
            prop_assert!(first.is_some());
            prop_assert!(classes.all(|class| Some(class) == first));
        }
    }

    #[test]
    fn token_sizes_follow_chunking_rules(input in "[a-z .,!?\\n\\t(){}]{0,64}") {
        for token in segment(&input).iter() {
            let len = token.text.chars().count();
            let first = token.text.chars().next().map(CharClass::of);
            match first {
                Some(CharClass::Punctuation) => {
                    prop_assert_eq!(len, 1);
                    prop_assert!(PUNCTUATION.contains(&token.text.chars().next().unwrap()));
                }
                Some(CharClass::Word) => {
                    prop_assert!(len <= WORD_CHUNK_THRESHOLD.max(WORD_CHUNK_LEN));
                }
                Some(CharClass::Whitespace) => {}
                None => prop_assert!(false, "empty token"),
            }
        }
    }

    #[test]
    fn segmentation_is_deterministic(input in any::<String>()) {
        prop_assert_eq!(segment(&input), segment(&input));
    }
}
