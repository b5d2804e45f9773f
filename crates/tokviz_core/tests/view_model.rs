use pretty_assertions::assert_eq;
use tokviz_core::{chip_label, update, AppState, Msg, PaletteColor};

#[test]
fn chips_cycle_through_the_palette() {
    let (state, _) = update(
        AppState::new(),
        Msg::TextChanged("a b c d e".to_string()),
    );
    let view = state.view();

    assert_eq!(view.chips.len(), 9);
    let colors: Vec<_> = view.chips.iter().map(|chip| chip.color).collect();
    assert_eq!(&colors[..8], &PaletteColor::ALL[..]);
    assert_eq!(colors[8], PaletteColor::Blue);
    for pair in view.chips.windows(2) {
        assert_ne!(pair[0].color, pair[1].color);
    }
}

#[test]
fn chip_labels_make_whitespace_visible() {
    assert_eq!(chip_label("  "), "··");
    assert_eq!(chip_label("\n\n"), "↵↵");
    assert_eq!(chip_label("\r\n"), "␍↵");
    assert_eq!(chip_label("\t"), "\t");
    assert_eq!(chip_label("word"), "word");
}

#[test]
fn crlf_chip_has_no_raw_carriage_return() {
    let (state, _) = update(AppState::new(), Msg::TextChanged("a\r\nb".to_string()));
    let view = state.view();

    assert_eq!(view.chips[1].text, "\r\n");
    assert_eq!(view.chips[1].label, "␍↵");
    assert!(view.chips.iter().all(|chip| !chip.label.contains('\r')));
}

#[test]
fn view_exposes_ids_in_order() {
    let (state, _) = update(AppState::new(), Msg::TextChanged("one, two".to_string()));
    let view = state.view();

    assert_eq!(view.ids, vec![0, 1, 2, 3]);
    assert_eq!(
        view.chips.iter().map(|chip| chip.label.as_str()).collect::<Vec<_>>(),
        vec!["one", ",", "·", "two"]
    );
}

#[test]
fn char_count_counts_characters_not_bytes() {
    let (state, _) = update(AppState::new(), Msg::TextChanged("héllo 🦀".to_string()));
    assert_eq!(state.view().char_count, 7);
}
