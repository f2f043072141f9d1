//! Host-level tests for rendering text and numbers into frames.

use shiftseg::{Error, Frame, Result, Segments, symbol_or_blank};

fn bits(text: &str) -> Vec<u8> {
    text.chars().map(symbol_or_blank).collect()
}

#[test]
fn text_is_left_aligned_and_padded() -> Result<()> {
    let frame = Frame::<6>::from_text("HELLO")?;
    let mut expected = bits("HELLO");
    expected.push(Segments::BLANK);
    assert_eq!(frame.as_bytes().to_vec(), expected);
    Ok(())
}

#[test]
fn dot_after_character_folds_into_decimal_point() -> Result<()> {
    let frame = Frame::<4>::from_text("12.5")?;
    assert_eq!(frame[0], symbol_or_blank('1'));
    assert_eq!(frame[1], symbol_or_blank('2') | Segments::P);
    assert_eq!(frame[2], symbol_or_blank('5'));
    assert_eq!(frame[3], Segments::BLANK);
    Ok(())
}

#[test]
fn leading_and_repeated_dots_take_their_own_digit() -> Result<()> {
    let frame = Frame::<4>::from_text(".1..")?;
    assert_eq!(
        *frame.as_bytes(),
        [Segments::P, symbol_or_blank('1') | Segments::P, Segments::P, Segments::BLANK]
    );
    Ok(())
}

#[test]
fn trailing_dot_still_fits_full_display() -> Result<()> {
    let frame = Frame::<8>::from_text("8.8.8.8.8.8.8.8.")?;
    assert!(frame.iter().all(|&bits| bits == Segments::ALL));
    Ok(())
}

#[test]
fn text_longer_than_display_is_rejected() {
    let result = Frame::<4>::from_text("HELLO");
    assert!(matches!(result, Err(Error::TextTooLong(5, 4))));
}

#[test]
fn unsupported_characters_render_blank() -> Result<()> {
    let frame = Frame::<3>::from_text("a€b")?;
    assert_eq!(
        *frame.as_bytes(),
        [symbol_or_blank('a'), Segments::BLANK, symbol_or_blank('b')]
    );
    Ok(())
}

#[test]
fn empty_text_is_blank() -> Result<()> {
    assert!(Frame::<8>::from_text("")?.is_blank());
    assert_eq!(Frame::<8>::default(), Frame::blank());
    Ok(())
}

#[test]
fn chars_map_one_to_one() {
    let frame = Frame::from_chars(['r', 'U', '.', 't']);
    assert_eq!(
        *frame.as_bytes(),
        [symbol_or_blank('r'), symbol_or_blank('U'), Segments::P, symbol_or_blank('t')]
    );
}

#[test]
fn number_is_right_aligned_over_padding() {
    let frame = Frame::<4>::from_number(42, Segments::BLANK);
    assert_eq!(
        *frame.as_bytes(),
        [Segments::BLANK, Segments::BLANK, Segments::DIGITS[4], Segments::DIGITS[2]]
    );

    let frame = Frame::<4>::from_number(7, Segments::DIGITS[0]);
    assert_eq!(
        *frame.as_bytes(),
        [Segments::DIGITS[0], Segments::DIGITS[0], Segments::DIGITS[0], Segments::DIGITS[7]]
    );
}

#[test]
fn zero_shows_single_digit() {
    let frame = Frame::<3>::from_number(0, Segments::BLANK);
    assert_eq!(*frame.as_bytes(), [Segments::BLANK, Segments::BLANK, Segments::DIGITS[0]]);
}

#[test]
fn overflowing_number_shows_low_digits_with_every_decimal_point() {
    let frame = Frame::<4>::from_number(12_345, Segments::BLANK);
    let expected = [2, 3, 4, 5].map(|digit| Segments::DIGITS[digit] | Segments::P);
    assert_eq!(*frame.as_bytes(), expected);
}

#[test]
fn bitor_assign_sets_bits_on_every_digit() {
    let mut frame = Frame::<3>::new([Segments::A, Segments::BLANK, Segments::G]);
    frame |= Segments::P;
    assert_eq!(
        frame.into_iter().collect::<Vec<_>>(),
        vec![Segments::A | Segments::P, Segments::P, Segments::G | Segments::P]
    );
}

#[test]
fn index_mut_edits_one_digit() {
    let mut frame = Frame::<2>::blank();
    frame[1] = Segments::D;
    assert_eq!(*frame.as_bytes(), [Segments::BLANK, Segments::D]);
    assert!(!frame.is_blank());
}
